//! Caret offset mapping between raw input and its masked rendering.
//!
//! A text widget stores the raw value but shows the masked one, so every
//! caret position has two coordinates. An [`OffsetMapping`] converts between
//! them. Both directions clamp out-of-range offsets instead of failing.
//!
//! # Example
//!
//! ```
//! use card_form::offset::{translator, OffsetMapping};
//! use card_form::mask::DEFAULT_CARD_MASK;
//!
//! let offsets = translator(&DEFAULT_CARD_MASK);
//!
//! // "4111 1": the fifth raw digit sits after the first space.
//! assert_eq!(offsets.to_display(5), 6);
//! assert_eq!(offsets.to_raw(6), 5);
//! ```

use crate::detect::classify;
use crate::format::{render, render_expiry};
use crate::mask::{mask_for, Cell, MaskTemplate, EXPIRY_MASK};

/// Converts caret positions between raw and displayed text.
pub trait OffsetMapping {
    /// Maps a position in the raw value to a position in the displayed text.
    fn to_display(&self, raw_offset: usize) -> usize;

    /// Maps a position in the displayed text back to the raw value.
    fn to_raw(&self, display_offset: usize) -> usize;
}

/// Offset mapping derived from a mask template.
///
/// `to_display(n)` is the smallest display index preceded by exactly `n`
/// slots, which is also the length of `render` for an `n` character input.
/// `to_raw(d)` is `d` minus the literals in the first `d` mask positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaskOffsets<'a> {
    mask: &'a MaskTemplate,
}

impl<'a> MaskOffsets<'a> {
    /// Creates the mapping for a mask.
    #[inline]
    pub const fn new(mask: &'a MaskTemplate) -> Self {
        Self { mask }
    }

    /// Returns the mask this mapping is built on.
    #[inline]
    pub const fn mask(&self) -> &'a MaskTemplate {
        self.mask
    }
}

impl OffsetMapping for MaskOffsets<'_> {
    fn to_display(&self, raw_offset: usize) -> usize {
        let target = raw_offset.min(self.mask.slot_count());
        let mut slots = 0;
        for (index, cell) in self.mask.cells().enumerate() {
            if slots == target {
                return index;
            }
            if cell == Cell::Slot {
                slots += 1;
            }
        }
        self.mask.display_len()
    }

    fn to_raw(&self, display_offset: usize) -> usize {
        self.mask
            .cells()
            .take(display_offset)
            .filter(|cell| *cell == Cell::Slot)
            .count()
    }
}

/// Returns the offset mapping for a mask.
#[inline]
pub fn translator(mask: &MaskTemplate) -> MaskOffsets<'_> {
    MaskOffsets::new(mask)
}

/// Offset mapping for the expiry field.
///
/// Matches [`render_expiry`], which shows the `/` as soon as two digits are
/// typed: every raw offset from 2 on is shifted by one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ExpiryOffsets;

impl OffsetMapping for ExpiryOffsets {
    fn to_display(&self, raw_offset: usize) -> usize {
        let raw_offset = raw_offset.min(EXPIRY_MASK.slot_count());
        if raw_offset <= 1 {
            raw_offset
        } else {
            raw_offset + 1
        }
    }

    fn to_raw(&self, display_offset: usize) -> usize {
        let display_offset = display_offset.min(EXPIRY_MASK.display_len());
        if display_offset <= 2 {
            display_offset
        } else {
            display_offset - 1
        }
    }
}

/// One-to-one mapping for fields whose display has the raw value's length,
/// such as the starred CVV.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Identity;

impl OffsetMapping for Identity {
    #[inline]
    fn to_display(&self, raw_offset: usize) -> usize {
        raw_offset
    }

    #[inline]
    fn to_raw(&self, display_offset: usize) -> usize {
        display_offset
    }
}

/// Displayed text paired with the mapping that produced it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transformed<M> {
    /// The text to draw.
    pub text: String,
    /// Caret mapping between the raw value and `text`.
    pub offsets: M,
}

impl<M: OffsetMapping> Transformed<M> {
    /// Maps a raw caret position into `text`, never past its end.
    pub fn caret_to_display(&self, raw_offset: usize) -> usize {
        self.offsets
            .to_display(raw_offset)
            .min(self.text.chars().count())
    }

    /// Maps a caret position in `text` back to the raw value, never past
    /// the end of the raw value.
    pub fn caret_to_raw(&self, display_offset: usize) -> usize {
        self.offsets
            .to_raw(display_offset.min(self.text.chars().count()))
    }
}

/// Renders raw input under an arbitrary mask.
pub fn transform<'a>(raw: &str, mask: &'a MaskTemplate) -> Transformed<MaskOffsets<'a>> {
    Transformed {
        text: render(raw, mask),
        offsets: translator(mask),
    }
}

/// Renders a card number under the mask of its own card type.
///
/// ```
/// use card_form::offset::transform_number;
///
/// let shown = transform_number("37828");
/// assert_eq!(shown.text, "3782 8");
/// assert_eq!(shown.caret_to_display(5), 6);
/// ```
pub fn transform_number(raw: &str) -> Transformed<MaskOffsets<'static>> {
    transform(raw, mask_for(classify(raw)))
}

/// Renders an expiry date with its offset mapping.
pub fn transform_expiry(raw: &str) -> Transformed<ExpiryOffsets> {
    Transformed {
        text: render_expiry(raw),
        offsets: ExpiryOffsets,
    }
}

/// Renders a secret (the CVV) as one `*` per character.
pub fn transform_secret(raw: &str) -> Transformed<Identity> {
    Transformed {
        text: "*".repeat(raw.chars().count()),
        offsets: Identity,
    }
}
