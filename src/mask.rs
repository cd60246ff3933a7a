//! Input mask templates and the card type to mask registry.
//!
//! A mask is a pattern string where every `#` is a *slot* that takes one
//! input character and every other character is a *literal* separator that
//! is shown but never typed.
//!
//! # Built-in masks
//!
//! - **American Express** (15 digits): `#### ###### #####`
//! - **Everything else** (16 digits): `#### #### #### ####`
//! - **Expiry date** (4 digits): `##/##`
//!
//! The built-in masks are checked at compile time; a pattern without slots
//! fails the build.

use crate::error::MaskError;
use crate::CardType;
use std::borrow::Cow;
use std::fmt;

/// The character that marks a slot in a mask pattern.
pub const SLOT: char = '#';

/// Mask for American Express numbers, grouped 4-6-5.
pub static AMEX_CARD_MASK: MaskTemplate = MaskTemplate::from_static("#### ###### #####");

/// Mask for every other card number, grouped 4-4-4-4.
pub static DEFAULT_CARD_MASK: MaskTemplate = MaskTemplate::from_static("#### #### #### ####");

/// Mask for the `MM/YY` expiry date.
pub static EXPIRY_MASK: MaskTemplate = MaskTemplate::from_static("##/##");

/// A single position in a mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cell {
    /// Takes the next input character.
    Slot,
    /// A fixed separator shown between groups.
    Literal(char),
}

/// An immutable input mask.
///
/// All positions are counted in characters, not bytes.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MaskTemplate {
    pattern: Cow<'static, str>,
    slots: usize,
}

impl MaskTemplate {
    /// Builds a mask from a pattern known at compile time.
    ///
    /// # Panics
    ///
    /// Panics if the pattern has no `#` slot. In a `const` or `static`
    /// initializer this is a compile error.
    pub const fn from_static(pattern: &'static str) -> Self {
        let slots = count_slots(pattern.as_bytes());
        assert!(slots > 0, "mask pattern must contain at least one '#' slot");
        Self {
            pattern: Cow::Borrowed(pattern),
            slots,
        }
    }

    /// Builds a mask from a runtime pattern.
    ///
    /// # Errors
    ///
    /// Returns [`MaskError::Empty`] for an empty pattern and
    /// [`MaskError::NoSlots`] when the pattern has no `#`.
    ///
    /// # Example
    ///
    /// ```
    /// use card_form::mask::MaskTemplate;
    ///
    /// let mask = MaskTemplate::parse("###-###").unwrap();
    /// assert_eq!(mask.slot_count(), 6);
    /// assert!(MaskTemplate::parse("--").is_err());
    /// ```
    pub fn parse(pattern: impl Into<String>) -> Result<Self, MaskError> {
        let pattern = pattern.into();
        if pattern.is_empty() {
            return Err(MaskError::Empty);
        }

        let slots = count_slots(pattern.as_bytes());
        if slots == 0 {
            return Err(MaskError::NoSlots {
                length: pattern.chars().count(),
            });
        }

        Ok(Self {
            pattern: Cow::Owned(pattern),
            slots,
        })
    }

    /// Returns the raw pattern string.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// Number of slots, i.e. the maximum raw input length.
    #[inline]
    pub const fn slot_count(&self) -> usize {
        self.slots
    }

    /// Length of the fully filled mask in characters.
    #[inline]
    pub fn display_len(&self) -> usize {
        self.pattern.chars().count()
    }

    /// Number of literal characters in the mask.
    #[inline]
    pub fn literal_count(&self) -> usize {
        self.display_len() - self.slots
    }

    /// Iterates over the mask positions from left to right.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        self.pattern
            .chars()
            .map(|c| if c == SLOT { Cell::Slot } else { Cell::Literal(c) })
    }

    /// Returns the sizes of the runs of consecutive slots.
    ///
    /// ```
    /// use card_form::mask::AMEX_CARD_MASK;
    ///
    /// assert_eq!(AMEX_CARD_MASK.groups(), vec![4, 6, 5]);
    /// ```
    pub fn groups(&self) -> Vec<usize> {
        let mut groups = Vec::new();
        let mut run = 0;
        for cell in self.cells() {
            match cell {
                Cell::Slot => run += 1,
                Cell::Literal(_) if run > 0 => {
                    groups.push(run);
                    run = 0;
                }
                Cell::Literal(_) => {}
            }
        }
        if run > 0 {
            groups.push(run);
        }
        groups
    }
}

impl fmt::Display for MaskTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.pattern)
    }
}

// `#` is ASCII, so it never appears inside a multi-byte UTF-8 sequence and
// counting bytes gives the same answer as counting chars.
const fn count_slots(bytes: &[u8]) -> usize {
    let mut count = 0;
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == SLOT as u8 {
            count += 1;
        }
        i += 1;
    }
    count
}

/// Returns the card number mask for a card type.
///
/// # Example
///
/// ```
/// use card_form::mask::mask_for;
/// use card_form::CardType;
///
/// assert_eq!(mask_for(CardType::Amex).as_str(), "#### ###### #####");
/// assert_eq!(mask_for(CardType::Unknown).as_str(), "#### #### #### ####");
/// ```
#[inline]
pub fn mask_for(card_type: CardType) -> &'static MaskTemplate {
    match card_type {
        CardType::Amex => &AMEX_CARD_MASK,
        _ => &DEFAULT_CARD_MASK,
    }
}

/// Maximum number of card number digits accepted for a card type.
#[inline]
pub fn max_digits(card_type: CardType) -> usize {
    mask_for(card_type).slot_count()
}
