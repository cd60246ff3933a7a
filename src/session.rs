//! The card entry form as a whole.
//!
//! [`FormSession`] owns the four fields and the focus. It is driven by a
//! sequential stream of edits and focus changes, and everything else (card
//! type, mask, CVV limit, flip state, preview) is derived from the current
//! values on every read.

use crate::detect::classify;
use crate::field::{FieldController, FieldKind};
use crate::format::redact;
use crate::mask::{mask_for, MaskTemplate};
use crate::offset::{
    transform_expiry, transform_number, transform_secret, ExpiryOffsets, Identity, MaskOffsets,
    Transformed,
};
use crate::preview::CardPreview;
use crate::CardType;
use tracing::{info, trace};

/// The field holding focus, if any.
pub type FocusedField = Option<FieldKind>;

/// Which side of the card the preview shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum CardFace {
    /// Number, holder and expiry.
    #[default]
    Front,
    /// Signature strip and CVV.
    Back,
}

/// What is left of a form once it has been submitted.
///
/// Holds no sensitive data: the number is redacted and the CVV is dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Submission {
    /// Card type at submit time.
    pub card_type: CardType,
    /// Card number with all but the last four digits starred.
    pub number: String,
}

/// State of one card entry form.
///
/// # Example
///
/// ```
/// use card_form::{FieldKind, FormSession, CardType};
///
/// let mut form = FormSession::new();
/// form.input(FieldKind::Number, "3782");
/// assert_eq!(form.card_type(), CardType::Amex);
///
/// form.focus(FieldKind::Cvv);
/// assert!(form.is_flipped());
/// assert_eq!(form.input(FieldKind::Cvv, "1234"), "1234");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormSession {
    number: FieldController,
    name: FieldController,
    expiry: FieldController,
    cvv: FieldController,
    focused: FocusedField,
}

impl Default for FormSession {
    fn default() -> Self {
        Self::new()
    }
}

impl FormSession {
    /// Creates an empty form with nothing focused.
    pub fn new() -> Self {
        Self {
            number: FieldController::new(FieldKind::Number),
            name: FieldController::new(FieldKind::Name),
            expiry: FieldController::new(FieldKind::Expiry),
            cvv: FieldController::new(FieldKind::Cvv),
            focused: None,
        }
    }

    /// Returns the controller for a field.
    pub fn field(&self, kind: FieldKind) -> &FieldController {
        match kind {
            FieldKind::Number => &self.number,
            FieldKind::Name => &self.name,
            FieldKind::Expiry => &self.expiry,
            FieldKind::Cvv => &self.cvv,
        }
    }

    fn field_mut(&mut self, kind: FieldKind) -> &mut FieldController {
        match kind {
            FieldKind::Number => &mut self.number,
            FieldKind::Name => &mut self.name,
            FieldKind::Expiry => &mut self.expiry,
            FieldKind::Cvv => &mut self.cvv,
        }
    }

    /// Applies an edit to a field and returns the field's resulting value.
    ///
    /// Refused edits leave the value unchanged. The CVV limit is taken from
    /// the card number as it stands at the time of this call.
    pub fn input(&mut self, kind: FieldKind, candidate: &str) -> &str {
        let before = self.card_type();
        self.field_mut(kind).apply_input(candidate, before);

        if kind == FieldKind::Number {
            let after = self.card_type();
            if after != before {
                trace!(from = %before, to = %after, "card type changed");
            }
        }

        self.field(kind).value()
    }

    /// Current raw card number.
    #[inline]
    pub fn number(&self) -> &str {
        self.number.value()
    }

    /// Current raw holder name, as typed.
    #[inline]
    pub fn name(&self) -> &str {
        self.name.value()
    }

    /// Current raw expiry, `MMYY` digits.
    #[inline]
    pub fn expiry(&self) -> &str {
        self.expiry.value()
    }

    /// Current raw CVV.
    #[inline]
    pub fn cvv(&self) -> &str {
        self.cvv.value()
    }

    /// Card type of the current number. Recomputed on every call.
    #[inline]
    pub fn card_type(&self) -> CardType {
        classify(self.number())
    }

    /// Mask for the current number.
    #[inline]
    pub fn number_mask(&self) -> &'static MaskTemplate {
        mask_for(self.card_type())
    }

    /// Number of CVV digits the next CVV edit may contain.
    #[inline]
    pub fn cvv_max_length(&self) -> usize {
        self.card_type().cvv_length()
    }

    /// Records a focus change. The last call wins.
    pub fn set_focus(&mut self, focused: FocusedField) {
        if self.focused != focused {
            trace!(from = ?self.focused, to = ?focused, "focus changed");
        }
        self.focused = focused;
    }

    /// Focuses a field.
    #[inline]
    pub fn focus(&mut self, kind: FieldKind) {
        self.set_focus(Some(kind));
    }

    /// Removes focus from every field.
    #[inline]
    pub fn clear_focus(&mut self) {
        self.set_focus(None);
    }

    /// The field holding focus.
    #[inline]
    pub fn focused(&self) -> FocusedField {
        self.focused
    }

    /// True while the CVV is focused.
    #[inline]
    pub fn is_flipped(&self) -> bool {
        self.focused == Some(FieldKind::Cvv)
    }

    /// Side of the card to show.
    #[inline]
    pub fn face(&self) -> CardFace {
        if self.is_flipped() {
            CardFace::Back
        } else {
            CardFace::Front
        }
    }

    /// Masked card number text and its caret mapping.
    pub fn number_transformed(&self) -> Transformed<MaskOffsets<'static>> {
        transform_number(self.number())
    }

    /// Masked expiry text and its caret mapping.
    pub fn expiry_transformed(&self) -> Transformed<ExpiryOffsets> {
        transform_expiry(self.expiry())
    }

    /// Starred CVV text.
    pub fn cvv_transformed(&self) -> Transformed<Identity> {
        transform_secret(self.cvv())
    }

    /// What the card drawing should show right now.
    pub fn preview(&self) -> CardPreview {
        CardPreview::from_session(self)
    }

    /// Empties every field and clears focus.
    pub fn reset(&mut self) {
        for kind in FieldKind::ALL {
            self.field_mut(kind).clear();
        }
        self.clear_focus();
    }

    /// Submits the form, consuming it.
    ///
    /// Focus is cleared and the entered values are dropped (and zeroed).
    /// Only a redacted summary survives.
    pub fn submit(mut self) -> Submission {
        self.clear_focus();

        let card_type = self.card_type();
        let number = redact(self.number(), mask_for(card_type));
        info!(card_type = %card_type, number = %number, "form submitted");

        Submission { card_type, number }
    }
}
