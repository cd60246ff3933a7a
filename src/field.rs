//! Per-field input controllers.
//!
//! A [`FieldController`] owns the raw value of one form field and is the
//! only way to change it. Each edit arrives as the full candidate text the
//! widget would show next. It is either accepted, after filtering, or
//! rejected, leaving the value untouched.
//!
//! # Field rules
//!
//! | Field | Max length | Filter |
//! |-------|------------|--------|
//! | Number | slots of the candidate's mask (15 Amex, 16 otherwise) | digits |
//! | Holder name | none | none |
//! | Expiry | 4 | digits |
//! | CVV | 4 Amex, 3 otherwise | digits |
//!
//! Length is checked on the candidate *before* filtering.

use crate::detect::classify;
use crate::error::InputError;
use crate::format::digits_only;
use crate::mask::{max_digits, EXPIRY_MASK};
use crate::CardType;
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// The four fields of the card form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum FieldKind {
    /// Card number.
    Number,
    /// Card holder name.
    Name,
    /// Expiry date, `MMYY`.
    Expiry,
    /// Card verification code.
    Cvv,
}

impl FieldKind {
    /// All fields in form order.
    pub const ALL: [FieldKind; 4] = [Self::Number, Self::Name, Self::Expiry, Self::Cvv];

    /// Returns a human-readable label.
    #[inline]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Number => "card number",
            Self::Name => "card holder",
            Self::Expiry => "expiry date",
            Self::Cvv => "CVV",
        }
    }

    /// Returns true for fields that only store digits.
    #[inline]
    pub const fn is_numeric(&self) -> bool {
        !matches!(self, Self::Name)
    }
}

impl fmt::Display for FieldKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The unmasked text stored for a field.
///
/// The buffer is zeroed when the value is replaced or dropped. `Debug`
/// shows the length only.
#[derive(Clone, Default, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct RawValue(String);

impl RawValue {
    /// Returns the value as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    /// Returns true if nothing has been entered.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl AsRef<str> for RawValue {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RawValue").field("len", &self.len()).finish()
    }
}

/// Holds and validates the raw value of one field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldController {
    kind: FieldKind,
    value: RawValue,
}

impl FieldController {
    /// Creates an empty field.
    pub fn new(kind: FieldKind) -> Self {
        Self {
            kind,
            value: RawValue::default(),
        }
    }

    /// Returns which field this is.
    #[inline]
    pub const fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Returns the current raw value.
    #[inline]
    pub fn value(&self) -> &str {
        self.value.as_str()
    }

    /// Returns the current raw value wrapper.
    #[inline]
    pub fn raw(&self) -> &RawValue {
        &self.value
    }

    /// Maximum candidate length this field accepts, or `None` if unlimited.
    ///
    /// `card_type` is the form's current card type and only matters for the
    /// CVV. The number field classifies the candidate itself, so typing a
    /// prefix that turns into Amex shrinks the limit for that very edit.
    pub fn max_length(&self, candidate: &str, card_type: CardType) -> Option<usize> {
        match self.kind {
            FieldKind::Number => Some(max_digits(classify(candidate))),
            FieldKind::Name => None,
            FieldKind::Expiry => Some(EXPIRY_MASK.slot_count()),
            FieldKind::Cvv => Some(card_type.cvv_length()),
        }
    }

    /// Applies an edit, reporting why it was refused.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::TooLong`] when the unfiltered candidate is longer
    /// than [`max_length`](Self::max_length). The value is left unchanged.
    pub fn try_apply_input(
        &mut self,
        candidate: &str,
        card_type: CardType,
    ) -> Result<(), InputError> {
        let Some(maximum) = self.max_length(candidate, card_type) else {
            self.value = RawValue(candidate.to_owned());
            return Ok(());
        };

        let length = candidate.chars().count();
        if length > maximum {
            return Err(InputError::TooLong {
                field: self.kind,
                length,
                maximum,
            });
        }

        self.value = RawValue(digits_only(candidate));
        Ok(())
    }

    /// Applies an edit and returns the resulting value.
    ///
    /// A refused edit is a silent no-op: the previous value is returned.
    ///
    /// # Example
    ///
    /// ```
    /// use card_form::field::{FieldController, FieldKind};
    /// use card_form::CardType;
    ///
    /// let mut cvv = FieldController::new(FieldKind::Cvv);
    /// assert_eq!(cvv.apply_input("12a3", CardType::Amex), "123");
    /// assert_eq!(cvv.apply_input("12345", CardType::Amex), "123");
    /// ```
    pub fn apply_input(&mut self, candidate: &str, card_type: CardType) -> &str {
        if let Err(err) = self.try_apply_input(candidate, card_type) {
            tracing::debug!(field = %self.kind, error = %err, "edit rejected");
        }
        self.value()
    }

    /// Empties the field.
    pub fn clear(&mut self) {
        self.value = RawValue::default();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_accepts_and_filters() {
        let mut number = FieldController::new(FieldKind::Number);
        assert_eq!(number.apply_input("4111 1111", CardType::Unknown), "41111111");
        assert_eq!(
            number.apply_input("4111111111111111", CardType::Unknown),
            "4111111111111111"
        );
    }

    #[test]
    fn test_number_rejects_overlong_candidate() {
        let mut number = FieldController::new(FieldKind::Number);
        number.apply_input("4111111111111111", CardType::Unknown);

        let err = number
            .try_apply_input("41111111111111112", CardType::Visa)
            .unwrap_err();
        assert_eq!(
            err,
            InputError::TooLong {
                field: FieldKind::Number,
                length: 17,
                maximum: 16
            }
        );
        assert_eq!(number.value(), "4111111111111111");
    }

    #[test]
    fn test_number_limit_follows_candidate_type() {
        let number = FieldController::new(FieldKind::Number);
        // The form's card type is ignored for the number field.
        assert_eq!(number.max_length("34", CardType::Visa), Some(15));
        assert_eq!(number.max_length("4", CardType::Amex), Some(16));
    }

    #[test]
    fn test_separators_count_towards_length() {
        let mut number = FieldController::new(FieldKind::Number);
        // 19 characters with spaces, but only 16 digits.
        assert_eq!(number.apply_input("4111 1111 1111 1111", CardType::Visa), "");
    }

    #[test]
    fn test_expiry() {
        let mut expiry = FieldController::new(FieldKind::Expiry);
        assert_eq!(expiry.apply_input("12", CardType::Unknown), "12");
        assert_eq!(expiry.apply_input("1230", CardType::Unknown), "1230");
        assert_eq!(expiry.apply_input("12301", CardType::Unknown), "1230");
        assert_eq!(expiry.apply_input("1/3", CardType::Unknown), "13");
        assert_eq!(expiry.max_length("", CardType::Amex), Some(4));
    }

    #[test]
    fn test_cvv_length_depends_on_card_type() {
        let mut cvv = FieldController::new(FieldKind::Cvv);
        assert_eq!(cvv.apply_input("1234", CardType::Visa), "");
        assert_eq!(cvv.apply_input("123", CardType::Visa), "123");
        assert_eq!(cvv.apply_input("1234", CardType::Amex), "1234");
    }

    #[test]
    fn test_name_is_unrestricted() {
        let mut name = FieldController::new(FieldKind::Name);
        let long = "Maria José de la Cruz-Ñúñez 3rd, Esq.";
        assert_eq!(name.apply_input(long, CardType::Unknown), long);
        assert_eq!(name.max_length(long, CardType::Unknown), None);
        // Case is kept as typed.
        assert_eq!(name.apply_input("jane doe", CardType::Unknown), "jane doe");
    }

    #[test]
    fn test_clear() {
        let mut cvv = FieldController::new(FieldKind::Cvv);
        cvv.apply_input("123", CardType::Visa);
        cvv.clear();
        assert_eq!(cvv.value(), "");
        assert!(cvv.raw().is_empty());
    }

    #[test]
    fn test_raw_value_debug_hides_content() {
        let mut number = FieldController::new(FieldKind::Number);
        number.apply_input("4111111111111111", CardType::Unknown);
        let debug = format!("{:?}", number);
        assert!(!debug.contains("4111"));
        assert!(debug.contains("len: 16"));
    }

    #[test]
    fn test_field_kind() {
        assert_eq!(FieldKind::Cvv.to_string(), "CVV");
        assert!(FieldKind::Expiry.is_numeric());
        assert!(!FieldKind::Name.is_numeric());
    }
}
