//! Card type detection from the leading characters of a card number.
//!
//! Detection works on whatever the user typed, digits or not. Only the
//! first four characters are ever inspected.
//!
//! # Performance
//!
//! Detection is O(1) using slice pattern matching - no loops, regexes or
//! allocations.

use crate::CardType;

/// Classifies a (possibly partial) card number by issuer prefix.
///
/// Rules are checked in order and the first match wins:
///
/// 1. `4` - Visa
/// 2. `34`, `37` - American Express
/// 3. `51`-`55` - Mastercard
/// 4. `6011` - Discover
/// 5. anything else - Unknown
///
/// The function is total. Empty input and the lone prefix `"3"` are both
/// [`CardType::Unknown`].
///
/// # Example
///
/// ```
/// use card_form::detect::classify;
/// use card_form::CardType;
///
/// assert_eq!(classify("4111"), CardType::Visa);
/// assert_eq!(classify("3412"), CardType::Amex);
/// assert_eq!(classify("3"), CardType::Unknown);
/// ```
#[inline]
pub fn classify(raw: &str) -> CardType {
    // Order matters: prefixes overlap on their first digit.
    match raw.as_bytes() {
        [b'4', ..] => CardType::Visa,
        [b'3', b'4' | b'7', ..] => CardType::Amex,
        [b'5', b'1'..=b'5', ..] => CardType::Mastercard,
        [b'6', b'0', b'1', b'1', ..] => CardType::Discover,
        _ => CardType::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visa_detection() {
        assert_eq!(classify("4"), CardType::Visa);
        assert_eq!(classify("4111"), CardType::Visa);
        assert_eq!(classify("4111111111111111"), CardType::Visa);
    }

    #[test]
    fn test_amex_detection() {
        assert_eq!(classify("34"), CardType::Amex);
        assert_eq!(classify("3412"), CardType::Amex);
        assert_eq!(classify("378282246310005"), CardType::Amex);
    }

    #[test]
    fn test_mastercard_detection() {
        assert_eq!(classify("51"), CardType::Mastercard);
        assert_eq!(classify("511234"), CardType::Mastercard);
        assert_eq!(classify("5555555555554444"), CardType::Mastercard);
        assert_eq!(classify("50"), CardType::Unknown);
        assert_eq!(classify("56"), CardType::Unknown);
    }

    #[test]
    fn test_discover_detection() {
        assert_eq!(classify("6011"), CardType::Discover);
        assert_eq!(classify("6011000"), CardType::Discover);
        assert_eq!(classify("601"), CardType::Unknown);
        assert_eq!(classify("6012"), CardType::Unknown);
    }

    #[test]
    fn test_unknown_brand() {
        assert_eq!(classify(""), CardType::Unknown);
        assert_eq!(classify("3"), CardType::Unknown);
        assert_eq!(classify("35"), CardType::Unknown);
        assert_eq!(classify("9999"), CardType::Unknown);
    }

    #[test]
    fn test_unfiltered_input_is_classified_as_typed() {
        // A stray leading separator hides the prefix.
        assert_eq!(classify(" 4111"), CardType::Unknown);
        assert_eq!(classify("3-4"), CardType::Unknown);
        assert_eq!(classify("4a"), CardType::Visa);
    }
}
