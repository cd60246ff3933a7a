//! Rendering raw input under a mask while the user types.
//!
//! # Format Conventions
//!
//! - **Card number**: literals appear only between filled slots, so
//!   `"41111"` renders as `"4111 1"` and `"4111"` as `"4111"`.
//! - **Expiry**: the `/` is shown as soon as the month is complete, so
//!   `"12"` renders as `"12/"`.
//! - **Card face**: unfilled slots are drawn as `#`.
//!
//! # Example
//!
//! ```
//! use card_form::format::{render, render_expiry};
//! use card_form::mask::mask_for;
//! use card_form::CardType;
//!
//! assert_eq!(render("4111111111111111", mask_for(CardType::Visa)), "4111 1111 1111 1111");
//! assert_eq!(render("341111111111111", mask_for(CardType::Amex)), "3411 111111 11111");
//! assert_eq!(render_expiry("1230"), "12/30");
//! ```

use crate::mask::{Cell, MaskTemplate, EXPIRY_MASK, SLOT};

/// Number of trailing digits left visible by [`redact`].
pub const VISIBLE_TAIL: usize = 4;

/// Renders raw input under a mask.
///
/// Walks the mask left to right, substituting slots with input characters
/// and copying literals, and stops as soon as the input runs out. The output
/// never ends in a literal. Input longer than the mask's slot count is
/// truncated.
///
/// # Example
///
/// ```
/// use card_form::format::render;
/// use card_form::mask::DEFAULT_CARD_MASK;
///
/// assert_eq!(render("", &DEFAULT_CARD_MASK), "");
/// assert_eq!(render("4111", &DEFAULT_CARD_MASK), "4111");
/// assert_eq!(render("41111", &DEFAULT_CARD_MASK), "4111 1");
/// ```
pub fn render(raw: &str, mask: &MaskTemplate) -> String {
    let mut input = raw.chars().take(mask.slot_count());
    let mut next = input.next();
    let mut result = String::with_capacity(mask.as_str().len());

    for cell in mask.cells() {
        let Some(c) = next else { break };
        match cell {
            Cell::Slot => {
                result.push(c);
                next = input.next();
            }
            Cell::Literal(literal) => result.push(literal),
        }
    }

    result
}

/// Renders the whole mask, drawing unfilled slots as `#`.
///
/// This is what the card face shows.
///
/// ```
/// use card_form::format::render_placeholder;
/// use card_form::mask::AMEX_CARD_MASK;
///
/// assert_eq!(render_placeholder("3782", &AMEX_CARD_MASK), "3782 ###### #####");
/// ```
pub fn render_placeholder(raw: &str, mask: &MaskTemplate) -> String {
    let mut input = raw.chars();
    mask.cells()
        .map(|cell| match cell {
            Cell::Slot => input.next().unwrap_or(SLOT),
            Cell::Literal(literal) => literal,
        })
        .collect()
}

/// Renders an expiry date as `MM/YY`.
///
/// The `/` follows the second character as soon as it is typed. Input beyond
/// four characters is ignored.
///
/// ```
/// use card_form::format::render_expiry;
///
/// assert_eq!(render_expiry("1"), "1");
/// assert_eq!(render_expiry("12"), "12/");
/// assert_eq!(render_expiry("123"), "12/3");
/// ```
pub fn render_expiry(raw: &str) -> String {
    let mut result = String::with_capacity(EXPIRY_MASK.display_len());
    for (i, c) in raw.chars().take(EXPIRY_MASK.slot_count()).enumerate() {
        result.push(c);
        if i == 1 {
            result.push('/');
        }
    }
    result
}

/// Renders a card number with every digit but the last four replaced by `*`.
///
/// Inputs of four characters or fewer are fully starred. Safe for logs.
///
/// ```
/// use card_form::format::redact;
/// use card_form::mask::DEFAULT_CARD_MASK;
///
/// assert_eq!(redact("4111111111111111", &DEFAULT_CARD_MASK), "**** **** **** 1111");
/// assert_eq!(redact("411", &DEFAULT_CARD_MASK), "***");
/// ```
pub fn redact(raw: &str, mask: &MaskTemplate) -> String {
    let filled = raw.chars().take(mask.slot_count()).count();
    let hidden = if filled <= VISIBLE_TAIL {
        filled
    } else {
        filled - VISIBLE_TAIL
    };

    let starred: String = raw
        .chars()
        .take(filled)
        .enumerate()
        .map(|(i, c)| if i < hidden { '*' } else { c })
        .collect();

    render(&starred, mask)
}

/// Keeps only the ASCII digits of the input.
///
/// ```
/// use card_form::format::digits_only;
///
/// assert_eq!(digits_only("4111 1111-11a1"), "4111111111");
/// ```
#[inline]
pub fn digits_only(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mask::{mask_for, AMEX_CARD_MASK, DEFAULT_CARD_MASK};
    use crate::CardType;

    #[test]
    fn test_render_visa_16() {
        assert_eq!(
            render("4111111111111111", mask_for(CardType::Visa)),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_render_amex() {
        assert_eq!(
            render("341111111111111", mask_for(CardType::Amex)),
            "3411 111111 11111"
        );
    }

    #[test]
    fn test_render_partial() {
        assert_eq!(render("4", &DEFAULT_CARD_MASK), "4");
        assert_eq!(render("4111", &DEFAULT_CARD_MASK), "4111");
        assert_eq!(render("41111", &DEFAULT_CARD_MASK), "4111 1");
        assert_eq!(render("411111111", &DEFAULT_CARD_MASK), "4111 1111 1");
        assert_eq!(render("3782822", &AMEX_CARD_MASK), "3782 822");
        assert_eq!(render("3782822463", &AMEX_CARD_MASK), "3782 822463");
        assert_eq!(render("37828224631", &AMEX_CARD_MASK), "3782 822463 1");
    }

    #[test]
    fn test_render_truncates_overlong_input() {
        assert_eq!(
            render("34111111111111119999", &AMEX_CARD_MASK),
            "3411 111111 11111"
        );
        assert_eq!(
            render("41111111111111112", &DEFAULT_CARD_MASK),
            "4111 1111 1111 1111"
        );
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render("", &AMEX_CARD_MASK), "");
    }

    #[test]
    fn test_render_placeholder() {
        assert_eq!(render_placeholder("", &DEFAULT_CARD_MASK), "#### #### #### ####");
        assert_eq!(
            render_placeholder("41111", &DEFAULT_CARD_MASK),
            "4111 1### #### ####"
        );
        assert_eq!(
            render_placeholder("378282246310005", &AMEX_CARD_MASK),
            "3782 822463 10005"
        );
    }

    #[test]
    fn test_render_expiry() {
        assert_eq!(render_expiry(""), "");
        assert_eq!(render_expiry("1"), "1");
        assert_eq!(render_expiry("12"), "12/");
        assert_eq!(render_expiry("123"), "12/3");
        assert_eq!(render_expiry("1230"), "12/30");
        assert_eq!(render_expiry("123099"), "12/30");
    }

    #[test]
    fn test_redact() {
        assert_eq!(
            redact("378282246310005", &AMEX_CARD_MASK),
            "**** ****** *0005"
        );
        assert_eq!(redact("41111", &DEFAULT_CARD_MASK), "*111 1");
        assert_eq!(redact("4111", &DEFAULT_CARD_MASK), "****");
        assert_eq!(redact("", &DEFAULT_CARD_MASK), "");
    }

    #[test]
    fn test_digits_only() {
        assert_eq!(digits_only("4111 1111 1111 1111"), "4111111111111111");
        assert_eq!(digits_only("12/30"), "1230");
        assert_eq!(digits_only("abc"), "");
        // Non-ASCII digits are dropped.
        assert_eq!(digits_only("١٢3"), "3");
    }
}
