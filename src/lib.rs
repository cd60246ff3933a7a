//! # card_form
//!
//! The input core of a credit card entry form: issuer detection, input
//! masks, caret offset mapping and form state. Rendering and input events
//! belong to whatever UI sits on top.
//!
//! ## Features
//!
//! - Card type detection from a partial number
//! - Issuer-specific masks (`#### ###### #####` for Amex, `#### #### #### ####` otherwise)
//! - Masked rendering while typing, with caret offset mapping both ways
//! - Per-field length and character rules, with the CVV limit following the card type
//! - Form session with focus tracking and card flip state
//! - Multiple interfaces: library, CLI, WASM
//!
//! ## Quick Start
//!
//! ```rust
//! use card_form::{classify, mask_for, render, CardType};
//!
//! assert_eq!(classify("4111"), CardType::Visa);
//! assert_eq!(render("41111", mask_for(CardType::Visa)), "4111 1");
//! assert_eq!(render("378282246310005", mask_for(CardType::Amex)), "3782 822463 10005");
//! ```
//!
//! ## Caret Mapping
//!
//! ```rust
//! use card_form::offset::{translator, ExpiryOffsets, OffsetMapping};
//! use card_form::mask::AMEX_CARD_MASK;
//!
//! let offsets = translator(&AMEX_CARD_MASK);
//! assert_eq!(offsets.to_display(11), 13);
//! assert_eq!(offsets.to_raw(13), 11);
//!
//! // "12/": the caret after the month sits after the slash.
//! assert_eq!(ExpiryOffsets.to_display(2), 3);
//! assert_eq!(ExpiryOffsets.to_raw(3), 2);
//! ```
//!
//! ## Form Session
//!
//! ```rust
//! use card_form::{CardType, FieldKind, FormSession};
//!
//! let mut form = FormSession::new();
//!
//! // Typing "34" switches to the Amex mask: 15 digits at most.
//! form.input(FieldKind::Number, "341111111111111");
//! assert_eq!(form.card_type(), CardType::Amex);
//! assert_eq!(form.input(FieldKind::Number, "3411111111111111"), "341111111111111");
//!
//! // Focusing the CVV flips the card.
//! form.focus(FieldKind::Cvv);
//! assert!(form.is_flipped());
//! assert_eq!(form.input(FieldKind::Cvv, "1234"), "1234");
//! ```
//!
//! ## Supported Card Types
//!
//! | Type | Prefix | Mask | CVV |
//! |------|--------|------|-----|
//! | Visa | 4 | 4-4-4-4 | 3 |
//! | American Express | 34, 37 | 4-6-5 | 4 |
//! | Mastercard | 51-55 | 4-4-4-4 | 3 |
//! | Discover | 6011 | 4-4-4-4 | 3 |
//! | Unknown | other | 4-4-4-4 | 3 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `serde` | `Serialize`/`Deserialize` for card types, fields and previews |
//! | `cli` | Command-line tool |
//! | `wasm` | WebAssembly bindings |
//!
//! ## Security
//!
//! - Raw field values are zeroed when replaced or dropped
//! - `Debug` never shows field contents
//! - Logs carry lengths and redacted numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod card;
pub mod detect;
pub mod error;
pub mod field;
pub mod format;
pub mod mask;
pub mod offset;
pub mod preview;
pub mod session;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use card::CardType;
pub use detect::classify;
pub use error::{InputError, MaskError};
pub use field::{FieldController, FieldKind, RawValue};
pub use format::render;
pub use mask::{mask_for, MaskTemplate};
pub use offset::{translator, OffsetMapping};
pub use preview::CardPreview;
pub use session::{CardFace, FocusedField, FormSession, Submission};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_examples() {
        assert_eq!(classify("4111"), CardType::Visa);
        assert_eq!(classify("3412"), CardType::Amex);
        assert_eq!(classify("6011000"), CardType::Discover);
        assert_eq!(classify("511234"), CardType::Mastercard);
        assert_eq!(classify("9999"), CardType::Unknown);
        assert_eq!(classify("3"), CardType::Unknown);
    }

    #[test]
    fn test_render_examples() {
        assert_eq!(
            render("4111111111111111", mask_for(CardType::Visa)),
            "4111 1111 1111 1111"
        );
        assert_eq!(
            render("341111111111111", mask_for(CardType::Amex)),
            "3411 111111 11111"
        );
    }

    #[test]
    fn test_round_trip_every_mask() {
        for card_type in CardType::ALL {
            let mask = mask_for(card_type);
            let offsets = translator(mask);
            for o in 0..=mask.slot_count() {
                assert_eq!(offsets.to_raw(offsets.to_display(o)), o);
            }
        }
    }

    #[test]
    fn test_thread_safety() {
        // Ensure types are Send + Sync
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<CardType>();
        assert_send_sync::<MaskTemplate>();
        assert_send_sync::<FormSession>();
        assert_send_sync::<InputError>();
    }
}
