//! The card drawing model.
//!
//! [`CardPreview`] is everything the card picture needs, as display strings.
//! Fonts, colors, images and the flip animation belong to the presentation
//! layer.

use crate::format::{render_expiry, render_placeholder};
use crate::mask::mask_for;
use crate::session::{CardFace, FormSession};
use crate::CardType;

/// Holder line shown before a name is typed.
pub const HOLDER_PLACEHOLDER: &str = "FULL NAME";

/// Expiry line shown before a date is typed.
pub const EXPIRY_PLACEHOLDER: &str = "MM/YY";

/// Display strings for both sides of the card.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CardPreview {
    /// Side to show.
    pub face: CardFace,
    /// Card type derived from the number.
    pub card_type: CardType,
    /// Issuer logo slug, `None` when the type is unknown.
    pub logo: Option<&'static str>,
    /// Full mask with typed digits filled in and `#` elsewhere.
    pub number: String,
    /// Upper-cased holder name or [`HOLDER_PLACEHOLDER`].
    pub holder: String,
    /// `MM/YY` text or [`EXPIRY_PLACEHOLDER`].
    pub expiry: String,
    /// One `*` per CVV digit.
    pub cvv: String,
}

impl CardPreview {
    /// Builds the preview for the current state of a form.
    ///
    /// ```
    /// use card_form::{FieldKind, FormSession};
    ///
    /// let mut form = FormSession::new();
    /// form.input(FieldKind::Number, "41111");
    /// form.input(FieldKind::Name, "jane doe");
    ///
    /// let preview = form.preview();
    /// assert_eq!(preview.number, "4111 1### #### ####");
    /// assert_eq!(preview.holder, "JANE DOE");
    /// assert_eq!(preview.expiry, "MM/YY");
    /// assert_eq!(preview.logo, Some("visa"));
    /// ```
    pub fn from_session(form: &FormSession) -> Self {
        let card_type = form.card_type();

        let holder = if form.name().is_empty() {
            HOLDER_PLACEHOLDER.to_owned()
        } else {
            form.name().to_uppercase()
        };

        let expiry = if form.expiry().is_empty() {
            EXPIRY_PLACEHOLDER.to_owned()
        } else {
            render_expiry(form.expiry())
        };

        Self {
            face: form.face(),
            card_type,
            logo: card_type.is_known().then_some(card_type.slug()),
            number: render_placeholder(form.number(), mask_for(card_type)),
            holder,
            expiry,
            cvv: "*".repeat(form.cvv().chars().count()),
        }
    }
}
