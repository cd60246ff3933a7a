//! WebAssembly bindings for the card entry form.
//!
//! A browser page keeps one [`CardForm`] per form, forwards every edit and
//! focus change to it, and reads back what to draw.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { CardForm } from 'card_form';
//!
//! await init();
//!
//! const form = new CardForm();
//! numberInput.addEventListener('input', (e) => {
//!     const raw = form.input('number', rawFromDisplay(e.target.value));
//!     e.target.value = form.number_display;
//!     const caret = form.number_caret_to_display(raw.length);
//!     e.target.setSelectionRange(caret, caret);
//! });
//! cvvInput.addEventListener('focus', () => form.focus('cvv'));
//! card.classList.toggle('flipped', form.is_flipped);
//! ```

#![cfg(feature = "wasm")]

use crate::{FieldKind, FormSession};
use wasm_bindgen::prelude::*;

fn parse_field(name: &str) -> Result<FieldKind, JsValue> {
    match name.to_lowercase().as_str() {
        "number" | "card_number" => Ok(FieldKind::Number),
        "name" | "holder" => Ok(FieldKind::Name),
        "expiry" | "expires" => Ok(FieldKind::Expiry),
        "cvv" | "cvc" => Ok(FieldKind::Cvv),
        _ => Err(JsValue::from_str(&format!("unknown field: {}", name))),
    }
}

/// A card entry form driven from JavaScript.
#[wasm_bindgen]
#[derive(Debug, Default)]
pub struct CardForm {
    session: FormSession,
}

#[wasm_bindgen]
impl CardForm {
    /// Creates an empty form.
    #[wasm_bindgen(constructor)]
    pub fn new() -> CardForm {
        CardForm::default()
    }

    /// Applies an edit and returns the field's resulting raw value.
    ///
    /// Refused edits return the previous value.
    pub fn input(&mut self, field: &str, candidate: &str) -> Result<String, JsValue> {
        let kind = parse_field(field)?;
        Ok(self.session.input(kind, candidate).to_owned())
    }

    /// Focuses a field, or clears focus when `field` is empty.
    pub fn focus(&mut self, field: &str) -> Result<(), JsValue> {
        if field.is_empty() {
            self.session.clear_focus();
        } else {
            self.session.focus(parse_field(field)?);
        }
        Ok(())
    }

    /// Card type slug: visa, amex, mastercard, discover or unknown.
    #[wasm_bindgen(getter)]
    pub fn card_type(&self) -> String {
        self.session.card_type().slug().to_string()
    }

    /// True while the CVV is focused.
    #[wasm_bindgen(getter)]
    pub fn is_flipped(&self) -> bool {
        self.session.is_flipped()
    }

    /// Number of CVV digits currently allowed.
    #[wasm_bindgen(getter)]
    pub fn cvv_max_length(&self) -> usize {
        self.session.cvv_max_length()
    }

    /// Masked card number for the input box.
    #[wasm_bindgen(getter)]
    pub fn number_display(&self) -> String {
        self.session.number_transformed().text
    }

    /// Masked expiry for the input box.
    #[wasm_bindgen(getter)]
    pub fn expiry_display(&self) -> String {
        self.session.expiry_transformed().text
    }

    /// Maps a raw caret position in the number field to the masked text.
    pub fn number_caret_to_display(&self, offset: usize) -> usize {
        self.session.number_transformed().caret_to_display(offset)
    }

    /// Maps a masked caret position in the number field to the raw value.
    pub fn number_caret_to_raw(&self, offset: usize) -> usize {
        self.session.number_transformed().caret_to_raw(offset)
    }

    /// Maps a raw caret position in the expiry field to the masked text.
    pub fn expiry_caret_to_display(&self, offset: usize) -> usize {
        self.session.expiry_transformed().caret_to_display(offset)
    }

    /// Maps a masked caret position in the expiry field to the raw value.
    pub fn expiry_caret_to_raw(&self, offset: usize) -> usize {
        self.session.expiry_transformed().caret_to_raw(offset)
    }

    /// Number line of the card face, `#` for unfilled digits.
    #[wasm_bindgen(getter)]
    pub fn preview_number(&self) -> String {
        self.session.preview().number
    }

    /// Holder line of the card face.
    #[wasm_bindgen(getter)]
    pub fn preview_holder(&self) -> String {
        self.session.preview().holder
    }

    /// Expiry line of the card face.
    #[wasm_bindgen(getter)]
    pub fn preview_expiry(&self) -> String {
        self.session.preview().expiry
    }

    /// Starred CVV for the back of the card.
    #[wasm_bindgen(getter)]
    pub fn preview_cvv(&self) -> String {
        self.session.preview().cvv
    }

    /// Empties the form.
    pub fn reset(&mut self) {
        self.session.reset();
    }
}
