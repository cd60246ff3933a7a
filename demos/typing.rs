//! Keystroke-by-keystroke form entry example.
//!
//! Run with: `cargo run --example typing`

use card_form::offset::OffsetMapping;
use card_form::{FieldKind, FormSession};

fn type_field(form: &mut FormSession, kind: FieldKind, keys: &str) {
    form.focus(kind);
    println!("--- {} (flipped: {}) ---\n", kind, form.is_flipped());

    for c in keys.chars() {
        let mut candidate = form.field(kind).value().to_owned();
        candidate.push(c);
        let raw = form.input(kind, &candidate).to_owned();

        let (shown, caret) = match kind {
            FieldKind::Number => {
                let t = form.number_transformed();
                let caret = t.offsets.to_display(raw.len());
                (t.text, caret)
            }
            FieldKind::Expiry => {
                let t = form.expiry_transformed();
                let caret = t.offsets.to_display(raw.len());
                (t.text, caret)
            }
            FieldKind::Cvv => (form.cvv_transformed().text, raw.len()),
            FieldKind::Name => (raw.clone(), raw.chars().count()),
        };

        println!(
            "  key {:?}  raw {:<17} shown {:<20} caret {}",
            c,
            format!("{:?}", raw),
            format!("{:?}", shown),
            caret
        );
    }
    println!();
}

fn main() {
    println!("=== Card Entry ===\n");

    let mut form = FormSession::new();

    // The second digit turns the number into Amex: the 16th digit is refused.
    type_field(&mut form, FieldKind::Number, "3782822463100057");
    type_field(&mut form, FieldKind::Name, "jane doe");
    type_field(&mut form, FieldKind::Expiry, "09271");
    type_field(&mut form, FieldKind::Cvv, "12345");

    // -------------------------------------------------------------------------
    // Card preview
    // -------------------------------------------------------------------------
    let preview = form.preview();
    println!("--- Card ({:?}) ---\n", preview.face);
    println!("  {}  {}", preview.card_type, preview.logo.unwrap_or("-"));
    println!("  {}", preview.number);
    println!("  {}  {}", preview.holder, preview.expiry);
    println!("  CVV {}", preview.cvv);
    println!();

    let submission = form.submit();
    println!("Submitted {} {}", submission.card_type, submission.number);
}
