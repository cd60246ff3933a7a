//! Fuzz target for the form session.
//!
//! Replays arbitrary edit and focus streams and checks the stored values.

#![no_main]

use arbitrary::Arbitrary;
use card_form::{FieldKind, FormSession};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
enum Event {
    Input(u8, String),
    Focus(Option<u8>),
}

fn field(index: u8) -> FieldKind {
    FieldKind::ALL[usize::from(index) % FieldKind::ALL.len()]
}

fuzz_target!(|events: Vec<Event>| {
    let mut form = FormSession::new();

    for event in events {
        match event {
            Event::Input(index, candidate) => {
                form.input(field(index), &candidate);
            }
            Event::Focus(index) => form.set_focus(index.map(field)),
        }

        assert!(form.number().len() <= 16);
        assert!(form.expiry().len() <= 4);
        assert!(form.cvv().len() <= 4);
        assert_eq!(form.is_flipped(), form.focused() == Some(FieldKind::Cvv));
        let _ = form.preview();
        let _ = form.number_transformed();
    }
});
