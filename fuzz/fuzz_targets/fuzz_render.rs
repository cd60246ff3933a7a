//! Fuzz target for masked rendering.
//!
//! Tests that rendering functions never panic on arbitrary input.

#![no_main]

use card_form::format::{digits_only, redact, render_expiry, render_placeholder};
use card_form::{classify, mask_for, render, CardType};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    // These should never panic
    let _ = classify(data);
    let _ = render_expiry(data);
    let _ = digits_only(data);

    for card_type in CardType::ALL {
        let mask = mask_for(card_type);
        let rendered = render(data, mask);
        let _ = render_placeholder(data, mask);
        let _ = redact(data, mask);

        assert!(rendered.chars().count() <= mask.display_len());
    }
});
