//! Fuzz target for caret offset mapping.
//!
//! Arbitrary masks and offsets must never panic, and offsets must clamp.

#![no_main]

use arbitrary::Arbitrary;
use card_form::mask::MaskTemplate;
use card_form::offset::{translator, ExpiryOffsets, OffsetMapping};
use libfuzzer_sys::fuzz_target;

#[derive(Arbitrary, Debug)]
struct Input<'a> {
    pattern: &'a str,
    offset: usize,
}

fuzz_target!(|input: Input<'_>| {
    let _ = ExpiryOffsets.to_display(input.offset);
    let _ = ExpiryOffsets.to_raw(input.offset);

    let Ok(mask) = MaskTemplate::parse(input.pattern) else {
        return;
    };
    let offsets = translator(&mask);

    assert!(offsets.to_display(input.offset) <= mask.display_len());
    assert!(offsets.to_raw(input.offset) <= mask.slot_count());

    let o = input.offset.min(mask.slot_count());
    assert_eq!(offsets.to_raw(offsets.to_display(o)), o);
});
