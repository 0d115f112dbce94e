//! Fuzz target for the template parsers.
//!
//! Any string parses or fails cleanly, and a parsed template yields a mask
//! of the same length.

#![no_main]

use libfuzzer_sys::fuzz_target;
use slotmask::Mask;
use slotmask::template::{PhoneNumberParser, SlotsParser, UnderscoreDigitParser};

fuzz_target!(|raw: &str| {
    for slots in [
        UnderscoreDigitParser.parse_slots(raw),
        PhoneNumberParser.parse_slots(raw),
    ]
    .into_iter()
    .flatten()
    {
        assert_eq!(slots.len(), raw.chars().count());
        let mut mask = Mask::terminated(&slots);
        assert_eq!(mask.size(), slots.len());
        let caret = mask.insert_front(raw);
        assert!(caret <= mask.size());
    }
});
