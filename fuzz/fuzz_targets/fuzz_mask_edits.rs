//! Fuzz target for mask editing.
//!
//! Replays arbitrary edit scripts against the predefined masks and checks
//! that carets stay inside the mask and open masks keep a trimmed tail.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use slotmask::slot::predefined::{
    card_number_standard_maskable, rus_passport, rus_phone_number, single_slot,
};
use slotmask::{Mask, SlotTag};

#[derive(Arbitrary, Debug)]
enum Edit {
    Insert { at: u8, text: String },
    Remove { at: u8, count: u8 },
    RemoveWithoutHardcoded { at: u8, count: u8 },
    Clear,
}

#[derive(Arbitrary, Debug)]
struct Script {
    template: u8,
    terminated: bool,
    edits: Vec<Edit>,
}

const MAX_EDITS: usize = 256;

fuzz_target!(|script: Script| {
    let slots = match script.template % 4 {
        0 => rus_phone_number(),
        1 => card_number_standard_maskable(),
        2 => rus_passport(),
        _ => single_slot(),
    };
    let mut mask = Mask::new(&slots, script.terminated);
    let size = mask.size();

    for edit in script.edits.iter().take(MAX_EDITS) {
        let len = mask.size();
        let caret = match edit {
            // Inserting past the end returns the position untouched.
            Edit::Insert { at, text } if usize::from(*at) >= len => {
                assert_eq!(mask.insert_at(usize::from(*at), text), usize::from(*at));
                None
            }
            Edit::Insert { at, text } => Some(mask.insert_at(usize::from(*at), text)),
            Edit::Remove { at, count } => {
                Some(mask.remove_backwards(usize::from(*at), usize::from(*count)))
            }
            Edit::RemoveWithoutHardcoded { at, count } => Some(
                mask.remove_backwards_without_hardcoded(usize::from(*at), usize::from(*count)),
            ),
            Edit::Clear => {
                mask.clear();
                None
            }
        };

        if let Some(caret) = caret {
            assert!(caret <= mask.size(), "caret {caret} past size {}", mask.size());
        }
        if script.terminated {
            assert_eq!(mask.size(), size);
        } else {
            let empty_tail = mask
                .iter()
                .collect::<Vec<_>>()
                .iter()
                .rev()
                .take_while(|slot| slot.has_tag(SlotTag::EXTENSION) && slot.value().is_none())
                .count();
            assert!(empty_tail <= 1, "{empty_tail} empty extension slots at tail");
        }
        assert!(mask.to_string().chars().count() <= mask.size());
    }
});
