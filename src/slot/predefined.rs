//! Ready-made slots and slot tables.
//!
//! Tables are returned by value; every call builds a fresh template, so no
//! shared state exists between masks built from them.

use super::{Slot, SlotTag, Validator};

/// Fixed literal slot.
#[must_use]
pub fn hardcoded(value: char) -> Slot {
    Slot::hardcoded(value)
}

/// Fixed literal that is left out of the unformatted text.
#[must_use]
pub fn decoration(value: char) -> Slot {
    Slot::hardcoded(value).with_tag(SlotTag::DECORATION)
}

#[must_use]
pub fn digit() -> Slot {
    Slot::input(Validator::Digit)
}

#[must_use]
pub fn any() -> Slot {
    Slot::input(Validator::Any)
}

/// Digit slot that also accepts `X`, `x` and `*`.
#[must_use]
pub fn maskable_digit() -> Slot {
    Slot::input(Validator::masked_digit())
}

#[must_use]
pub fn letter() -> Slot {
    Slot::input(Validator::letter())
}

/// One slot accepting anything. Open-ended masks grow from it.
#[must_use]
pub fn single_slot() -> Vec<Slot> {
    vec![any()]
}

/// `+7 (___) ___-__-__`
#[must_use]
pub fn rus_phone_number() -> Vec<Slot> {
    vec![
        hardcoded('+'),
        hardcoded('7'),
        decoration(' '),
        decoration('('),
        digit(),
        digit(),
        digit(),
        decoration(')'),
        decoration(' '),
        digit(),
        digit(),
        digit(),
        decoration('-'),
        digit(),
        digit(),
        decoration('-'),
        digit(),
        digit(),
    ]
}

/// `____ ______`. The separator is part of the unformatted value.
#[must_use]
pub fn rus_passport() -> Vec<Slot> {
    let mut slots = digits(4);
    slots.push(hardcoded(' '));
    slots.extend(digits(6));
    slots
}

/// `____ ____ ____ ____`
#[must_use]
pub fn card_number_standard() -> Vec<Slot> {
    grouped(digit, &[4, 4, 4, 4])
}

/// `________ ____`
#[must_use]
pub fn card_number_maestro() -> Vec<Slot> {
    grouped(digit, &[8, 4])
}

/// Standard card number whose digits after the first may be masked.
#[must_use]
pub fn card_number_standard_maskable() -> Vec<Slot> {
    let mut slots = grouped(maskable_digit, &[4, 4, 4, 4]);
    slots[0] = digit();
    slots
}

/// Maestro card number whose digits after the first may be masked.
#[must_use]
pub fn card_number_maestro_maskable() -> Vec<Slot> {
    let mut slots = grouped(maskable_digit, &[8, 4]);
    slots[0] = digit();
    slots
}

fn digits(count: usize) -> Vec<Slot> {
    (0..count).map(|_| digit()).collect()
}

// Groups of input slots separated by decorative spaces.
fn grouped(make: fn() -> Slot, groups: &[usize]) -> Vec<Slot> {
    let mut slots = Vec::new();
    for (i, &len) in groups.iter().enumerate() {
        if i > 0 {
            slots.push(decoration(' '));
        }
        slots.extend((0..len).map(|_| make()));
    }
    slots
}
