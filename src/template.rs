//! Raw template parsers.
//!
//! A parser turns a human-written template such as `"+7 (___) ___-__-__"`
//! into the slot list a [`Mask`](crate::Mask) is built from.

use crate::error::{Error, Result};
use crate::slot::predefined::{decoration, digit, hardcoded};
use crate::slot::{Slot, SlotRules, Validator};

/// Character that marks an input position in underscore templates.
pub const SLOT_STUB: char = '_';

/// Turns a raw template into slots.
pub trait SlotsParser {
    /// Parse `raw` into slots.
    ///
    /// # Errors
    ///
    /// [`Error::EmptyTemplate`] if `raw` is empty.
    fn parse_slots(&self, raw: &str) -> Result<Vec<Slot>>;
}

/// `_` becomes a digit slot; every other character is a literal.
#[derive(Clone, Copy, Debug, Default)]
pub struct UnderscoreDigitParser;

impl SlotsParser for UnderscoreDigitParser {
    fn parse_slots(&self, raw: &str) -> Result<Vec<Slot>> {
        if raw.is_empty() {
            return Err(Error::EmptyTemplate);
        }
        Ok(raw
            .chars()
            .map(|ch| if ch == SLOT_STUB { digit() } else { hardcoded(ch) })
            .collect())
    }
}

/// Underscore template with phone-specific literals.
///
/// Separators are decoration except `+`, which stays in the unformatted
/// number. Digits written into the template (a country code) are literals
/// that accept the same digit typed over them; only the first digit of a run
/// is satisfied by a digit arriving from the left, so typing the code in full
/// does not get swallowed by the following digits.
#[derive(Clone, Copy, Debug, Default)]
pub struct PhoneNumberParser;

impl PhoneNumberParser {
    const PLUS_SIGN: char = '+';
}

impl SlotsParser for PhoneNumberParser {
    fn parse_slots(&self, raw: &str) -> Result<Vec<Slot>> {
        if raw.is_empty() {
            return Err(Error::EmptyTemplate);
        }

        let mut run_start = true;
        let mut slots = Vec::with_capacity(raw.len());
        for ch in raw.chars() {
            let slot = if ch == SLOT_STUB {
                digit()
            } else if !ch.is_ascii_digit() {
                run_start = true;
                if ch == Self::PLUS_SIGN {
                    hardcoded(ch)
                } else {
                    decoration(ch)
                }
            } else {
                let rules = if run_start {
                    SlotRules::HARDCODED
                } else {
                    SlotRules::HARDCODED | SlotRules::FORBID_LEFT_OVERWRITE
                };
                run_start = false;
                Slot::new(rules, Some(ch), Validator::Digit)
            };
            slots.push(slot);
        }
        Ok(slots)
    }
}
