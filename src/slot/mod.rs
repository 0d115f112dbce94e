//! Mask positions ("slots") and their behavior flags.
//!
//! A [`Slot`] is one position of a mask. It either holds a fixed literal
//! (a *hardcoded* slot, e.g. the `(` in a phone template) or accepts one
//! user character checked by its [`ValidatorSet`]. How a slot reacts to input
//! that arrives while it is occupied is controlled by [`SlotRules`].
//!
//! Slots carry no links. Neighbor-aware operations (pushing values right,
//! pulling them left on deletion) live on [`SlotChain`](crate::chain::SlotChain),
//! which owns the slots.
//!
//! # Examples
//!
//! ```
//! use slotmask::slot::{Slot, SlotRules, SlotTag, Validator};
//!
//! let dash = Slot::hardcoded('-').with_tag(SlotTag::DECORATION);
//! assert!(dash.is_hardcoded());
//! assert!(dash.can_accept_here('-'));
//! assert!(!dash.can_accept_here('1'));
//!
//! let digit = Slot::new(SlotRules::DEFAULT, None, Validator::Digit);
//! assert!(digit.can_accept_here('1'));
//! ```

pub mod predefined;
mod validator;

pub use validator::{DEFAULT_DIGIT_MASK_CHARS, Validator, ValidatorSet};

use bitflags::bitflags;
use std::collections::BTreeSet;
use std::fmt;
use std::sync::Arc;

/// Character shown in place of an empty slot unless configured otherwise.
pub const PLACEHOLDER_DEFAULT: char = '_';

bitflags! {
    /// Behavior of a slot when input arrives.
    ///
    /// With neither input rule set, a slot *moves current*: new input takes
    /// its place and the value it held is pushed one slot to the right.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct SlotRules: u8 {
        /// Input overwrites the current value in place.
        const INPUT_REPLACE            = 0x01;
        /// The slot keeps its value and pushes new input to the next slot.
        const INPUT_MOVES_INPUT        = 0x02;
        /// A hardcoded slot reached by a push from the left does not count
        /// a matching character as already satisfied; it pushes it on.
        const FORBID_LEFT_OVERWRITE    = 0x04;
        /// Deleting here does not move the caret left.
        const FORBID_CURSOR_MOVE_LEFT  = 0x08;
        /// Input landing here does not move the caret right.
        const FORBID_CURSOR_MOVE_RIGHT = 0x10;
    }
}

impl SlotRules {
    /// Rules of a regular input slot.
    pub const DEFAULT: Self = Self::empty();
    /// Rules of a fixed literal slot.
    pub const HARDCODED: Self = Self::INPUT_MOVES_INPUT;

    /// True when neither input rule is set.
    #[must_use]
    pub const fn moves_current(self) -> bool {
        !self.intersects(Self::INPUT_REPLACE.union(Self::INPUT_MOVES_INPUT))
    }
}

/// Semantic tag attached to a slot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SlotTag(pub u32);

impl SlotTag {
    /// Cosmetic slot, left out of the unformatted text.
    pub const DECORATION: Self = Self(1);
    /// Slot appended to grow an open-ended mask. Removed again once empty.
    pub const EXTENSION: Self = Self(2);
}

/// Remaps incoming characters before a slot looks at them.
///
/// Used for normalizations such as accepting a leading `8` where a phone
/// template has a hardcoded `7`.
#[derive(Clone)]
pub struct ValueInterpreter(Arc<dyn Fn(char) -> char + Send + Sync>);

impl ValueInterpreter {
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(char) -> char + Send + Sync + 'static,
    {
        Self(Arc::new(f))
    }

    /// Interpreter that maps `from` to `to` and leaves every other char alone.
    #[must_use]
    pub fn replace(from: char, to: char) -> Self {
        Self::new(move |ch| if ch == from { to } else { ch })
    }

    #[must_use]
    pub fn interpret(&self, ch: char) -> char {
        (self.0)(ch)
    }
}

impl fmt::Debug for ValueInterpreter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ValueInterpreter(..)")
    }
}

/// One position of a mask.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Slot {
    value: Option<char>,
    rules: SlotRules,
    validators: ValidatorSet,
    tags: BTreeSet<SlotTag>,
    #[cfg_attr(feature = "serde", serde(skip))]
    interpreter: Option<ValueInterpreter>,
}

impl Slot {
    pub fn new(rules: SlotRules, value: Option<char>, validators: impl Into<ValidatorSet>) -> Self {
        Self {
            value,
            rules,
            validators: validators.into(),
            tags: BTreeSet::new(),
            interpreter: None,
        }
    }

    /// Fixed literal slot.
    #[must_use]
    pub fn hardcoded(value: char) -> Self {
        Self::new(SlotRules::HARDCODED, Some(value), ValidatorSet::new())
    }

    /// Empty input slot with default rules.
    #[must_use]
    pub fn input(validators: impl Into<ValidatorSet>) -> Self {
        Self::new(SlotRules::DEFAULT, None, validators)
    }

    #[must_use]
    pub fn with_tag(mut self, tag: SlotTag) -> Self {
        self.tags.insert(tag);
        self
    }

    #[must_use]
    pub fn with_tags(mut self, tags: impl IntoIterator<Item = SlotTag>) -> Self {
        self.tags.extend(tags);
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: SlotRules) -> Self {
        self.rules = rules;
        self
    }

    #[must_use]
    pub fn with_interpreter(mut self, interpreter: ValueInterpreter) -> Self {
        self.interpreter = Some(interpreter);
        self
    }

    #[must_use]
    pub fn value(&self) -> Option<char> {
        self.value
    }

    // Raw store, no neighbor effects. Editing goes through `SlotChain::set_value`.
    pub(crate) fn store(&mut self, value: Option<char>) {
        self.value = value;
    }

    #[must_use]
    pub fn rules(&self) -> SlotRules {
        self.rules
    }

    pub fn set_rules(&mut self, rules: SlotRules) {
        self.rules = rules;
    }

    #[must_use]
    pub fn validators(&self) -> &ValidatorSet {
        &self.validators
    }

    pub fn set_validators(&mut self, validators: ValidatorSet) {
        self.validators = validators;
    }

    #[must_use]
    pub fn tags(&self) -> &BTreeSet<SlotTag> {
        &self.tags
    }

    pub fn add_tag(&mut self, tag: SlotTag) {
        self.tags.insert(tag);
    }

    #[must_use]
    pub fn has_tag(&self, tag: SlotTag) -> bool {
        self.tags.contains(&tag)
    }

    pub fn set_interpreter(&mut self, interpreter: Option<ValueInterpreter>) {
        self.interpreter = interpreter;
    }

    /// A slot is hardcoded iff it moves input and holds a value.
    #[must_use]
    pub fn is_hardcoded(&self) -> bool {
        self.value.is_some() && self.rules.contains(SlotRules::INPUT_MOVES_INPUT)
    }

    /// Apply the value interpreter, if any.
    #[must_use]
    pub fn interpret(&self, ch: char) -> char {
        self.interpreter.as_ref().map_or(ch, |i| i.interpret(ch))
    }

    /// Whether `ch` may land in this slot.
    ///
    /// A hardcoded slot accepts only its own literal; other slots ask their
    /// validators.
    #[must_use]
    pub fn can_accept_here(&self, ch: char) -> bool {
        let ch = self.interpret(ch);
        match self.value {
            Some(fixed) if self.is_hardcoded() => fixed == ch,
            _ => self.validators.validate(ch),
        }
    }

    /// Caret advance contributed by a value landing here.
    pub(crate) fn advance(&self, offset: usize) -> usize {
        if self.rules.contains(SlotRules::FORBID_CURSOR_MOVE_RIGHT) {
            offset
        } else {
            offset + 1
        }
    }

    /// Caret correction contributed by deleting here.
    pub(crate) fn retreat(&self) -> usize {
        usize::from(self.rules.contains(SlotRules::FORBID_CURSOR_MOVE_LEFT))
    }
}

impl PartialEq for Slot {
    // The interpreter is behavior attached by the host and is not compared.
    fn eq(&self, other: &Self) -> bool {
        self.value == other.value
            && self.rules == other.rules
            && self.tags == other.tags
            && self.validators == other.validators
    }
}

impl Eq for Slot {}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.value {
            Some(ch) => write!(f, "Slot({ch:?})"),
            None => f.write_str("Slot(empty)"),
        }
    }
}
