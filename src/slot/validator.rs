//! Character validators for input slots.
//!
//! A [`Validator`] is a plain value describing a single-character predicate.
//! Validators are compared structurally, so a [`ValidatorSet`] keeps at most
//! one copy of each no matter how many times it is built.
//!
//! # Examples
//!
//! ```
//! use slotmask::slot::{Validator, ValidatorSet};
//!
//! let set = ValidatorSet::of([Validator::Digit, Validator::masked_digit(), Validator::Digit]);
//! assert_eq!(set.len(), 2);
//! assert!(set.validate('7'));
//! assert!(set.validate('*'));
//! assert!(!set.validate('a'));
//! ```

/// Mask characters accepted by [`Validator::masked_digit`] in place of a digit.
pub const DEFAULT_DIGIT_MASK_CHARS: [char; 3] = ['X', 'x', '*'];

/// A predicate over a single character.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Validator {
    /// Accepts every character.
    Any,
    /// Accepts ASCII digits `0-9`.
    Digit,
    /// Accepts ASCII digits and the listed mask characters (card number masking).
    MaskedDigit { mask_chars: Vec<char> },
    /// Accepts Latin and/or Cyrillic letters.
    Letter { english: bool, russian: bool },
}

impl Validator {
    /// Digit validator that also accepts [`DEFAULT_DIGIT_MASK_CHARS`].
    #[must_use]
    pub fn masked_digit() -> Self {
        Self::MaskedDigit {
            mask_chars: DEFAULT_DIGIT_MASK_CHARS.to_vec(),
        }
    }

    /// Letter validator accepting both alphabets.
    #[must_use]
    pub fn letter() -> Self {
        Self::Letter {
            english: true,
            russian: true,
        }
    }

    /// Check whether `ch` is accepted.
    #[must_use]
    pub fn validate(&self, ch: char) -> bool {
        match self {
            Self::Any => true,
            Self::Digit => ch.is_ascii_digit(),
            Self::MaskedDigit { mask_chars } => ch.is_ascii_digit() || mask_chars.contains(&ch),
            Self::Letter { english, russian } => {
                (*english && ch.is_ascii_alphabetic()) || (*russian && is_russian_letter(ch))
            }
        }
    }
}

// 'А'..='я' is the contiguous Cyrillic block without 'Ё'/'ё'.
fn is_russian_letter(ch: char) -> bool {
    ('А'..='я').contains(&ch)
}

/// Logical OR of validators.
///
/// An empty set accepts nothing.
#[derive(Clone, Debug, Default, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidatorSet {
    validators: Vec<Validator>,
}

impl ValidatorSet {
    /// Create an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a set from validators, dropping structural duplicates.
    pub fn of(validators: impl IntoIterator<Item = Validator>) -> Self {
        validators.into_iter().collect()
    }

    /// Add a validator. Returns `false` if an equal one was already present.
    pub fn insert(&mut self, validator: Validator) -> bool {
        if self.validators.contains(&validator) {
            return false;
        }
        self.validators.push(validator);
        true
    }

    /// Add every member of another set.
    pub fn merge(&mut self, other: &Self) {
        for validator in &other.validators {
            self.insert(validator.clone());
        }
    }

    /// True iff any member accepts `ch`.
    #[must_use]
    pub fn validate(&self, ch: char) -> bool {
        self.validators.iter().any(|v| v.validate(ch))
    }

    /// Count the characters this set accepts.
    pub fn count_valid(&self, chars: impl IntoIterator<Item = char>) -> usize {
        chars.into_iter().filter(|&ch| self.validate(ch)).count()
    }

    #[must_use]
    pub fn contains(&self, validator: &Validator) -> bool {
        self.validators.contains(validator)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.validators.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Validator> {
        self.validators.iter()
    }
}

impl PartialEq for ValidatorSet {
    // Order-insensitive: members are unique, so equal length plus inclusion is enough.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.validators.iter().all(|v| other.contains(v))
    }
}

impl FromIterator<Validator> for ValidatorSet {
    fn from_iter<I: IntoIterator<Item = Validator>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

impl Extend<Validator> for ValidatorSet {
    fn extend<I: IntoIterator<Item = Validator>>(&mut self, iter: I) {
        for validator in iter {
            self.insert(validator);
        }
    }
}

impl From<Validator> for ValidatorSet {
    fn from(validator: Validator) -> Self {
        Self {
            validators: vec![validator],
        }
    }
}
