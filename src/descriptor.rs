//! Mask descriptors and factories.
//!
//! A [`MaskDescriptor`] is the serializable recipe for a mask: explicit slots
//! or a raw template, an optional initial value and the behavior flags. A
//! [`MaskFactory`] turns a recipe into a fresh [`Mask`] on demand, which is
//! what a [`FormatSession`](crate::watcher::FormatSession) calls whenever it
//! rebuilds its mask.
//!
//! # Examples
//!
//! ```
//! use slotmask::descriptor::{DescriptorFactory, MaskDescriptor, MaskFactory};
//! use slotmask::template::UnderscoreDigitParser;
//!
//! let descriptor = MaskDescriptor::of_raw_mask("__.__.____").with_initial_value("01012000");
//! let factory = DescriptorFactory::new(UnderscoreDigitParser, descriptor);
//! let mask = factory.create_mask()?;
//! assert_eq!(mask.to_string(), "01.01.2000");
//! # Ok::<(), slotmask::Error>(())
//! ```

use std::fmt;

use tracing::debug;

use crate::error::{Error, Result};
use crate::mask::Mask;
use crate::slot::{PLACEHOLDER_DEFAULT, Slot};
use crate::slot::predefined;
use crate::template::{SlotsParser, UnderscoreDigitParser};

/// Recipe for building a [`Mask`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct MaskDescriptor {
    slots: Option<Vec<Slot>>,
    raw_mask: Option<String>,
    initial_value: Option<String>,
    terminated: bool,
    forbid_input_when_filled: bool,
    hide_hardcoded_head: bool,
}

impl Default for MaskDescriptor {
    fn default() -> Self {
        Self {
            slots: None,
            raw_mask: None,
            initial_value: None,
            terminated: true,
            forbid_input_when_filled: false,
            hide_hardcoded_head: false,
        }
    }
}

impl MaskDescriptor {
    /// Empty descriptor. Not valid until slots or a raw template are set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Descriptor for a raw template. An empty template gives [`empty_mask`](Self::empty_mask).
    #[must_use]
    pub fn of_raw_mask(raw_mask: &str) -> Self {
        if raw_mask.is_empty() {
            return Self::empty_mask();
        }
        Self::new().with_raw_mask(raw_mask)
    }

    #[must_use]
    pub fn of_slots(slots: Vec<Slot>) -> Self {
        Self::new().with_slots(slots)
    }

    /// Open-ended mask accepting anything.
    #[must_use]
    pub fn empty_mask() -> Self {
        Self::of_slots(predefined::single_slot()).with_terminated(false)
    }

    #[must_use]
    pub fn with_slots(mut self, slots: Vec<Slot>) -> Self {
        self.slots = Some(slots);
        self
    }

    #[must_use]
    pub fn with_raw_mask(mut self, raw_mask: impl Into<String>) -> Self {
        self.raw_mask = Some(raw_mask.into());
        self
    }

    #[must_use]
    pub fn with_initial_value(mut self, initial_value: impl Into<String>) -> Self {
        self.initial_value = Some(initial_value.into());
        self
    }

    #[must_use]
    pub fn with_terminated(mut self, terminated: bool) -> Self {
        self.terminated = terminated;
        self
    }

    #[must_use]
    pub fn with_forbid_input_when_filled(mut self, forbid: bool) -> Self {
        self.forbid_input_when_filled = forbid;
        self
    }

    #[must_use]
    pub fn with_hide_hardcoded_head(mut self, hide: bool) -> Self {
        self.hide_hardcoded_head = hide;
        self
    }

    #[must_use]
    pub fn slots(&self) -> Option<&[Slot]> {
        self.slots.as_deref()
    }

    #[must_use]
    pub fn raw_mask(&self) -> Option<&str> {
        self.raw_mask.as_deref()
    }

    #[must_use]
    pub fn initial_value(&self) -> Option<&str> {
        self.initial_value.as_deref()
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    #[must_use]
    pub fn is_forbid_input_when_filled(&self) -> bool {
        self.forbid_input_when_filled
    }

    #[must_use]
    pub fn is_hide_hardcoded_head(&self) -> bool {
        self.hide_hardcoded_head
    }

    /// A descriptor needs slots or a non-empty raw template.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.slots.is_some() || self.raw_mask.as_deref().is_some_and(|raw| !raw.is_empty())
    }

    /// # Errors
    ///
    /// [`Error::MalformedDescriptor`] if [`is_valid`](Self::is_valid) is false.
    pub fn validate(&self) -> Result<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(Error::MalformedDescriptor)
        }
    }
}

impl fmt::Display for MaskDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.raw_mask, &self.slots) {
            (Some(raw), _) if !raw.is_empty() => f.write_str(raw),
            (_, Some(slots)) if !slots.is_empty() => {
                for slot in slots {
                    write!(f, "{}", slot.value().unwrap_or(PLACEHOLDER_DEFAULT))?;
                }
                Ok(())
            }
            _ => f.write_str("(empty)"),
        }
    }
}

/// Source of fresh masks.
pub trait MaskFactory {
    /// Build a new mask.
    ///
    /// # Errors
    ///
    /// Fails when the recipe cannot produce slots.
    fn create_mask(&self) -> Result<Mask>;
}

/// A mask is a factory of copies of itself.
impl MaskFactory for Mask {
    fn create_mask(&self) -> Result<Mask> {
        Ok(self.clone())
    }
}

/// Builds masks from a [`MaskDescriptor`], parsing raw templates with `P`.
#[derive(Clone, Debug, Default)]
pub struct DescriptorFactory<P = UnderscoreDigitParser> {
    parser: P,
    descriptor: MaskDescriptor,
}

impl<P: SlotsParser> DescriptorFactory<P> {
    pub fn new(parser: P, descriptor: MaskDescriptor) -> Self {
        Self { parser, descriptor }
    }

    #[must_use]
    pub fn descriptor(&self) -> &MaskDescriptor {
        &self.descriptor
    }

    pub fn set_descriptor(&mut self, descriptor: MaskDescriptor) {
        self.descriptor = descriptor;
    }

    pub fn parser(&self) -> &P {
        &self.parser
    }
}

impl<P: SlotsParser> MaskFactory for DescriptorFactory<P> {
    fn create_mask(&self) -> Result<Mask> {
        let descriptor = &self.descriptor;
        descriptor.validate()?;

        let mut mask = match (&descriptor.slots, &descriptor.raw_mask) {
            (Some(slots), _) => Mask::new(slots, descriptor.terminated),
            (None, Some(raw)) => Mask::new(&self.parser.parse_slots(raw)?, descriptor.terminated),
            (None, None) => return Err(Error::MalformedDescriptor),
        };
        mask.set_forbid_input_when_filled(descriptor.forbid_input_when_filled);
        mask.set_hide_hardcoded_head(descriptor.hide_hardcoded_head);

        if let Some(initial) = descriptor.initial_value.as_deref() {
            mask.insert_front(initial);
        }

        debug!(%descriptor, size = mask.size(), "mask created");
        Ok(mask)
    }
}
