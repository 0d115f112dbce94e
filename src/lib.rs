//! `slotmask` - input masking with exact caret tracking
//!
//! A mask is a chain of slots. Each slot is either a fixed literal (the `+7 (`
//! of a phone number) or an input position with a validator. Edits arrive as
//! "insert this text at the caret" or "delete backwards from the caret", the
//! way a text field reports them, and every edit returns the caret position
//! the field should restore.
//!
//! # Examples
//!
//! ```
//! use slotmask::Mask;
//! use slotmask::template::{PhoneNumberParser, SlotsParser};
//!
//! let slots = PhoneNumberParser.parse_slots("+1 (___) ___-____")?;
//! let mut mask = Mask::terminated(&slots);
//!
//! let caret = mask.insert_front("4155550123");
//! assert_eq!(mask.to_string(), "+1 (415) 555-0123");
//! assert_eq!(caret, 17);
//!
//! let caret = mask.remove_backwards(caret - 1, 4);
//! assert_eq!(mask.to_string(), "+1 (415) 555");
//! assert_eq!(caret, 12);
//! # Ok::<(), slotmask::Error>(())
//! ```

// Crate-level lint configuration
#![allow(clippy::module_name_repetitions)] // MaskOptions, MaskSnapshot etc
#![allow(clippy::struct_excessive_bools)] // Mask options are independent flags
#![allow(clippy::missing_panics_doc)] // Docs WIP
#![allow(clippy::missing_const_for_fn)] // Many functions could be const, not critical
#![allow(clippy::doc_markdown)] // Allow technical names without backticks
#![allow(clippy::collapsible_if)] // Sometimes nested ifs are clearer
#![allow(clippy::must_use_candidate)] // Edit methods return carets that may be ignored

pub mod chain;
pub mod descriptor;
pub mod error;
pub mod mask;
pub mod slot;
pub mod template;
pub mod watcher;

// Re-export core types at crate root
pub use chain::SlotChain;
pub use error::{Error, Result};
pub use mask::{Mask, MaskOptions, MaskSnapshot};
pub use slot::{Slot, SlotRules, SlotTag, Validator, ValidatorSet, ValueInterpreter};

// Re-export configuration and adapter types
pub use descriptor::{DescriptorFactory, MaskDescriptor, MaskFactory};
pub use template::{PhoneNumberParser, SlotsParser, UnderscoreDigitParser};
pub use watcher::{Applied, FormatListener, FormatSession, TextChange};
