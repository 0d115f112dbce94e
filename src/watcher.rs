//! Headless format watcher.
//!
//! A text widget reports edits as "at `start`, `removed` characters were
//! replaced by `inserted`". [`FormatSession`] replays each such
//! [`TextChange`] against its [`Mask`] and keeps the formatted text and caret
//! the widget should show next. The widget itself stays outside this crate:
//! the host feeds changes in and copies [`text`](FormatSession::text) and
//! [`caret`](FormatSession::caret) back out.
//!
//! # Examples
//!
//! ```
//! use slotmask::Mask;
//! use slotmask::slot::predefined;
//! use slotmask::watcher::{FormatSession, TextChange};
//!
//! let mut session = FormatSession::new(Mask::terminated(&predefined::rus_phone_number()))?;
//! session.apply(&TextChange::insert(0, "999"));
//! assert_eq!(session.text(), "+7 (999) ");
//! assert_eq!(session.caret(), 9);
//!
//! session.apply(&TextChange::remove(8, 1));
//! assert_eq!(session.text(), "+7 (99");
//! assert_eq!(session.caret(), 6);
//! # Ok::<(), slotmask::Error>(())
//! ```

use std::fmt;

use tracing::{debug, trace};

use crate::descriptor::MaskFactory;
use crate::error::Result;
use crate::mask::{Mask, MaskSnapshot};

/// One raw edit reported by a text widget, in characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextChange {
    pub start: usize,
    pub removed: usize,
    pub inserted: String,
}

impl TextChange {
    #[must_use]
    pub fn insert(start: usize, text: impl Into<String>) -> Self {
        Self::replace(start, 0, text)
    }

    #[must_use]
    pub fn remove(start: usize, count: usize) -> Self {
        Self::replace(start, count, String::new())
    }

    #[must_use]
    pub fn replace(start: usize, removed: usize, text: impl Into<String>) -> Self {
        Self {
            start,
            removed,
            inserted: text.into(),
        }
    }

    #[must_use]
    pub fn inserted_len(&self) -> usize {
        self.inserted.chars().count()
    }

    #[must_use]
    pub fn is_inserting(&self) -> bool {
        !self.inserted.is_empty()
    }

    #[must_use]
    pub fn is_removing(&self) -> bool {
        self.removed > 0
    }

    /// Index of the last removed character.
    #[must_use]
    pub fn remove_end(&self) -> usize {
        (self.start + self.removed).saturating_sub(1)
    }

    /// `text` as the widget shows it right after this edit, before formatting.
    #[must_use]
    pub fn apply_to(&self, text: &str) -> String {
        let mut out: String = text.chars().take(self.start).collect();
        out.push_str(&self.inserted);
        out.extend(text.chars().skip(self.start + self.removed));
        out
    }

    /// Input methods that edit a word report shortening it as "replace the
    /// word with the shorter word". When the shorter word is a prefix of the
    /// replaced text, rewrite the change as removing just the dropped tail.
    fn normalize_trimming(&mut self, before: &str) {
        let inserted = self.inserted_len();
        if inserted == 0 || self.removed == 0 || inserted >= self.removed {
            return;
        }
        let replaced = before.chars().skip(self.start).take(inserted);
        if replaced.eq(self.inserted.chars()) {
            self.removed -= inserted;
            self.start += inserted;
            self.inserted.clear();
        }
    }
}

/// Hooks around formatting.
pub trait FormatListener {
    /// Called before a change is applied to the mask. Return `true` to cancel
    /// formatting; the widget keeps the raw text.
    fn before_formatting(&mut self, old_text: &str, new_text: &str) -> bool {
        let _ = (old_text, new_text);
        false
    }

    /// Called after a change was formatted.
    fn on_text_formatted(&mut self, formatted: &str) {
        let _ = formatted;
    }
}

/// How [`FormatSession::apply`] handled a change.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Applied {
    /// The mask was edited; text and caret are updated.
    Formatted,
    /// The change left the text as it was.
    Unchanged,
    /// A listener cancelled formatting; the session holds the raw text.
    Cancelled,
}

/// Mask plus the text and caret a widget currently shows.
pub struct FormatSession<F: MaskFactory = Mask> {
    factory: F,
    mask: Mask,
    text: String,
    caret: usize,
    listener: Option<Box<dyn FormatListener>>,
}

impl<F: MaskFactory> FormatSession<F> {
    /// Start a session with a fresh mask from `factory`.
    ///
    /// # Errors
    ///
    /// Propagates the factory's error.
    pub fn new(factory: F) -> Result<Self> {
        let mask = factory.create_mask()?;
        let text = mask.to_string();
        let caret = mask.initial_input_position();
        Ok(Self {
            factory,
            mask,
            text,
            caret,
            listener: None,
        })
    }

    pub fn set_listener(&mut self, listener: impl FormatListener + 'static) {
        self.listener = Some(Box::new(listener));
    }

    pub fn clear_listener(&mut self) {
        self.listener = None;
    }

    /// Current text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Caret the widget should show.
    #[must_use]
    pub fn caret(&self) -> usize {
        self.caret
    }

    /// Read-only view of the mask.
    #[must_use]
    pub fn mask(&self) -> MaskSnapshot<'_> {
        self.mask.snapshot()
    }

    #[must_use]
    pub fn factory(&self) -> &F {
        &self.factory
    }

    /// Swap the factory and rebuild the mask from it.
    ///
    /// # Errors
    ///
    /// Propagates the factory's error; the session is left unchanged.
    pub fn set_factory(&mut self, factory: F) -> Result<usize> {
        let mask = factory.create_mask()?;
        self.factory = factory;
        Ok(self.install(mask, None))
    }

    /// Rebuild the mask from the factory, then type `initial_value` into it.
    ///
    /// Returns the new caret.
    ///
    /// # Errors
    ///
    /// Propagates the factory's error; the session is left unchanged.
    pub fn refresh(&mut self, initial_value: Option<&str>) -> Result<usize> {
        let mask = self.factory.create_mask()?;
        Ok(self.install(mask, initial_value))
    }

    fn install(&mut self, mut mask: Mask, initial_value: Option<&str>) -> usize {
        if let Some(initial) = initial_value {
            mask.insert_front(initial);
        }
        self.text = mask.to_string();
        self.caret = mask.initial_input_position().min(self.text.chars().count());
        self.mask = mask;
        debug!(text = %self.text, caret = self.caret, "mask refreshed");
        self.caret
    }

    /// Replay a widget edit against the mask.
    pub fn apply(&mut self, change: &TextChange) -> Applied {
        let before = std::mem::take(&mut self.text);
        let after = change.apply_to(&before);

        let mut change = change.clone();
        change.normalize_trimming(&before);

        if let Some(listener) = self.listener.as_mut() {
            if listener.before_formatting(&before, &after) {
                debug!(?change, "formatting cancelled by listener");
                self.caret = (change.start + change.inserted_len()).min(after.chars().count());
                self.text = after;
                return Applied::Cancelled;
            }
        }

        if before == after {
            self.text = before;
            return Applied::Unchanged;
        }

        let mut caret = self.caret;
        if change.is_removing() {
            caret = if change.is_inserting() {
                self.mask
                    .remove_backwards_without_hardcoded(change.remove_end(), change.removed)
            } else {
                self.mask.remove_backwards(change.remove_end(), change.removed)
            };
        }
        if change.is_inserting() {
            caret = self.mask.insert_at(change.start, &change.inserted);
        }

        self.text = self.mask.to_string();
        self.caret = caret.min(self.text.chars().count());
        trace!(?change, text = %self.text, caret = self.caret, "change formatted");

        if let Some(listener) = self.listener.as_mut() {
            listener.on_text_formatted(&self.text);
        }
        Applied::Formatted
    }
}

impl<F: MaskFactory + fmt::Debug> fmt::Debug for FormatSession<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormatSession")
            .field("factory", &self.factory)
            .field("mask", &self.mask)
            .field("text", &self.text)
            .field("caret", &self.caret)
            .field("listener", &self.listener.is_some())
            .finish()
    }
}

impl<F: MaskFactory> fmt::Display for FormatSession<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.text)
    }
}
