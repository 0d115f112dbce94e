//! The editing engine.
//!
//! A [`Mask`] owns a [`SlotChain`] and applies edits to it: inserting text at
//! a caret, deleting backwards from a caret, clearing. Every edit returns the
//! caret position the host should restore, in slot units of the formatted
//! text. Editing never fails; input that does not fit is dropped and
//! out-of-range positions leave the caret where it was.
//!
//! Open-ended masks (not terminated) grow by cloning their last slot while
//! input keeps arriving, and shrink again as trailing input is deleted.
//!
//! # Examples
//!
//! ```
//! use slotmask::Mask;
//! use slotmask::slot::predefined;
//!
//! let mut mask = Mask::terminated(&predefined::rus_phone_number());
//! let caret = mask.insert_front("9998765432");
//! assert_eq!(mask.to_string(), "+7 (999) 876-54-32");
//! assert_eq!(caret, 18);
//! assert_eq!(mask.to_unformatted_string(), "+79998765432");
//! ```

mod snapshot;

pub use snapshot::MaskSnapshot;

use std::collections::VecDeque;
use std::fmt;

use tracing::{debug, trace};

use crate::chain::{self, SlotChain, SlotId};
use crate::error::{Error, Result};
use crate::slot::{PLACEHOLDER_DEFAULT, Slot, SlotTag};

/// Display and input behavior of a [`Mask`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaskOptions {
    /// Shown in place of an empty slot.
    pub placeholder: char,
    /// Render empty slots as the placeholder instead of cutting the text off.
    pub show_empty_slots: bool,
    /// Hide leading hardcoded slots until the user types something.
    pub hide_hardcoded_head: bool,
    /// Refuse insertion when every slot from the caret onward is filled.
    pub forbid_input_when_filled: bool,
}

impl Default for MaskOptions {
    fn default() -> Self {
        Self {
            placeholder: PLACEHOLDER_DEFAULT,
            show_empty_slots: false,
            hide_hardcoded_head: false,
            forbid_input_when_filled: false,
        }
    }
}

/// Outcome of scanning forward for a slot that accepts a character.
#[derive(Debug)]
struct Seek {
    offset: usize,
    skipped_input: bool,
    found: Option<SlotId>,
}

/// Editable masked text.
#[derive(Clone, Debug)]
pub struct Mask {
    chain: SlotChain,
    terminated: bool,
    options: MaskOptions,
    show_hardcoded_tail: bool,
}

impl Mask {
    /// Create a mask over copies of `slots`.
    ///
    /// An empty slot list is allowed and yields a mask that ignores input.
    #[must_use]
    pub fn new(slots: &[Slot], terminated: bool) -> Self {
        let mut mask = Self {
            chain: SlotChain::from_slots(slots),
            terminated,
            options: MaskOptions::default(),
            show_hardcoded_tail: true,
        };
        if !terminated && mask.chain.len() == 1 {
            mask.extend_tail(1);
        }
        mask
    }

    /// Fixed-length mask.
    #[must_use]
    pub fn terminated(slots: &[Slot]) -> Self {
        Self::new(slots, true)
    }

    /// Mask that grows while input arrives.
    #[must_use]
    pub fn non_terminated(slots: &[Slot]) -> Self {
        Self::new(slots, false)
    }

    /// Copy of `other` with a different termination.
    #[must_use]
    pub fn with_terminated(other: &Self, terminated: bool) -> Self {
        let mut mask = Self::new(&other.chain.to_vec(), terminated);
        mask.options = other.options;
        mask.show_hardcoded_tail = other.show_hardcoded_tail;
        mask
    }

    /// Apply every option at once.
    #[must_use]
    pub fn with_options(mut self, options: MaskOptions) -> Self {
        self.set_placeholder(options.placeholder);
        self.set_showing_empty_slots(options.show_empty_slots);
        self.set_hide_hardcoded_head(options.hide_hardcoded_head);
        self.set_forbid_input_when_filled(options.forbid_input_when_filled);
        self
    }

    // ------------------------------------------------------------------
    // Edits
    // ------------------------------------------------------------------

    /// Insert `text` at `position`, moving the caret past trailing literals.
    pub fn insert_at(&mut self, position: usize, text: &str) -> usize {
        self.insert_at_with(position, text, true)
    }

    /// Insert `text` at the start of the mask.
    pub fn insert_front(&mut self, text: &str) -> usize {
        self.insert_at(0, text)
    }

    /// Insert `text` at `position` and return the new caret.
    ///
    /// Each character goes to the first slot at or after the caret that can
    /// take it. Hardcoded slots are stepped over freely. Stepping over an
    /// empty input slot is only allowed while empty slots are shown; without
    /// that, the rest of `text` is dropped.
    ///
    /// With `caret_after_trailing_hardcoded`, a caret that ends on a run of
    /// hardcoded slots is moved past the run.
    pub fn insert_at_with(
        &mut self,
        position: usize,
        text: &str,
        caret_after_trailing_hardcoded: bool,
    ) -> usize {
        if text.is_empty() || position >= self.chain.len() {
            return position;
        }

        self.show_hardcoded_tail = true;

        let mut caret = position;
        let mut candidate = self.chain.id_at(position);

        if self.options.forbid_input_when_filled
            && candidate.is_some_and(|id| self.filled_from(id))
        {
            debug!(position, "mask filled, input refused");
            return position;
        }

        let mut pending: VecDeque<char> = text.chars().collect();
        while let Some(ch) = pending.pop_front() {
            let seek = self.seek_slot_for(candidate, ch);
            if !self.options.show_empty_slots && seek.skipped_input {
                debug!(%ch, caret, dropped = pending.len() + 1, "input would leave a gap");
                break;
            }
            let Some(target) = seek.found else {
                debug!(%ch, caret, "no slot accepts input");
                continue;
            };

            caret += seek.offset;
            caret += self.chain.set_value_by_id(target, Some(ch), seek.offset > 0);
            candidate = self.chain.id_at(caret);

            if !self.terminated && self.empty_slots_on_tail() == 0 {
                let needed = self.chain.last().map_or(0, |last| {
                    last.validators().count_valid(pending.iter().copied())
                });
                self.extend_tail(needed + 1);
                candidate = self.chain.id_at(caret);
            }
        }

        if caret_after_trailing_hardcoded {
            if let Some(run) = candidate.and_then(|id| self.chain.hardcoded_run_len_from(id)) {
                caret += run;
            }
        }

        // Growth is sized for the whole input; drop what a cut-off input left unused.
        self.trim_tail();
        caret = caret.min(self.chain.len());

        self.show_hardcoded_tail = self
            .chain
            .id_at(caret)
            .is_none_or(|id| !self.chain.any_input_to_right_from(id));

        trace!(position, len = text.chars().count(), caret, "insert");
        caret
    }

    /// Delete `count` characters backwards, ending at `position`.
    ///
    /// A hardcoded slot is removed only when it is the single character
    /// being deleted, which deletes the input before it.
    pub fn remove_backwards(&mut self, position: usize, count: usize) -> usize {
        self.remove_backwards_inner(position, count, true)
    }

    /// Delete `count` characters backwards, never touching hardcoded slots.
    pub fn remove_backwards_without_hardcoded(&mut self, position: usize, count: usize) -> usize {
        self.remove_backwards_inner(position, count, false)
    }

    fn remove_backwards_inner(&mut self, position: usize, count: usize, remove_hardcoded: bool) -> usize {
        let len = self.chain.len();
        let mut caret = isize::try_from(position).unwrap_or(isize::MAX);
        let mut steps = 0;

        // Steps past the end touch nothing.
        if position >= len {
            let idle = (position - len + 1).min(count);
            caret = caret.saturating_sub_unsigned(idle);
            steps = idle;
        }

        while steps < count && caret >= 0 {
            if let Some(id) = self.id_at_signed(caret) {
                let slot = self.chain.slot(id);
                if !slot.is_hardcoded() || (remove_hardcoded && count == 1) {
                    caret = caret.saturating_add_unsigned(self.chain.set_value_by_id(id, None, false));
                }
            }
            caret -= 1;
            steps += 1;
        }
        caret = caret.saturating_sub_unsigned(count - steps).saturating_add(1);

        self.trim_tail();

        // Step back over a hardcoded run the caret would otherwise sit after.
        let mut probe = caret;
        loop {
            probe -= 1;
            let hardcoded = self
                .id_at_signed(probe)
                .is_some_and(|id| self.chain.slot(id).is_hardcoded());
            if !(hardcoded && probe > 0) {
                break;
            }
        }

        self.show_hardcoded_tail = probe <= 0 && !self.options.hide_hardcoded_head;
        if probe > 0 {
            caret = probe + 1;
        }

        let caret = usize::try_from(caret)
            .ok()
            .filter(|&c| c <= self.chain.len())
            .unwrap_or(0);
        trace!(position, count, remove_hardcoded, caret, "remove");
        caret
    }

    /// Empty every input slot and shrink an open-ended mask back.
    pub fn clear(&mut self) {
        self.chain.clear();
        self.trim_tail();
        trace!("clear");
    }

    // ------------------------------------------------------------------
    // Rendering
    // ------------------------------------------------------------------

    /// Text without decoration slots.
    #[must_use]
    pub fn to_unformatted_string(&self) -> String {
        self.render(false)
    }

    fn render(&self, with_decoration: bool) -> String {
        let start = if self.options.hide_hardcoded_head
            && !self.options.show_empty_slots
            && !self.has_user_input()
        {
            self.first_input_slot()
        } else {
            self.chain.first_id()
        };

        let mut out = String::with_capacity(self.chain.len());
        let mut cursor = start;
        while let Some(id) = cursor {
            let slot = self.chain.slot(id);
            cursor = self.chain.next(id);
            if !with_decoration && slot.has_tag(SlotTag::DECORATION) {
                continue;
            }

            let input_ahead = self.chain.any_input_to_right_from(id);
            if !input_ahead
                && !self.options.show_empty_slots
                && !(self.show_hardcoded_tail && slot.is_hardcoded())
            {
                break;
            }

            match slot.value() {
                Some(ch) => out.push(ch),
                None if self.options.show_empty_slots || input_ahead => {
                    out.push(self.options.placeholder);
                }
                None => break,
            }
        }
        out
    }

    // ------------------------------------------------------------------
    // Queries
    // ------------------------------------------------------------------

    /// True iff every slot except extension slots is hardcoded or holds a value.
    #[must_use]
    pub fn filled(&self) -> bool {
        self.chain.first_id().is_some_and(|id| self.filled_from(id))
    }

    /// True iff some input slot holds a value.
    #[must_use]
    pub fn has_user_input(&self) -> bool {
        self.chain
            .first_id()
            .is_some_and(|id| self.chain.any_input_to_right_from(id))
    }

    /// Number of slots.
    #[must_use]
    pub fn size(&self) -> usize {
        self.chain.len()
    }

    /// Index of the first empty slot, or the size if none is empty.
    #[must_use]
    pub fn initial_input_position(&self) -> usize {
        self.chain
            .iter()
            .position(|slot| slot.value().is_none())
            .unwrap_or(self.chain.len())
    }

    /// Map a caret in the formatted text to the same place in the
    /// unformatted text.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `position` is greater than [`size`](Self::size).
    pub fn find_cursor_position_in_unformatted_string(&self, position: usize) -> Result<usize> {
        if position == 0 {
            return Ok(0);
        }
        let len = self.chain.len();
        if position > len {
            return Err(Error::OutOfRange { index: position, len });
        }

        let mut cursor = if position == len {
            self.chain.last_id()
        } else {
            self.chain.id_at(position)
        };
        let mut unformatted = position;
        while let Some(id) = cursor {
            if self.chain.slot(id).has_tag(SlotTag::DECORATION) {
                unformatted = unformatted.saturating_sub(1);
            }
            cursor = self.chain.prev(id);
        }
        Ok(unformatted)
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Slots in order.
    pub fn iter(&self) -> chain::Iter<'_> {
        self.chain.iter()
    }

    /// Read-only view for observers.
    #[must_use]
    pub fn snapshot(&self) -> MaskSnapshot<'_> {
        MaskSnapshot::new(self)
    }

    #[must_use]
    pub fn options(&self) -> MaskOptions {
        self.options
    }

    #[must_use]
    pub fn placeholder(&self) -> char {
        self.options.placeholder
    }

    pub fn set_placeholder(&mut self, placeholder: char) {
        self.options.placeholder = placeholder;
    }

    #[must_use]
    pub fn is_showing_empty_slots(&self) -> bool {
        self.options.show_empty_slots
    }

    pub fn set_showing_empty_slots(&mut self, show: bool) {
        self.options.show_empty_slots = show;
    }

    #[must_use]
    pub fn is_hide_hardcoded_head(&self) -> bool {
        self.options.hide_hardcoded_head
    }

    /// Hide leading hardcoded slots until input arrives.
    ///
    /// Takes effect on the rendered text right away only while the mask has
    /// no user input.
    pub fn set_hide_hardcoded_head(&mut self, hide: bool) {
        self.options.hide_hardcoded_head = hide;
        if !self.has_user_input() {
            self.show_hardcoded_tail = !hide;
        }
    }

    #[must_use]
    pub fn is_forbid_input_when_filled(&self) -> bool {
        self.options.forbid_input_when_filled
    }

    pub fn set_forbid_input_when_filled(&mut self, forbid: bool) {
        self.options.forbid_input_when_filled = forbid;
    }

    // ------------------------------------------------------------------
    // Internals
    // ------------------------------------------------------------------

    fn id_at_signed(&self, index: isize) -> Option<SlotId> {
        usize::try_from(index).ok().and_then(|i| self.chain.id_at(i))
    }

    fn first_input_slot(&self) -> Option<SlotId> {
        let mut cursor = self.chain.first_id();
        while let Some(id) = cursor {
            if !self.chain.slot(id).is_hardcoded() {
                return Some(id);
            }
            cursor = self.chain.next(id);
        }
        None
    }

    fn filled_from(&self, id: SlotId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            let slot = self.chain.slot(current);
            if !slot.has_tag(SlotTag::EXTENSION) && !slot.is_hardcoded() && slot.value().is_none() {
                return false;
            }
            cursor = self.chain.next(current);
        }
        true
    }

    fn seek_slot_for(&self, start: Option<SlotId>, ch: char) -> Seek {
        let mut offset = 0;
        let mut skipped_input = false;
        let mut cursor = start;
        while let Some(id) = cursor {
            let slot = self.chain.slot(id);
            if slot.can_accept_here(ch) {
                return Seek {
                    offset,
                    skipped_input,
                    found: Some(id),
                };
            }
            if !slot.is_hardcoded() {
                skipped_input = true;
            }
            cursor = self.chain.next(id);
            offset += 1;
        }
        Seek {
            offset,
            skipped_input,
            found: None,
        }
    }

    fn empty_slots_on_tail(&self) -> usize {
        let mut count = 0;
        let mut cursor = self.chain.last_id();
        while let Some(id) = cursor {
            if self.chain.slot(id).value().is_some() {
                break;
            }
            count += 1;
            cursor = self.chain.prev(id);
        }
        count
    }

    fn extend_tail(&mut self, count: usize) {
        if self.terminated || count == 0 {
            return;
        }
        let Some(last) = self.chain.last() else {
            return;
        };
        let mut template = last.clone();
        template.store(None);
        template.add_tag(SlotTag::EXTENSION);
        for _ in 0..count {
            self.chain.push(template.clone());
        }
        debug!(count, size = self.chain.len(), "tail extended");
    }

    fn trim_tail(&mut self) {
        if self.terminated {
            return;
        }
        let before = self.chain.len();
        while self.chain.len() >= 2 && self.tail_pair_disposable() {
            let last = self.chain.len() - 1;
            if self.chain.remove_at(last).is_err() {
                break;
            }
        }
        if self.chain.len() != before {
            debug!(removed = before - self.chain.len(), size = self.chain.len(), "tail trimmed");
        }
    }

    fn tail_pair_disposable(&self) -> bool {
        let len = self.chain.len();
        let disposable = |index: usize| {
            self.chain
                .get(index)
                .is_some_and(|slot| slot.has_tag(SlotTag::EXTENSION) && slot.value().is_none())
        };
        disposable(len - 1) && disposable(len - 2)
    }
}

impl fmt::Display for Mask {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(true))
    }
}

impl<'a> IntoIterator for &'a Mask {
    type Item = &'a Slot;
    type IntoIter = chain::Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
