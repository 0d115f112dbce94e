//! Arena-backed doubly linked chain of slots.
//!
//! [`SlotChain`] owns every [`Slot`] of a mask. Slots live in a flat arena and
//! link to their neighbors by index, so inserting or removing a slot only
//! relinks its two neighbors. Freed arena entries go on a free list and are
//! reused by later insertions.
//!
//! The neighbor-aware edit algorithms live here too:
//!
//! - [`set_value`](SlotChain::set_value) with a character places it, pushing
//!   values to the right as the slot rules demand, and returns the caret
//!   displacement.
//! - [`set_value`](SlotChain::set_value) with `None` deletes, pulling the
//!   remaining input one input slot to the left.
//!
//! Both run as explicit loops, so stack depth does not grow with mask length.
//!
//! # Invariants
//!
//! - `len` equals the number of slots reachable from `first` through `next`
//! - `first` has no `prev`, `last` has no `next`, the chain is acyclic
//! - a hardcoded slot's value never changes through editing
//!
//! # Examples
//!
//! ```
//! use slotmask::chain::SlotChain;
//! use slotmask::slot::predefined::{digit, hardcoded};
//!
//! let mut chain = SlotChain::from_slots(&[digit(), hardcoded('-'), digit()]);
//! assert_eq!(chain.set_value(0, Some('1'), false), Ok(1));
//! assert_eq!(chain.hardcoded_run_len(1), Some(1));
//! assert!(chain.any_input_to_left(2));
//! ```

use crate::error::{Error, Result};
use crate::slot::{Slot, SlotRules};

/// Arena handle of a slot. Valid until that slot is removed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct SlotId(usize);

#[derive(Debug, Default)]
struct Node {
    slot: Slot,
    prev: Option<SlotId>,
    next: Option<SlotId>,
}

/// A pending placement of `value` into the slot `at`.
#[derive(Debug)]
struct Push {
    at: SlotId,
    /// Caret displacement accumulated before reaching `at`.
    offset: usize,
    value: char,
    from_left: bool,
    /// Whether this push continues the input the caller is placing, as
    /// opposed to a value shifted out of the way.
    tracked: bool,
}

/// Ordered, owning sequence of slots.
#[derive(Debug, Default)]
pub struct SlotChain {
    nodes: Vec<Node>,
    /// Stack of arena indices available for reuse.
    free_list: Vec<SlotId>,
    first: Option<SlotId>,
    last: Option<SlotId>,
    len: usize,
}

impl SlotChain {
    /// Create an empty chain.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a chain holding copies of `slots`.
    #[must_use]
    pub fn from_slots(slots: &[Slot]) -> Self {
        slots.iter().cloned().collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Slot at `index`, if in range.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Slot> {
        self.id_at(index).map(|id| self.slot(id))
    }

    #[must_use]
    pub fn first(&self) -> Option<&Slot> {
        self.first.map(|id| self.slot(id))
    }

    #[must_use]
    pub fn last(&self) -> Option<&Slot> {
        self.last.map(|id| self.slot(id))
    }

    /// Iterate slots from first to last.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            chain: self,
            next: self.first,
            remaining: self.len,
        }
    }

    /// Copy the slots out in order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<Slot> {
        self.iter().cloned().collect()
    }

    /// Insert a copy of `slot` so that it ends up at `index`.
    ///
    /// `index == len()` appends.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index > len()`.
    pub fn insert_at(&mut self, index: usize, slot: &Slot) -> Result<()> {
        if index > self.len {
            return Err(Error::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.link_at(index, slot.clone());
        Ok(())
    }

    /// Append `slot` at the end.
    pub fn push(&mut self, slot: Slot) {
        self.link_at(self.len, slot);
    }

    /// Remove and return the slot at `index`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= len()`.
    pub fn remove_at(&mut self, index: usize) -> Result<Slot> {
        let id = self.id_at(index).ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })?;
        Ok(self.unlink(id))
    }

    /// Empty every slot.
    ///
    /// Runs from the tail so that each deletion pulls from slots that are
    /// already empty.
    pub fn clear(&mut self) {
        let mut cursor = self.last;
        while let Some(id) = cursor {
            self.set_value_by_id(id, None, false);
            cursor = self.prev(id);
        }
    }

    /// Set or delete the value of the slot at `index`.
    ///
    /// Returns the caret displacement this edit causes: for a placed
    /// character, how far the caret moves right; for a deletion, `1` if the
    /// slot forbids moving the caret left, else `0`.
    ///
    /// # Errors
    ///
    /// [`Error::OutOfRange`] if `index >= len()`.
    pub fn set_value(&mut self, index: usize, value: Option<char>, from_left: bool) -> Result<usize> {
        let id = self.id_at(index).ok_or(Error::OutOfRange {
            index,
            len: self.len,
        })?;
        Ok(self.set_value_by_id(id, value, from_left))
    }

    /// Length of the hardcoded run starting at `index`, or `None` if that
    /// slot is not hardcoded.
    #[must_use]
    pub fn hardcoded_run_len(&self, index: usize) -> Option<usize> {
        self.id_at(index).and_then(|id| self.hardcoded_run_len_from(id))
    }

    /// True iff a slot at `index` or after it holds user input.
    #[must_use]
    pub fn any_input_to_right(&self, index: usize) -> bool {
        self.id_at(index)
            .is_some_and(|id| self.any_input_to_right_from(id))
    }

    /// True iff a slot at `index` or before it holds user input.
    #[must_use]
    pub fn any_input_to_left(&self, index: usize) -> bool {
        self.id_at(index)
            .is_some_and(|id| self.any_input_to_left_from(id))
    }

    // ------------------------------------------------------------------
    // Arena navigation
    // ------------------------------------------------------------------

    /// Handle of the slot at `index`, walking from the nearer end.
    pub(crate) fn id_at(&self, index: usize) -> Option<SlotId> {
        if index >= self.len {
            return None;
        }
        if index < self.len / 2 {
            let mut id = self.first?;
            for _ in 0..index {
                id = self.next(id)?;
            }
            Some(id)
        } else {
            let mut id = self.last?;
            for _ in index + 1..self.len {
                id = self.prev(id)?;
            }
            Some(id)
        }
    }

    pub(crate) fn first_id(&self) -> Option<SlotId> {
        self.first
    }

    pub(crate) fn last_id(&self) -> Option<SlotId> {
        self.last
    }

    pub(crate) fn next(&self, id: SlotId) -> Option<SlotId> {
        self.nodes[id.0].next
    }

    pub(crate) fn prev(&self, id: SlotId) -> Option<SlotId> {
        self.nodes[id.0].prev
    }

    pub(crate) fn slot(&self, id: SlotId) -> &Slot {
        &self.nodes[id.0].slot
    }

    pub(crate) fn slot_mut(&mut self, id: SlotId) -> &mut Slot {
        &mut self.nodes[id.0].slot
    }

    fn alloc(&mut self, slot: Slot) -> SlotId {
        let node = Node {
            slot,
            prev: None,
            next: None,
        };
        if let Some(id) = self.free_list.pop() {
            self.nodes[id.0] = node;
            id
        } else {
            self.nodes.push(node);
            SlotId(self.nodes.len() - 1)
        }
    }

    // Caller guarantees `index <= len`.
    fn link_at(&mut self, index: usize, slot: Slot) {
        let right = self.id_at(index);
        let left = match right {
            Some(r) => self.prev(r),
            None => self.last,
        };
        let id = self.alloc(slot);
        self.nodes[id.0].prev = left;
        self.nodes[id.0].next = right;

        match left {
            Some(l) => self.nodes[l.0].next = Some(id),
            None => self.first = Some(id),
        }
        match right {
            Some(r) => self.nodes[r.0].prev = Some(id),
            None => self.last = Some(id),
        }
        self.len += 1;
    }

    fn unlink(&mut self, id: SlotId) -> Slot {
        let left = self.prev(id);
        let right = self.next(id);

        match left {
            Some(l) => self.nodes[l.0].next = right,
            None => self.first = right,
        }
        match right {
            Some(r) => self.nodes[r.0].prev = left,
            None => self.last = left,
        }
        self.len -= 1;

        let node = std::mem::take(&mut self.nodes[id.0]);
        self.free_list.push(id);
        node.slot
    }

    // ------------------------------------------------------------------
    // Edit algorithms
    // ------------------------------------------------------------------

    /// Place `value` into the slot `id`, or delete its value when `None`.
    ///
    /// Placement returns how far the caret moves. Input arriving at a
    /// hardcoded slot that already shows the same literal just advances the
    /// caret. A slot that moves input (or refuses a push from the left)
    /// passes the value on to the next slot. A slot that moves current first
    /// shifts its old value one slot right, then takes the new one.
    ///
    /// Deletion returns `1` if the slot forbids moving the caret left, else
    /// `0`.
    pub(crate) fn set_value_by_id(&mut self, id: SlotId, value: Option<char>, from_left: bool) -> usize {
        match value {
            Some(ch) => self.place(id, ch, from_left),
            None => {
                self.remove_value(id);
                self.slot(id).retreat()
            }
        }
    }

    fn place(&mut self, id: SlotId, value: char, from_left: bool) -> usize {
        let mut caret = 0;
        let mut work = vec![Push {
            at: id,
            offset: 0,
            value,
            from_left,
            tracked: true,
        }];

        while let Some(push) = work.pop() {
            let next = self.next(push.at);
            let slot = self.slot_mut(push.at);
            let value = slot.interpret(push.value);
            let rules = slot.rules();
            let refuses_left =
                push.from_left && rules.contains(SlotRules::FORBID_LEFT_OVERWRITE);

            if slot.is_hardcoded() && !refuses_left && slot.value() == Some(value) {
                if push.tracked {
                    caret = slot.advance(push.offset);
                }
                continue;
            }

            let shifted = slot.value().filter(|_| rules.moves_current());
            let shift = shifted.zip(next).map(|(current, next)| Push {
                at: next,
                offset: 0,
                value: current,
                from_left: true,
                tracked: false,
            });

            if rules.contains(SlotRules::INPUT_MOVES_INPUT) || refuses_left {
                // The new value travels on untouched; a shifted current value
                // follows once it has settled.
                work.extend(shift);
                match next {
                    Some(next) => work.push(Push {
                        at: next,
                        offset: push.offset + 1,
                        value,
                        from_left: true,
                        tracked: push.tracked,
                    }),
                    None if push.tracked => caret = 0,
                    None => {}
                }
            } else {
                slot.store(Some(value));
                if push.tracked {
                    caret = slot.advance(push.offset);
                }
                work.extend(shift);
            }
        }

        caret
    }

    fn remove_value(&mut self, id: SlotId) {
        // Deleting a hardcoded slot deletes from the nearest input slot on its left.
        let mut target = Some(id);
        while let Some(t) = target {
            if !self.slot(t).is_hardcoded() {
                break;
            }
            target = self.prev(t);
        }
        let Some(mut receiver) = target else {
            return;
        };

        loop {
            let mut source = self.next(receiver);
            while let Some(s) = source {
                if !self.slot(s).is_hardcoded() {
                    break;
                }
                source = self.next(s);
            }

            let Some(source) = source else {
                self.slot_mut(receiver).store(None);
                return;
            };

            let pulled = self.slot(source).value();
            self.slot_mut(receiver).store(pulled);
            receiver = source;
        }
    }

    pub(crate) fn hardcoded_run_len_from(&self, id: SlotId) -> Option<usize> {
        if !self.slot(id).is_hardcoded() {
            return None;
        }
        let mut run = 1;
        let mut cursor = self.next(id);
        while let Some(next) = cursor {
            if !self.slot(next).is_hardcoded() {
                break;
            }
            run += 1;
            cursor = self.next(next);
        }
        Some(run)
    }

    pub(crate) fn any_input_to_right_from(&self, id: SlotId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if is_user_input(self.slot(current)) {
                return true;
            }
            cursor = self.next(current);
        }
        false
    }

    pub(crate) fn any_input_to_left_from(&self, id: SlotId) -> bool {
        let mut cursor = Some(id);
        while let Some(current) = cursor {
            if is_user_input(self.slot(current)) {
                return true;
            }
            cursor = self.prev(current);
        }
        false
    }
}

fn is_user_input(slot: &Slot) -> bool {
    slot.value().is_some() && !slot.is_hardcoded()
}

impl Clone for SlotChain {
    // Deep copy that also compacts the arena.
    fn clone(&self) -> Self {
        self.iter().cloned().collect()
    }
}

impl PartialEq for SlotChain {
    fn eq(&self, other: &Self) -> bool {
        self.len == other.len && self.iter().eq(other.iter())
    }
}

impl Eq for SlotChain {}

impl FromIterator<Slot> for SlotChain {
    fn from_iter<I: IntoIterator<Item = Slot>>(iter: I) -> Self {
        let mut chain = Self::new();
        for slot in iter {
            chain.push(slot);
        }
        chain
    }
}

impl<'a> IntoIterator for &'a SlotChain {
    type Item = &'a Slot;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the slots of a [`SlotChain`].
#[derive(Debug)]
pub struct Iter<'a> {
    chain: &'a SlotChain,
    next: Option<SlotId>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a Slot;

    fn next(&mut self) -> Option<Self::Item> {
        let id = self.next?;
        self.next = self.chain.next(id);
        self.remaining -= 1;
        Some(self.chain.slot(id))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::slot::predefined::{any, digit, hardcoded, letter};
    use crate::slot::{Validator, ValidatorSet};

    fn values(chain: &SlotChain) -> String {
        chain.iter().map(|s| s.value().unwrap_or('_')).collect()
    }

    fn filled(template: &str) -> SlotChain {
        template
            .chars()
            .map(|ch| Slot::new(SlotRules::DEFAULT, Some(ch), Validator::Any))
            .collect()
    }

    fn assert_links(chain: &SlotChain) {
        let forward: Vec<_> = {
            let mut ids = Vec::new();
            let mut cursor = chain.first_id();
            while let Some(id) = cursor {
                ids.push(id);
                cursor = chain.next(id);
            }
            ids
        };
        assert_eq!(forward.len(), chain.len());
        let mut backward = Vec::new();
        let mut cursor = chain.last_id();
        while let Some(id) = cursor {
            backward.push(id);
            cursor = chain.prev(id);
        }
        backward.reverse();
        assert_eq!(forward, backward);
        if let Some(first) = chain.first_id() {
            assert!(chain.prev(first).is_none());
        }
        if let Some(last) = chain.last_id() {
            assert!(chain.next(last).is_none());
        }
    }

    #[test]
    fn get_from_both_halves() {
        let chain = filled("abcdefg");
        for (i, ch) in "abcdefg".chars().enumerate() {
            assert_eq!(chain.get(i).and_then(Slot::value), Some(ch));
        }
        assert!(chain.get(7).is_none());
    }

    #[test]
    fn insert_into_empty_sets_both_ends() {
        let mut chain = SlotChain::new();
        chain.insert_at(0, &any()).unwrap();
        assert_eq!(chain.len(), 1);
        assert_eq!(chain.first_id(), chain.last_id());
        assert_links(&chain);
    }

    #[test]
    fn insert_front_middle_tail() {
        let mut chain = filled("bd");
        let a = Slot::new(SlotRules::DEFAULT, Some('a'), Validator::Any);
        let c = Slot::new(SlotRules::DEFAULT, Some('c'), Validator::Any);
        let e = Slot::new(SlotRules::DEFAULT, Some('e'), Validator::Any);
        chain.insert_at(0, &a).unwrap();
        chain.insert_at(2, &c).unwrap();
        chain.insert_at(4, &e).unwrap();
        assert_eq!(values(&chain), "abcde");
        assert_links(&chain);
    }

    #[test]
    fn insert_out_of_range() {
        let mut chain = filled("ab");
        assert_eq!(
            chain.insert_at(3, &any()),
            Err(Error::OutOfRange { index: 3, len: 2 })
        );
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn insert_copies_template() {
        let template = digit();
        let mut chain = SlotChain::new();
        chain.insert_at(0, &template).unwrap();
        chain.set_value(0, Some('5'), false).unwrap();
        assert_eq!(template.value(), None);
    }

    #[test]
    fn remove_relinks_and_reuses_arena() {
        let mut chain = filled("abcde");
        let removed = chain.remove_at(2).unwrap();
        assert_eq!(removed.value(), Some('c'));
        assert_eq!(values(&chain), "abde");
        assert_links(&chain);

        chain.remove_at(0).unwrap();
        chain.remove_at(2).unwrap();
        assert_eq!(values(&chain), "bd");
        assert_links(&chain);

        chain.push(Slot::new(SlotRules::DEFAULT, Some('z'), Validator::Any));
        assert_eq!(values(&chain), "bdz");
        assert_eq!(chain.nodes.len(), 5);
        assert_links(&chain);

        assert!(chain.remove_at(3).is_err());
    }

    #[test]
    fn remove_until_empty() {
        let mut chain = filled("ab");
        chain.remove_at(1).unwrap();
        chain.remove_at(0).unwrap();
        assert!(chain.is_empty());
        assert!(chain.first().is_none());
        assert!(chain.last().is_none());
    }

    #[test]
    fn clone_is_deep_and_equal() {
        let mut chain = filled("abc");
        chain.remove_at(1).unwrap();
        let mut copy = chain.clone();
        assert_eq!(copy, chain);
        copy.set_value(0, Some('x'), false).unwrap();
        assert_ne!(copy, chain);
        assert_eq!(values(&chain), "ac");
    }

    #[test]
    fn set_value_offsets_through_hardcoded() {
        // b: default rules, no validators
        let b = Slot::new(SlotRules::DEFAULT, None, ValidatorSet::new());
        let mut chain = SlotChain::from_slots(&[b.clone()]);
        assert_eq!(chain.set_value(0, Some(' '), false), Ok(1));
        assert_eq!(chain.set_value(0, Some('2'), false), Ok(1));

        chain.push(b);
        assert_eq!(chain.set_value(1, Some('3'), false), Ok(1));

        let a = Slot::new(SlotRules::INPUT_MOVES_INPUT, Some('a'), ValidatorSet::new());
        chain.insert_at(0, &a).unwrap();
        assert_eq!(chain.set_value(0, Some('a'), false), Ok(1));
        assert_eq!(chain.set_value(0, Some('3'), false), Ok(2));
        assert_eq!(values(&chain), "a32");

        chain.insert_at(0, &a).unwrap();
        assert_eq!(chain.set_value(0, Some('a'), false), Ok(1));
        assert_eq!(chain.set_value(0, Some(' '), false), Ok(3));
        assert_eq!(values(&chain), "aa 3");
    }

    #[test]
    fn moves_current_shifts_right() {
        let mut chain = SlotChain::from_slots(&[digit(), digit(), digit()]);
        chain.set_value(0, Some('1'), false).unwrap();
        chain.set_value(1, Some('2'), false).unwrap();
        assert_eq!(chain.set_value(0, Some('0'), false), Ok(1));
        assert_eq!(values(&chain), "012");
        // Last value falls off the end.
        chain.set_value(0, Some('9'), false).unwrap();
        assert_eq!(values(&chain), "901");
    }

    #[test]
    fn replace_overwrites_in_place() {
        let replace = Slot::new(SlotRules::INPUT_REPLACE, Some('1'), Validator::Any);
        let mut chain = SlotChain::from_slots(&[replace.clone(), replace]);
        assert_eq!(chain.set_value(0, Some('9'), false), Ok(1));
        assert_eq!(values(&chain), "91");
    }

    #[test]
    fn shift_skips_hardcoded() {
        let mut chain = SlotChain::from_slots(&[digit(), hardcoded('-'), digit()]);
        chain.set_value(0, Some('1'), false).unwrap();
        chain.set_value(0, Some('2'), false).unwrap();
        assert_eq!(values(&chain), "2-1");
    }

    #[test]
    fn push_past_end_returns_zero() {
        let mut chain = SlotChain::from_slots(&[hardcoded('+')]);
        assert_eq!(chain.set_value(0, Some('1'), false), Ok(0));
        assert_eq!(values(&chain), "+");
    }

    #[test]
    fn forbid_left_overwrite_pushes_matching_char() {
        let strict = hardcoded('5').with_rules(
            SlotRules::INPUT_MOVES_INPUT | SlotRules::FORBID_LEFT_OVERWRITE,
        );
        let mut chain = SlotChain::from_slots(&[strict, digit()]);
        // Typed directly onto the literal: satisfied.
        assert_eq!(chain.set_value(0, Some('5'), false), Ok(1));
        // Arriving from the left: passed on.
        assert_eq!(chain.set_value(0, Some('5'), true), Ok(2));
        assert_eq!(values(&chain), "55");
    }

    #[test]
    fn cursor_move_right_forbidden() {
        let pinned = digit().with_rules(SlotRules::FORBID_CURSOR_MOVE_RIGHT);
        let mut chain = SlotChain::from_slots(&[pinned, digit()]);
        assert_eq!(chain.set_value(0, Some('1'), false), Ok(0));
    }

    #[test]
    fn delete_pulls_from_right() {
        let mut chain = SlotChain::from_slots(&[digit(), hardcoded('-'), digit(), digit()]);
        chain.set_value(0, Some('1'), false).unwrap();
        chain.set_value(2, Some('2'), false).unwrap();
        chain.set_value(3, Some('3'), false).unwrap();
        assert_eq!(values(&chain), "1-23");

        assert_eq!(chain.set_value(0, None, false), Ok(0));
        assert_eq!(values(&chain), "2-3_");
    }

    #[test]
    fn delete_hardcoded_deletes_to_the_left() {
        let mut chain = SlotChain::from_slots(&[digit(), hardcoded('-'), digit()]);
        chain.set_value(0, Some('1'), false).unwrap();
        chain.set_value(2, Some('2'), false).unwrap();
        chain.set_value(1, None, false).unwrap();
        assert_eq!(values(&chain), "2-_");
    }

    #[test]
    fn delete_reports_forbidden_left_move() {
        let pinned = digit().with_rules(SlotRules::FORBID_CURSOR_MOVE_LEFT);
        let mut chain = SlotChain::from_slots(&[pinned]);
        assert_eq!(chain.set_value(0, None, false), Ok(1));
    }

    #[test]
    fn pull_ignores_receiver_validators() {
        let mut chain = SlotChain::from_slots(&[digit(), digit(), letter(), digit()]);
        for (i, ch) in "12a3".chars().enumerate() {
            chain.set_value(i, Some(ch), false).unwrap();
        }
        chain.set_value(0, None, false).unwrap();
        assert_eq!(values(&chain), "2a3_");

        let first = Slot::new(SlotRules::DEFAULT, Some('0'), Validator::Digit);
        let second = Slot::new(SlotRules::DEFAULT, Some('a'), Validator::letter());
        let mut chain = SlotChain::from_slots(&[first, second]);
        chain.set_value(0, None, false).unwrap();
        assert_eq!(chain.get(0).and_then(Slot::value), Some('a'));
        assert_eq!(chain.get(1).and_then(Slot::value), None);
    }

    #[test]
    fn valid_value_pulled_and_removed() {
        let first = Slot::new(SlotRules::DEFAULT, Some('1'), Validator::Digit);
        let second = Slot::new(SlotRules::DEFAULT, Some('2'), Validator::Digit);
        let mut chain = SlotChain::from_slots(&[first, second]);
        chain.set_value(0, None, false).unwrap();
        assert_eq!(chain.get(0).and_then(Slot::value), Some('2'));
        assert_eq!(chain.get(1).and_then(Slot::value), None);
    }

    #[test]
    fn delete_closes_gaps() {
        let mut chain = SlotChain::from_slots(&[letter(), letter(), letter()]);
        chain.set_value(0, Some('a'), false).unwrap();
        chain.set_value(2, Some('c'), false).unwrap();
        chain.set_value(0, None, false).unwrap();
        assert_eq!(values(&chain), "_c_");
    }

    #[test]
    fn clear_empties_input_keeps_literals() {
        let mut chain = SlotChain::from_slots(&[hardcoded('+'), digit(), digit()]);
        chain.set_value(1, Some('1'), false).unwrap();
        chain.set_value(2, Some('2'), false).unwrap();
        chain.clear();
        assert_eq!(values(&chain), "+__");
    }

    #[test]
    fn hardcoded_runs_and_input_scans() {
        let mut chain = SlotChain::from_slots(&[
            hardcoded('+'),
            hardcoded('7'),
            hardcoded(' '),
            digit(),
            hardcoded(')'),
        ]);
        assert_eq!(chain.hardcoded_run_len(0), Some(3));
        assert_eq!(chain.hardcoded_run_len(2), Some(1));
        assert_eq!(chain.hardcoded_run_len(3), None);
        assert_eq!(chain.hardcoded_run_len(4), Some(1));
        assert!(!chain.any_input_to_right(0));

        chain.set_value(3, Some('9'), false).unwrap();
        assert!(chain.any_input_to_right(0));
        assert!(chain.any_input_to_left(4));
        assert!(!chain.any_input_to_left(2));
        assert!(!chain.any_input_to_right(4));
    }

    #[test]
    fn interpreter_applies_to_pushed_values() {
        use crate::slot::ValueInterpreter;
        let seven = hardcoded('7').with_interpreter(ValueInterpreter::replace('8', '7'));
        let mut chain = SlotChain::from_slots(&[seven, digit()]);
        assert_eq!(chain.set_value(0, Some('8'), false), Ok(1));
        assert_eq!(values(&chain), "7_");
    }
}
