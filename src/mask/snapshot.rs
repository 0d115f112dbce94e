//! Read-only view of a mask.

use std::fmt;

use super::{Mask, MaskOptions};
use crate::chain;
use crate::error::Result;

/// Borrowed, query-only view of a [`Mask`].
///
/// Hand this to observers that must not edit. It forwards every query and
/// has no mutators; the borrow keeps the mask itself from changing while the
/// snapshot is alive.
#[derive(Clone, Copy, Debug)]
pub struct MaskSnapshot<'a> {
    mask: &'a Mask,
}

impl<'a> MaskSnapshot<'a> {
    pub(crate) fn new(mask: &'a Mask) -> Self {
        Self { mask }
    }

    #[must_use]
    pub fn to_unformatted_string(&self) -> String {
        self.mask.to_unformatted_string()
    }

    #[must_use]
    pub fn filled(&self) -> bool {
        self.mask.filled()
    }

    #[must_use]
    pub fn has_user_input(&self) -> bool {
        self.mask.has_user_input()
    }

    #[must_use]
    pub fn size(&self) -> usize {
        self.mask.size()
    }

    #[must_use]
    pub fn initial_input_position(&self) -> usize {
        self.mask.initial_input_position()
    }

    pub fn find_cursor_position_in_unformatted_string(&self, position: usize) -> Result<usize> {
        self.mask.find_cursor_position_in_unformatted_string(position)
    }

    #[must_use]
    pub fn is_terminated(&self) -> bool {
        self.mask.is_terminated()
    }

    #[must_use]
    pub fn options(&self) -> MaskOptions {
        self.mask.options()
    }

    pub fn iter(&self) -> chain::Iter<'a> {
        self.mask.iter()
    }

    /// Owned copy of the viewed mask, for callers that want to experiment.
    #[must_use]
    pub fn to_mask(&self) -> Mask {
        self.mask.clone()
    }
}

impl fmt::Display for MaskSnapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.mask, f)
    }
}

#[cfg(test)]
mod tests {
    use crate::Mask;
    use crate::slot::predefined::rus_phone_number;

    #[test]
    fn forwards_queries() {
        let mut mask = Mask::terminated(&rus_phone_number());
        mask.insert_front("999");

        let snapshot = mask.snapshot();
        assert_eq!(snapshot.to_string(), "+7 (999) ");
        assert_eq!(snapshot.to_unformatted_string(), "+7999");
        assert_eq!(snapshot.size(), 18);
        assert!(snapshot.has_user_input());
        assert!(!snapshot.filled());
        assert!(snapshot.is_terminated());
        assert_eq!(snapshot.initial_input_position(), 9);
        assert_eq!(snapshot.find_cursor_position_in_unformatted_string(9), Ok(5));
        assert_eq!(snapshot.iter().count(), 18);
    }

    #[test]
    fn to_mask_detaches() {
        let mask = Mask::terminated(&rus_phone_number());
        let mut copy = mask.snapshot().to_mask();
        copy.insert_front("1");
        assert!(!mask.has_user_input());
        assert!(copy.has_user_input());
    }
}
