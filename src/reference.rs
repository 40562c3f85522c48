use std::fmt::{Display, Formatter};

use crate::utils::MyHash;

/// Handle to a formula interned in a [`Logic`][crate::logic::Logic] manager.
///
/// Formulas are hash-consed, so two handles from the same manager are equal
/// exactly when the formulas they point to are structurally equal.
/// Index 0 is never handed out.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Ref(u32);

impl Ref {
    pub(crate) const fn new(index: u32) -> Self {
        Self(index)
    }

    /// Return the index of the formula in the node table.
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// Return the internal representation of the reference.
    pub const fn get(self) -> u32 {
        self.0
    }
}

impl Display for Ref {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "@{}", self.0)
    }
}

impl MyHash for Ref {
    fn hash(&self) -> u64 {
        self.0 as u64
    }
}
