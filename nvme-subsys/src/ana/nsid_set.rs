//! Membership bitset keyed by namespace id.

use crate::identity::{Nsid, MAX_NAMESPACES};
use std::fmt;

/// Set of namespace ids; bit `n` stands for nsid `n`.
#[derive(Clone, Copy, Default, PartialEq, Eq)]
pub struct NsidSet {
    bits: u64,
}

const _: () = assert!(MAX_NAMESPACES < u64::BITS as usize);

impl NsidSet {
    pub const fn new() -> Self {
        Self { bits: 0 }
    }

    /// Returns `false` if `nsid` was already a member.
    pub fn insert(&mut self, nsid: Nsid) -> bool {
        let mask = 1u64 << nsid.get();
        let inserted = self.bits & mask == 0;
        self.bits |= mask;
        inserted
    }

    pub fn contains(&self, nsid: Nsid) -> bool {
        self.bits & (1u64 << nsid.get()) != 0
    }

    pub fn len(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits == 0
    }

    /// Members in ascending nsid order.
    pub fn iter(&self) -> impl Iterator<Item = Nsid> + '_ {
        (1..=MAX_NAMESPACES as u32)
            .filter(move |raw| self.bits & (1u64 << raw) != 0)
            .filter_map(|raw| Nsid::new(raw).ok())
    }
}

impl fmt::Debug for NsidSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter().map(Nsid::get)).finish()
    }
}
