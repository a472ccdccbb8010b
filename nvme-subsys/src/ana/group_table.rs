//! ANA group records and the per-subsystem group table.

use crate::ana::{AnaState, NsidSet, MAX_ANA_GROUPS};
use crate::identity::{AnaGroupId, Nsid};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnaGroup {
    id: AnaGroupId,
    state: AnaState,
    nsids: NsidSet,
}

impl AnaGroup {
    fn new(id: AnaGroupId) -> Self {
        Self {
            id,
            state: AnaState::Optimized,
            nsids: NsidSet::new(),
        }
    }

    pub fn id(&self) -> AnaGroupId {
        self.id
    }

    pub fn state(&self) -> AnaState {
        self.state
    }

    pub fn members(&self) -> &NsidSet {
        &self.nsids
    }

    pub fn has_ns(&self, nsid: Nsid) -> bool {
        self.nsids.contains(nsid)
    }

    pub fn nr_ns(&self) -> usize {
        self.nsids.len()
    }

    pub(crate) fn register_ns(&mut self, nsid: Nsid) -> bool {
        self.nsids.insert(nsid)
    }

    pub(crate) fn set_state(&mut self, state: AnaState) {
        self.state = state;
    }
}

/// Groups `1..=MAX_ANA_GROUPS`, each stored under its own id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnaGroupTable {
    groups: [AnaGroup; MAX_ANA_GROUPS],
}

impl AnaGroupTable {
    pub fn new() -> Self {
        Self {
            groups: std::array::from_fn(|index| AnaGroup::new(AnaGroupId::from_index(index))),
        }
    }

    /// Puts every group back to `Optimized` with no members.
    pub fn reset(&mut self) {
        for (index, group) in self.groups.iter_mut().enumerate() {
            *group = AnaGroup::new(AnaGroupId::from_index(index));
        }
    }

    pub fn get(&self, id: AnaGroupId) -> &AnaGroup {
        &self.groups[id.index()]
    }

    pub(crate) fn get_mut(&mut self, id: AnaGroupId) -> &mut AnaGroup {
        &mut self.groups[id.index()]
    }

    /// Groups in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = &AnaGroup> + '_ {
        self.groups.iter()
    }
}

impl Default for AnaGroupTable {
    fn default() -> Self {
        Self::new()
    }
}
