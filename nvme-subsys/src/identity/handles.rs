//! Range-checked identifiers for controllers, namespaces and ANA groups.

use crate::ana::MAX_ANA_GROUPS;
use crate::error::SubsystemError;
use crate::identity::{MAX_CONTROLLERS, MAX_NAMESPACES};
use std::fmt;

/// Controller id, equal to the controller's slot index in its subsystem.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct CntlId(u16);

impl CntlId {
    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < MAX_CONTROLLERS);
        Self(index as u16)
    }

    pub fn get(self) -> u16 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl From<CntlId> for u16 {
    fn from(cntlid: CntlId) -> Self {
        cntlid.0
    }
}

impl fmt::Display for CntlId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Namespace id in `1..=MAX_NAMESPACES`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Nsid(u32);

impl Nsid {
    pub fn new(raw: u32) -> Result<Self, SubsystemError> {
        if raw == 0 || raw as usize > MAX_NAMESPACES {
            return Err(SubsystemError::InvalidNamespaceId(raw));
        }
        Ok(Self(raw))
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Slot index in the namespace table, which is the nsid itself.
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

impl TryFrom<u32> for Nsid {
    type Error = SubsystemError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for Nsid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// ANA group id in `1..=MAX_ANA_GROUPS`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AnaGroupId(u32);

impl AnaGroupId {
    pub fn new(raw: u32) -> Result<Self, SubsystemError> {
        if raw == 0 || raw as usize > MAX_ANA_GROUPS {
            return Err(SubsystemError::InvalidGroupId(raw));
        }
        Ok(Self(raw))
    }

    pub(crate) fn from_index(index: usize) -> Self {
        debug_assert!(index < MAX_ANA_GROUPS);
        Self(index as u32 + 1)
    }

    pub fn get(self) -> u32 {
        self.0
    }

    /// Position in the group table; group 1 lives at index 0.
    pub(crate) fn index(self) -> usize {
        self.0 as usize - 1
    }
}

impl TryFrom<u32> for AnaGroupId {
    type Error = SubsystemError;

    fn try_from(raw: u32) -> Result<Self, Self::Error> {
        Self::new(raw)
    }
}

impl fmt::Display for AnaGroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
