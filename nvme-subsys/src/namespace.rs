//! Namespaces as registered into a subsystem.

use crate::error::SubsystemError;
use crate::identity::{AnaGroupId, Nsid};
use serde::Deserialize;
use std::sync::OnceLock;

/// User-facing namespace properties.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
pub struct NamespaceParams {
    pub nsid: u32,
    /// 0 keeps the namespace out of ANA classification.
    #[serde(default)]
    pub anagrpid: u32,
}

#[derive(Debug)]
pub struct Namespace {
    nsid: Nsid,
    anagrpid: Option<AnaGroupId>,
    ana: OnceLock<AnaGroupId>,
}

impl Namespace {
    pub fn new(params: NamespaceParams) -> Result<Self, SubsystemError> {
        let nsid = Nsid::new(params.nsid)?;
        let anagrpid = match params.anagrpid {
            0 => None,
            raw => Some(AnaGroupId::new(raw)?),
        };

        Ok(Self {
            nsid,
            anagrpid,
            ana: OnceLock::new(),
        })
    }

    pub fn nsid(&self) -> Nsid {
        self.nsid
    }

    /// The group this namespace asks to join.
    pub fn anagrpid(&self) -> Option<AnaGroupId> {
        self.anagrpid
    }

    /// The group this namespace has joined, set once registration completes.
    pub fn ana_group(&self) -> Option<AnaGroupId> {
        self.ana.get().copied()
    }

    pub(crate) fn attach_ana_group(&self, grpid: AnaGroupId) {
        // Only ever called with `self.anagrpid`, so a second set is a no-op.
        let _ = self.ana.set(grpid);
    }
}
