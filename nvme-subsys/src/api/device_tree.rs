//! Device lookup used by the administrative facade.

use crate::error::SubsystemError;
use crate::subsystem::Subsystem;
use std::collections::BTreeMap;
use tracing::debug;

const DEVICE_TREE_TAG: &str = "DeviceTree:";
const DEVICE_TREE_FN_INSERT_TAG: &str = "insert:";

/// Resolves a device id to a live subsystem.
pub trait SubsystemLookup {
    fn find_subsystem_mut(&mut self, id: &str) -> Option<&mut Subsystem>;
}

/// Subsystems of one host, keyed by device id.
#[derive(Debug, Default)]
pub struct DeviceTree {
    subsystems: BTreeMap<String, Subsystem>,
}

impl DeviceTree {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, subsys: Subsystem) -> Result<(), SubsystemError> {
        if self.subsystems.contains_key(subsys.id()) {
            return Err(SubsystemError::DuplicateDevice(subsys.id().to_string()));
        }

        debug!(
            "{DEVICE_TREE_TAG}:{DEVICE_TREE_FN_INSERT_TAG} adding subsystem {:?}",
            subsys.id()
        );
        self.subsystems.insert(subsys.id().to_string(), subsys);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&Subsystem> {
        self.subsystems.get(id)
    }

    pub fn get_mut(&mut self, id: &str) -> Option<&mut Subsystem> {
        self.subsystems.get_mut(id)
    }

    /// Subsystems in device id order.
    pub fn iter(&self) -> impl Iterator<Item = &Subsystem> + '_ {
        self.subsystems.values()
    }

    pub fn len(&self) -> usize {
        self.subsystems.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subsystems.is_empty()
    }
}

impl SubsystemLookup for DeviceTree {
    fn find_subsystem_mut(&mut self, id: &str) -> Option<&mut Subsystem> {
        self.get_mut(id)
    }
}

#[cfg(test)]
mod tests {
    use super::{DeviceTree, SubsystemLookup};
    use crate::error::SubsystemError;
    use crate::subsystem::{Subsystem, SubsystemParams};

    #[test]
    fn insert_rejects_duplicate_device_id() {
        let mut devices = DeviceTree::new();
        devices
            .insert(Subsystem::realize("sub0", SubsystemParams::default()))
            .expect("first insert");

        assert_eq!(
            devices.insert(Subsystem::realize("sub0", SubsystemParams { ana: true })),
            Err(SubsystemError::DuplicateDevice("sub0".to_string()))
        );
        assert_eq!(devices.len(), 1);
        assert!(!devices.get("sub0").expect("present").ana_enabled());
    }

    #[test]
    fn lookup_finds_only_known_ids() {
        let mut devices = DeviceTree::new();
        assert!(devices.is_empty());
        for id in ["sub1", "sub0"] {
            devices
                .insert(Subsystem::realize(id, SubsystemParams::default()))
                .expect("insert");
        }

        assert!(devices.find_subsystem_mut("sub1").is_some());
        assert!(devices.find_subsystem_mut("sub2").is_none());
        assert_eq!(
            devices.iter().map(Subsystem::id).collect::<Vec<_>>(),
            vec!["sub0", "sub1"]
        );
    }
}
