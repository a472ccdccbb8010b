//! ANA states and the monitor's state-name table.

use crate::error::SubsystemError;
use std::fmt;
use std::str::FromStr;

/// Accessibility of the paths to a group's namespaces, with its NVMe encoding.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum AnaState {
    Optimized = 0x01,
    NonOptimized = 0x02,
    Inaccessible = 0x03,
    Change = 0x0f,
}

// Index 0 is reserved: it names no state and is never accepted.
const ANA_STATE_NAMES: [(&str, Option<AnaState>); 5] = [
    ("", None),
    ("optimized", Some(AnaState::Optimized)),
    ("non-optimized", Some(AnaState::NonOptimized)),
    ("inaccessible", Some(AnaState::Inaccessible)),
    ("change", Some(AnaState::Change)),
];

impl AnaState {
    pub const ALL: [AnaState; 4] = [
        AnaState::Optimized,
        AnaState::NonOptimized,
        AnaState::Inaccessible,
        AnaState::Change,
    ];

    /// Case-sensitive lookup in the state-name table.
    pub fn from_name(name: &str) -> Result<Self, SubsystemError> {
        ANA_STATE_NAMES
            .iter()
            .find(|(candidate, _)| *candidate == name)
            .and_then(|(_, state)| *state)
            .ok_or_else(|| SubsystemError::UnrecognizedState(name.to_string()))
    }

    pub fn name(self) -> &'static str {
        match self {
            AnaState::Optimized => "optimized",
            AnaState::NonOptimized => "non-optimized",
            AnaState::Inaccessible => "inaccessible",
            AnaState::Change => "change",
        }
    }

    pub const fn value(self) -> u8 {
        self as u8
    }
}

impl FromStr for AnaState {
    type Err = SubsystemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

impl fmt::Display for AnaState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::{AnaState, ANA_STATE_NAMES};
    use crate::error::SubsystemError;

    #[test]
    fn every_state_resolves_from_its_own_name() {
        for state in AnaState::ALL {
            assert_eq!(AnaState::from_name(state.name()), Ok(state));
        }
    }

    #[test]
    fn reserved_entry_is_not_a_state() {
        assert_eq!(ANA_STATE_NAMES[0], ("", None));
        assert_eq!(
            AnaState::from_name(""),
            Err(SubsystemError::UnrecognizedState(String::new()))
        );
    }

    #[test]
    fn lookup_is_case_sensitive_and_exact() {
        assert!(AnaState::from_name("CHANGE").is_err());
        assert!(AnaState::from_name("change ").is_err());
        assert_eq!(
            AnaState::from_name("bogus"),
            Err(SubsystemError::UnrecognizedState("bogus".to_string()))
        );
    }

    #[test]
    fn values_follow_nvme_encoding() {
        assert_eq!(AnaState::Optimized.value(), 0x01);
        assert_eq!(AnaState::NonOptimized.value(), 0x02);
        assert_eq!(AnaState::Inaccessible.value(), 0x03);
        assert_eq!(AnaState::Change.value(), 0x0f);
    }
}
