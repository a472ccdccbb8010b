//! Operator-driven ANA state injection.

use crate::api::SubsystemLookup;
use crate::ana::AnaState;
use crate::error::SubsystemError;
use crate::identity::AnaGroupId;
use crate::observability::events;
use crate::subsystem::DEVICE_TYPE;
use tracing::{info, warn};

const COMPONENT: &str = "ana_inject";

/// Outcome of a successful injection.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AnaInjection {
    pub grpid: AnaGroupId,
    pub state: AnaState,
    /// `false` when the group was already in `state`.
    pub changed: bool,
}

/// Looks up subsystem `id`, validates `grpid` and `state`, then applies the
/// state. Checks run in that order and the first failure wins.
pub fn inject_ana_state<L>(
    lookup: &mut L,
    id: &str,
    grpid: u32,
    state: &str,
) -> Result<AnaInjection, SubsystemError>
where
    L: SubsystemLookup + ?Sized,
{
    let subsys = lookup
        .find_subsystem_mut(id)
        .ok_or_else(|| SubsystemError::NotFound(id.to_string()))?;
    let grpid = AnaGroupId::new(grpid)?;
    let state = AnaState::from_name(state)?;

    let changed = subsys.set_ana_state(grpid, state);
    info!(
        event = events::ANA_INJECT_APPLIED,
        component = COMPONENT,
        subsys = id,
        grpid = grpid.get(),
        %state,
        changed,
        "ANA state injected"
    );

    Ok(AnaInjection {
        grpid,
        state,
        changed,
    })
}

/// Monitor flavour of [`inject_ana_state`]: always answers with one line.
pub fn hmp_inject_ana_state<L>(lookup: &mut L, id: &str, grpid: u32, state: &str) -> String
where
    L: SubsystemLookup + ?Sized,
{
    match inject_ana_state(lookup, id, grpid, state) {
        Ok(injection) => format!(
            "{DEVICE_TYPE}({id}): ANA state {}({}) injected",
            injection.state,
            injection.state.value()
        ),
        Err(err) => {
            warn!(
                event = events::ANA_INJECT_REJECTED,
                component = COMPONENT,
                subsys = id,
                grpid,
                state,
                %err,
                "ANA state injection rejected"
            );
            format!("{DEVICE_TYPE}({id}): {}", monitor_reason(&err))
        }
    }
}

fn monitor_reason(err: &SubsystemError) -> String {
    match err {
        SubsystemError::NotFound(_) => "invalid device id".to_string(),
        SubsystemError::InvalidGroupId(0) => "grpid should not be 0".to_string(),
        SubsystemError::InvalidGroupId(raw) => format!("grpid {raw} out of range"),
        SubsystemError::UnrecognizedState(name) => format!("invalid state {name}"),
        other => other.to_string(),
    }
}
