//! ANA state transitions and change-notice fan-out.

use crate::ana::{AnaGroupTable, AnaState};
use crate::controller::AsyncEvent;
use crate::identity::{AnaGroupId, CntlId, ControllerTable};
use crate::observability::events;
use tracing::{debug, info, trace};

const COMPONENT: &str = "notification";

/// Moves group `grpid` to `state` and notifies every registered controller.
///
/// Re-applying the current state does nothing. Returns whether the state
/// changed.
pub(crate) fn change_ana_state(
    subsys: &str,
    groups: &mut AnaGroupTable,
    ctrls: &ControllerTable,
    grpid: AnaGroupId,
    state: AnaState,
) -> bool {
    let group = groups.get_mut(grpid);
    let old = group.state();

    if state == old {
        trace!(
            event = events::ANA_STATE_UNCHANGED,
            component = COMPONENT,
            subsys,
            grpid = grpid.get(),
            %state,
            "ANA state already applied"
        );
        return false;
    }

    group.set_state(state);
    info!(
        event = events::ANA_STATE_CHANGED,
        component = COMPONENT,
        subsys,
        grpid = grpid.get(),
        from = %old,
        to = %state,
        "ANA state changed"
    );

    for (index, ctrl) in ctrls.occupied() {
        ctrl.notice_event(AsyncEvent::AnaChange);
        debug!(
            event = events::ANA_EVENT_ENQUEUED,
            component = COMPONENT,
            subsys,
            cntlid = CntlId::from_index(index).get(),
            "queued ANA change notice"
        );
    }

    true
}
