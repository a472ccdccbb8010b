//! Controller and namespace admission.

use crate::ana::AnaGroupTable;
use crate::controller::Controller;
use crate::error::SubsystemError;
use crate::identity::{CntlId, ControllerTable, NamespaceTable};
use crate::namespace::Namespace;
use crate::observability::events;
use std::sync::Arc;
use tracing::{debug, warn};

const COMPONENT: &str = "registration";

/// Places `ctrl` in the lowest free controller slot.
pub(crate) fn register_ctrl(
    subsys: &str,
    ctrls: &mut ControllerTable,
    ctrl: Arc<dyn Controller>,
) -> Result<CntlId, SubsystemError> {
    let Ok(index) = ctrls.allocate(ctrl) else {
        warn!(
            event = events::CTRL_REGISTER_REJECTED,
            component = COMPONENT,
            subsys,
            capacity = ctrls.capacity(),
            "no more free controller id"
        );
        return Err(SubsystemError::ResourceExhausted);
    };

    let cntlid = CntlId::from_index(index);
    debug!(
        event = events::CTRL_REGISTERED,
        component = COMPONENT,
        subsys,
        cntlid = cntlid.get(),
        "registered controller"
    );
    Ok(cntlid)
}

/// Admits `ns` under its own nsid, then attaches it to every registered
/// controller in cntlid order, then records its ANA group membership.
///
/// The first controller refusal is returned as is; the namespace slot and any
/// attachments already made stay in place.
pub(crate) fn register_ns(
    subsys: &str,
    namespaces: &mut NamespaceTable,
    ctrls: &ControllerTable,
    groups: &mut AnaGroupTable,
    ns: Arc<Namespace>,
) -> Result<(), SubsystemError> {
    let nsid = ns.nsid();

    if namespaces.occupy(nsid.index(), ns.clone()).is_err() {
        warn!(
            event = events::NS_REGISTER_REJECTED,
            component = COMPONENT,
            subsys,
            nsid = nsid.get(),
            "namespace already registered"
        );
        return Err(SubsystemError::AlreadyRegistered {
            nsid,
            subsys: subsys.to_string(),
        });
    }

    for (index, ctrl) in ctrls.occupied() {
        if let Err(reason) = ctrl.register_namespace(&ns) {
            let cntlid = CntlId::from_index(index);
            warn!(
                event = events::NS_ATTACH_FAILED,
                component = COMPONENT,
                subsys,
                nsid = nsid.get(),
                cntlid = cntlid.get(),
                %reason,
                "controller refused namespace"
            );
            return Err(SubsystemError::ControllerRegistrationFailed {
                cntlid,
                nsid,
                reason,
            });
        }
    }

    if let Some(grpid) = ns.anagrpid() {
        let group = groups.get_mut(grpid);
        group.register_ns(nsid);
        ns.attach_ana_group(grpid);
        debug!(
            event = events::NS_JOINED_ANA_GROUP,
            component = COMPONENT,
            subsys,
            nsid = nsid.get(),
            grpid = grpid.get(),
            members = group.nr_ns(),
            "namespace joined ANA group"
        );
    }

    debug!(
        event = events::NS_REGISTERED,
        component = COMPONENT,
        subsys,
        nsid = nsid.get(),
        "registered namespace"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{register_ctrl, register_ns};
    use crate::ana::AnaGroupTable;
    use crate::controller::{Controller, NamespaceAttachError};
    use crate::error::SubsystemError;
    use crate::identity::{AnaGroupId, ControllerTable, NamespaceTable, Nsid};
    use crate::namespace::{Namespace, NamespaceParams};
    use crate::testing::RecordingController;
    use std::sync::Arc;

    fn namespace(nsid: u32, anagrpid: u32) -> Arc<Namespace> {
        Arc::new(Namespace::new(NamespaceParams { nsid, anagrpid }).expect("valid params"))
    }

    fn nsid(raw: u32) -> Nsid {
        Nsid::new(raw).expect("valid nsid")
    }

    fn grpid(raw: u32) -> AnaGroupId {
        AnaGroupId::new(raw).expect("valid group id")
    }

    #[test]
    fn register_ctrl_hands_out_slots_until_exhausted() {
        let mut ctrls = ControllerTable::new();
        let registered: Vec<Arc<dyn Controller>> = (0..32)
            .map(|_| Arc::new(RecordingController::default()) as Arc<dyn Controller>)
            .collect();

        for (expected, ctrl) in registered.iter().enumerate() {
            let cntlid = register_ctrl("subsys", &mut ctrls, ctrl.clone()).expect("free slot");
            assert_eq!(cntlid.index(), expected);
        }

        let extra: Arc<dyn Controller> = Arc::new(RecordingController::default());
        assert_eq!(
            register_ctrl("subsys", &mut ctrls, extra),
            Err(SubsystemError::ResourceExhausted)
        );

        assert_eq!(ctrls.len(), 32);
        for (index, ctrl) in ctrls.occupied() {
            assert!(Arc::ptr_eq(ctrl, &registered[index]));
        }
    }

    #[test]
    fn register_ns_attaches_to_every_controller_and_joins_group() {
        let mut namespaces = NamespaceTable::new();
        let mut ctrls = ControllerTable::new();
        let mut groups = AnaGroupTable::new();
        let c0 = Arc::new(RecordingController::default());
        let c1 = Arc::new(RecordingController::default());
        register_ctrl("subsys", &mut ctrls, c0.clone()).expect("slot 0");
        register_ctrl("subsys", &mut ctrls, c1.clone()).expect("slot 1");

        let ns = namespace(5, 3);
        register_ns("subsys", &mut namespaces, &ctrls, &mut groups, ns.clone())
            .expect("registration succeeds");

        assert_eq!(c0.attached(), vec![nsid(5)]);
        assert_eq!(c1.attached(), vec![nsid(5)]);
        assert!(groups.get(grpid(3)).has_ns(nsid(5)));
        assert_eq!(groups.get(grpid(3)).nr_ns(), 1);
        assert_eq!(ns.ana_group(), Some(grpid(3)));
        assert!(namespaces.is_occupied(5));
    }

    #[test]
    fn ungrouped_namespace_leaves_memberships_alone() {
        let mut namespaces = NamespaceTable::new();
        let ctrls = ControllerTable::new();
        let mut groups = AnaGroupTable::new();

        register_ns("subsys", &mut namespaces, &ctrls, &mut groups, namespace(7, 0))
            .expect("registration succeeds");

        assert_eq!(groups, AnaGroupTable::new());
        assert!(namespaces.is_occupied(7));
    }

    #[test]
    fn duplicate_nsid_is_rejected_without_mutation() {
        let mut namespaces = NamespaceTable::new();
        let mut ctrls = ControllerTable::new();
        let mut groups = AnaGroupTable::new();
        let ctrl = Arc::new(RecordingController::default());
        register_ctrl("subsys", &mut ctrls, ctrl.clone()).expect("slot 0");

        let original = namespace(2, 1);
        register_ns("subsys", &mut namespaces, &ctrls, &mut groups, original.clone())
            .expect("first registration");
        let groups_before = groups.clone();

        let result = register_ns("subsys", &mut namespaces, &ctrls, &mut groups, namespace(2, 4));

        assert_eq!(
            result,
            Err(SubsystemError::AlreadyRegistered {
                nsid: nsid(2),
                subsys: "subsys".to_string(),
            })
        );
        assert!(Arc::ptr_eq(
            namespaces.get(2).expect("slot still occupied"),
            &original
        ));
        assert_eq!(groups, groups_before);
        assert_eq!(ctrl.attached(), vec![nsid(2)]);
    }

    #[test]
    fn controller_refusal_stops_iteration_and_keeps_slot() {
        let mut namespaces = NamespaceTable::new();
        let mut ctrls = ControllerTable::new();
        let mut groups = AnaGroupTable::new();
        let c0 = Arc::new(RecordingController::default());
        let c1 = Arc::new(RecordingController::refusing("admin queue not ready"));
        let c2 = Arc::new(RecordingController::default());
        for ctrl in [c0.clone(), c1.clone(), c2.clone()] {
            register_ctrl("subsys", &mut ctrls, ctrl).expect("free slot");
        }

        let ns = namespace(9, 6);
        let result = register_ns("subsys", &mut namespaces, &ctrls, &mut groups, ns.clone());

        match result {
            Err(SubsystemError::ControllerRegistrationFailed {
                cntlid,
                nsid: failed,
                reason,
            }) => {
                assert_eq!(cntlid.get(), 1);
                assert_eq!(failed, nsid(9));
                assert_eq!(reason, NamespaceAttachError::new("admin queue not ready"));
            }
            other => panic!("unexpected result: {other:?}"),
        }

        assert_eq!(c0.attached(), vec![nsid(9)]);
        assert!(c2.attached().is_empty());
        assert!(namespaces.is_occupied(9));
        assert_eq!(groups.get(grpid(6)).nr_ns(), 0);
        assert_eq!(ns.ana_group(), None);
    }
}
