//! Builds the device tree a console serves from its configuration.

use crate::config::ConsoleConfig;
use crate::controller::EmulatedController;
use anyhow::{bail, Context};
use nvme_subsys::api::DeviceTree;
use nvme_subsys::data_plane::{event_queue, EventReceiver};
use nvme_subsys::identity::CntlId;
use nvme_subsys::{Namespace, Subsystem};
use std::sync::Arc;
use tracing::info;

pub(crate) struct AttachedController {
    pub(crate) subsys: String,
    pub(crate) cntlid: CntlId,
    pub(crate) ctrl: Arc<EmulatedController>,
}

pub(crate) struct Host {
    pub(crate) devices: DeviceTree,
    pub(crate) controllers: Vec<AttachedController>,
}

impl Host {
    /// Realizes every configured subsystem, then its controllers, then its
    /// namespaces. Returns the event queues to drain, labelled `<subsys>/<serial>`.
    pub(crate) fn realize(
        config: &ConsoleConfig,
    ) -> anyhow::Result<(Self, Vec<(String, EventReceiver)>)> {
        let mut devices = DeviceTree::new();
        let mut controllers = Vec::new();
        let mut receivers = Vec::new();

        for subsys_config in &config.subsystems {
            let id = subsys_config.id.as_str();
            let mut subsys = Subsystem::realize(id, subsys_config.params);

            for serial in &subsys_config.controllers {
                let label = format!("{id}/{serial}");
                let (sender, receiver) = event_queue(&label);
                let ctrl = Arc::new(EmulatedController::new(serial, sender));
                let cntlid = subsys
                    .register_ctrl(ctrl.clone())
                    .with_context(|| format!("unable to attach controller {label}"))?;
                info!(subsys = id, serial = %serial, cntlid = cntlid.get(), "controller attached");

                controllers.push(AttachedController {
                    subsys: id.to_string(),
                    cntlid,
                    ctrl,
                });
                receivers.push((label, receiver));
            }

            for params in &subsys_config.namespaces {
                if params.anagrpid != 0 && !subsys.ana_enabled() {
                    bail!(
                        "namespace {} of {id} sets anagrpid {} but ANA is disabled",
                        params.nsid,
                        params.anagrpid
                    );
                }
                let ns = Namespace::new(*params)
                    .with_context(|| format!("invalid namespace in {id}"))?;
                subsys
                    .register_ns(Arc::new(ns))
                    .with_context(|| format!("unable to register namespace {}", params.nsid))?;
            }

            devices.insert(subsys)?;
        }

        Ok((
            Self {
                devices,
                controllers,
            },
            receivers,
        ))
    }
}
