//! Emulated controllers that post asynchronous events to a queue.

use nvme_subsys::data_plane::{EventReceiver, EventSender};
use nvme_subsys::identity::Nsid;
use nvme_subsys::{AsyncEvent, Controller, Namespace, NamespaceAttachError};
use std::sync::{Mutex, PoisonError};
use tracing::{debug, info};

const EMULATED_CONTROLLER_TAG: &str = "EmulatedController:";
const EMULATED_CONTROLLER_FN_REGISTER_NAMESPACE_TAG: &str = "register_namespace():";

pub(crate) struct EmulatedController {
    serial: String,
    attached: Mutex<Vec<Nsid>>,
    events: EventSender,
}

impl EmulatedController {
    pub(crate) fn new(serial: &str, events: EventSender) -> Self {
        Self {
            serial: serial.to_string(),
            attached: Mutex::new(Vec::new()),
            events,
        }
    }

    pub(crate) fn serial(&self) -> &str {
        &self.serial
    }

    pub(crate) fn attached(&self) -> Vec<Nsid> {
        self.attached
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Controller for EmulatedController {
    fn register_namespace(&self, ns: &Namespace) -> Result<(), NamespaceAttachError> {
        let mut attached = self.attached.lock().unwrap_or_else(PoisonError::into_inner);
        if attached.contains(&ns.nsid()) {
            return Err(NamespaceAttachError::new(format!(
                "namespace {} is already attached to {}",
                ns.nsid(),
                self.serial
            )));
        }

        attached.push(ns.nsid());
        debug!(
            "{}:{} {} attached namespace {}",
            EMULATED_CONTROLLER_TAG,
            EMULATED_CONTROLLER_FN_REGISTER_NAMESPACE_TAG,
            self.serial,
            ns.nsid()
        );
        Ok(())
    }

    fn notice_event(&self, event: AsyncEvent) {
        self.events.enqueue(event);
    }
}

/// Logs every event posted to one controller until its queue closes.
pub(crate) async fn drain_events(label: String, mut receiver: EventReceiver) {
    while let Some(event) = receiver.recv().await {
        info!(
            controller = %label,
            %event,
            event_type = event.event_type(),
            event_info = event.event_info(),
            "asynchronous event posted"
        );
    }
    debug!(controller = %label, "event queue closed");
}

#[cfg(test)]
mod tests {
    use super::EmulatedController;
    use nvme_subsys::data_plane::event_queue;
    use nvme_subsys::{AsyncEvent, Controller, Namespace, NamespaceParams};

    #[test]
    fn second_attach_of_same_namespace_is_refused() {
        let (sender, _receiver) = event_queue("c0");
        let ctrl = EmulatedController::new("c0", sender);
        let ns = Namespace::new(NamespaceParams {
            nsid: 4,
            anagrpid: 0,
        })
        .expect("valid params");

        assert!(ctrl.register_namespace(&ns).is_ok());
        let err = ctrl.register_namespace(&ns).expect_err("duplicate attach");

        assert_eq!(err.reason(), "namespace 4 is already attached to c0");
        assert_eq!(ctrl.attached().len(), 1);
        assert_eq!(ctrl.serial(), "c0");
    }

    #[test]
    fn notices_land_on_the_queue() {
        let (sender, mut receiver) = event_queue("c0");
        let ctrl = EmulatedController::new("c0", sender);

        ctrl.notice_event(AsyncEvent::AnaChange);

        assert_eq!(receiver.try_recv(), Some(AsyncEvent::AnaChange));
    }
}
