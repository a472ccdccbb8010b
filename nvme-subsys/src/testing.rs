//! Recording controller fakes shared by unit tests.

use crate::controller::{AsyncEvent, Controller, NamespaceAttachError};
use crate::identity::Nsid;
use crate::namespace::Namespace;
use std::sync::Mutex as StdMutex;

#[derive(Default)]
pub(crate) struct RecordingController {
    attached: StdMutex<Vec<Nsid>>,
    events: StdMutex<Vec<AsyncEvent>>,
    refuse_with: Option<&'static str>,
}

impl RecordingController {
    pub(crate) fn refusing(reason: &'static str) -> Self {
        Self {
            refuse_with: Some(reason),
            ..Default::default()
        }
    }

    pub(crate) fn attached(&self) -> Vec<Nsid> {
        self.attached.lock().expect("lock attached").clone()
    }

    pub(crate) fn events(&self) -> Vec<AsyncEvent> {
        self.events.lock().expect("lock events").clone()
    }
}

impl Controller for RecordingController {
    fn register_namespace(&self, ns: &Namespace) -> Result<(), NamespaceAttachError> {
        if let Some(reason) = self.refuse_with {
            return Err(NamespaceAttachError::new(reason));
        }
        self.attached.lock().expect("lock attached").push(ns.nsid());
        Ok(())
    }

    fn notice_event(&self, event: AsyncEvent) {
        self.events.lock().expect("lock events").push(event);
    }
}
