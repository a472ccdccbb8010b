/********************************************************************************
 * Copyright (c) 2026 Contributors to the Eclipse Foundation
 *
 * See the NOTICE file(s) distributed with this work for additional
 * information regarding copyright ownership.
 *
 * This program and the accompanying materials are made available under the
 * terms of the Apache License Version 2.0 which is available at
 * https://www.apache.org/licenses/LICENSE-2.0
 *
 * SPDX-License-Identifier: Apache-2.0
 ********************************************************************************/

//! Data-plane layer.
//!
//! Applies ANA state transitions and fans the resulting change notice out to
//! every registered controller. Controllers that want the notices delivered
//! asynchronously can back [`Controller::notice_event`](crate::Controller::notice_event)
//! with an [`EventSender`].
//!
//! ```
//! use std::sync::Arc;
//! use nvme_subsys::data_plane::{event_queue, EventSender};
//! use nvme_subsys::identity::AnaGroupId;
//! use nvme_subsys::{
//!     AnaState, AsyncEvent, Controller, Namespace, NamespaceAttachError, Subsystem,
//!     SubsystemParams,
//! };
//!
//! struct QueuedController(EventSender);
//!
//! impl Controller for QueuedController {
//!     fn register_namespace(&self, _ns: &Namespace) -> Result<(), NamespaceAttachError> {
//!         Ok(())
//!     }
//!
//!     fn notice_event(&self, event: AsyncEvent) {
//!         self.0.enqueue(event);
//!     }
//! }
//!
//! let (sender, mut receiver) = event_queue("ctrl-0");
//! let mut subsys = Subsystem::realize("data-plane-doc", SubsystemParams { ana: true });
//! subsys.register_ctrl(Arc::new(QueuedController(sender))).unwrap();
//!
//! let grpid = AnaGroupId::new(1).unwrap();
//! assert!(subsys.set_ana_state(grpid, AnaState::Inaccessible));
//! assert!(!subsys.set_ana_state(grpid, AnaState::Inaccessible));
//!
//! assert_eq!(receiver.try_recv(), Some(AsyncEvent::AnaChange));
//! assert_eq!(receiver.try_recv(), None);
//! ```

mod event_queue;
pub(crate) mod notification;

pub use event_queue::{event_queue, EventReceiver, EventSender};
