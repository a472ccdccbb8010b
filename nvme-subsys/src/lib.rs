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

//! # nvme-subsys
//!
//! `nvme-subsys` keeps the state an emulated NVM subsystem shares between its
//! controllers and namespaces: controller and namespace ids, the qualified
//! name, and Asymmetric Namespace Access (ANA) groups whose state changes are
//! announced to every attached controller.
//!
//! Typical usage is centered on [`Subsystem`] plus a [`Controller`]
//! implementation supplied by the host.
//!
//! ## Quick start
//!
//! ```
//! use std::sync::{Arc, Mutex};
//! use nvme_subsys::identity::AnaGroupId;
//! use nvme_subsys::{
//!     AnaState, AsyncEvent, Controller, Namespace, NamespaceAttachError, NamespaceParams,
//!     Subsystem, SubsystemParams,
//! };
//!
//! #[derive(Default)]
//! struct CountingController {
//!     notices: Mutex<usize>,
//! }
//!
//! impl Controller for CountingController {
//!     fn register_namespace(&self, _ns: &Namespace) -> Result<(), NamespaceAttachError> {
//!         Ok(())
//!     }
//!
//!     fn notice_event(&self, _event: AsyncEvent) {
//!         *self.notices.lock().unwrap() += 1;
//!     }
//! }
//!
//! let mut subsys = Subsystem::realize("sub0", SubsystemParams { ana: true });
//! assert_eq!(subsys.subnqn().as_str(), "nqn.2019-08.org.qemu:sub0");
//!
//! let ctrl = Arc::new(CountingController::default());
//! let cntlid = subsys.register_ctrl(ctrl.clone()).unwrap();
//! assert_eq!(cntlid.get(), 0);
//!
//! let ns = Namespace::new(NamespaceParams { nsid: 5, anagrpid: 3 }).unwrap();
//! subsys.register_ns(Arc::new(ns)).unwrap();
//!
//! let grpid = AnaGroupId::new(3).unwrap();
//! assert_eq!(subsys.ana_group(grpid).nr_ns(), 1);
//!
//! subsys.set_ana_state(grpid, AnaState::Change);
//! subsys.set_ana_state(grpid, AnaState::Change);
//! assert_eq!(*ctrl.notices.lock().unwrap(), 1);
//! ```
//!
//! ## Internal architecture map
//!
//! - Identity: fixed-capacity slot tables and range-checked ids
//! - ANA: state enumeration, name table, membership sets and group table
//! - Control plane: controller and namespace registration
//! - Data plane: state transitions, change-notice fan-out, event queues
//! - API facade: device lookup and operator-driven state injection
//!
//! ## Observability model
//!
//! The crate uses `tracing` for logs/events and never installs a subscriber.
//! Binaries and tests are responsible for `tracing_subscriber` initialization.

pub mod ana;
pub mod api;
mod control_plane;
mod controller;
pub mod data_plane;
mod error;
pub mod identity;
mod namespace;
#[doc(hidden)]
pub mod observability;
mod subsystem;

#[cfg(test)]
mod testing;

pub use ana::{AnaGroup, AnaState};
pub use controller::{AsyncEvent, Controller, NamespaceAttachError};
pub use error::SubsystemError;
pub use namespace::{Namespace, NamespaceParams};
pub use subsystem::{
    SubNqn, Subsystem, SubsystemParams, DEVICE_DESCRIPTION, DEVICE_TYPE, SUBNQN_CAPACITY,
    SUBNQN_PREFIX,
};
