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

//! Control-plane layer.
//!
//! Owns admission of controllers and namespaces: slot allocation, duplicate
//! rejection, cross-registration of a new namespace with every attached
//! controller, and ANA group membership.
//!
//! A controller refusing a namespace mid-way does not undo the namespace slot,
//! so a later registration of the same nsid is rejected as a duplicate.
//!
//! ```
//! use std::sync::Arc;
//! use nvme_subsys::{
//!     AsyncEvent, Controller, Namespace, NamespaceAttachError, NamespaceParams, Subsystem,
//!     SubsystemError, SubsystemParams,
//! };
//!
//! struct Refusing;
//!
//! impl Controller for Refusing {
//!     fn register_namespace(&self, _ns: &Namespace) -> Result<(), NamespaceAttachError> {
//!         Err(NamespaceAttachError::new("no room"))
//!     }
//!
//!     fn notice_event(&self, _event: AsyncEvent) {}
//! }
//!
//! let mut subsys = Subsystem::realize("control-plane-doc", SubsystemParams::default());
//! subsys.register_ctrl(Arc::new(Refusing)).unwrap();
//!
//! let params = NamespaceParams { nsid: 1, anagrpid: 0 };
//! let first = subsys.register_ns(Arc::new(Namespace::new(params).unwrap()));
//! assert!(matches!(first, Err(SubsystemError::ControllerRegistrationFailed { .. })));
//!
//! let again = subsys.register_ns(Arc::new(Namespace::new(params).unwrap()));
//! assert!(matches!(again, Err(SubsystemError::AlreadyRegistered { .. })));
//! ```

pub(crate) mod registration;
