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

//! Administrative facade layer.
//!
//! Resolves subsystems by device id and drives operator-requested ANA state
//! injection. Bad input only ever produces a diagnostic; it never mutates state.
//!
//! ```
//! use nvme_subsys::api::{hmp_inject_ana_state, DeviceTree};
//! use nvme_subsys::{Subsystem, SubsystemParams};
//!
//! let mut devices = DeviceTree::new();
//! devices
//!     .insert(Subsystem::realize("sub0", SubsystemParams { ana: true }))
//!     .unwrap();
//!
//! assert_eq!(
//!     hmp_inject_ana_state(&mut devices, "sub0", 3, "change"),
//!     "nvme-subsys(sub0): ANA state change(15) injected"
//! );
//! assert_eq!(
//!     hmp_inject_ana_state(&mut devices, "sub0", 0, "change"),
//!     "nvme-subsys(sub0): grpid should not be 0"
//! );
//! assert_eq!(
//!     hmp_inject_ana_state(&mut devices, "nope", 3, "change"),
//!     "nvme-subsys(nope): invalid device id"
//! );
//! ```

mod ana_inject;
mod device_tree;

pub use ana_inject::{hmp_inject_ana_state, inject_ana_state, AnaInjection};
pub use device_tree::{DeviceTree, SubsystemLookup};
