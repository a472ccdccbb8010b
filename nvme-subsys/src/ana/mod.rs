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

//! Asymmetric Namespace Access layer.
//!
//! Holds the per-group accessibility state and the set of namespaces classified
//! into each group. Group state only changes through
//! [`Subsystem::set_ana_state`](crate::Subsystem::set_ana_state); membership only
//! grows through namespace registration.
//!
//! ```
//! use nvme_subsys::ana::AnaState;
//!
//! assert_eq!("non-optimized".parse::<AnaState>(), Ok(AnaState::NonOptimized));
//! assert_eq!(AnaState::Change.value(), 0x0f);
//! assert!("Optimized".parse::<AnaState>().is_err());
//! assert!("".parse::<AnaState>().is_err());
//! ```

mod group_table;
mod nsid_set;
mod state;

pub use group_table::{AnaGroup, AnaGroupTable};
pub use nsid_set::NsidSet;
pub use state::AnaState;

/// One group per possible namespace.
pub const MAX_ANA_GROUPS: usize = crate::identity::MAX_NAMESPACES;
