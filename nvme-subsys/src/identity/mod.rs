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

//! Identity layer.
//!
//! Owns the fixed-capacity slot tables that map controller ids and namespace ids
//! to the entities registered under them, plus the range-checked handle types
//! used to address those slots.
//!
//! ```
//! use nvme_subsys::identity::{Nsid, SlotTable};
//!
//! let mut table: SlotTable<&str, 4> = SlotTable::new();
//! assert_eq!(table.allocate("first"), Ok(0));
//! assert_eq!(table.allocate("second"), Ok(1));
//! assert!(table.occupy(1, "clash").is_err());
//!
//! assert!(Nsid::new(0).is_err());
//! assert_eq!(Nsid::new(32).map(Nsid::get), Ok(32));
//! ```

mod handles;
mod slot_table;

pub use handles::{AnaGroupId, CntlId, Nsid};
pub use slot_table::SlotTable;

use crate::controller::Controller;
use crate::namespace::Namespace;
use std::sync::Arc;

/// Number of controller slots in a subsystem.
pub const MAX_CONTROLLERS: usize = 32;

/// Highest namespace id a subsystem accepts.
pub const MAX_NAMESPACES: usize = 32;

/// Namespace slots are addressed by nsid directly; slot 0 is never occupied.
pub(crate) const NAMESPACE_SLOTS: usize = MAX_NAMESPACES + 1;

pub(crate) type ControllerTable = SlotTable<Arc<dyn Controller>, MAX_CONTROLLERS>;
pub(crate) type NamespaceTable = SlotTable<Arc<Namespace>, NAMESPACE_SLOTS>;
