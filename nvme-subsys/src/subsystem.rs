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

use crate::ana::{AnaGroup, AnaGroupTable, AnaState};
use crate::control_plane::registration::{register_ctrl, register_ns};
use crate::controller::Controller;
use crate::data_plane::notification::change_ana_state;
use crate::error::SubsystemError;
use crate::identity::{AnaGroupId, CntlId, ControllerTable, NamespaceTable, Nsid};
use crate::namespace::Namespace;
use crate::observability::events;
use serde::Deserialize;
use std::fmt::{self, Debug, Display, Formatter};
use std::sync::Arc;
use tracing::info;

pub const DEVICE_TYPE: &str = "nvme-subsys";
pub const DEVICE_DESCRIPTION: &str = "Virtual NVMe subsystem";

pub const SUBNQN_PREFIX: &str = "nqn.2019-08.org.qemu:";
pub const SUBNQN_CAPACITY: usize = 256;

const COMPONENT: &str = "subsystem";

/// Construction-time options.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubsystemParams {
    /// Whether hosts may see ANA group classification. The group table is
    /// maintained either way.
    pub ana: bool,
}

/// NUL-terminated NVMe Qualified Name in a fixed buffer.
#[derive(Clone, PartialEq, Eq)]
pub struct SubNqn {
    buf: [u8; SUBNQN_CAPACITY],
    len: usize,
}

impl SubNqn {
    /// Formats `<prefix><id>`, cut to fit the buffer on a character boundary.
    fn derive(id: &str) -> Self {
        let full = format!("{SUBNQN_PREFIX}{id}");
        let mut len = full.len().min(SUBNQN_CAPACITY - 1);
        while !full.is_char_boundary(len) {
            len -= 1;
        }

        let mut buf = [0u8; SUBNQN_CAPACITY];
        buf[..len].copy_from_slice(&full.as_bytes()[..len]);
        Self { buf, len }
    }

    fn empty() -> Self {
        Self {
            buf: [0u8; SUBNQN_CAPACITY],
            len: 0,
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    pub fn as_bytes_with_nul(&self) -> &[u8] {
        &self.buf[..=self.len]
    }

    /// The whole fixed-size buffer, zero padded.
    pub fn as_buffer(&self) -> &[u8; SUBNQN_CAPACITY] {
        &self.buf
    }

    pub fn as_str(&self) -> &str {
        // `derive` only ever stores whole characters.
        std::str::from_utf8(self.as_bytes()).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

impl Display for SubNqn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Debug for SubNqn {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SubNqn").field(&self.as_str()).finish()
    }
}

/// Shared identity and ANA state for the controllers and namespaces of one
/// NVM subsystem.
///
/// The host must call [`Subsystem::setup`] once before registering anything,
/// or build the subsystem with [`Subsystem::realize`]. All calls are expected
/// to come from a single management thread.
pub struct Subsystem {
    id: String,
    subnqn: SubNqn,
    ctrls: ControllerTable,
    namespaces: NamespaceTable,
    ana: AnaGroupTable,
    ana_change_count: u64,
    params: SubsystemParams,
}

impl Subsystem {
    pub fn new(id: &str, params: SubsystemParams) -> Self {
        Self {
            id: id.to_string(),
            subnqn: SubNqn::empty(),
            ctrls: ControllerTable::new(),
            namespaces: NamespaceTable::new(),
            ana: AnaGroupTable::new(),
            ana_change_count: 0,
            params,
        }
    }

    /// [`Subsystem::new`] followed by [`Subsystem::setup`].
    pub fn realize(id: &str, params: SubsystemParams) -> Self {
        let mut subsys = Self::new(id, params);
        subsys.setup();
        subsys
    }

    /// Derives the qualified name and puts every ANA group in `Optimized` with
    /// no members.
    pub fn setup(&mut self) {
        self.subnqn = SubNqn::derive(&self.id);
        self.ana.reset();

        info!(
            event = events::SUBSYS_SETUP,
            component = COMPONENT,
            subsys = %self.id,
            subnqn = %self.subnqn,
            ana = self.params.ana,
            "subsystem ready"
        );
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn subnqn(&self) -> &SubNqn {
        &self.subnqn
    }

    pub fn params(&self) -> SubsystemParams {
        self.params
    }

    pub fn ana_enabled(&self) -> bool {
        self.params.ana
    }

    /// Reserved; nothing in this crate advances it.
    pub fn ana_change_count(&self) -> u64 {
        self.ana_change_count
    }

    pub fn register_ctrl(&mut self, ctrl: Arc<dyn Controller>) -> Result<CntlId, SubsystemError> {
        register_ctrl(&self.id, &mut self.ctrls, ctrl)
    }

    /// Admits `ns` and attaches it to every registered controller. If a
    /// controller refuses, the error is returned and the nsid stays taken.
    pub fn register_ns(&mut self, ns: Arc<Namespace>) -> Result<(), SubsystemError> {
        register_ns(
            &self.id,
            &mut self.namespaces,
            &self.ctrls,
            &mut self.ana,
            ns,
        )
    }

    /// Returns `true` if the group changed state and controllers were notified.
    pub fn set_ana_state(&mut self, grpid: AnaGroupId, state: AnaState) -> bool {
        change_ana_state(&self.id, &mut self.ana, &self.ctrls, grpid, state)
    }

    pub fn ana_group(&self, grpid: AnaGroupId) -> &AnaGroup {
        self.ana.get(grpid)
    }

    pub fn ana_groups(&self) -> impl Iterator<Item = &AnaGroup> + '_ {
        self.ana.iter()
    }

    pub fn controller(&self, cntlid: CntlId) -> Option<&Arc<dyn Controller>> {
        self.ctrls.get(cntlid.index())
    }

    /// Registered controllers in cntlid order.
    pub fn controllers(&self) -> impl Iterator<Item = (CntlId, &Arc<dyn Controller>)> + '_ {
        self.ctrls
            .occupied()
            .map(|(index, ctrl)| (CntlId::from_index(index), ctrl))
    }

    pub fn namespace(&self, nsid: Nsid) -> Option<&Arc<Namespace>> {
        self.namespaces.get(nsid.index())
    }

    pub fn is_namespace_registered(&self, nsid: Nsid) -> bool {
        self.namespaces.is_occupied(nsid.index())
    }

    /// Registered namespaces in nsid order.
    pub fn namespaces(&self) -> impl Iterator<Item = &Arc<Namespace>> + '_ {
        self.namespaces.occupied().map(|(_, ns)| ns)
    }
}

impl Debug for Subsystem {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subsystem")
            .field("id", &self.id)
            .field("subnqn", &self.subnqn)
            .field("controllers", &self.ctrls.len())
            .field("namespaces", &self.namespaces.len())
            .field("params", &self.params)
            .finish_non_exhaustive()
    }
}
