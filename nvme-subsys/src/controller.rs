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

//! Boundary to the controllers attached to a subsystem.

use crate::namespace::Namespace;
use std::fmt;
use thiserror::Error;

const AER_TYPE_NOTICE: u8 = 0x02;
const AER_INFO_NOTICE_ANA_CHANGE: u8 = 0x03;

/// Asynchronous event a subsystem raises on its controllers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[non_exhaustive]
pub enum AsyncEvent {
    /// Asymmetric Namespace Access change notice.
    AnaChange,
}

impl AsyncEvent {
    pub const fn event_type(self) -> u8 {
        match self {
            AsyncEvent::AnaChange => AER_TYPE_NOTICE,
        }
    }

    pub const fn event_info(self) -> u8 {
        match self {
            AsyncEvent::AnaChange => AER_INFO_NOTICE_ANA_CHANGE,
        }
    }
}

impl fmt::Display for AsyncEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AsyncEvent::AnaChange => f.write_str("ana-change"),
        }
    }
}

/// Reason a controller gave for refusing a namespace.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("{reason}")]
pub struct NamespaceAttachError {
    reason: String,
}

impl NamespaceAttachError {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// A controller as seen by its subsystem.
///
/// The hosting framework owns controllers; a subsystem keeps a shared handle for
/// as long as it lives.
pub trait Controller: Send + Sync {
    /// Makes a newly registered namespace visible through this controller.
    fn register_namespace(&self, ns: &Namespace) -> Result<(), NamespaceAttachError>;

    /// Queues an asynchronous event for the host. Must not block.
    fn notice_event(&self, event: AsyncEvent);
}
