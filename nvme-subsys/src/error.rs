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

//! Error kinds surfaced by subsystem operations.

use crate::controller::NamespaceAttachError;
use crate::identity::{CntlId, Nsid};
use thiserror::Error;

/// Every failure is returned to the immediate caller and leaves the subsystem
/// untouched, except [`SubsystemError::ControllerRegistrationFailed`] which
/// keeps the namespace slot occupied.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum SubsystemError {
    #[error("no more free controller id")]
    ResourceExhausted,

    #[error("namespace {nsid} already registered to subsystem {subsys}")]
    AlreadyRegistered { nsid: Nsid, subsys: String },

    #[error("controller {cntlid} failed to register namespace {nsid}: {reason}")]
    ControllerRegistrationFailed {
        cntlid: CntlId,
        nsid: Nsid,
        #[source]
        reason: NamespaceAttachError,
    },

    #[error("no subsystem with device id {0:?}")]
    NotFound(String),

    #[error("ANA group id {0} is not in 1..=32")]
    InvalidGroupId(u32),

    #[error("unrecognized ANA state {0:?}")]
    UnrecognizedState(String),

    #[error("namespace id {0} is not in 1..=32")]
    InvalidNamespaceId(u32),

    #[error("device id {0:?} is already in use")]
    DuplicateDevice(String),
}

#[cfg(test)]
mod tests {
    use super::SubsystemError;
    use crate::controller::NamespaceAttachError;
    use crate::identity::{CntlId, Nsid};
    use std::error::Error;

    #[test]
    fn controller_failure_keeps_reason_as_source() {
        let err = SubsystemError::ControllerRegistrationFailed {
            cntlid: CntlId::from_index(1),
            nsid: Nsid::new(5).expect("valid nsid"),
            reason: NamespaceAttachError::new("queue full"),
        };

        assert_eq!(
            err.to_string(),
            "controller 1 failed to register namespace 5: queue full"
        );
        assert_eq!(
            err.source().map(ToString::to_string).as_deref(),
            Some("queue full")
        );
    }

    #[test]
    fn resource_exhausted_matches_monitor_wording() {
        assert_eq!(
            SubsystemError::ResourceExhausted.to_string(),
            "no more free controller id"
        );
    }
}
