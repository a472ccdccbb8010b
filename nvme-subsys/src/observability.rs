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

//! Tracing vocabulary shared across layers.
//!
//! Every event carries `event = <name>` and `component = <layer>` fields so log
//! consumers can filter without parsing messages.

pub mod events {
    pub const SUBSYS_SETUP: &str = "subsys_setup";

    pub const CTRL_REGISTERED: &str = "ctrl_registered";
    pub const CTRL_REGISTER_REJECTED: &str = "ctrl_register_rejected";

    pub const NS_REGISTERED: &str = "ns_registered";
    pub const NS_REGISTER_REJECTED: &str = "ns_register_rejected";
    pub const NS_ATTACH_FAILED: &str = "ns_attach_failed";
    pub const NS_JOINED_ANA_GROUP: &str = "ns_joined_ana_group";

    pub const ANA_STATE_UNCHANGED: &str = "ana_state_unchanged";
    pub const ANA_STATE_CHANGED: &str = "ana_state_changed";
    pub const ANA_EVENT_ENQUEUED: &str = "ana_event_enqueued";

    pub const EVENT_QUEUE_CLOSED: &str = "event_queue_closed";

    pub const ANA_INJECT_APPLIED: &str = "ana_inject_applied";
    pub const ANA_INJECT_REJECTED: &str = "ana_inject_rejected";
}
