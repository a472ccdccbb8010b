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

//! Hosts the NVMe subsystems described by a JSON5 file and serves an
//! interactive monitor on stdin.

mod config;
mod controller;
mod host;
mod monitor;

use clap::Parser;
use config::ConsoleConfig;
use host::Host;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(version, about = "Virtual NVMe subsystem monitor", long_about = None)]
struct Args {
    /// Path to the JSON5 device configuration
    #[arg(short, long, value_name = "FILE")]
    config: PathBuf,
    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_filter: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = ConsoleConfig::load(&args.config)?;
    let (mut host, receivers) = Host::realize(&config)?;
    info!(
        subsystems = host.devices.len(),
        controllers = host.controllers.len(),
        "devices realized"
    );

    for (label, receiver) in receivers {
        tokio::spawn(controller::drain_events(label, receiver));
    }

    monitor::run(&mut host).await
}
