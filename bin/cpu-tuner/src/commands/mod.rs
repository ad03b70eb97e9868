// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Command implementations and shared CLI plumbing.

pub mod list;
pub mod performance;

use crate::{Action, Invocation};
use cpufreq::{CpuAccessor, SysfsLayout};
use std::io::Write;
use std::path::Path;
use tracing_subscriber::EnvFilter;

/// Installs a stderr `tracing` subscriber.
///
/// The default level is `error`, so a plain run prints nothing but the
/// listing. Each `-v` raises it one step; `RUST_LOG` takes precedence.
pub fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

/// Executes the invocation's actions in order, writing listings to `out`.
pub fn run<W: Write>(invocation: &Invocation, out: &mut W) -> anyhow::Result<()> {
    if invocation.actions.is_empty() {
        return Ok(());
    }

    let accessor = build_accessor(
        invocation.cli.config.as_deref(),
        invocation.cli.root.as_deref(),
    )?;

    for action in &invocation.actions {
        match action {
            Action::List => list::execute(&accessor, out)?,
            Action::SetPerformance => performance::execute(&accessor)?,
        }
    }
    Ok(())
}

/// Resolves the layout from an optional TOML file and an optional root prefix.
fn build_accessor(config: Option<&Path>, root: Option<&Path>) -> anyhow::Result<CpuAccessor> {
    let mut layout = match config {
        Some(path) => SysfsLayout::from_file(path)?,
        None => SysfsLayout::default(),
    };
    if let Some(root) = root {
        layout = layout.rooted_at(root);
    }
    tracing::debug!(
        "layout: cpuinfo={} cpu_dir={}",
        layout.cpuinfo_path.display(),
        layout.cpu_dir.display(),
    );
    Ok(CpuAccessor::new(layout))
}
