// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Applying a scaling governor to every core.
//!
//! The governor name is written as-is; whether it appears in
//! `scaling_available_governors` is left for the kernel to decide.

use crate::{cores, Attribute, CpuAccessor, SysfsError};

/// Governor that pins each core to its maximum frequency.
pub const PERFORMANCE: &str = "performance";

/// Outcome of writing a governor to every discovered core.
#[derive(Debug, Default)]
pub struct SetSummary {
    /// Cores whose governor file accepted the write.
    pub applied: Vec<usize>,
    /// Cores whose write failed, with the reason.
    pub failed: Vec<(usize, SysfsError)>,
}

impl SetSummary {
    /// Number of cores visited.
    pub fn total(&self) -> usize {
        self.applied.len() + self.failed.len()
    }

    /// `true` when every visited core accepted the write.
    pub fn all_applied(&self) -> bool {
        self.failed.is_empty()
    }
}

/// Writes `governor` to `scaling_governor` of every core, in ascending order.
///
/// Failures on individual cores do not stop the loop and are not rolled
/// back; they are collected in the returned summary.
pub fn set_all_governors(accessor: &CpuAccessor, governor: &str) -> SetSummary {
    let count = cores::count_cores_or_zero(accessor.layout());
    let mut summary = SetSummary::default();

    for index in 0..count {
        match accessor.write(index, Attribute::ScalingGovernor, governor) {
            Ok(()) => summary.applied.push(index),
            Err(e) => {
                tracing::warn!("cpu{index}: governor '{governor}' not applied: {e}");
                summary.failed.push((index, e));
            }
        }
    }

    tracing::info!(
        "governor '{governor}' applied to {}/{} cores",
        summary.applied.len(),
        summary.total(),
    );
    summary
}

/// Sets every core to the `performance` governor.
pub fn set_all_performance(accessor: &CpuAccessor) -> SetSummary {
    set_all_governors(accessor, PERFORMANCE)
}
