// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `cpu-tuner -p`: set every core's governor to `performance`.
//!
//! Prints nothing. Cores that reject the write (usually for lack of root)
//! are logged at `warn` and otherwise skipped; the exit status stays zero.

use cpufreq::CpuAccessor;

pub fn execute(accessor: &CpuAccessor) -> anyhow::Result<()> {
    let summary = cpufreq::set_all_performance(accessor);
    if !summary.all_applied() {
        tracing::warn!(
            "{} of {} cores kept their previous governor",
            summary.failed.len(),
            summary.total(),
        );
    }
    Ok(())
}
