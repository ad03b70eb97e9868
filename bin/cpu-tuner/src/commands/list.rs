// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! `cpu-tuner -l`: print the core count and one block per core.
//!
//! Unreadable attributes print as empty values; a missing cpuinfo prints
//! `num cores: 0`. Only a failure to write the output is an error.

use cpufreq::{CpuAccessor, Listing};
use std::io::Write;

pub fn execute<W: Write>(accessor: &CpuAccessor, out: &mut W) -> anyhow::Result<()> {
    let listing = Listing::collect(accessor);
    write!(out, "{listing}")?;
    out.flush()?;
    Ok(())
}
