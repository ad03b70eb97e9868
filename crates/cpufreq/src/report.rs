// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Per-core listing of frequency and governor state.
//!
//! # Output format
//! ```text
//! num cores: 1
//! cpu [0]: {
//!      cur_freq: 1800000 kHz
//!      min_freq: 600000 kHz
//!      max_freq: 1800000 kHz
//!      scaling_governor: ondemand
//!      scaling_min_freq: 600000 kHz
//!      scaling_max_freq: 1800000 kHz
//!      scaling_governors: [ conservative ondemand userspace powersave performance schedutil ]
//! }
//! ```
//! Each labeled line is indented with a tab followed by a space. Values
//! that could not be read print as empty strings.
//!
//! Frequencies are labeled `kHz`, the unit the kernel reports them in,
//! not `Hz`. Lines without a unit (`scaling_governor`) end right after
//! the value, with no trailing space.

use crate::{cores, Attribute, CpuAccessor};
use std::fmt;

/// One labeled line of a core block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListedField {
    pub attribute: Attribute,
    pub label: &'static str,
    /// Text printed after the value; empty for none.
    pub suffix: &'static str,
}

/// The seven attributes shown per core, in print order.
pub const LISTED_FIELDS: [ListedField; 7] = [
    ListedField {
        attribute: Attribute::CurFreq,
        label: "cur_freq:",
        suffix: "kHz",
    },
    ListedField {
        attribute: Attribute::MinFreq,
        label: "min_freq:",
        suffix: "kHz",
    },
    ListedField {
        attribute: Attribute::MaxFreq,
        label: "max_freq:",
        suffix: "kHz",
    },
    ListedField {
        attribute: Attribute::ScalingGovernor,
        label: "scaling_governor:",
        suffix: "",
    },
    ListedField {
        attribute: Attribute::ScalingMinFreq,
        label: "scaling_min_freq:",
        suffix: "kHz",
    },
    ListedField {
        attribute: Attribute::ScalingMaxFreq,
        label: "scaling_max_freq:",
        suffix: "kHz",
    },
    ListedField {
        attribute: Attribute::AvailableGovernors,
        label: "scaling_governors: [",
        suffix: "]",
    },
];

/// Snapshot of the listed attributes of a single core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoreReport {
    pub index: usize,
    /// One value per entry of [`LISTED_FIELDS`], same order.
    pub values: Vec<String>,
}

impl CoreReport {
    /// Reads every listed attribute of core `index`.
    pub fn read(accessor: &CpuAccessor, index: usize) -> Self {
        let values = LISTED_FIELDS
            .iter()
            .map(|field| accessor.read_or_empty(index, field.attribute))
            .collect();
        Self { index, values }
    }

    /// Value of a listed attribute, if it is part of the listing.
    pub fn value(&self, attribute: Attribute) -> Option<&str> {
        LISTED_FIELDS
            .iter()
            .position(|f| f.attribute == attribute)
            .and_then(|i| self.values.get(i))
            .map(String::as_str)
    }
}

impl fmt::Display for CoreReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "cpu [{}]: {{", self.index)?;
        for (field, value) in LISTED_FIELDS.iter().zip(&self.values) {
            if field.suffix.is_empty() {
                writeln!(f, "\t {} {}", field.label, value)?;
            } else {
                writeln!(f, "\t {} {} {}", field.label, value, field.suffix)?;
            }
        }
        writeln!(f, "}}")
    }
}

/// The full listing: the core count followed by one block per core.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Listing {
    pub cores: Vec<CoreReport>,
}

impl Listing {
    /// Counts cores and reads every core's attributes, in ascending order.
    ///
    /// An unreadable core-count source yields an empty listing.
    pub fn collect(accessor: &CpuAccessor) -> Self {
        let count = cores::count_cores_or_zero(accessor.layout());
        let cores = (0..count)
            .map(|index| CoreReport::read(accessor, index))
            .collect();
        Self { cores }
    }
}

impl fmt::Display for Listing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "num cores: {}", self.cores.len())?;
        for core in &self.cores {
            write!(f, "{core}")?;
        }
        Ok(())
    }
}
