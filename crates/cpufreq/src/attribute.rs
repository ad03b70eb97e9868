// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! The cpufreq attribute files exposed under each core directory.
//!
//! Every attribute lives at `cpu<N>/cpufreq/<file>` below the CPU base
//! directory. Frequencies are reported by the kernel in kHz; governor
//! lists are space-separated names. Values are never parsed here.

use std::fmt;

/// A single cpufreq pseudo-file under a core directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    /// `cpuinfo_cur_freq`: frequency reported by the hardware.
    CurFreq,
    /// `cpuinfo_min_freq`: lowest frequency the hardware supports.
    MinFreq,
    /// `cpuinfo_max_freq`: highest frequency the hardware supports.
    MaxFreq,
    /// `scaling_governor`: the active governor.
    ScalingGovernor,
    /// `scaling_min_freq`: policy lower bound.
    ScalingMinFreq,
    /// `scaling_max_freq`: policy upper bound.
    ScalingMaxFreq,
    /// `scaling_setspeed`: pinned frequency, only honoured by the
    /// `userspace` governor.
    ScalingSetSpeed,
    /// `scaling_available_governors`: governors the driver offers.
    AvailableGovernors,
    /// `scaling_available_frequencies`: discrete frequency steps, when the
    /// driver exposes them.
    AvailableFrequencies,
}

impl Attribute {
    /// Every attribute, in declaration order.
    pub const ALL: [Attribute; 9] = [
        Attribute::CurFreq,
        Attribute::MinFreq,
        Attribute::MaxFreq,
        Attribute::ScalingGovernor,
        Attribute::ScalingMinFreq,
        Attribute::ScalingMaxFreq,
        Attribute::ScalingSetSpeed,
        Attribute::AvailableGovernors,
        Attribute::AvailableFrequencies,
    ];

    /// The file name inside the `cpufreq/` directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Attribute::CurFreq => "cpuinfo_cur_freq",
            Attribute::MinFreq => "cpuinfo_min_freq",
            Attribute::MaxFreq => "cpuinfo_max_freq",
            Attribute::ScalingGovernor => "scaling_governor",
            Attribute::ScalingMinFreq => "scaling_min_freq",
            Attribute::ScalingMaxFreq => "scaling_max_freq",
            Attribute::ScalingSetSpeed => "scaling_setspeed",
            Attribute::AvailableGovernors => "scaling_available_governors",
            Attribute::AvailableFrequencies => "scaling_available_frequencies",
        }
    }

    /// Path fragment relative to a core directory, e.g. `cpufreq/scaling_governor`.
    pub fn relative_path(&self) -> String {
        format!("cpufreq/{}", self.file_name())
    }

    /// Whether the kernel accepts writes to this attribute.
    pub fn is_writable(&self) -> bool {
        matches!(
            self,
            Attribute::ScalingGovernor
                | Attribute::ScalingMinFreq
                | Attribute::ScalingMaxFreq
                | Attribute::ScalingSetSpeed
        )
    }
}

impl fmt::Display for Attribute {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.file_name())
    }
}
