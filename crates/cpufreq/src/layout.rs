// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! File-system layout: where the core-count source and core directories live.
//!
//! # TOML Format
//! All keys are optional; missing keys keep the kernel defaults.
//! ```toml
//! cpuinfo_path = "/proc/cpuinfo"
//! cpu_dir = "/sys/devices/system/cpu"
//! core_marker = "processor"
//! ```

use crate::{Attribute, SysfsError};
use std::path::{Path, PathBuf};

/// Default path of the logical-processor listing.
pub const CPUINFO_PATH: &str = "/proc/cpuinfo";

/// Default base directory holding `cpu<N>` subdirectories.
pub const CPU_DIR: &str = "/sys/devices/system/cpu";

/// Substring that marks one logical processor in the cpuinfo listing.
pub const CORE_MARKER: &str = "processor";

/// Named path fragments used to locate every file the tool touches.
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SysfsLayout {
    /// File scanned to count logical cores.
    pub cpuinfo_path: PathBuf,
    /// Directory containing one `cpu<N>` directory per core.
    pub cpu_dir: PathBuf,
    /// Marker counted in `cpuinfo_path`, matched as a plain substring.
    pub core_marker: String,
}

impl Default for SysfsLayout {
    fn default() -> Self {
        Self {
            cpuinfo_path: PathBuf::from(CPUINFO_PATH),
            cpu_dir: PathBuf::from(CPU_DIR),
            core_marker: CORE_MARKER.to_string(),
        }
    }
}

impl SysfsLayout {
    /// Loads a layout from a TOML file.
    pub fn from_file(path: &Path) -> Result<Self, SysfsError> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            SysfsError::ConfigError(format!("cannot read config '{}': {e}", path.display()))
        })?;
        Self::from_toml(&content)
    }

    /// Parses a layout from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, SysfsError> {
        toml::from_str(toml_str)
            .map_err(|e| SysfsError::ConfigError(format!("TOML parse error: {e}")))
    }

    /// Re-bases both paths under `root`, so `/proc/cpuinfo` becomes
    /// `<root>/proc/cpuinfo`. Relative paths are joined as-is.
    pub fn rooted_at(self, root: &Path) -> Self {
        Self {
            cpuinfo_path: rebase(root, &self.cpuinfo_path),
            cpu_dir: rebase(root, &self.cpu_dir),
            core_marker: self.core_marker,
        }
    }

    /// Directory of a single core, `<cpu_dir>/cpu<index>`.
    pub fn core_dir(&self, index: usize) -> PathBuf {
        self.cpu_dir.join(format!("cpu{index}"))
    }

    /// Full path of one attribute file for one core.
    pub fn attribute_path(&self, index: usize, attribute: Attribute) -> PathBuf {
        self.core_dir(index).join(attribute.relative_path())
    }
}

fn rebase(root: &Path, path: &Path) -> PathBuf {
    root.join(path.strip_prefix("/").unwrap_or(path))
}
