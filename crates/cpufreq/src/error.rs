// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Error types for sysfs attribute access.

use crate::Attribute;
use std::io;
use std::path::Path;

/// Errors that can occur when reading or writing cpufreq pseudo-files.
#[derive(Debug, thiserror::Error)]
pub enum SysfsError {
    /// The file does not exist (offline core, missing driver, no such attribute).
    #[error("sysfs path not found: {path}")]
    NotFound { path: String },

    /// The kernel refused access, typically a write attempted without root.
    #[error("permission denied: {path}")]
    PermissionDenied { path: String },

    /// Any other I/O failure while opening, reading or writing the file.
    #[error("I/O error on {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The attribute is not writable through cpufreq.
    #[error("attribute '{attribute}' is read-only")]
    ReadOnly { attribute: Attribute },

    /// A layout configuration file could not be read or parsed.
    #[error("configuration error: {0}")]
    ConfigError(String),
}

impl SysfsError {
    /// Classifies an I/O error raised while accessing `path`.
    pub fn from_io(path: &Path, err: io::Error) -> Self {
        let path = path.display().to_string();
        match err.kind() {
            io::ErrorKind::NotFound => Self::NotFound { path },
            io::ErrorKind::PermissionDenied => Self::PermissionDenied { path },
            _ => Self::Io { path, source: err },
        }
    }

    /// Returns `true` for errors of the "file absent" kind.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_not_found() {
        let err = SysfsError::from_io(
            Path::new("/sys/x"),
            io::Error::from(io::ErrorKind::NotFound),
        );
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "sysfs path not found: /sys/x");
    }

    #[test]
    fn test_classify_permission_denied() {
        let err = SysfsError::from_io(
            Path::new("/sys/x"),
            io::Error::from(io::ErrorKind::PermissionDenied),
        );
        assert!(matches!(err, SysfsError::PermissionDenied { .. }));
    }

    #[test]
    fn test_classify_other() {
        let err = SysfsError::from_io(
            Path::new("/sys/x"),
            io::Error::new(io::ErrorKind::InvalidInput, "bad governor"),
        );
        assert!(matches!(err, SysfsError::Io { .. }));
        assert!(err.to_string().contains("bad governor"));
    }
}
