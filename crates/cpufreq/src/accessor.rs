// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Reading and writing single-line cpufreq attribute files.
//!
//! Every call opens the file, performs one read or write, and closes it
//! again. Nothing is cached: two reads of the same attribute may return
//! different values if the kernel changed it in between.

use crate::{Attribute, SysfsError, SysfsLayout};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::Path;

/// Per-core attribute access rooted at a [`SysfsLayout`].
#[derive(Debug, Clone, Default)]
pub struct CpuAccessor {
    layout: SysfsLayout,
}

impl CpuAccessor {
    /// Creates an accessor over the given layout.
    pub fn new(layout: SysfsLayout) -> Self {
        Self { layout }
    }

    /// The layout this accessor resolves paths against.
    pub fn layout(&self) -> &SysfsLayout {
        &self.layout
    }

    /// Reads the first line of an attribute, without its trailing newline.
    pub fn read(&self, index: usize, attribute: Attribute) -> Result<String, SysfsError> {
        let path = self.layout.attribute_path(index, attribute);
        let value = read_first_line_from(&path)?;
        tracing::trace!("cpu{index} {attribute} = '{value}'");
        Ok(value)
    }

    /// Reads an attribute, rendering any failure as an empty string.
    pub fn read_or_empty(&self, index: usize, attribute: Attribute) -> String {
        self.read(index, attribute).unwrap_or_else(|e| {
            tracing::debug!("cpu{index} {attribute} unreadable: {e}");
            String::new()
        })
    }

    /// Truncates an attribute file and writes `value` verbatim.
    ///
    /// No newline is appended. Read-only attributes are rejected without
    /// touching the file system.
    pub fn write(&self, index: usize, attribute: Attribute, value: &str) -> Result<(), SysfsError> {
        if !attribute.is_writable() {
            return Err(SysfsError::ReadOnly { attribute });
        }
        let path = self.layout.attribute_path(index, attribute);
        write_value_to(&path, value)?;
        tracing::debug!("cpu{index} {attribute} <- '{value}'");
        Ok(())
    }
}

/// Opens `path` and returns its first line.
pub fn read_first_line_from(path: &Path) -> Result<String, SysfsError> {
    let file = File::open(path).map_err(|e| SysfsError::from_io(path, e))?;
    read_first_line(BufReader::new(file)).map_err(|e| SysfsError::from_io(path, e))
}

/// Returns the first line of `reader` with a single trailing `\n` removed.
///
/// An empty source yields an empty string. A `\r` before the newline is
/// kept; bytes that are not valid UTF-8 become `U+FFFD`.
pub fn read_first_line<R: BufRead>(mut reader: R) -> io::Result<String> {
    let mut line = Vec::new();
    reader.read_until(b'\n', &mut line)?;
    if line.last() == Some(&b'\n') {
        line.pop();
    }
    Ok(String::from_utf8_lossy(&line).into_owned())
}

fn write_value_to(path: &Path, value: &str) -> Result<(), SysfsError> {
    let mut file = File::create(path).map_err(|e| SysfsError::from_io(path, e))?;
    // sysfs validates the value on write, so EINVAL and friends surface here.
    file.write_all(value.as_bytes())
        .map_err(|e| SysfsError::from_io(path, e))
}
