// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Logical core discovery from `/proc/cpuinfo`.
//!
//! The listing has one `processor : N` line per logical CPU. A line counts
//! when it contains the marker anywhere, as a case-sensitive substring.

use crate::{SysfsError, SysfsLayout};
use std::fs::File;
use std::io::{self, BufRead, BufReader};

/// Counts the logical cores listed in the layout's cpuinfo file.
pub fn count_cores(layout: &SysfsLayout) -> Result<usize, SysfsError> {
    let path = &layout.cpuinfo_path;
    let file = File::open(path).map_err(|e| SysfsError::from_io(path, e))?;
    let count = count_markers(BufReader::new(file), &layout.core_marker)
        .map_err(|e| SysfsError::from_io(path, e))?;
    tracing::debug!("{} lists {count} cores", path.display());
    Ok(count)
}

/// Like [`count_cores`], but reports an unreadable source as zero cores.
pub fn count_cores_or_zero(layout: &SysfsLayout) -> usize {
    count_cores(layout).unwrap_or_else(|e| {
        tracing::debug!("core count unavailable: {e}");
        0
    })
}

/// Counts lines of `reader` that contain `marker` anywhere.
///
/// Lines need not be valid UTF-8.
pub fn count_markers<R: BufRead>(mut reader: R, marker: &str) -> io::Result<usize> {
    let needle = marker.as_bytes();
    let mut line = Vec::new();
    let mut count = 0;
    loop {
        line.clear();
        if reader.read_until(b'\n', &mut line)? == 0 {
            return Ok(count);
        }
        if contains(&line, needle) {
            count += 1;
        }
    }
}

fn contains(haystack: &[u8], needle: &[u8]) -> bool {
    needle.is_empty() || haystack.windows(needle.len()).any(|w| w == needle)
}
