// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! # cpufreq
//!
//! Reads and writes the Linux cpufreq pseudo-files under
//! `/sys/devices/system/cpu/cpu*/cpufreq/`, and counts logical cores from
//! `/proc/cpuinfo`.
//!
//! # Key Components
//!
//! - [`SysfsLayout`] — where the cpuinfo listing and core directories live.
//!   Re-root it to point the whole crate at a fake tree.
//! - [`Attribute`] — the cpufreq files known per core.
//! - [`CpuAccessor`] — fresh, uncached single-line reads and truncating
//!   writes.
//! - [`Listing`] / [`CoreReport`] — the per-core listing.
//! - [`set_all_performance`] — pin every core to the `performance` governor.
//!
//! # Errors
//! The primitives return [`SysfsError`], which separates missing files from
//! permission problems. The higher-level listing and governor helpers
//! never fail: unreadable values become empty strings, an unreadable
//! cpuinfo counts as zero cores, and failed writes are collected in a
//! [`SetSummary`].
//!
//! # Example
//! ```no_run
//! use cpufreq::{CpuAccessor, Listing, SysfsLayout};
//!
//! let accessor = CpuAccessor::new(SysfsLayout::default());
//! print!("{}", Listing::collect(&accessor));
//! ```

mod accessor;
mod attribute;
mod cores;
mod error;
mod governor;
pub mod layout;
mod report;

pub use accessor::{read_first_line, read_first_line_from, CpuAccessor};
pub use attribute::Attribute;
pub use cores::{count_cores, count_cores_or_zero, count_markers};
pub use error::SysfsError;
pub use governor::{set_all_governors, set_all_performance, SetSummary, PERFORMANCE};
pub use layout::SysfsLayout;
pub use report::{CoreReport, ListedField, Listing, LISTED_FIELDS};
