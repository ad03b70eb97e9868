// Copyright (c) 2025 Dimitris Kafetzis
//
// Licensed under the MIT License.
// See LICENSE file in the project root for full license information.
//
// SPDX-License-Identifier: MIT

//! Integration tests: listing and governor changes over a fake sysfs root.
//!
//! Each test builds `<tmp>/proc/cpuinfo` and
//! `<tmp>/sys/devices/system/cpu/cpu<N>/cpufreq/*` and points a re-rooted
//! [`SysfsLayout`] at it, so no test touches the host's real files.

use cpufreq::{
    set_all_performance, Attribute, CpuAccessor, Listing, SysfsLayout, LISTED_FIELDS,
};
use std::path::Path;
use tempfile::TempDir;

// ── Helpers ────────────────────────────────────────────────────

const GOVERNORS: &str = "conservative ondemand userspace powersave performance schedutil";

/// Creates a fake root with `cores` cpuinfo entries and a full cpufreq
/// directory for each core.
fn fake_root(cores: usize) -> (TempDir, CpuAccessor) {
    let dir = tempfile::tempdir().unwrap();
    let layout = SysfsLayout::default().rooted_at(dir.path());

    std::fs::create_dir_all(layout.cpuinfo_path.parent().unwrap()).unwrap();
    let cpuinfo: String = (0..cores)
        .map(|i| format!("processor\t: {i}\nBogoMIPS\t: 108.00\n\n"))
        .collect();
    std::fs::write(&layout.cpuinfo_path, cpuinfo).unwrap();

    for i in 0..cores {
        let khz = 1_000_000 + 100_000 * i;
        write_attr(&layout, i, Attribute::CurFreq, &format!("{khz}\n"));
        write_attr(&layout, i, Attribute::MinFreq, "600000\n");
        write_attr(&layout, i, Attribute::MaxFreq, "1800000\n");
        write_attr(&layout, i, Attribute::ScalingGovernor, "ondemand\n");
        write_attr(&layout, i, Attribute::ScalingMinFreq, "600000\n");
        write_attr(&layout, i, Attribute::ScalingMaxFreq, "1800000\n");
        write_attr(&layout, i, Attribute::AvailableGovernors, &format!("{GOVERNORS}\n"));
    }

    (dir, CpuAccessor::new(layout))
}

fn write_attr(layout: &SysfsLayout, index: usize, attribute: Attribute, content: &str) {
    let path = layout.attribute_path(index, attribute);
    std::fs::create_dir_all(path.parent().unwrap()).unwrap();
    std::fs::write(path, content).unwrap();
}

fn governor_file(root: &Path, index: usize) -> String {
    let path = root.join(format!(
        "sys/devices/system/cpu/cpu{index}/cpufreq/scaling_governor"
    ));
    std::fs::read_to_string(path).unwrap()
}

// ── Listing ────────────────────────────────────────────────────

#[test]
fn test_listing_one_block_per_core() {
    let (_dir, acc) = fake_root(4);
    let text = Listing::collect(&acc).to_string();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "num cores: 4");
    // Header + 4 blocks of (open + 7 fields + close).
    assert_eq!(lines.len(), 1 + 4 * 9);

    for (i, block) in lines[1..].chunks(9).enumerate() {
        assert_eq!(block[0], format!("cpu [{i}]: {{"));
        for (line, field) in block[1..8].iter().zip(LISTED_FIELDS.iter()) {
            assert!(
                line.starts_with(&format!("\t {}", field.label)),
                "unexpected line order: {line}"
            );
        }
        assert_eq!(block[8], "}");
    }
}

#[test]
fn test_listing_values() {
    let (_dir, acc) = fake_root(2);
    let listing = Listing::collect(&acc);
    let core1 = &listing.cores[1];

    assert_eq!(core1.index, 1);
    assert_eq!(core1.value(Attribute::CurFreq), Some("1100000"));
    assert_eq!(core1.value(Attribute::ScalingGovernor), Some("ondemand"));
    assert_eq!(core1.value(Attribute::AvailableGovernors), Some(GOVERNORS));

    let text = listing.to_string();
    assert!(text.contains("\t cur_freq: 1100000 kHz\n"));
    assert!(text.contains(&format!("\t scaling_governors: [ {GOVERNORS} ]\n")));
}

#[test]
fn test_listing_missing_cpufreq_dir() {
    let (dir, acc) = fake_root(2);
    std::fs::remove_dir_all(dir.path().join("sys/devices/system/cpu/cpu1")).unwrap();

    let listing = Listing::collect(&acc);
    assert_eq!(listing.cores.len(), 2);
    assert!(listing.cores[1].values.iter().all(String::is_empty));
    assert_eq!(listing.cores[0].value(Attribute::MaxFreq), Some("1800000"));
}

#[test]
fn test_listing_unreadable_cpuinfo() {
    let dir = tempfile::tempdir().unwrap();
    let acc = CpuAccessor::new(SysfsLayout::default().rooted_at(dir.path()));
    assert_eq!(Listing::collect(&acc).to_string(), "num cores: 0\n");
}

#[test]
fn test_listing_reads_live_values() {
    let (_dir, acc) = fake_root(1);
    let before = Listing::collect(&acc);
    write_attr(acc.layout(), 0, Attribute::CurFreq, "700000\n");
    let after = Listing::collect(&acc);

    assert_eq!(before.cores[0].value(Attribute::CurFreq), Some("1000000"));
    assert_eq!(after.cores[0].value(Attribute::CurFreq), Some("700000"));
}

// ── Set performance ────────────────────────────────────────────

#[test]
fn test_set_all_performance_overwrites_every_core() {
    let (dir, acc) = fake_root(6);
    // Varied prior contents, including a longer value than "performance".
    write_attr(acc.layout(), 2, Attribute::ScalingGovernor, "conservative-extended-name\n");
    write_attr(acc.layout(), 4, Attribute::ScalingGovernor, "");

    let summary = set_all_performance(&acc);
    assert!(summary.all_applied());
    assert_eq!(summary.total(), 6);

    for i in 0..6 {
        assert_eq!(governor_file(dir.path(), i), "performance");
    }
}

#[test]
fn test_set_then_list() {
    let (_dir, acc) = fake_root(3);
    set_all_performance(&acc);
    let listing = Listing::collect(&acc);
    for core in &listing.cores {
        assert_eq!(core.value(Attribute::ScalingGovernor), Some("performance"));
    }
}

#[test]
fn test_marker_counting_drives_core_range() {
    let (dir, acc) = fake_root(2);
    // Two extra marker lines without matching core directories.
    let cpuinfo = "processor : 0\nprocessor : 1\nprocessor : 2\ncoprocessor : none\n";
    std::fs::write(dir.path().join("proc/cpuinfo"), cpuinfo).unwrap();

    let summary = set_all_performance(&acc);
    assert_eq!(summary.total(), 4);
    assert_eq!(summary.applied, vec![0, 1]);
    assert_eq!(
        summary.failed.iter().map(|(i, _)| *i).collect::<Vec<_>>(),
        vec![2, 3]
    );
}
