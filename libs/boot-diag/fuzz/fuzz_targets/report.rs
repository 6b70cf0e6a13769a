#![no_main]

extern crate libfuzzer_sys;
extern crate std;

use std::string::String;
use std::vec::Vec;

use boot_diag::{boot_init, report_lines, BuildInfo, ReportLine, Snapshot};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|snapshot: Snapshot| fuzz(snapshot));

/// Tests for 'any hardware state decodes and reports without a crash, and the report is consistent'.
fn fuzz(snapshot: Snapshot) {
    let status = boot_init(snapshot);
    assert_eq!(status.flags().bits(), snapshot.boot_flags);
    assert!(status.prev_version_fw_word() <= 1);

    // Re-initializing from the same state yields the same status.
    assert_eq!(boot_init(snapshot), status);

    let lines: Vec<ReportLine<'_>> = report_lines(&status, snapshot, Some(&BuildInfo::CURRENT)).collect();

    let has_backup = lines.contains(&ReportLine::BackupFirmware);
    assert_eq!(has_backup, status.prev_version_fw());

    let has_watchdog = lines.contains(&ReportLine::WatchdogReset);
    assert_eq!(has_watchdog, snapshot.reset_cause.is_watchdog());

    for line in lines {
        let mut s = String::new();
        core::fmt::write(&mut s, format_args!("{line}")).unwrap();
        assert!(!s.is_empty());
    }
}
