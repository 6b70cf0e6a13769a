//! Human readable summary of the boot outcome.

use boot_flags::{BootFlags, Partition, ResetCause, RevisionId};
use defmt_or_log::{info, unwrap};
use heapless::Vec;

use crate::{BootStatus, BuildInfo, HardwareStatus};

/// Every line of [ReportLine] at most once.
const REPORT_MAX_LINES: usize = 9;

/// A single line of the boot report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportLine<'a> {
    Build(&'a BuildInfo),
    Flags(BootFlags),
    /// Partition table flag, collapsed to 0 or 1.
    PartitionTable(bool),
    FirmwarePartition(Partition),
    /// Boot2 fell back to the backup firmware.
    BackupFirmware,
    BootInfo,
    RevisionId(RevisionId),
    ResetCause(ResetCause),
    WatchdogReset,
}

impl core::fmt::Display for ReportLine<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReportLine::Build(info) => write!(
                f,
                "SDK-{} rustc-{} ({} {})",
                info.sdk_version, info.compiler_version, info.build_date, info.build_time
            ),
            ReportLine::Flags(flags) => write!(f, "Boot Flags: 0x{:x}", flags),
            ReportLine::PartitionTable(flag) => write!(f, " - Partition Table: {}", u8::from(*flag)),
            ReportLine::FirmwarePartition(partition) => write!(f, " - Firmware Partition: {}", partition),
            ReportLine::BackupFirmware => f.write_str(" - Backup firmware due to CRC error in main firmware"),
            ReportLine::BootInfo => f.write_str("Boot Info:"),
            ReportLine::RevisionId(rev) => write!(f, " - Chip revision id: 0x{:x}", rev),
            ReportLine::ResetCause(cause) => write!(f, "Reset Cause Register: 0x{:x}", cause),
            ReportLine::WatchdogReset => f.write_str(" - Watchdog reset bit is set"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ReportLine<'_> {
    fn format(&self, f: defmt::Formatter) {
        match self {
            ReportLine::Build(info) => defmt::write!(
                f,
                "SDK-{=str} rustc-{=str} ({=str} {=str})",
                info.sdk_version,
                info.compiler_version,
                info.build_date,
                info.build_time
            ),
            ReportLine::Flags(flags) => defmt::write!(f, "Boot Flags: {=u32:#x}", flags.bits()),
            ReportLine::PartitionTable(flag) => defmt::write!(f, " - Partition Table: {=u8}", u8::from(*flag)),
            ReportLine::FirmwarePartition(partition) => {
                defmt::write!(f, " - Firmware Partition: {=u8}", partition.index())
            }
            ReportLine::BackupFirmware => defmt::write!(f, " - Backup firmware due to CRC error in main firmware"),
            ReportLine::BootInfo => defmt::write!(f, "Boot Info:"),
            ReportLine::RevisionId(rev) => defmt::write!(f, " - Chip revision id: {=u16:#x}", rev.bits()),
            ReportLine::ResetCause(cause) => defmt::write!(f, "Reset Cause Register: {=u32:#x}", cause.bits()),
            ReportLine::WatchdogReset => defmt::write!(f, " - Watchdog reset bit is set"),
        }
    }
}

/// Lines of a boot report, in the order they are printed.
#[derive(Debug, Clone)]
pub struct Report<'a> {
    /// Stored last line first, so that popping yields them in order.
    pending: Vec<ReportLine<'a>, REPORT_MAX_LINES>,
}

impl<'a> Report<'a> {
    fn new(mut lines: Vec<ReportLine<'a>, REPORT_MAX_LINES>) -> Self {
        lines.reverse();
        Self { pending: lines }
    }
}

impl<'a> Iterator for Report<'a> {
    type Item = ReportLine<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pending.pop()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.pending.len(), Some(self.pending.len()))
    }
}

impl ExactSizeIterator for Report<'_> {}

/// Assemble the boot report.
///
/// The revision id and the latched reset cause are read from `hw` at this point,
/// the boot flags come from `status`. Without `build` the identification line is left out.
pub fn report_lines<'a>(status: &BootStatus, mut hw: impl HardwareStatus, build: Option<&'a BuildInfo>) -> Report<'a> {
    let flags = status.flags();
    let reset_cause = hw.reset_cause();

    let mut lines: Vec<ReportLine<'a>, REPORT_MAX_LINES> = Vec::new();
    let mut push = |line: ReportLine<'a>| unwrap!(lines.push(line));

    if let Some(build) = build {
        push(ReportLine::Build(build));
    }
    push(ReportLine::Flags(flags));
    push(ReportLine::PartitionTable(flags.partition_table_flag()));
    push(ReportLine::FirmwarePartition(flags.active_partition()));
    if flags.main_firmware_bad_crc() {
        push(ReportLine::BackupFirmware);
    }
    push(ReportLine::BootInfo);
    push(ReportLine::RevisionId(hw.revision_id()));
    push(ReportLine::ResetCause(reset_cause));
    if reset_cause.is_watchdog() {
        push(ReportLine::WatchdogReset);
    }

    Report::new(lines)
}

/// Log the boot report.
///
/// Purely observational, takes the [BootStatus] produced by [crate::boot_init].
pub fn boot_report_flags(status: &BootStatus, hw: impl HardwareStatus, build: &BuildInfo) {
    for line in report_lines(status, hw, Some(build)) {
        info!("{}", line);
    }
}
