#![cfg_attr(not(feature = "_test"), no_std)]

#[cfg(test)]
#[macro_use]
extern crate std;

mod build_info;
pub mod report;
mod snapshot;

pub use boot_flags::{BootFlags, Partition, ResetCause, RevisionId};
pub use build_info::BuildInfo;
pub use report::{boot_report_flags, report_lines, Report, ReportLine};
pub use snapshot::Snapshot;

use defmt_or_log::debug;

/// Access to the status a chip exposes right after boot2 handed over control.
///
/// Implemented once for real hardware and by [Snapshot] for tests and host tooling.
pub trait HardwareStatus {
    /// Read the word boot2 left at its fixed location.
    fn boot_flags(&mut self) -> u32;

    /// Obtain the cause of the last reset and latch it.
    ///
    /// Hardware may clear its own copy, subsequent calls return the latched value.
    fn store_reset_cause(&mut self) -> ResetCause;

    /// The reset cause latched by [HardwareStatus::store_reset_cause].
    fn reset_cause(&mut self) -> ResetCause;

    /// Read the silicon revision, live from the system control block.
    fn revision_id(&mut self) -> RevisionId;
}

impl<T: HardwareStatus + ?Sized> HardwareStatus for &mut T {
    fn boot_flags(&mut self) -> u32 {
        (**self).boot_flags()
    }

    fn store_reset_cause(&mut self) -> ResetCause {
        (**self).store_reset_cause()
    }

    fn reset_cause(&mut self) -> ResetCause {
        (**self).reset_cause()
    }

    fn revision_id(&mut self) -> RevisionId {
        (**self).revision_id()
    }
}

/// Snapshot of the boot outcome, taken once by [boot_init].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BootStatus {
    flags: BootFlags,
    /// Running the previous firmware version, boot2 rejected the main image.
    prev_version_fw: bool,
    reset_cause: ResetCause,
}

impl BootStatus {
    pub fn flags(&self) -> BootFlags {
        self.flags
    }

    pub fn prev_version_fw(&self) -> bool {
        self.prev_version_fw
    }

    /// [BootStatus::prev_version_fw] as the 0 or 1 word other firmware components expect.
    pub fn prev_version_fw_word(&self) -> u32 {
        u32::from(self.prev_version_fw)
    }

    pub fn reset_cause(&self) -> ResetCause {
        self.reset_cause
    }
}

/// Capture the boot flags and the reset cause.
///
/// Must run once early at startup, before anything that could reset the chip
/// or overwrite the boot flags location.
pub fn boot_init(mut hw: impl HardwareStatus) -> BootStatus {
    let flags = BootFlags::from_bits(hw.boot_flags());
    let prev_version_fw = flags.main_firmware_bad_crc();
    let reset_cause = hw.store_reset_cause();

    debug!("Boot flags {:?}, reset cause {:?}", flags, reset_cause);

    BootStatus {
        flags,
        prev_version_fw,
        reset_cause,
    }
}
