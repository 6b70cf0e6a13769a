#![no_std]

#[cfg(test)]
extern crate std;

pub mod reset;

use core::sync::atomic::{AtomicBool, Ordering};

use boot_diag::{boot_init, boot_report_flags, BootStatus, BuildInfo, HardwareStatus, ResetCause, RevisionId};
use defmt_or_log::warn;
use mw300_regs::pmu::PmuRegisters;
use mw300_regs::sys_ctrl::SysCtrlRegisters;
use reset::ResetCauseLatch;

/// Whether the [Mw300] handle has been handed out.
static TAKEN: AtomicBool = AtomicBool::new(false);

/// Boot status registers of the 88MW30x.
pub struct Mw300 {
    sys_ctrl: SysCtrlRegisters,
    reset_cause: ResetCauseLatch<PmuRegisters>,
}

impl Mw300 {
    /// Take the handle, yields `None` if it was taken before.
    pub fn take() -> Option<Self> {
        if TAKEN
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }

        Some(Mw300 {
            sys_ctrl: SysCtrlRegisters::new(),
            reset_cause: ResetCauseLatch::new(PmuRegisters::new()),
        })
    }
}

impl HardwareStatus for Mw300 {
    fn boot_flags(&mut self) -> u32 {
        mw300_regs::read_boot_flags()
    }

    fn store_reset_cause(&mut self) -> ResetCause {
        self.reset_cause.store()
    }

    fn reset_cause(&mut self) -> ResetCause {
        if !self.reset_cause.is_latched() {
            warn!("Reset cause requested before it was stored, reading it without clearing");
        }
        self.reset_cause.get()
    }

    fn revision_id(&mut self) -> RevisionId {
        RevisionId::from_register(self.sys_ctrl.rev_id())
    }
}

/// Capture the boot status and log the boot report, for early application startup.
///
/// Yields `None` if the [Mw300] handle was already taken.
pub fn init_and_report() -> Option<(Mw300, BootStatus)> {
    let mut hw = Mw300::take()?;
    let status = boot_init(&mut hw);
    boot_report_flags(&status, &mut hw, &BuildInfo::CURRENT);
    Some((hw, status))
}
