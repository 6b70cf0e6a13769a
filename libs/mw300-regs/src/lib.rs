//! Register blocks of the 88MW30x read during boot diagnostics.
#![no_std]

#[cfg(test)]
extern crate std;

pub mod mmio;
pub mod pmu;
pub mod sys_ctrl;

/// Word in which boot2 records the boot flags before jumping into the application.
pub const BOOT_FLAGS_ADDR: usize = 0x480C_0024;

/// Read the boot flags word left by boot2.
pub fn read_boot_flags() -> u32 {
    // Safety: fixed, aligned and always mapped word on this chip.
    unsafe { (BOOT_FLAGS_ADDR as *const u32).read_volatile() }
}
