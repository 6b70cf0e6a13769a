//! Power management unit, only the reset cause bookkeeping.
#![allow(dead_code)]

use crate::mmio::MmioInterface;

pub const PMU_BASE: usize = 0x480A_0000;

/// Absolute address of [field_sets::LastRstCause], for external debuggers.
pub const LAST_RST_CAUSE_ADDR: usize = PMU_BASE + 0x74;

device_driver::create_device!(
    device_name: Pmu,
    dsl: {
        config {
            type RegisterAddressType = u32;
            type DefaultByteOrder = LE;
        }
        /// Sources of the last reset, sticky until cleared.
        register LastRstCause {
            type Access = RO;
            const ADDRESS = 0x74;
            const SIZE_BITS = 32;

            cause: uint = 0..32,
        },
        /// Write ones to clear the matching bits of `LastRstCause`.
        register LastRstClr {
            type Access = WO;
            const ADDRESS = 0x78;
            const SIZE_BITS = 32;

            clear: uint = 0..32,
        },
    }
);

/// Power management unit of this chip.
pub struct PmuRegisters {
    device: Pmu<MmioInterface>,
}

impl PmuRegisters {
    pub const fn new() -> Self {
        Self {
            // Safety: fixed base address of the block on this chip.
            device: Pmu::new(unsafe { MmioInterface::new(PMU_BASE) }),
        }
    }

    pub fn last_reset_cause(&mut self) -> u32 {
        match self.device.last_rst_cause().read() {
            Ok(reg) => reg.cause(),
            Err(e) => match e {},
        }
    }

    /// Clear the given bits of the last reset cause.
    pub fn clear_reset_cause(&mut self, bits: u32) {
        if let Err(e) = self.device.last_rst_clr().write(|reg| reg.set_clear(bits)) {
            match e {}
        }
    }
}

impl Default for PmuRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl core::ops::Deref for PmuRegisters {
    type Target = Pmu<MmioInterface>;

    fn deref(&self) -> &Self::Target {
        &self.device
    }
}

impl core::ops::DerefMut for PmuRegisters {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.device
    }
}
