//! System control block.
#![allow(dead_code)]

use crate::mmio::MmioInterface;

pub const SYS_CTRL_BASE: usize = 0x480C_0000;

/// Absolute address of [field_sets::RevId], for external debuggers. First word of the block.
pub const REV_ID_ADDR: usize = SYS_CTRL_BASE;

device_driver::create_device!(
    device_name: SysCtrl,
    dsl: {
        config {
            type RegisterAddressType = u32;
            type DefaultByteOrder = LE;
        }
        /// Chip revision identification.
        register RevId {
            type Access = RO;
            const ADDRESS = 0x00;
            const SIZE_BITS = 32;

            /// Company, foundry, process, project and revision sub-fields.
            rev_id: uint = 0..9,
        },
    }
);

/// The system control block of this chip.
pub struct SysCtrlRegisters {
    device: SysCtrl<MmioInterface>,
}

impl SysCtrlRegisters {
    pub const fn new() -> Self {
        Self {
            // Safety: fixed base address of the block on this chip.
            device: SysCtrl::new(unsafe { MmioInterface::new(SYS_CTRL_BASE) }),
        }
    }

    /// Raw `REV_ID` word, only the low 9 bits are defined.
    pub fn rev_id(&mut self) -> u32 {
        match self.device.rev_id().read() {
            Ok(reg) => u32::from(reg.rev_id()),
            Err(e) => match e {},
        }
    }
}

impl Default for SysCtrlRegisters {
    fn default() -> Self {
        Self::new()
    }
}

impl core::ops::Deref for SysCtrlRegisters {
    type Target = SysCtrl<MmioInterface>;

    fn deref(&self) -> &Self::Target {
        &self.device
    }
}

impl core::ops::DerefMut for SysCtrlRegisters {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.device
    }
}
