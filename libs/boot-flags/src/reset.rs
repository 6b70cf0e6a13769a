/// Set when the last reset was triggered by the watchdog timer.
pub const WATCHDOG_RESET: u32 = 1 << 5;

/// Cause of the last chip reset, as latched by the PMU.
///
/// Only the watchdog bit is interpreted, the rest is reported verbatim.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "_test", derive(arbitrary::Arbitrary))]
pub struct ResetCause(u32);

impl ResetCause {
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub const fn is_watchdog(&self) -> bool {
        self.0 & WATCHDOG_RESET != 0
    }
}

impl From<u32> for ResetCause {
    fn from(bits: u32) -> Self {
        Self(bits)
    }
}

impl From<ResetCause> for u32 {
    fn from(val: ResetCause) -> Self {
        val.0
    }
}

impl core::fmt::LowerHex for ResetCause {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for ResetCause {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "ResetCause({=u32:#x})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn watchdog_bit() {
        assert!(ResetCause::from_bits(0x20).is_watchdog());
        assert!(ResetCause::from_bits(0xffff_ffff).is_watchdog());
        assert!(!ResetCause::from_bits(0).is_watchdog());
        assert!(!ResetCause::from_bits(!0x20).is_watchdog());
    }
}
