//! Latching of the PMU reset cause.
use boot_diag::ResetCause;
use defmt_or_log::debug;
use mw300_regs::pmu::PmuRegisters;

/// Register pair holding the sticky reset cause.
pub trait ResetCauseSource {
    fn last_reset_cause(&mut self) -> u32;

    /// Write ones to clear the matching cause bits.
    fn clear_reset_cause(&mut self, bits: u32);
}

impl ResetCauseSource for PmuRegisters {
    fn last_reset_cause(&mut self) -> u32 {
        PmuRegisters::last_reset_cause(self)
    }

    fn clear_reset_cause(&mut self, bits: u32) {
        PmuRegisters::clear_reset_cause(self, bits)
    }
}

/// Reads the reset cause once, clears it in hardware and keeps the value.
pub struct ResetCauseLatch<S> {
    source: S,
    latched: Option<ResetCause>,
}

impl<S: ResetCauseSource> ResetCauseLatch<S> {
    pub const fn new(source: S) -> Self {
        Self { source, latched: None }
    }

    /// Latch the cause and clear it in hardware on the first call; later calls return the latched value.
    pub fn store(&mut self) -> ResetCause {
        if let Some(cause) = self.latched {
            return cause;
        }

        let bits = self.source.last_reset_cause();
        // Clear so the next reset is not reported together with this one.
        self.source.clear_reset_cause(bits);
        debug!("Latched reset cause {:#x}", bits);

        let cause = ResetCause::from_bits(bits);
        self.latched = Some(cause);
        cause
    }

    /// Latched cause, or the live register value if nothing was stored yet.
    ///
    /// Never clears the hardware register.
    pub fn get(&mut self) -> ResetCause {
        match self.latched {
            Some(cause) => cause,
            None => ResetCause::from_bits(self.source.last_reset_cause()),
        }
    }

    pub fn is_latched(&self) -> bool {
        self.latched.is_some()
    }
}
