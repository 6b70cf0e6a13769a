use boot_flags::{ResetCause, RevisionId};

use crate::HardwareStatus;

/// Fixed hardware state, as captured earlier or crafted by hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "_test", derive(arbitrary::Arbitrary))]
pub struct Snapshot {
    pub boot_flags: u32,
    pub reset_cause: ResetCause,
    pub revision_id: RevisionId,
}

impl HardwareStatus for Snapshot {
    fn boot_flags(&mut self) -> u32 {
        self.boot_flags
    }

    fn store_reset_cause(&mut self) -> ResetCause {
        self.reset_cause
    }

    fn reset_cause(&mut self) -> ResetCause {
        self.reset_cause
    }

    fn revision_id(&mut self) -> RevisionId {
        self.revision_id
    }
}
