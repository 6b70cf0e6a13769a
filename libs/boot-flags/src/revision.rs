/// Meaningful bits of the `SYS_CTRL.REV_ID` register.
///
/// Packs the company, foundry, process, project and revision sub-fields,
/// which are not decoded any further.
pub const REVID_MASK: u32 = 0x1FF;

/// Silicon revision identifier of the chip.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RevisionId(u16);

impl RevisionId {
    /// Take the raw register word and drop everything above [REVID_MASK].
    pub const fn from_register(word: u32) -> Self {
        Self((word & REVID_MASK) as u16)
    }

    pub const fn bits(&self) -> u16 {
        self.0
    }
}

impl core::fmt::LowerHex for RevisionId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(feature = "_test")]
impl arbitrary::Arbitrary<'_> for RevisionId {
    fn arbitrary(u: &mut arbitrary::Unstructured<'_>) -> arbitrary::Result<Self> {
        Ok(RevisionId::from_register(<u32 as arbitrary::Arbitrary>::arbitrary(u)?))
    }
}
