use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Index of the firmware partition boot2 started, in the low two bits.
pub const BOOT_PARTITION_MASK: u32 = 0x03;

/// Partition table field.
///
/// Only ever interpreted as a whole: any bit set under the mask counts as set.
pub const BOOT_PARTITION_TABLE_MASK: u32 = 0x100;

/// Main firmware failed its CRC check and the backup firmware was started instead.
pub const BOOT_MAIN_FIRMWARE_BAD_CRC: u32 = 0x10;

/// Firmware partition index as encoded in [BootFlags].
///
/// One variant per value of [BOOT_PARTITION_MASK].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, TryFromPrimitive, IntoPrimitive)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "_test", derive(arbitrary::Arbitrary))]
#[repr(u8)]
pub enum Partition {
    P0 = 0,
    P1 = 1,
    P2 = 2,
    P3 = 3,
}

impl Partition {
    pub const MAX: Partition = Partition::P3;

    pub fn index(&self) -> u8 {
        u8::from(*self)
    }
}

impl core::fmt::Display for Partition {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.index())
    }
}

/// Boot flags word as left behind by boot2 before jumping into the application.
///
/// Any 32-bit value is accepted, bits outside the known fields are kept as-is.
#[derive(Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "_test", derive(arbitrary::Arbitrary))]
pub struct BootFlags(u32);

impl BootFlags {
    pub const fn from_bits(bits: u32) -> Self {
        Self(bits)
    }

    /// Compose the word boot2 would write for the given outcome.
    pub fn new(partition: Partition, partition_table_flag: bool, main_firmware_bad_crc: bool) -> Self {
        let mut bits = u32::from(u8::from(partition));
        if partition_table_flag {
            bits |= BOOT_PARTITION_TABLE_MASK;
        }
        if main_firmware_bad_crc {
            bits |= BOOT_MAIN_FIRMWARE_BAD_CRC;
        }
        Self(bits)
    }

    pub const fn bits(&self) -> u32 {
        self.0
    }

    pub fn active_partition(&self) -> Partition {
        // Note(unsafe): every value of the 2-bit mask is a valid Partition.
        unsafe { Partition::try_from_primitive((self.0 & BOOT_PARTITION_MASK) as u8).unwrap_unchecked() }
    }

    /// Any bit set under [BOOT_PARTITION_TABLE_MASK] collapses to `true`.
    pub const fn partition_table_flag(&self) -> bool {
        self.0 & BOOT_PARTITION_TABLE_MASK != 0
    }

    pub const fn main_firmware_bad_crc(&self) -> bool {
        self.0 & BOOT_MAIN_FIRMWARE_BAD_CRC != 0
    }
}

impl From<u32> for BootFlags {
    fn from(bits: u32) -> Self {
        Self::from_bits(bits)
    }
}

impl From<BootFlags> for u32 {
    fn from(val: BootFlags) -> Self {
        val.0
    }
}

impl core::fmt::Debug for BootFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("BootFlags")
            .field("bits", &format_args!("{:#x}", self.0))
            .field("partition", &self.active_partition())
            .field("partition_table_flag", &self.partition_table_flag())
            .field("main_firmware_bad_crc", &self.main_firmware_bad_crc())
            .finish()
    }
}

impl core::fmt::LowerHex for BootFlags {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::LowerHex::fmt(&self.0, f)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for BootFlags {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(
            f,
            "BootFlags {{ bits: {=u32:#x}, partition: {}, partition_table_flag: {}, main_firmware_bad_crc: {} }}",
            self.0,
            self.active_partition(),
            self.partition_table_flag(),
            self.main_firmware_bad_crc()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Test whether we can construct only valid [Partition] values, and get the index back out.
    #[test]
    fn partition_construction() {
        for i in 0..=3u8 {
            let partition = Partition::try_from(i).unwrap();
            assert_eq!(u8::from(partition), i);
            assert_eq!(partition.index(), i);
        }

        for i in 4..=0xffu8 {
            assert!(Partition::try_from(i).is_err());
        }
    }

    #[test]
    fn every_masked_value_is_a_partition() {
        for word in [0u32, 1, 2, 3, 0xffff_fffc, 0xffff_ffff] {
            let flags = BootFlags::from_bits(word);
            assert_eq!(u32::from(flags.active_partition().index()), word & BOOT_PARTITION_MASK);
        }
    }

    #[test]
    fn empty_word() {
        let flags = BootFlags::from_bits(0);
        assert_eq!(flags.active_partition(), Partition::P0);
        assert!(!flags.partition_table_flag());
        assert!(!flags.main_firmware_bad_crc());
    }

    /// Fields are decoded independently of unrelated bits in the word.
    #[test]
    fn fields_ignore_unknown_bits() {
        let flags = BootFlags::from_bits(0xffff_fe00 | 0x2);
        assert_eq!(flags.active_partition(), Partition::P2);
        assert!(!flags.partition_table_flag());
        assert!(!flags.main_firmware_bad_crc());

        let flags = BootFlags::from_bits(0x0000_0113);
        assert_eq!(flags.active_partition(), Partition::P3);
        assert!(flags.partition_table_flag());
        assert!(flags.main_firmware_bad_crc());
    }

    #[test]
    fn bad_crc_bit() {
        assert!(BootFlags::from_bits(BOOT_MAIN_FIRMWARE_BAD_CRC).main_firmware_bad_crc());
        assert!(!BootFlags::from_bits(!BOOT_MAIN_FIRMWARE_BAD_CRC).main_firmware_bad_crc());
    }

    /// Compose every combination of fields and read them back.
    #[test]
    fn compose_fields() {
        for i in 0..=3u8 {
            let partition = Partition::try_from(i).unwrap();
            for table_flag in [false, true] {
                for bad_crc in [false, true] {
                    let flags = BootFlags::new(partition, table_flag, bad_crc);
                    assert_eq!(flags.active_partition(), partition);
                    assert_eq!(flags.partition_table_flag(), table_flag);
                    assert_eq!(flags.main_firmware_bad_crc(), bad_crc);
                }
            }
        }
    }

    #[test]
    fn compose_known_words() {
        assert_eq!(BootFlags::new(Partition::P1, false, false).bits(), 0x001);
        assert_eq!(BootFlags::new(Partition::P1, true, true).bits(), 0x111);
    }

    #[test]
    fn debug_output() {
        let flags = BootFlags::from_bits(0x111);
        assert_eq!(
            format!("{:?}", flags),
            "BootFlags { bits: 0x111, partition: P1, partition_table_flag: true, main_firmware_bad_crc: true }"
        );
    }
}
