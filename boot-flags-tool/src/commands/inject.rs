use anyhow::bail;
use boot_diag::BootFlags;

use crate::ProbeArgs;
use crate::config::Config;
use crate::processors::probe::{Target, WordMemory};

/// Write the boot flags word and read it back.
///
/// A mismatch means the write did not land, for instance a wrong `boot_flags_addr` in the config.
pub fn write_boot_flags(memory: &mut impl WordMemory, address: u64, flags: u32) -> anyhow::Result<()> {
    log::info!("Writing {:?} to 0x{:08x}", BootFlags::from_bits(flags), address);
    memory.write_word(address, flags)?;

    let readback = memory.read_word(address)?;
    if readback != flags {
        bail!("Boot flags readback 0x{readback:08x} does not match written 0x{flags:08x}");
    }
    Ok(())
}

pub async fn process(config: &Config, flags: u32, probe_args: ProbeArgs) -> anyhow::Result<()> {
    let chip = probe_args.chip.as_deref().unwrap_or(&config.target.chip);
    let mut target = Target::attach(chip, probe_args.probe.as_deref()).await?;

    write_boot_flags(&mut target, config.target.boot_flags_addr, flags)
}
