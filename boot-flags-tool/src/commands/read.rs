use boot_diag::{ResetCause, RevisionId, Snapshot};

use crate::ProbeArgs;
use crate::commands::decode::render;
use crate::config::{Config, TargetArgs};
use crate::processors::probe::{Target, WordMemory};

/// Collect the boot status words from the configured locations.
///
/// The reset cause is only read, clearing it is up to the firmware.
pub fn read_snapshot(memory: &mut impl WordMemory, target: &TargetArgs) -> anyhow::Result<Snapshot> {
    Ok(Snapshot {
        boot_flags: memory.read_word(target.boot_flags_addr)?,
        reset_cause: ResetCause::from_bits(memory.read_word(target.reset_cause_addr)?),
        revision_id: RevisionId::from_register(memory.read_word(target.rev_id_addr)?),
    })
}

pub async fn process(config: &Config, probe_args: ProbeArgs) -> anyhow::Result<()> {
    let chip = probe_args.chip.as_deref().unwrap_or(&config.target.chip);
    let mut target = Target::attach(chip, probe_args.probe.as_deref()).await?;

    let snapshot = read_snapshot(&mut target, &config.target)?;
    log::info!("Read boot status from {chip}");

    for line in render(snapshot) {
        println!("{line}");
    }
    Ok(())
}
