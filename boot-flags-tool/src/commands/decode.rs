use boot_diag::{ResetCause, RevisionId, Snapshot, boot_init, report_lines};

use crate::DecodeArguments;

/// Boot report lines for a captured hardware state.
///
/// The build identification line is left out, it belongs to the firmware and not to the words.
pub fn render(snapshot: Snapshot) -> Vec<String> {
    let status = boot_init(snapshot);
    log::debug!("Decoded {:?}", status);

    report_lines(&status, snapshot, None)
        .map(|line| line.to_string())
        .collect()
}

pub fn process(args: DecodeArguments) -> anyhow::Result<()> {
    let snapshot = Snapshot {
        boot_flags: args.flags,
        reset_cause: ResetCause::from_bits(args.reset_cause),
        revision_id: RevisionId::from_register(args.rev_id),
    };

    for line in render(snapshot) {
        println!("{line}");
    }
    Ok(())
}
