use std::io::Write;

use boot_diag::{ResetCause, RevisionId, Snapshot};
use boot_flags_tool::commands::{encode, render};
use boot_flags_tool::util::parse_u32;
use boot_flags_tool::{Cli, Commands, Config, EncodeArguments};
use clap::Parser;

#[test]
fn decode_backup_after_watchdog() {
    let lines = render(Snapshot {
        boot_flags: 0x111,
        reset_cause: ResetCause::from_bits(0x20),
        revision_id: RevisionId::from_register(0x2a1),
    });

    assert_eq!(
        lines,
        [
            "Boot Flags: 0x111",
            " - Partition Table: 1",
            " - Firmware Partition: 1",
            " - Backup firmware due to CRC error in main firmware",
            "Boot Info:",
            " - Chip revision id: 0xa1",
            "Reset Cause Register: 0x20",
            " - Watchdog reset bit is set",
        ]
    );
}

#[test]
fn encode_matches_decode() {
    let args = EncodeArguments {
        partition: 2,
        partition_table_flag: false,
        bad_crc: true,
    };
    let flags = encode(&args).unwrap();
    assert_eq!(flags.bits(), 0x12);

    let lines = render(Snapshot {
        boot_flags: flags.bits(),
        ..Default::default()
    });
    assert_eq!(lines[2], " - Firmware Partition: 2");
    assert_eq!(lines[3], " - Backup firmware due to CRC error in main firmware");
}

#[test]
fn encode_rejects_partition() {
    let args = EncodeArguments {
        partition: 4,
        partition_table_flag: false,
        bad_crc: false,
    };
    let err = encode(&args).unwrap_err();
    assert!(err.to_string().contains("maximum is 3"));
}

#[test]
fn parse_words() {
    assert_eq!(parse_u32("0x111"), Ok(0x111));
    assert_eq!(parse_u32("0XFFFF_FFFF"), Ok(0xffff_ffff));
    assert_eq!(parse_u32("273"), Ok(273));
    assert!(parse_u32("0x1_0000_0000").is_err());
    assert!(parse_u32("boot").is_err());
}

#[test]
fn cli_decode_arguments() {
    let cli = Cli::try_parse_from(["boot-flags-tool", "decode", "0x10", "--reset-cause", "0x20"]).unwrap();
    let Some(Commands::Decode(args)) = cli.commands else {
        panic!("expected decode command");
    };
    assert_eq!(args.flags, 0x10);
    assert_eq!(args.reset_cause, 0x20);
    assert_eq!(args.rev_id, 0);
}

#[test]
fn cli_encode_partition_table_flag() {
    let cli = Cli::try_parse_from(["boot-flags-tool", "encode", "--partition", "1", "--partition-table-flag"]).unwrap();
    let Some(Commands::Encode(args)) = cli.commands else {
        panic!("expected encode command");
    };
    assert_eq!(encode(&args).unwrap().bits(), 0x101);
}

#[test]
fn config_defaults() {
    let config = Config::default();
    assert_eq!(config.target.chip, "88MW320");
    assert_eq!(config.target.boot_flags_addr, 0x480C_0024);
    assert_eq!(config.target.rev_id_addr, 0x480C_0000);
    assert_eq!(config.target.reset_cause_addr, 0x480A_0074);
}

#[test]
fn config_partial_override() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[target]\nchip = \"88MW322\"\nboot_flags_addr = 0x2000_0000").unwrap();

    let config = Config::read(file.path()).unwrap();
    assert_eq!(config.target.chip, "88MW322");
    assert_eq!(config.target.boot_flags_addr, 0x2000_0000);
    assert_eq!(config.target.reset_cause_addr, Config::default().target.reset_cause_addr);
}

#[test]
fn config_rejects_unknown_keys() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[target]\nboot_flag_addr = 0").unwrap();

    assert!(Config::read(file.path()).is_err());
}
