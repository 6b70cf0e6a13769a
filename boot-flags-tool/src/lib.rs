use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

pub use crate::config::{Config, TargetArgs};
use crate::util::parse_u32;

pub mod commands;
mod config;
pub mod processors;
pub mod util;

#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Configuration file path, defaults to the 88MW30x memory map when absent
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub commands: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the boot report for a boot flags word
    Decode(DecodeArguments),
    /// Compose the boot flags word boot2 would leave behind
    Encode(EncodeArguments),
    /// Read the boot status from a target and print the boot report
    Read {
        #[command(flatten)]
        probe_args: ProbeArgs,
    },
    /// Write a boot flags word to a target, standing in for boot2
    Inject {
        /// Boot flags word (hexadecimal with 0x prefix, or decimal)
        #[arg(value_parser = parse_u32)]
        flags: u32,

        #[command(flatten)]
        probe_args: ProbeArgs,
    },
}

#[derive(Args, Debug, Clone)]
pub struct DecodeArguments {
    /// Boot flags word (hexadecimal with 0x prefix, or decimal)
    #[arg(value_parser = parse_u32)]
    pub flags: u32,

    /// Content of the reset cause register
    #[arg(long, value_parser = parse_u32, default_value = "0")]
    pub reset_cause: u32,

    /// Content of the REV_ID register
    #[arg(long, value_parser = parse_u32, default_value = "0")]
    pub rev_id: u32,
}

#[derive(Args, Debug, Clone)]
pub struct EncodeArguments {
    /// Index of the firmware partition that was booted
    #[arg(long, default_value_t = 0)]
    pub partition: u8,

    /// Set the partition table field
    #[arg(long)]
    pub partition_table_flag: bool,

    /// Main firmware failed its CRC check and the backup was booted
    #[arg(long)]
    pub bad_crc: bool,
}

#[derive(Args, Debug, Clone)]
pub struct ProbeArgs {
    /// Which probe to use (passed to probe-rs)
    #[arg(short, long, value_name = "PROBE")]
    pub probe: Option<String>,

    /// Type of chip to attach to, overrides the configuration file (passed to probe-rs)
    #[arg(long, value_name = "CHIP")]
    pub chip: Option<String>,
}
