use std::path::Path;

use mw300_regs::pmu::LAST_RST_CAUSE_ADDR;
use mw300_regs::sys_ctrl::REV_ID_ADDR;
use mw300_regs::BOOT_FLAGS_ADDR;
use serde::Deserialize;

#[derive(Deserialize, Debug, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Target chip and where it keeps its boot status.
    #[serde(default)]
    pub target: TargetArgs,
}

#[derive(Deserialize, Debug, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TargetArgs {
    /// Chip name as known by probe-rs.
    pub chip: String,
    /// Location of the word boot2 writes the boot flags to.
    pub boot_flags_addr: u64,
    /// Location of the `SYS_CTRL.REV_ID` register.
    pub rev_id_addr: u64,
    /// Location of the `PMU.LAST_RST_CAUSE` register.
    pub reset_cause_addr: u64,
}

impl Default for TargetArgs {
    fn default() -> Self {
        Self {
            chip: "88MW320".into(),
            boot_flags_addr: BOOT_FLAGS_ADDR as u64,
            rev_id_addr: REV_ID_ADDR as u64,
            reset_cause_addr: LAST_RST_CAUSE_ADDR as u64,
        }
    }
}

impl Config {
    pub fn read(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        Ok(toml::from_str::<Config>(&std::fs::read_to_string(path)?)?)
    }
}
