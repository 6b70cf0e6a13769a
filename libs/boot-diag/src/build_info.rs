/// Identification of the firmware build, printed as the first line of the boot report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BuildInfo {
    pub sdk_version: &'static str,
    pub compiler_version: &'static str,
    /// Formatted as `Mmm dd yyyy`.
    pub build_date: &'static str,
    /// Formatted as `hh:mm:ss`, UTC.
    pub build_time: &'static str,
}

impl BuildInfo {
    /// Build of this library, recorded by the build script.
    pub const CURRENT: BuildInfo = BuildInfo {
        sdk_version: env!("CARGO_PKG_VERSION"),
        compiler_version: env!("BOOT_DIAG_RUSTC_VERSION"),
        build_date: env!("BOOT_DIAG_BUILD_DATE"),
        build_time: env!("BOOT_DIAG_BUILD_TIME"),
    };
}

impl Default for BuildInfo {
    fn default() -> Self {
        Self::CURRENT
    }
}
