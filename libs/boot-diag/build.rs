//! Records the compiler version and the build date/time for the boot banner.

use std::env;
use std::process::Command;

use chrono::{DateTime, Utc};

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=src");
    println!("cargo:rerun-if-env-changed=SOURCE_DATE_EPOCH");

    let rustc = env::var("RUSTC").unwrap_or_else(|_| "rustc".into());
    let version = Command::new(&rustc)
        .arg("--version")
        .output()
        .ok()
        .filter(|output| output.status.success())
        .and_then(|output| String::from_utf8(output.stdout).ok())
        .and_then(|s| s.split_whitespace().nth(1).map(str::to_owned))
        .unwrap_or_else(|| "unknown".into());
    println!("cargo:rustc-env=BOOT_DIAG_RUSTC_VERSION={version}");

    // Reproducible builds pin the timestamp through SOURCE_DATE_EPOCH.
    let built = env::var("SOURCE_DATE_EPOCH")
        .ok()
        .and_then(|s| s.parse::<i64>().ok())
        .and_then(|secs| DateTime::from_timestamp(secs, 0))
        .unwrap_or_else(Utc::now);

    println!("cargo:rustc-env=BOOT_DIAG_BUILD_DATE={}", built.format("%b %e %Y"));
    println!("cargo:rustc-env=BOOT_DIAG_BUILD_TIME={}", built.format("%H:%M:%S"));
}
