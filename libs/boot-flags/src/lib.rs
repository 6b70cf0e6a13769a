//! Status words handed over by the boot2 stage and the chip at startup.
#![cfg_attr(not(feature = "_test"), no_std)]

#[cfg(test)]
#[macro_use]
extern crate std;

pub mod flags;
pub mod reset;
pub mod revision;

pub use flags::{BootFlags, Partition};
pub use reset::ResetCause;
pub use revision::RevisionId;
