//! Debug probe access to the target's memory.
use std::fmt::Display;

use anyhow::{Context, anyhow};
use probe_rs::{
    MemoryInterface, Permissions, Session,
    probe::{DebugProbeSelector, list::Lister},
};

/// 32-bit word access to target memory.
pub trait WordMemory {
    fn read_word(&mut self, address: u64) -> anyhow::Result<u32>;
    fn write_word(&mut self, address: u64, value: u32) -> anyhow::Result<()>;
}

/// Pick the only candidate, or fail listing all of them.
pub fn select_one<T: Display>(candidates: &[T]) -> anyhow::Result<&T> {
    match candidates {
        [] => Err(anyhow!("No debug probe found")),
        [single] => Ok(single),
        _ => {
            let listing: Vec<String> = candidates.iter().enumerate().map(|(i, c)| format!("{i}: {c}")).collect();
            Err(anyhow!(
                "Use --probe to select one of the following:\n{}",
                listing.join("\n")
            ))
        }
    }
}

/// Attached target, memory is accessed through its first core.
pub struct Target {
    session: Session,
}

impl Target {
    pub async fn attach(chip: &str, selector: Option<&str>) -> anyhow::Result<Self> {
        log::debug!("Attaching to {chip}");

        let lister = Lister::new();
        let probe = match selector {
            Some(selector) => lister
                .open(DebugProbeSelector::try_from(selector)?)
                .await
                .with_context(|| format!("Opening --probe {selector}"))?,
            None => {
                let found = lister.list_all().await;
                select_one(&found)?.open()?
            }
        };

        let session = probe
            .attach(chip, Permissions::default())
            .with_context(|| format!("Attaching to chip {chip}"))?;
        Ok(Self { session })
    }
}

impl WordMemory for Target {
    fn read_word(&mut self, address: u64) -> anyhow::Result<u32> {
        Ok(self.session.core(0)?.read_word_32(address)?)
    }

    fn write_word(&mut self, address: u64, value: u32) -> anyhow::Result<()> {
        Ok(self.session.core(0)?.write_word_32(address, value)?)
    }
}
