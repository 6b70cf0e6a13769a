use std::collections::HashMap;

use boot_flags_tool::TargetArgs;
use boot_flags_tool::commands::{read_snapshot, render, write_boot_flags};
use boot_flags_tool::processors::probe::{WordMemory, select_one};

/// Word-addressed memory, optionally ignoring writes to emulate a read-only location.
#[derive(Default)]
struct FakeMemory {
    words: HashMap<u64, u32>,
    read_only: bool,
    reads: Vec<u64>,
}

impl WordMemory for FakeMemory {
    fn read_word(&mut self, address: u64) -> anyhow::Result<u32> {
        self.reads.push(address);
        Ok(self.words.get(&address).copied().unwrap_or(0))
    }

    fn write_word(&mut self, address: u64, value: u32) -> anyhow::Result<()> {
        if !self.read_only {
            self.words.insert(address, value);
        }
        Ok(())
    }
}

#[test]
fn snapshot_from_configured_addresses() {
    let target = TargetArgs::default();
    let mut memory = FakeMemory::default();
    memory.words.insert(target.boot_flags_addr, 0x12);
    memory.words.insert(target.reset_cause_addr, 0x20);
    memory.words.insert(target.rev_id_addr, 0xfe01);

    let snapshot = read_snapshot(&mut memory, &target).unwrap();
    assert_eq!(snapshot.boot_flags, 0x12);
    assert!(snapshot.reset_cause.is_watchdog());
    assert_eq!(snapshot.revision_id.bits(), 0x001);

    // Reading never writes back, the reset cause stays for the firmware to clear.
    assert_eq!(memory.words[&target.reset_cause_addr], 0x20);
    assert_eq!(render(snapshot)[2], " - Firmware Partition: 2");
}

#[test]
fn written_flags_read_back() {
    let mut memory = FakeMemory::default();
    write_boot_flags(&mut memory, 0x480C_0024, 0x111).unwrap();

    assert_eq!(memory.words[&0x480C_0024u64], 0x111);
    assert_eq!(memory.reads, [0x480C_0024]);
}

#[test]
fn lost_write_is_reported() {
    let mut memory = FakeMemory {
        read_only: true,
        ..Default::default()
    };
    let err = write_boot_flags(&mut memory, 0x1000, 0x111).unwrap_err();
    assert!(err.to_string().contains("does not match written 0x00000111"));
}

#[test]
fn single_candidate_selected() {
    assert_eq!(select_one(&["cmsis-dap"]).unwrap(), &"cmsis-dap");
}

#[test]
fn no_candidates() {
    assert!(select_one::<&str>(&[]).is_err());
}

#[test]
fn multiple_candidates_listed() {
    let err = select_one(&["cmsis-dap", "j-link"]).unwrap_err().to_string();
    assert!(err.contains("0: cmsis-dap"));
    assert!(err.contains("1: j-link"));
}
