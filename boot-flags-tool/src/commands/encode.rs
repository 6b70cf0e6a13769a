use anyhow::anyhow;
use boot_diag::{BootFlags, Partition};

use crate::EncodeArguments;

pub fn encode(args: &EncodeArguments) -> anyhow::Result<BootFlags> {
    let partition = Partition::try_from(args.partition)
        .map_err(|_| anyhow!("Partition {} does not fit the boot flags, maximum is {}", args.partition, Partition::MAX))?;

    Ok(BootFlags::new(partition, args.partition_table_flag, args.bad_crc))
}

pub fn process(args: EncodeArguments) -> anyhow::Result<()> {
    let flags = encode(&args)?;
    println!("0x{:08x}", flags);
    Ok(())
}
