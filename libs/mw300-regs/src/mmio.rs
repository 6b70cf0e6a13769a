//! Memory mapped access for [device_driver] register blocks.

use core::convert::Infallible;

use device_driver::RegisterInterface;

/// Offset of a register within its block, in bytes.
type RegisterOffset = u32;

/// A single bus word.
///
/// Registers smaller than 32 bits are still accessed as full words.
type Word = u32;

/// Register interface to a peripheral block at a fixed base address.
pub struct MmioInterface {
    base: usize,
}

impl MmioInterface {
    /// # Safety
    /// `base` must be the address of a peripheral block on this chip,
    /// matching the register definitions used with this interface.
    pub const unsafe fn new(base: usize) -> Self {
        Self { base }
    }

    fn word_addr(&self, offset: RegisterOffset) -> *mut Word {
        (self.base + offset as usize) as *mut Word
    }
}

/// Splits register data into bus words, each with its own offset.
fn data_to_words(offset: RegisterOffset, data: &[u8]) -> impl Iterator<Item = (RegisterOffset, Word)> + '_ {
    data.chunks(core::mem::size_of::<Word>())
        .enumerate()
        .map(move |(chunk_i, chunk)| {
            let offset = offset + (chunk_i * core::mem::size_of::<Word>()) as u32;

            let mut buf = [0u8; core::mem::size_of::<Word>()];
            buf[..chunk.len()].copy_from_slice(chunk);

            (offset, Word::from_le_bytes(buf))
        })
}

fn words_to_data<E>(
    offset: RegisterOffset,
    data: &mut [u8],
    mut f: impl FnMut(RegisterOffset) -> Result<Word, E>,
) -> Result<(), E> {
    for (chunk_i, chunk) in data.chunks_mut(core::mem::size_of::<Word>()).enumerate() {
        let offset = offset + (chunk_i * core::mem::size_of::<Word>()) as u32;
        let word = f(offset)?.to_le_bytes();

        // Note: registers narrower than a word take the LE bytes at the front.
        chunk.copy_from_slice(&word[..chunk.len()]);
    }

    Ok(())
}

impl RegisterInterface for MmioInterface {
    type Error = Infallible;
    type AddressType = RegisterOffset;

    fn write_register(&mut self, offset: Self::AddressType, _size_bits: u32, data: &[u8]) -> Result<(), Self::Error> {
        for (offset, word) in data_to_words(offset, data) {
            // Safety: the block base was vouched for in `new`, registers are word aligned.
            unsafe { self.word_addr(offset).write_volatile(word) };
        }
        Ok(())
    }

    fn read_register(
        &mut self,
        offset: Self::AddressType,
        _size_bits: u32,
        data: &mut [u8],
    ) -> Result<(), Self::Error> {
        words_to_data(offset, data, |offset| {
            // Safety: the block base was vouched for in `new`, registers are word aligned.
            Ok(unsafe { self.word_addr(offset).read_volatile() })
        })
    }
}
