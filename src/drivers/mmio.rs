//! Volatile access to a memory mapped register block.
use core::ptr;

use crate::{
    error::{Convertible, Error},
    hal::mmio::{RegisterRead, RegisterWrite},
};

/// Register accesses must be word sized and word aligned.
const WORD_SIZE: usize = 4;

/// MMIO error
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum MmioError {
    /// Access falls outside the mapped block
    OutOfRange,
    /// Access isn't aligned to a word boundary
    Misaligned,
}

impl Convertible for MmioError {
    fn into(self) -> Error {
        match self {
            MmioError::OutOfRange => Error::DriverError("Register access outside of the mapped block"),
            MmioError::Misaligned => Error::DriverError("Register access not aligned to a word"),
        }
    }
}

/// A block of `length` bytes of registers starting at `base_addr`.
pub struct Mmio {
    base_addr: usize,
    length: usize,
}

impl Mmio {
    /// # Safety
    ///
    /// `base_addr` must be mapped into the current address space (identity
    /// mapped when running bare metal) for at least `length` bytes, and the
    /// block must not be accessed through any other means while this
    /// `Mmio` lives.
    pub unsafe fn new(base_addr: usize, length: usize) -> Self { Self { base_addr, length } }

    pub fn base_addr(&self) -> usize { self.base_addr }
    pub fn length(&self) -> usize { self.length }

    fn word_address(&self, offset: usize) -> Result<usize, MmioError> {
        let end = offset.checked_add(WORD_SIZE).ok_or(MmioError::OutOfRange)?;
        if end > self.length {
            return Err(MmioError::OutOfRange);
        }
        let address = self.base_addr + offset;
        if address % WORD_SIZE != 0 {
            return Err(MmioError::Misaligned);
        }
        Ok(address)
    }
}

impl RegisterWrite for Mmio {
    type Error = MmioError;
    fn write(&mut self, offset: usize, value: u32) -> Result<(), Self::Error> {
        let address = self.word_address(offset)?;
        // NOTE(Safety): Address is within the block the constructor's caller
        // vouched for, and word aligned.
        unsafe { ptr::write_volatile(address as *mut u32, value) };
        Ok(())
    }
}

impl RegisterRead for Mmio {
    type Error = MmioError;
    fn read(&self, offset: usize) -> Result<u32, Self::Error> {
        let address = self.word_address(offset)?;
        // NOTE(Safety): See `write`.
        Ok(unsafe { ptr::read_volatile(address as *const u32) })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn words_written_are_read_back() {
        // Given
        let mut memory = [0u32; 4];
        let base = memory.as_mut_ptr() as usize;
        let mut mmio = unsafe { Mmio::new(base, 16) };
        assert_eq!((mmio.base_addr(), mmio.length()), (base, 16));

        // When
        mmio.write(0, 0xDEAD_BEEF).unwrap();
        mmio.write(12, 0x0000_0007).unwrap();

        // Then
        assert_eq!(mmio.read(0).unwrap(), 0xDEAD_BEEF);
        assert_eq!(mmio.read(4).unwrap(), 0);
        assert_eq!(mmio.read(12).unwrap(), 0x0000_0007);
        drop(mmio);
        assert_eq!(memory, [0xDEAD_BEEF, 0, 0, 7]);
    }

    #[test]
    fn accesses_outside_the_block_are_refused() {
        let mut memory = [0u32; 4];
        let mut mmio = unsafe { Mmio::new(memory.as_mut_ptr() as usize, 16) };

        assert_eq!(mmio.write(16, 1), Err(MmioError::OutOfRange));
        assert_eq!(mmio.read(14), Err(MmioError::OutOfRange));
        assert_eq!(mmio.write(usize::MAX, 1), Err(MmioError::OutOfRange));
    }

    #[test]
    fn misaligned_accesses_are_refused() {
        let mut memory = [0u32; 4];
        let mut mmio = unsafe { Mmio::new(memory.as_mut_ptr() as usize, 16) };

        assert_eq!(mmio.write(2, 1), Err(MmioError::Misaligned));
        assert_eq!(mmio.read(5), Err(MmioError::Misaligned));
    }

    #[test]
    fn mmio_errors_convert_to_driver_errors() {
        let error = Error::from(MmioError::OutOfRange);
        assert!(matches!(error, Error::DriverError(_)));
    }
}
