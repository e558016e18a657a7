use super::error::FakeError;
use crate::hal::mmio::RegisterWrite;
use std::vec::Vec;

/// Register block backed by plain memory. Keeps a record of every write,
/// and can be told to fail all writes.
#[derive(Clone, Debug)]
pub struct FakeMmio {
    words: Vec<u32>,
    pub writes: Vec<(usize, u32)>,
    pub failing: bool,
}

impl FakeMmio {
    /// Block spanning `length` bytes, all registers cleared.
    pub fn new(length: usize) -> Self {
        Self { words: vec![0; length / 4], writes: Vec::new(), failing: false }
    }

    /// Current content of the register at `offset`.
    pub fn word(&self, offset: usize) -> u32 { self.words[offset / 4] }

    fn slot(&self, offset: usize) -> Result<usize, FakeError> {
        if self.failing || offset % 4 != 0 || offset / 4 >= self.words.len() {
            Err(FakeError)
        } else {
            Ok(offset / 4)
        }
    }
}

impl RegisterWrite for FakeMmio {
    type Error = FakeError;
    fn write(&mut self, offset: usize, value: u32) -> Result<(), Self::Error> {
        let slot = self.slot(offset)?;
        self.words[slot] = value;
        self.writes.push((offset, value));
        Ok(())
    }
}
