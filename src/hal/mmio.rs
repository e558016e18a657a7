//! # Memory mapped register interfaces
//!
//! Registers are 32 bit words addressed by their byte offset from the
//! base of a mapped hardware block.
use core::fmt;

/// Interface to a writable register block.
pub trait RegisterWrite {
    type Error: Clone + Copy + fmt::Debug;

    /// Writes a full word at `offset` bytes from the block base.
    fn write(&mut self, offset: usize, value: u32) -> Result<(), Self::Error>;
}

/// Interface to a readable register block.
pub trait RegisterRead {
    type Error: Clone + Copy + fmt::Debug;

    /// Reads a full word at `offset` bytes from the block base.
    fn read(&self, offset: usize) -> Result<u32, Self::Error>;
}
