//! Hardware Abstraction Layer, containing interfaces
//! for low level drivers.

pub mod led;
pub mod mmio;
pub mod pl;

#[cfg(not(target_arch = "arm"))]
#[doc(hidden)]
pub mod doubles;
