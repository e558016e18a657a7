//! Modules with the logic of the problem domain, laid on top of
//! abstract drivers. Devices are generic over the hardware abstraction
//! layer, so they can be exercised against test doubles.

pub mod rgbled;
