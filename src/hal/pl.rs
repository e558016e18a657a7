//! Programmable logic interfaces.
use core::fmt;

/// Location of a hardware block in the physical address space.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IpLocation {
    pub phys_addr: usize,
    pub addr_range: usize,
}

/// Locates hardware blocks of the programmable logic by name.
pub trait AddressResolver {
    type Error: Clone + Copy + fmt::Debug;

    fn resolve(&self, ip_name: &str) -> Result<IpLocation, Self::Error>;
}
