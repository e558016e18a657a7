//! Device table of the programmable logic.
//!
//! The table is generated at build time from the overlay description
//! (see the `rgbled_config` crate), and hardware blocks are resolved
//! from it by name.
use crate::{
    error::Error,
    hal::pl::{AddressResolver, IpLocation},
};

/// A hardware block listed in the device table.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct IpEntry {
    pub name: &'static str,
    pub phys_addr: usize,
    pub addr_range: usize,
}

mod generated {
    use super::IpEntry;
    include!(concat!(env!("OUT_DIR"), "/ip_table.rs"));
}

pub use generated::{IP_TABLE, OVERLAY_NAME};

/// Resolves hardware blocks from a list of entries.
///
/// # Example
/// ```
/// # use rgbled_lib::drivers::ip_table::*;
/// # use rgbled_lib::hal::pl::AddressResolver;
/// const ENTRIES: &[IpEntry] =
///     &[IpEntry { name: "rgbleds_gpio", phys_addr: 0x4121_0000, addr_range: 0x1_0000 }];
/// let table = IpTable::new(ENTRIES);
///
/// let location = table.resolve("rgbleds_gpio").unwrap();
/// assert_eq!(location.phys_addr, 0x4121_0000);
/// assert!(table.resolve("leds_gpio").is_err());
/// ```
#[derive(Copy, Clone, Debug)]
pub struct IpTable<'a> {
    entries: &'a [IpEntry],
}

impl<'a> IpTable<'a> {
    pub const fn new(entries: &'a [IpEntry]) -> Self { Self { entries } }

    pub fn entries(&self) -> &'a [IpEntry] { self.entries }
}

impl IpTable<'static> {
    /// Table of the overlay the crate was built against.
    pub const fn overlay() -> Self { Self::new(IP_TABLE) }
}

impl AddressResolver for IpTable<'_> {
    type Error = Error;

    fn resolve(&self, ip_name: &str) -> Result<IpLocation, Self::Error> {
        self.entries
            .iter()
            .find(|entry| entry.name == ip_name)
            .map(|entry| IpLocation { phys_addr: entry.phys_addr, addr_range: entry.addr_range })
            .ok_or(Error::ResolutionError("IP block not found in the device table"))
    }
}
