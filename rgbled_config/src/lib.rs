//! This sub-crate contains the overlay description used to generate
//! the programmable logic device table of the `rgbled` driver.
//!
//! NOTE: This code is not included anywhere from the driver itself! This
//! is a dependency of the driver's **build script**, which loads an overlay
//! description and generates the table the driver resolves addresses from.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub mod codegen;

/// Registers are accessed as 32 bit words, so every block must start on a
/// word boundary.
pub const WORD_ALIGNMENT: u64 = 4;

/// A single hardware block in the programmable logic, as listed by the
/// overlay's device table.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct IpBlock {
    pub name: String,
    pub phys_addr: u64,
    pub addr_range: u64,
}

/// Description of a loaded overlay: its name and the hardware blocks it
/// exposes.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq, Eq)]
pub struct Overlay {
    pub name: String,
    pub ip_blocks: Vec<IpBlock>,
}

impl Overlay {
    pub fn new(name: &str, ip_blocks: Vec<IpBlock>) -> Self {
        Self { name: name.to_owned(), ip_blocks }
    }

    pub fn ip_block(&self, name: &str) -> Option<&IpBlock> {
        self.ip_blocks.iter().find(|block| block.name == name)
    }

    /// Checks the overlay can be turned into a device table. Names must be
    /// unique and non empty, and every block must be word aligned, have a
    /// nonzero range and not wrap around the address space.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for block in &self.ip_blocks {
            if block.name.is_empty() {
                bail!("Overlay '{}' contains an IP block with an empty name", self.name);
            }
            if !names.insert(block.name.as_str()) {
                bail!("IP block '{}' is declared more than once", block.name);
            }
            if block.addr_range == 0 {
                bail!("IP block '{}' has an empty address range", block.name);
            }
            if block.phys_addr % WORD_ALIGNMENT != 0 {
                bail!(
                    "IP block '{}' is not word aligned (0x{:08X})",
                    block.name,
                    block.phys_addr
                );
            }
            if block.phys_addr.checked_add(block.addr_range).is_none() {
                bail!("IP block '{}' overflows the address space", block.name);
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn block(name: &str, phys_addr: u64, addr_range: u64) -> IpBlock {
        IpBlock { name: name.to_owned(), phys_addr, addr_range }
    }

    #[test]
    fn parsing_sample_overlay() {
        // Given
        let contents = include_str!("../sample_configurations/base_overlay.ron");

        // When
        let overlay: Overlay = ron::from_str(contents).unwrap();

        // Then
        assert_eq!(overlay.name, "base");
        let rgbleds = overlay.ip_block("rgbleds_gpio").unwrap();
        assert_eq!(rgbleds.phys_addr, 0x4121_0000);
        assert_eq!(rgbleds.addr_range, 0x1_0000);
        assert!(overlay.validate().is_ok());
    }

    #[test]
    fn missing_block_is_not_found() {
        let overlay = Overlay::new("base", vec![block("rgbleds_gpio", 0x4121_0000, 16)]);
        assert!(overlay.ip_block("leds_gpio").is_none());
    }

    #[test]
    fn duplicate_names_are_rejected() {
        let overlay = Overlay::new(
            "base",
            vec![block("rgbleds_gpio", 0x4121_0000, 16), block("rgbleds_gpio", 0x4122_0000, 16)],
        );
        assert!(overlay.validate().is_err());
    }

    #[test]
    fn empty_and_misaligned_blocks_are_rejected() {
        let empty = Overlay::new("base", vec![block("rgbleds_gpio", 0x4121_0000, 0)]);
        let misaligned = Overlay::new("base", vec![block("rgbleds_gpio", 0x4121_0002, 16)]);
        let unnamed = Overlay::new("base", vec![block("", 0x4121_0000, 16)]);
        let wrapping = Overlay::new("base", vec![block("rgbleds_gpio", u64::MAX - 3, 16)]);

        assert!(empty.validate().is_err());
        assert!(misaligned.validate().is_err());
        assert!(unnamed.validate().is_err());
        assert!(wrapping.validate().is_err());
    }
}
