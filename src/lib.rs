//! # RGB LED Driver Library
//!
//! Drives the onboard RGB LEDs of an FPGA board through the memory mapped
//! GPIO controller that exposes them. Several LEDs share a single register,
//! each owning a 3 bit color field, and LEDs wired to their own register
//! can be addressed through a dedicated byte offset.
#![cfg_attr(test, allow(unused_imports))]
#![cfg_attr(target_arch = "arm", no_std)]

extern crate static_assertions;

#[macro_use]
pub mod utilities {
    pub mod bitwise;
    mod macros;
}

pub mod hal;
pub mod devices;
pub mod drivers;
pub mod error;
