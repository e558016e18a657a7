//! Driver implementations for the hardware abstraction layer. They
//! offer a safe API over the raw register accesses whenever possible.

pub mod ip_table;
pub mod mmio;
