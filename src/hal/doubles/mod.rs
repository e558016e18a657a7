pub mod error;
pub mod mmio;
pub mod serial;
