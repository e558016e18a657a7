//! Logging macros for the driver.
//!
//! Messages are forwarded to `defmt` when the `defmt` feature is enabled,
//! and compile to nothing otherwise. Arguments are still borrowed in the
//! latter case so that disabling logs doesn't produce unused warnings.
#![macro_use]

macro_rules! debug {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::debug!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        { $(let _ = &$x;)* };
    }};
}

macro_rules! info {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::info!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        { $(let _ = &$x;)* };
    }};
}

macro_rules! warn {
    ($s:literal $(, $x:expr)* $(,)?) => {{
        #[cfg(feature = "defmt")]
        ::defmt::warn!($s $(, $x)*);
        #[cfg(not(feature = "defmt"))]
        { $(let _ = &$x;)* };
    }};
}
