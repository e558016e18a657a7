//! Error type for the RGB LED driver as a whole.
use ufmt::{uWrite, uwriteln};

/// Top level error type for the driver. Errors contain textual
/// descriptions of the problem so they can be reported directly
/// through a serial console.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    /// An argument was outside of its valid range (negative or
    /// misaligned offsets, colors wider than three bits...)
    InvalidArgument(&'static str),
    /// A hardware block couldn't be located in the device table
    ResolutionError(&'static str),
    /// Error caused by a low level register driver
    DriverError(&'static str),
}

/// Errors of collaborating drivers convert into the top level error
/// through this trait.
pub trait Convertible {
    fn into(self) -> Error;
}

impl<T: Convertible> From<T> for Error {
    fn from(t: T) -> Self { Convertible::into(t) }
}

/// Exposes a report_unwrap() method that behaves like
/// unwrap(), but also reports any errors via serial before panicking.
pub trait ReportOnUnwrap<T, S: uWrite> {
    fn report_unwrap(self, serial: &mut S) -> T;
}

impl<T, S: uWrite> ReportOnUnwrap<T, S> for Result<T, Error> {
    fn report_unwrap(self, serial: &mut S) -> T {
        match self {
            Ok(value) => value,
            Err(error) => {
                let _ = error.report(serial);
                panic!();
            }
        }
    }
}

impl Error {
    /// Reports error via abstract serial device
    pub fn report<S: uWrite>(&self, serial: &mut S) -> Result<(), S::Error> {
        match self {
            Error::InvalidArgument(text) => uwriteln!(serial, "[Invalid Argument] -> {}", text),
            Error::ResolutionError(text) => uwriteln!(serial, "[Resolution Error] -> {}", text),
            Error::DriverError(text) => uwriteln!(serial, "[Driver Error] -> {}", text),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::hal::doubles::serial::FakeSerial;

    #[test]
    fn errors_are_reported_with_their_category() {
        // Given
        let mut serial = FakeSerial::default();

        // When
        Error::InvalidArgument("Offset must be a multiple of 4").report(&mut serial).unwrap();
        Error::ResolutionError("IP block not found").report(&mut serial).unwrap();

        // Then
        assert_eq!(
            serial.contents(),
            "[Invalid Argument] -> Offset must be a multiple of 4\n\
             [Resolution Error] -> IP block not found\n"
        );
    }

    #[test]
    fn report_unwrap_passes_values_through() {
        let mut serial = FakeSerial::default();
        let result: Result<u32, Error> = Ok(7);

        assert_eq!(result.report_unwrap(&mut serial), 7);
        assert!(serial.contents().is_empty());
    }

    #[test]
    #[should_panic]
    fn report_unwrap_panics_on_errors() {
        let mut serial = FakeSerial::default();
        let result: Result<u32, Error> = Err(Error::DriverError("Access out of range"));
        result.report_unwrap(&mut serial);
    }
}
