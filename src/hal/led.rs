//! LED interfaces

/// Interface to a LED's generic color. May be tricolor LEDs, full color
/// scales with PWM, a "grayscale" intensity range, etc.
///
/// Operations can fail, as changing the color usually involves a write
/// to a hardware register.
pub trait Chromatic<Color> {
    type Error;

    /// Lights the LED with the given color.
    fn on(&mut self, color: Color) -> Result<(), Self::Error>;

    /// Turns the LED off.
    fn off(&mut self) -> Result<(), Self::Error>;

    /// Sets the LED state. Equivalent to `on`.
    fn write(&mut self, color: Color) -> Result<(), Self::Error> { self.on(color) }

    /// Current color of the LED.
    fn read(&self) -> Color;
}
