//! RGB LEDs driven by a memory mapped GPIO controller.
//!
//! LEDs are grouped in a [`RgbLedBank`], which owns the controller's
//! registers. Every LED created with a zero offset owns a 3 bit color field
//! of the bank's data register, placed according to its index relative to
//! the lowest index seen so far (the bank's baseline). LEDs created with a
//! nonzero offset own a full register at that byte offset instead.
//!
//! NOTE: The baseline only ever moves down, and it moves when a LED with a
//! lower index is created. Fields of LEDs created before that point shift
//! with it, but the register contents aren't moved, so LEDs should be
//! created in increasing index order (or lowest index first).
use core::cell::{Cell, RefCell};
use static_assertions::const_assert;

use crate::{
    drivers::mmio::Mmio,
    error::Error,
    hal::{
        led::Chromatic,
        mmio::RegisterWrite,
        pl::{AddressResolver, IpLocation},
    },
    utilities::bitwise::BitField,
};

/// Name of the LED controller in the device table.
pub const DEFAULT_IP_NAME: &str = "rgbleds_gpio";
/// Byte offset of the data register inside the GPIO controller.
pub const RGBLEDS_XGPIO_OFFSET: usize = 0;
/// Bytes of the controller's address space mapped by a bank.
pub const RGBLEDS_SPAN: usize = 16;
/// Width of a single LED's color.
pub const COLOR_BITS: u32 = 3;

const COLOR_MASK: u8 = 0x7;

const_assert!(RGBLEDS_XGPIO_OFFSET % 4 == 0);
const_assert!(RGBLEDS_XGPIO_OFFSET + 4 <= RGBLEDS_SPAN);
const_assert!(COLOR_MASK as u32 == (1 << COLOR_BITS) - 1);

/// 3 bit RGB color. Bit 2 drives red, bit 1 green and bit 0 blue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Color {
    Clear = 0,
    Blue = 1,
    Green = 2,
    Cyan = 3,
    Red = 4,
    Magenta = 5,
    Yellow = 6,
    White = 7,
}

impl From<Color> for u8 {
    fn from(color: Color) -> Self { color as u8 }
}

impl TryFrom<u8> for Color {
    type Error = Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Ok(match value {
            0 => Color::Clear,
            1 => Color::Blue,
            2 => Color::Green,
            3 => Color::Cyan,
            4 => Color::Red,
            5 => Color::Magenta,
            6 => Color::Yellow,
            7 => Color::White,
            _ => return Err(Error::InvalidArgument("Color should be an integer value from 0 to 7")),
        })
    }
}

fn validate_offset(offset: isize) -> Result<usize, Error> {
    let offset = usize::try_from(offset)
        .map_err(|_| Error::InvalidArgument("Offset cannot be a negative value"))?;
    if offset % 4 != 0 {
        return Err(Error::InvalidArgument("Offset must be a multiple of 4"));
    }
    Ok(offset)
}

fn validate_color(color: u8) -> Result<u8, Error> {
    if color > COLOR_MASK {
        warn!("Rejected color {:?}", color);
        return Err(Error::InvalidArgument("Color should be an integer value from 0 to 7"));
    }
    Ok(color)
}

/// Registers of a LED controller, shared by all LEDs created from it.
///
/// # Example
/// ```
/// # use rgbled_lib::devices::rgbled::*;
/// # use rgbled_lib::hal::led::Chromatic;
/// # use rgbled_lib::hal::doubles::mmio::FakeMmio;
/// let bank = RgbLedBank::new(FakeMmio::new(RGBLEDS_SPAN));
/// let mut first = bank.led(0).unwrap();
/// let mut second = bank.led(1).unwrap();
///
/// first.on(Color::Red.into()).unwrap();
/// second.on(Color::Green.into()).unwrap();
///
/// assert_eq!(first.read(), 4);
/// assert_eq!(second.read(), 2);
/// // Both LEDs share a single register
/// assert_eq!(bank.value(), 4 | (2 << 3));
/// # assert_eq!(bank.registers().word(0), 4 | (2 << 3));
/// ```
pub struct RgbLedBank<M: RegisterWrite> {
    registers: RefCell<M>,
    value: Cell<u32>,
    baseline: Cell<Option<i32>>,
}

impl<M> RgbLedBank<M>
where
    M: RegisterWrite,
    Error: From<M::Error>,
{
    /// Bank over an already mapped controller. The cached register value
    /// starts cleared; nothing is written until a LED changes.
    pub fn new(registers: M) -> Self {
        Self { registers: RefCell::new(registers), value: Cell::new(0), baseline: Cell::new(None) }
    }

    /// Locates the controller named `ip_name` and maps its registers
    /// through `map`, which receives the controller's base address and the
    /// span to map.
    pub fn resolve<R, F>(resolver: &R, ip_name: &str, map: F) -> Result<Self, Error>
    where
        R: AddressResolver,
        Error: From<R::Error>,
        F: FnOnce(IpLocation) -> Result<M, Error>,
    {
        let location = resolver.resolve(ip_name)?;
        if location.addr_range < RGBLEDS_SPAN {
            return Err(Error::ResolutionError("IP block is too small for a LED controller"));
        }
        info!("Binding LED controller {:?} at {:?}", ip_name, location.phys_addr);
        let registers =
            map(IpLocation { phys_addr: location.phys_addr, addr_range: RGBLEDS_SPAN })?;
        Ok(Self::new(registers))
    }

    /// LED sharing the bank's data register.
    pub fn led(&self, index: i32) -> Result<RgbLed<'_, M>, Error> { self.led_at(index, 0) }

    /// LED at `offset` bytes from the data register. A zero offset makes
    /// the LED share the data register with its siblings, any other
    /// offset gives the LED a register of its own.
    pub fn led_at(&self, index: i32, offset: isize) -> Result<RgbLed<'_, M>, Error> {
        let offset = validate_offset(offset)?;
        if offset == 0 && self.baseline.get().map_or(true, |baseline| index < baseline) {
            debug!("LED baseline moves to index {:?}", index);
            self.baseline.set(Some(index));
        }
        Ok(RgbLed { bank: self, index, offset, value: 0 })
    }

    /// Last value written to the shared data register.
    pub fn value(&self) -> u32 { self.value.get() }

    /// Lowest index of the LEDs sharing the data register, if any.
    pub fn baseline(&self) -> Option<i32> { self.baseline.get() }

    /// Writes `value` at `offset` bytes from the data register. Only writes
    /// to the data register itself (zero offset) update the cached value.
    ///
    /// Prefer driving LEDs through [`RgbLed`]; this bypasses the per LED
    /// color fields.
    pub fn set_value(&self, value: u32, offset: isize) -> Result<(), Error> {
        let offset = validate_offset(offset)?;
        self.registers.borrow_mut().write(RGBLEDS_XGPIO_OFFSET + offset, value)?;
        if offset == 0 {
            self.value.set(value);
        }
        Ok(())
    }

    fn field(&self, index: i32) -> Result<BitField, Error> {
        let baseline = self.baseline.get().unwrap_or(index);
        u32::try_from(i64::from(index) - i64::from(baseline))
            .ok()
            .and_then(|position| position.checked_mul(COLOR_BITS))
            .and_then(|shift| BitField::new(shift, COLOR_BITS))
            .ok_or(Error::InvalidArgument("LED index doesn't fit in the shared register"))
    }
}

impl RgbLedBank<Mmio> {
    /// Maps the controller named `ip_name` (usually [`DEFAULT_IP_NAME`])
    /// directly at its physical address.
    ///
    /// # Safety
    ///
    /// The physical address of the controller must be accessible as is
    /// (bare metal, or identity mapped), and no other code may access the
    /// controller while the bank lives.
    pub unsafe fn from_ip<R>(resolver: &R, ip_name: &str) -> Result<Self, Error>
    where
        R: AddressResolver,
        Error: From<R::Error>,
    {
        Self::resolve(resolver, ip_name, |location| {
            Ok(Mmio::new(location.phys_addr, location.addr_range))
        })
    }
}

/// Single RGB LED of a [`RgbLedBank`].
///
/// Colors are 3 bit values (see [`Color`]), driven through the
/// [`Chromatic`] interface.
pub struct RgbLed<'a, M: RegisterWrite> {
    bank: &'a RgbLedBank<M>,
    index: i32,
    offset: usize,
    value: u8,
}

impl<'a, M> RgbLed<'a, M>
where
    M: RegisterWrite,
    Error: From<M::Error>,
{
    pub fn index(&self) -> i32 { self.index }
    pub fn offset(&self) -> usize { self.offset }

    /// Current color, as a named constant.
    pub fn color(&self) -> Color {
        // `read` never yields more than three bits.
        Color::try_from(self.read()).unwrap_or(Color::Clear)
    }

    fn has_dedicated_register(&self) -> bool { self.offset > 0 }
}

impl<'a, M> Chromatic<u8> for RgbLed<'a, M>
where
    M: RegisterWrite,
    Error: From<M::Error>,
{
    type Error = Error;

    fn on(&mut self, color: u8) -> Result<(), Self::Error> {
        let color = validate_color(color)?;
        if self.has_dedicated_register() {
            let value = (self.value & !COLOR_MASK) | color;
            self.bank.set_value(value.into(), self.offset as isize)?;
            self.value = value;
            Ok(())
        } else {
            let field = self.bank.field(self.index)?;
            self.bank.set_value(field.insert(self.bank.value(), color.into()), 0)
        }
    }

    fn off(&mut self) -> Result<(), Self::Error> {
        if self.has_dedicated_register() {
            let value = self.value & !COLOR_MASK;
            self.bank.set_value(value.into(), self.offset as isize)?;
            self.value = value;
            Ok(())
        } else {
            let field = self.bank.field(self.index)?;
            self.bank.set_value(field.clear(self.bank.value()), 0)
        }
    }

    fn read(&self) -> u8 {
        if self.has_dedicated_register() {
            self.value
        } else {
            // A field beyond the register reads as cleared.
            self.bank
                .field(self.index)
                .map(|field| field.extract(self.bank.value()) as u8)
                .unwrap_or(0)
        }
    }
}

#[cfg(not(target_arch = "arm"))]
#[doc(hidden)]
pub mod mock {
    use super::*;
    use crate::hal::doubles::mmio::FakeMmio;
    use core::cell::{Ref, RefMut};

    impl RgbLedBank<FakeMmio> {
        pub fn registers(&self) -> Ref<'_, FakeMmio> { self.registers.borrow() }
        pub fn registers_mut(&self) -> RefMut<'_, FakeMmio> { self.registers.borrow_mut() }
    }
}
