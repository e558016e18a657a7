use std::string::String;
use ufmt::uWrite;

/// Serial sink that keeps everything written to it.
#[derive(Clone, Debug, Default)]
pub struct FakeSerial {
    buffer: String,
}

impl FakeSerial {
    pub fn contents(&self) -> &str { &self.buffer }
}

impl uWrite for FakeSerial {
    type Error = ();
    fn write_str(&mut self, s: &str) -> Result<(), Self::Error> {
        self.buffer.push_str(s);
        Ok(())
    }
}
