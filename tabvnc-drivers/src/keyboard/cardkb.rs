//! M5Stack CardKB keyboard
//!
//! The CardKB answers every one-byte read with the code of the last key
//! pressed, or zero when nothing is pending. Codes are ASCII for printable
//! keys and vendor values for the arrow keys.

use embedded_hal_async::i2c::I2c;

use super::KeySource;

/// Fixed I2C address
pub const CARDKB_ADDR: u8 = 0x5F;

/// CardKB errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CardKbError<E> {
    /// Bus transfer failed
    Bus(E),
    /// Device did not acknowledge the probe
    NotPresent,
}

impl<E> From<E> for CardKbError<E> {
    fn from(e: E) -> Self {
        CardKbError::Bus(e)
    }
}

/// CardKB driver
pub struct CardKb<I2C> {
    i2c: I2C,
    present: bool,
}

impl<I2C: I2c> CardKb<I2C> {
    pub fn new(i2c: I2C) -> Self {
        Self { i2c, present: false }
    }

    /// Check for the device with an empty write
    ///
    /// A missing keyboard is not an error for the viewer; callers keep the
    /// result and skip polling.
    pub async fn probe(&mut self) -> bool {
        self.present = self.i2c.write(CARDKB_ADDR, &[]).await.is_ok();
        self.present
    }

    /// Result of the last probe
    pub fn is_present(&self) -> bool {
        self.present
    }

    /// Read one key code
    pub async fn read_key(&mut self) -> Result<Option<u8>, CardKbError<I2C::Error>> {
        if !self.present {
            return Err(CardKbError::NotPresent);
        }
        let mut buf = [0u8; 1];
        self.i2c.read(CARDKB_ADDR, &mut buf).await?;
        Ok(match buf[0] {
            0 => None,
            code => Some(code),
        })
    }

    /// Release the bus
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> KeySource for CardKb<I2C> {
    type Error = CardKbError<I2C::Error>;

    async fn poll_key(&mut self) -> Result<Option<u8>, Self::Error> {
        self.read_key().await
    }
}
