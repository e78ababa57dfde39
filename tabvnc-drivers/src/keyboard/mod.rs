//! Keyboard drivers

pub mod cardkb;

pub use cardkb::{CardKb, CardKbError, CARDKB_ADDR};

/// Polled source of raw key codes
#[allow(async_fn_in_trait)]
pub trait KeySource {
    type Error;

    /// Next pending key code, if any
    async fn poll_key(&mut self) -> Result<Option<u8>, Self::Error>;
}
