//! Peripheral drivers
//!
//! Concrete implementations for the input peripherals around the panel:
//!
//! - Keyboards (M5Stack CardKB over I2C)

#![no_std]
#![deny(unsafe_code)]

pub mod keyboard;
