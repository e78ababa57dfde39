//! Display abstractions for the tabvnc viewer
//!
//! This crate provides:
//! - `FramebufferBackend` trait for pixel-addressable panels (the surface the
//!   remote desktop is drawn onto)
//! - `StatusBackend` trait for line-oriented text output
//! - `InfoScreen`, the line model of the connection info screen
//! - `MemoryFramebuffer`, a RAM-backed panel for host simulation and tests
//!
//! # Architecture
//!
//! Board crates implement `FramebufferBackend` on top of their panel driver
//! (MIPI-DSI, SPI TFT, ...). The renderer in `tabvnc-core` only ever talks to
//! the trait, so the same gesture and render logic runs on every panel.

#![no_std]

extern crate alloc;

pub mod backend;
pub mod memory;
pub mod screen;

// Re-export key types
pub use backend::{DisplayError, FramebufferBackend, LineStyle, StatusBackend};
pub use memory::{DrawOp, MemoryFramebuffer};
pub use screen::{ConnectionInfo, InfoScreen, INFO_ROWS, LINE_LEN};
