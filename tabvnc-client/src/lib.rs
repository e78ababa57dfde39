//! Runtime glue for the tabvnc viewer
//!
//! Wires the board-agnostic core to embassy primitives:
//!
//! - Static channels and shared state between the two contexts
//! - Session loop: protocol processing and outbound event delivery
//! - Input loop: touch gestures and keyboard forwarding
//! - Info panel for the alternate screen
//! - Configuration loading
//!
//! Board crates own the executor and the peripherals; they build the pieces
//! here and spawn the loops.

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

// Must come first so the logging macros are visible to later modules
#[macro_use]
mod fmt;

pub mod channels;
pub mod config;
pub mod panel;
pub mod shared;
pub mod sink;
pub mod tasks;

pub use channels::{LinkStatus, EVENT_CHANNEL_SIZE, LINK_STATUS, MODE_FLAGS, REMOTE_EVENTS};
pub use config::{load_config, parse_config};
pub use panel::InfoPanel;
pub use shared::SharedFramebuffer;
pub use sink::ChannelSink;
