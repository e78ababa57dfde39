//! Board-agnostic core logic for the tabvnc viewer
//!
//! This crate contains all viewer logic that does not depend on specific
//! hardware or on the RFB client library:
//!
//! - Collaborator traits (RFB display callbacks, remote session, touch source)
//! - Render adapter: RFB pixel updates to framebuffer writes
//! - Gesture recognizer: touch snapshots to pointer, wheel and mode events
//! - Mode controller: pause/resume and screen switching
//! - Configuration type definitions

#![no_std]
#![deny(unsafe_code)]

extern crate alloc;

pub mod config;
pub mod gesture;
pub mod mode;
pub mod render;
pub mod traits;

#[cfg(test)]
pub(crate) mod testing;
