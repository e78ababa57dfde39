//! Outbound RFB input vocabulary
//!
//! This crate defines what the viewer sends back to the remote framebuffer
//! server: pointer events with an RFB button mask, key events carrying X11
//! keysyms, and full-refresh requests. It also holds the keysym table used to
//! translate CardKB key codes.
//!
//! The wire encoding of these messages belongs to the RFB client library;
//! only the values are defined here.

#![no_std]
#![deny(unsafe_code)]

pub mod events;
pub mod keysym;

pub use events::{ButtonMask, RemoteEvent, ScrollDirection};
pub use keysym::cardkb_to_keysym;
