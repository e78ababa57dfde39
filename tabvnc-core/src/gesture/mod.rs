//! Touch gesture recognition
//!
//! Turns per-tick touch snapshots into remote pointer and wheel events and
//! into screen switches. Gestures compete for the same contacts, so the
//! recognizer evaluates them in a fixed priority order every tick.

pub mod recognizer;
pub mod state;
pub mod touch;

pub use recognizer::GestureRecognizer;
pub use state::{GestureEvent, GestureState};
pub use touch::{Contact, TouchSnapshot, MAX_CONTACTS};
