//! Configuration types
//!
//! Board-agnostic viewer settings, deserialised from TOML by the client.

pub mod types;

pub use types::*;
