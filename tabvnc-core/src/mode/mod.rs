//! Screen mode management
//!
//! The viewer shows either the remote desktop (primary screen) or the
//! connection info screen (alternate screen). Remote rendering is paused
//! while the alternate screen is visible.

pub mod controller;
pub mod flags;

pub use controller::ModeController;
pub use flags::{ActiveScreen, ModeFlags};
