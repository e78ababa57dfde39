//! Viewer loops
//!
//! Two contexts share the panel and the mode flags:
//!
//! - session: protocol processing, drives the renderer
//! - input: touch and keyboard, drives gestures and mode switches
//!
//! They communicate only through the statics in `channels`.

pub mod input;
pub mod keyboard;
pub mod session;

pub use input::{input_task, InputLoop};
pub use keyboard::{forward_key, init_keyboard};
pub use session::{drain_events, publish_connection, session_task, ProtocolClient};
