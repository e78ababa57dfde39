//! RFB pixel updates to framebuffer writes
//!
//! The render adapter sits between the RFB client library and the panel.
//! It corrects the wire byte order, tracks streamed area updates, and drops
//! all panel writes while rendering is paused without losing track of the
//! stream position.

pub mod adapter;
pub mod pixel;
pub mod session;

pub use adapter::{RenderAdapter, RenderStats};
pub use pixel::{swap_bytes, wire_pixels, Rect};
pub use session::AreaUpdateSession;
