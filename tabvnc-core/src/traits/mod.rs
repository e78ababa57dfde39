//! Collaborator traits
//!
//! These traits define the interface between the viewer logic and the
//! outside world: the RFB client library, the touch controller, and the
//! alternate screen renderer.

pub mod remote;
pub mod rfb;
pub mod screen;
pub mod touch;

pub use remote::{dispatch, RemoteSession, RemoteSink, SessionSink};
pub use rfb::RfbDisplay;
pub use screen::AlternateScreen;
pub use touch::TouchSource;
