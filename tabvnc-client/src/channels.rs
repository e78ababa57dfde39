//! Inter-context communication
//!
//! Static state shared between the session loop and the input loop.
//! Uses embassy-sync primitives and lock-free flags.

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use portable_atomic::{AtomicBool, Ordering};

use tabvnc_core::mode::ModeFlags;
use tabvnc_protocol::RemoteEvent;

/// Channel capacity for outbound remote events
pub const EVENT_CHANNEL_SIZE: usize = 16;

/// Outbound event queue, input loop to session loop
pub type EventChannel = Channel<CriticalSectionRawMutex, RemoteEvent, EVENT_CHANNEL_SIZE>;

/// Pointer, key and refresh events waiting for the session loop
pub static REMOTE_EVENTS: EventChannel = Channel::new();

/// Paused and alternate-screen flags
pub static MODE_FLAGS: ModeFlags = ModeFlags::new();

/// Link state shown on the info screen
pub static LINK_STATUS: LinkStatus = LinkStatus::new();

/// Network and session link state
#[derive(Debug, Default)]
pub struct LinkStatus {
    wifi: AtomicBool,
    vnc: AtomicBool,
}

impl LinkStatus {
    pub const fn new() -> Self {
        Self {
            wifi: AtomicBool::new(false),
            vnc: AtomicBool::new(false),
        }
    }

    pub fn wifi_connected(&self) -> bool {
        self.wifi.load(Ordering::Acquire)
    }

    /// Publish the network state, returning the previous one
    pub fn set_wifi_connected(&self, connected: bool) -> bool {
        self.wifi.swap(connected, Ordering::AcqRel)
    }

    pub fn vnc_connected(&self) -> bool {
        self.vnc.load(Ordering::Acquire)
    }

    /// Publish the session state, returning the previous one
    pub fn set_vnc_connected(&self, connected: bool) -> bool {
        self.vnc.swap(connected, Ordering::AcqRel)
    }
}
