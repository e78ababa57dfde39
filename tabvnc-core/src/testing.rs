//! Test doubles shared by unit tests

use alloc::vec::Vec;

use tabvnc_protocol::RemoteEvent;

use crate::mode::ModeFlags;
use crate::traits::{AlternateScreen, RemoteSink};

/// Sink that records every event
pub struct RecordingSink {
    pub events: Vec<RemoteEvent>,
    pub connected: bool,
}

impl RecordingSink {
    pub fn connected() -> Self {
        Self {
            events: Vec::new(),
            connected: true,
        }
    }

    pub fn disconnected() -> Self {
        Self {
            events: Vec::new(),
            connected: false,
        }
    }

    /// Events other than refresh requests
    pub fn pointer_events(&self) -> Vec<RemoteEvent> {
        self.events
            .iter()
            .copied()
            .filter(|e| e.is_pointer())
            .collect()
    }
}

impl RemoteSink for RecordingSink {
    fn send(&mut self, event: RemoteEvent) {
        self.events.push(event);
    }

    fn is_connected(&self) -> bool {
        self.connected
    }
}

/// Alternate screen that counts calls and checks flag ordering
pub struct CountingScreen<'m> {
    flags: &'m ModeFlags,
    pub shows: usize,
    pub clears: usize,
    /// Paused flag was set on every `show`
    pub paused_when_shown: bool,
    /// Alternate flag was already cleared on every `clear_primary`
    pub inactive_when_cleared: bool,
}

impl<'m> CountingScreen<'m> {
    pub fn new(flags: &'m ModeFlags) -> Self {
        Self {
            flags,
            shows: 0,
            clears: 0,
            paused_when_shown: true,
            inactive_when_cleared: true,
        }
    }
}

impl AlternateScreen for CountingScreen<'_> {
    fn show(&mut self) {
        self.shows += 1;
        self.paused_when_shown &= self.flags.is_paused();
    }

    fn clear_primary(&mut self) {
        self.clears += 1;
        self.inactive_when_cleared &= !self.flags.is_alternate_active();
    }
}
