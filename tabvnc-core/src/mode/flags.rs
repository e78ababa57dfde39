//! Shared mode flags

use portable_atomic::{AtomicBool, Ordering};

/// Which screen owns the panel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ActiveScreen {
    /// Remote desktop
    Primary,
    /// Connection info
    Alternate,
}

/// Flags read by every context, written only by the mode controller
///
/// Lives in a `static` so the protocol context and the UI context can share
/// it without locking.
#[derive(Debug, Default)]
pub struct ModeFlags {
    paused: AtomicBool,
    alternate_active: AtomicBool,
}

impl ModeFlags {
    /// Primary screen, rendering enabled
    pub const fn new() -> Self {
        Self {
            paused: AtomicBool::new(false),
            alternate_active: AtomicBool::new(false),
        }
    }

    /// True while remote pixels must not reach the panel
    pub fn is_paused(&self) -> bool {
        self.paused.load(Ordering::Acquire)
    }

    /// True while the alternate screen is shown
    pub fn is_alternate_active(&self) -> bool {
        self.alternate_active.load(Ordering::Acquire)
    }

    /// Screen currently owning the panel
    pub fn active_screen(&self) -> ActiveScreen {
        if self.is_alternate_active() {
            ActiveScreen::Alternate
        } else {
            ActiveScreen::Primary
        }
    }

    pub(crate) fn set_paused(&self, paused: bool) {
        self.paused.store(paused, Ordering::Release);
    }

    pub(crate) fn set_alternate_active(&self, active: bool) {
        self.alternate_active.store(active, Ordering::Release);
    }
}
