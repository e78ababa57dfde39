//! Mode controller
//!
//! The only place that switches screens. Ordering is what matters here:
//!
//! - entering the alternate screen pauses rendering before anything is drawn
//!   over the remote desktop
//! - leaving it resumes rendering before the full refresh is requested, so
//!   the refreshed pixels are not dropped

use tabvnc_protocol::RemoteEvent;

use super::flags::{ActiveScreen, ModeFlags};
use crate::gesture::GestureRecognizer;
use crate::traits::{AlternateScreen, RemoteSink};

/// Screen switcher
pub struct ModeController<'m, A> {
    flags: &'m ModeFlags,
    screen: A,
}

impl<'m, A: AlternateScreen> ModeController<'m, A> {
    /// Create a controller writing to `flags` and drawing through `screen`
    pub fn new(flags: &'m ModeFlags, screen: A) -> Self {
        Self { flags, screen }
    }

    /// Pause remote rendering and show the alternate screen
    ///
    /// Any held pointer button is released first so the remote side never
    /// sees a drag that outlives the primary screen.
    pub fn show_alternate_screen<S: RemoteSink>(
        &mut self,
        gestures: &mut GestureRecognizer,
        sink: &mut S,
    ) {
        gestures.reset_input(sink);
        self.flags.set_paused(true);
        self.flags.set_alternate_active(true);
        self.screen.show();
    }

    /// Leave the alternate screen and resume remote rendering
    pub fn return_to_primary_screen<S: RemoteSink>(&mut self, sink: &mut S) {
        self.flags.set_alternate_active(false);
        self.screen.clear_primary();
        self.flags.set_paused(false);
        if sink.is_connected() {
            sink.send(RemoteEvent::FullRefresh);
        }
    }

    /// Switch to the other screen, returning the one now shown
    pub fn toggle<S: RemoteSink>(
        &mut self,
        gestures: &mut GestureRecognizer,
        sink: &mut S,
    ) -> ActiveScreen {
        match self.flags.active_screen() {
            ActiveScreen::Primary => {
                self.show_alternate_screen(gestures, sink);
                ActiveScreen::Alternate
            }
            ActiveScreen::Alternate => {
                self.return_to_primary_screen(sink);
                ActiveScreen::Primary
            }
        }
    }

    /// Screen currently owning the panel
    pub fn active_screen(&self) -> ActiveScreen {
        self.flags.active_screen()
    }

    pub fn flags(&self) -> &'m ModeFlags {
        self.flags
    }

    pub fn screen(&self) -> &A {
        &self.screen
    }

    pub fn screen_mut(&mut self) -> &mut A {
        &mut self.screen
    }
}
