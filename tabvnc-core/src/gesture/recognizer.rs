//! Gesture recognizer
//!
//! Evaluated once per input tick, in this priority order:
//!
//! 1. three-finger toggle (debounced, always wins)
//! 2. post-switch suppression until every finger lifts
//! 3. top-edge swipe in progress
//! 4. top-edge swipe start
//! 5. two-finger scroll
//! 6. single-finger drag
//! 7. release
//!
//! Steps 3 to 7 only run while the primary screen is shown.

use tabvnc_protocol::{ButtonMask, RemoteEvent, ScrollDirection};

use super::state::{GestureEvent, GestureState};
use super::touch::{Contact, TouchSnapshot};
use crate::config::GestureConfig;
use crate::mode::{ActiveScreen, ModeController};
use crate::traits::{AlternateScreen, RemoteSink};

/// Touch state machine
#[derive(Debug, Clone)]
pub struct GestureRecognizer {
    config: GestureConfig,
    state: GestureState,
    /// Contact count seen on the previous tick
    prev_count: usize,
    last_toggle_ms: Option<u32>,
}

impl GestureRecognizer {
    pub fn new(config: GestureConfig) -> Self {
        Self {
            config,
            state: GestureState::Idle,
            prev_count: 0,
            last_toggle_ms: None,
        }
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    pub fn config(&self) -> &GestureConfig {
        &self.config
    }

    /// Process one touch snapshot taken at `now_ms`
    ///
    /// Pointer and wheel events go to `sink`; screen switches go through
    /// `mode`.
    pub fn tick<A, S>(
        &mut self,
        touch: &TouchSnapshot,
        now_ms: u32,
        mode: &mut ModeController<'_, A>,
        sink: &mut S,
    ) -> Option<GestureEvent>
    where
        A: AlternateScreen,
        S: RemoteSink,
    {
        let count = touch.count();
        let event = self.evaluate(touch, count, now_ms, mode, sink);
        self.prev_count = count;
        event
    }

    /// Release any held button and return to `Idle`
    ///
    /// Scroll state is dropped without an event since wheel buttons are
    /// released as soon as they are pressed.
    pub fn reset_input<S: RemoteSink>(&mut self, sink: &mut S) {
        self.release_button(sink);
        self.state = GestureState::Idle;
    }

    fn evaluate<A, S>(
        &mut self,
        touch: &TouchSnapshot,
        count: usize,
        now_ms: u32,
        mode: &mut ModeController<'_, A>,
        sink: &mut S,
    ) -> Option<GestureEvent>
    where
        A: AlternateScreen,
        S: RemoteSink,
    {
        if count >= 3 && self.toggle_ready(now_ms) {
            self.last_toggle_ms = Some(now_ms);
            let screen = mode.toggle(self, sink);
            if screen == ActiveScreen::Primary {
                self.state = GestureState::SuppressedAfterModeSwitch;
            }
            return Some(GestureEvent::Toggle(screen));
        }

        if self.state == GestureState::SuppressedAfterModeSwitch {
            if count == 0 {
                self.state = GestureState::Idle;
            }
            return None;
        }

        if let GestureState::SwipeCandidate {
            start_x,
            start_y,
            start_ms,
        } = self.state
        {
            let elapsed = now_ms.wrapping_sub(start_ms);
            match touch.first() {
                Some(c) if count == 1 && elapsed < self.config.swipe_max_time_ms => {
                    let dy = c.y as i32 - start_y as i32;
                    let dx = (c.x as i32 - start_x as i32).unsigned_abs();
                    let min = self.config.swipe_min_distance;
                    if dy >= min as i32 && dx < min as u32 {
                        mode.show_alternate_screen(self, sink);
                        self.state = GestureState::SuppressedAfterModeSwitch;
                        return Some(GestureEvent::Swipe);
                    }
                    return None;
                }
                // Abandoned; the contacts are handled as a fresh gesture
                _ => self.state = GestureState::Idle,
            }
        }

        if mode.flags().is_alternate_active() {
            return None;
        }

        match count {
            0 => {
                self.reset_input(sink);
                None
            }
            1 => {
                let c = touch.first()?;
                self.single(c, now_ms, sink);
                None
            }
            2 => {
                let center = touch.centroid()?;
                self.scroll(center, now_ms, sink)
            }
            // Three or more inside the debounce window: hold
            _ => None,
        }
    }

    fn single<S: RemoteSink>(&mut self, c: Contact, now_ms: u32, sink: &mut S) {
        if matches!(self.state, GestureState::TwoFingerScroll { .. }) {
            // One finger of a scroll lifted; wait for the other
            return;
        }

        if self.prev_count != 1 && c.y <= self.config.swipe_top_threshold {
            self.release_button(sink);
            self.state = GestureState::SwipeCandidate {
                start_x: c.x,
                start_y: c.y,
                start_ms: now_ms,
            };
            return;
        }

        let moved = match self.state {
            GestureState::SingleDrag { last_x, last_y } => (last_x, last_y) != (c.x, c.y),
            _ => true,
        };
        self.state = GestureState::SingleDrag {
            last_x: c.x,
            last_y: c.y,
        };
        if moved {
            sink.send(RemoteEvent::pointer(c.x, c.y, ButtonMask::LEFT));
        }
    }

    fn scroll<S: RemoteSink>(
        &mut self,
        center: Contact,
        now_ms: u32,
        sink: &mut S,
    ) -> Option<GestureEvent> {
        if let GestureState::TwoFingerScroll { last_event_ms, .. } = self.state {
            if self.prev_count != 2 {
                // Contacts changed under the scroll; measure from the new centroid
                self.state = GestureState::TwoFingerScroll {
                    start_y: center.y,
                    last_y: center.y,
                    last_event_ms,
                };
                return None;
            }
        }

        let GestureState::TwoFingerScroll {
            start_y,
            last_y,
            last_event_ms,
        } = self.state
        else {
            self.release_button(sink);
            self.state = GestureState::TwoFingerScroll {
                start_y: center.y,
                last_y: center.y,
                last_event_ms: None,
            };
            return None;
        };

        // Finger moving up scrolls the content up
        let dy = last_y as i32 - center.y as i32;
        let interval_ok = last_event_ms
            .map_or(true, |t| now_ms.wrapping_sub(t) >= self.config.scroll_min_interval_ms);
        if dy.unsigned_abs() < self.config.scroll_threshold as u32 || !interval_ok {
            return None;
        }

        let direction = if dy > 0 {
            ScrollDirection::Up
        } else {
            ScrollDirection::Down
        };
        sink.send(RemoteEvent::pointer(center.x, center.y, direction.button()));
        sink.send(RemoteEvent::pointer(center.x, center.y, ButtonMask::NONE));
        self.state = GestureState::TwoFingerScroll {
            start_y,
            last_y: center.y,
            last_event_ms: Some(now_ms),
        };
        Some(GestureEvent::Scroll(direction))
    }

    fn toggle_ready(&self, now_ms: u32) -> bool {
        self.last_toggle_ms
            .map_or(true, |t| now_ms.wrapping_sub(t) >= self.config.three_touch_debounce_ms)
    }

    fn release_button<S: RemoteSink>(&mut self, sink: &mut S) {
        if let GestureState::SingleDrag { last_x, last_y } = self.state {
            sink.send(RemoteEvent::pointer(last_x, last_y, ButtonMask::NONE));
            self.state = GestureState::Idle;
        }
    }
}

impl Default for GestureRecognizer {
    fn default() -> Self {
        Self::new(GestureConfig::default())
    }
}
