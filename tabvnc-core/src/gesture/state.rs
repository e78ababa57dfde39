//! Gesture states and outcomes

use tabvnc_protocol::ScrollDirection;

use crate::mode::ActiveScreen;

/// Recognizer state
///
/// Exactly one is active at a time. Times are millisecond timestamps from
/// the caller's clock.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureState {
    /// No gesture in progress
    #[default]
    Idle,
    /// One finger down, left button held at the last reported position
    SingleDrag { last_x: u16, last_y: u16 },
    /// Two fingers down, wheel events emitted on vertical movement
    TwoFingerScroll {
        start_y: u16,
        last_y: u16,
        /// Time of the last wheel event; `None` until the first one
        last_event_ms: Option<u32>,
    },
    /// One finger went down at the top edge and may become a swipe
    SwipeCandidate { start_x: u16, start_y: u16, start_ms: u32 },
    /// Screen just switched; input ignored until every finger lifts
    SuppressedAfterModeSwitch,
}

/// Notable outcome of a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum GestureEvent {
    /// Three-finger toggle switched to the given screen
    Toggle(ActiveScreen),
    /// Top-edge swipe opened the alternate screen
    Swipe,
    /// One wheel step was sent
    Scroll(ScrollDirection),
}
