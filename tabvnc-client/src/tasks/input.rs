//! Input loop
//!
//! Samples the touch controller on a fixed cadence, runs the gesture
//! recognizer, and forwards keyboard input.

use embassy_time::{Duration, Instant, Ticker};

use tabvnc_core::config::{GestureConfig, InputConfig};
use tabvnc_core::gesture::{GestureEvent, GestureRecognizer};
use tabvnc_core::mode::{ActiveScreen, ModeController, ModeFlags};
use tabvnc_core::traits::{AlternateScreen, RemoteSink, TouchSource};
use tabvnc_drivers::keyboard::KeySource;

use super::keyboard::forward_key;
use crate::channels::{LINK_STATUS, REMOTE_EVENTS};
use crate::sink::ChannelSink;

/// Touch side of the viewer
pub struct InputLoop<'m, T, A> {
    touch: T,
    gestures: GestureRecognizer,
    mode: ModeController<'m, A>,
}

impl<'m, T, A> InputLoop<'m, T, A>
where
    T: TouchSource,
    A: AlternateScreen,
{
    pub fn new(touch: T, config: GestureConfig, mode: ModeController<'m, A>) -> Self {
        Self {
            touch,
            gestures: GestureRecognizer::new(config),
            mode,
        }
    }

    /// Process one touch sample taken at `now_ms`
    pub fn step<S: RemoteSink>(&mut self, now_ms: u32, sink: &mut S) -> Option<GestureEvent> {
        let snapshot = self.touch.snapshot();
        let event = self
            .gestures
            .tick(&snapshot, now_ms, &mut self.mode, sink);

        match event {
            Some(GestureEvent::Toggle(ActiveScreen::Alternate)) | Some(GestureEvent::Swipe) => {
                info!("Showing connection info, rendering paused");
            }
            Some(GestureEvent::Toggle(ActiveScreen::Primary)) => {
                info!("Returning to remote desktop, rendering resumed");
            }
            Some(GestureEvent::Scroll(direction)) => {
                trace!("Scroll {:?}", direction);
            }
            None => {}
        }
        event
    }

    pub fn flags(&self) -> &'m ModeFlags {
        self.mode.flags()
    }

    pub fn gestures(&self) -> &GestureRecognizer {
        &self.gestures
    }

    pub fn mode(&self) -> &ModeController<'m, A> {
        &self.mode
    }
}

/// Input loop
///
/// `keyboard` is `None` when no keyboard was found at startup.
pub async fn input_task<T, A, K>(
    mut input: InputLoop<'_, T, A>,
    mut keyboard: Option<K>,
    config: InputConfig,
) -> !
where
    T: TouchSource,
    A: AlternateScreen,
    K: KeySource,
{
    info!("Input task started");

    let mut ticker = Ticker::every(Duration::from_millis(config.tick_ms as u64));
    let mut sink = ChannelSink::new(&REMOTE_EVENTS, &LINK_STATUS);
    let start = Instant::now();

    loop {
        ticker.next().await;

        sink.flush();
        let now_ms = start.elapsed().as_millis() as u32;
        input.step(now_ms, &mut sink);

        if let Some(kb) = keyboard.as_mut() {
            match kb.poll_key().await {
                Ok(Some(code)) => {
                    forward_key(code, input.flags(), &mut sink, config.key_press_ms).await;
                }
                Ok(None) => {}
                Err(_) => warn!("Keyboard read failed"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::VecDeque;
    use tabvnc_core::gesture::TouchSnapshot;
    use tabvnc_display::{DisplayError, LineStyle, StatusBackend};
    use tabvnc_protocol::{ButtonMask, RemoteEvent};

    use crate::channels::{EventChannel, LinkStatus, EVENT_CHANNEL_SIZE};
    use crate::panel::InfoPanel;
    use embassy_sync::channel::Channel;
    use tabvnc_core::config::ViewerConfig;

    /// Touch controller replaying scripted samples, then reporting no contacts
    struct ScriptedTouch {
        samples: VecDeque<TouchSnapshot>,
    }

    impl ScriptedTouch {
        fn new(script: &[&[(u16, u16)]]) -> Self {
            Self {
                samples: script.iter().map(|s| TouchSnapshot::from_points(s)).collect(),
            }
        }
    }

    impl TouchSource for ScriptedTouch {
        fn snapshot(&mut self) -> TouchSnapshot {
            self.samples.pop_front().unwrap_or_default()
        }
    }

    #[derive(Default)]
    struct NullStatus {
        renders: usize,
    }

    impl StatusBackend for NullStatus {
        fn clear(&mut self, _color: u16) -> Result<(), DisplayError> {
            Ok(())
        }

        fn draw_line(&mut self, _row: u8, _style: LineStyle, _text: &str) -> Result<(), DisplayError> {
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.renders += 1;
            Ok(())
        }
    }

    fn drain(channel: &EventChannel) -> alloc::vec::Vec<RemoteEvent> {
        core::iter::from_fn(|| channel.try_receive().ok()).collect()
    }

    #[test]
    fn test_drag_reaches_channel() {
        let flags = ModeFlags::new();
        let link = LinkStatus::new();
        let channel: EventChannel = Channel::new();
        let config = ViewerConfig::default();
        let panel = InfoPanel::new(NullStatus::default(), &config, &link);
        let touch = ScriptedTouch::new(&[&[(200, 300)], &[(210, 300)], &[]]);
        let mut input = InputLoop::new(touch, config.gesture, ModeController::new(&flags, panel));
        let mut sink = ChannelSink::new(&channel, &link);

        for t in 0..3 {
            input.step(t * 10, &mut sink);
        }

        assert_eq!(
            drain(&channel),
            [
                RemoteEvent::pointer(200, 300, ButtonMask::LEFT),
                RemoteEvent::pointer(210, 300, ButtonMask::LEFT),
                RemoteEvent::pointer(210, 300, ButtonMask::NONE),
            ]
        );
    }

    #[test]
    fn test_long_drag_release_not_lost_when_session_stalls() {
        let flags = ModeFlags::new();
        let link = LinkStatus::new();
        let channel: EventChannel = Channel::new();
        let config = ViewerConfig::default();
        let panel = InfoPanel::new(NullStatus::default(), &config, &link);
        let drag: alloc::vec::Vec<[(u16, u16); 1]> = (100..120).map(|x| [(x, 300)]).collect();
        let mut script: alloc::vec::Vec<&[(u16, u16)]> = drag.iter().map(|p| &p[..]).collect();
        script.push(&[]);
        let touch = ScriptedTouch::new(&script);
        let mut input = InputLoop::new(touch, config.gesture, ModeController::new(&flags, panel));
        let mut sink = ChannelSink::new(&channel, &link);

        // Nothing drains the channel for the whole drag
        for t in 0..21 {
            input.step(t * 10, &mut sink);
        }

        let events = drain(&channel);
        assert_eq!(
            events.last(),
            Some(&RemoteEvent::pointer(119, 300, ButtonMask::NONE))
        );
        assert!(events.len() <= EVENT_CHANNEL_SIZE);
    }

    #[test]
    fn test_three_fingers_show_info_then_return() {
        let flags = ModeFlags::new();
        let link = LinkStatus::new();
        link.set_vnc_connected(true);
        let channel: EventChannel = Channel::new();
        let config = ViewerConfig::default();
        let panel = InfoPanel::new(NullStatus::default(), &config, &link);
        let three: &[(u16, u16)] = &[(100, 400), (200, 400), (300, 400)];
        let touch = ScriptedTouch::new(&[three, &[], three, &[]]);
        let mut input = InputLoop::new(touch, config.gesture, ModeController::new(&flags, panel));
        let mut sink = ChannelSink::new(&channel, &link);

        assert_eq!(
            input.step(0, &mut sink),
            Some(GestureEvent::Toggle(ActiveScreen::Alternate))
        );
        assert!(flags.is_paused());
        assert_eq!(input.mode().screen().backend().renders, 1);

        input.step(100, &mut sink);
        assert_eq!(
            input.step(600, &mut sink),
            Some(GestureEvent::Toggle(ActiveScreen::Primary))
        );
        input.step(700, &mut sink);

        assert!(!flags.is_paused());
        assert_eq!(drain(&channel), [RemoteEvent::FullRefresh]);
    }
}
