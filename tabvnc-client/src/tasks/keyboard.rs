//! Keyboard forwarding
//!
//! Each CardKB code becomes a key press, a short hold, and a release.

use embassy_time::Timer;
use embedded_hal_async::i2c::I2c;

use tabvnc_core::mode::ModeFlags;
use tabvnc_core::traits::RemoteSink;
use tabvnc_drivers::keyboard::CardKb;
use tabvnc_protocol::{cardkb_to_keysym, RemoteEvent};

/// Probe for a CardKB on the bus
///
/// Returns `None` when no keyboard answers; the viewer runs without one.
pub async fn init_keyboard<I: I2c>(i2c: I) -> Option<CardKb<I>> {
    let mut keyboard = CardKb::new(i2c);
    if keyboard.probe().await {
        info!("CardKB available");
        Some(keyboard)
    } else {
        info!("No CardKB found, keyboard input disabled");
        None
    }
}

/// Send one key to the remote session
///
/// Keys are dropped while the alternate screen is shown. Returns whether
/// the key was sent.
pub async fn forward_key<S: RemoteSink>(
    code: u8,
    flags: &ModeFlags,
    sink: &mut S,
    press_ms: u32,
) -> bool {
    if flags.is_alternate_active() {
        trace!("Key {=u8:#x} ignored on info screen", code);
        return false;
    }
    let Some(keysym) = cardkb_to_keysym(code) else {
        debug!("Unmapped CardKB code {=u8:#x}", code);
        return false;
    };

    sink.send(RemoteEvent::key(keysym, true));
    Timer::after_millis(press_ms as u64).await;
    sink.send(RemoteEvent::key(keysym, false));
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use embassy_futures::block_on;
    use embedded_hal::i2c::{ErrorKind, ErrorType, Operation};
    use tabvnc_protocol::keysym::{XK_LEFT, XK_RETURN};

    struct Recorder {
        events: Vec<RemoteEvent>,
    }

    impl RemoteSink for Recorder {
        fn send(&mut self, event: RemoteEvent) {
            self.events.push(event);
        }

        fn is_connected(&self) -> bool {
            true
        }
    }

    struct Bus {
        present: bool,
    }

    impl ErrorType for Bus {
        type Error = ErrorKind;
    }

    impl I2c for Bus {
        async fn transaction(
            &mut self,
            _address: u8,
            _operations: &mut [Operation<'_>],
        ) -> Result<(), Self::Error> {
            if self.present {
                Ok(())
            } else {
                Err(ErrorKind::NoAcknowledge(
                    embedded_hal::i2c::NoAcknowledgeSource::Address,
                ))
            }
        }
    }

    #[test]
    fn test_key_press_then_release() {
        let flags = ModeFlags::new();
        let mut sink = Recorder { events: Vec::new() };

        assert!(block_on(forward_key(b'\r', &flags, &mut sink, 1)));
        assert!(block_on(forward_key(0xb4, &flags, &mut sink, 1)));

        assert_eq!(
            sink.events,
            [
                RemoteEvent::key(XK_RETURN, true),
                RemoteEvent::key(XK_RETURN, false),
                RemoteEvent::key(XK_LEFT, true),
                RemoteEvent::key(XK_LEFT, false),
            ]
        );
    }

    #[test]
    fn test_unmapped_code_dropped() {
        let flags = ModeFlags::new();
        let mut sink = Recorder { events: Vec::new() };

        assert!(!block_on(forward_key(0x80, &flags, &mut sink, 1)));
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_keys_ignored_on_info_screen() {
        struct Blank;
        impl tabvnc_core::traits::AlternateScreen for Blank {
            fn show(&mut self) {}
            fn clear_primary(&mut self) {}
        }

        let flags = ModeFlags::new();
        let mut sink = Recorder { events: Vec::new() };
        let mut mode = tabvnc_core::mode::ModeController::new(&flags, Blank);
        let mut gestures = tabvnc_core::gesture::GestureRecognizer::default();
        mode.show_alternate_screen(&mut gestures, &mut sink);

        assert!(!block_on(forward_key(b'a', &flags, &mut sink, 1)));
        assert!(sink.events.is_empty());
    }

    #[test]
    fn test_probe_result() {
        assert!(block_on(init_keyboard(Bus { present: true })).is_some());
        assert!(block_on(init_keyboard(Bus { present: false })).is_none());
    }
}
