//! Outbound side of the RFB session

use tabvnc_protocol::{ButtonMask, RemoteEvent};

/// Outbound calls offered by the RFB client library
pub trait RemoteSession {
    /// Send a PointerEvent
    fn send_pointer(&mut self, x: u16, y: u16, buttons: ButtonMask);

    /// Send a KeyEvent
    fn send_key(&mut self, keysym: u32, pressed: bool);

    /// Request a non-incremental update of the whole framebuffer
    fn request_full_refresh(&mut self);

    /// Whether the session is established
    fn is_connected(&self) -> bool;
}

/// Destination for events produced by the input side
///
/// The gesture recognizer and mode controller only ever talk to a sink, so
/// they can run in a different task than the RFB session.
pub trait RemoteSink {
    /// Queue or deliver an event
    fn send(&mut self, event: RemoteEvent);

    /// Whether the session is established
    fn is_connected(&self) -> bool;
}

/// Deliver one event to a session
pub fn dispatch<S: RemoteSession + ?Sized>(session: &mut S, event: RemoteEvent) {
    match event {
        RemoteEvent::Pointer { x, y, buttons } => session.send_pointer(x, y, buttons),
        RemoteEvent::Key { keysym, pressed } => session.send_key(keysym, pressed),
        RemoteEvent::FullRefresh => session.request_full_refresh(),
    }
}

/// Sink that delivers straight into a session on the calling task
pub struct SessionSink<'a, S: ?Sized> {
    session: &'a mut S,
}

impl<'a, S: RemoteSession + ?Sized> SessionSink<'a, S> {
    /// Wrap a session
    pub fn new(session: &'a mut S) -> Self {
        Self { session }
    }
}

impl<S: RemoteSession + ?Sized> RemoteSink for SessionSink<'_, S> {
    fn send(&mut self, event: RemoteEvent) {
        dispatch(&mut *self.session, event);
    }

    fn is_connected(&self) -> bool {
        self.session.is_connected()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[derive(Default)]
    struct MockSession {
        pointers: Vec<(u16, u16, u8)>,
        keys: Vec<(u32, bool)>,
        refreshes: usize,
        connected: bool,
    }

    impl RemoteSession for MockSession {
        fn send_pointer(&mut self, x: u16, y: u16, buttons: ButtonMask) {
            self.pointers.push((x, y, buttons.bits()));
        }

        fn send_key(&mut self, keysym: u32, pressed: bool) {
            self.keys.push((keysym, pressed));
        }

        fn request_full_refresh(&mut self) {
            self.refreshes += 1;
        }

        fn is_connected(&self) -> bool {
            self.connected
        }
    }

    #[test]
    fn test_dispatch_routes_each_event() {
        let mut session = MockSession::default();
        dispatch(&mut session, RemoteEvent::pointer(3, 4, ButtonMask::LEFT));
        dispatch(&mut session, RemoteEvent::key(0x61, true));
        dispatch(&mut session, RemoteEvent::FullRefresh);

        assert_eq!(session.pointers, [(3, 4, 1)]);
        assert_eq!(session.keys, [(0x61, true)]);
        assert_eq!(session.refreshes, 1);
    }

    #[test]
    fn test_session_sink_forwards_connection_state() {
        let mut session = MockSession {
            connected: true,
            ..Default::default()
        };
        let mut sink = SessionSink::new(&mut session);
        assert!(sink.is_connected());
        sink.send(RemoteEvent::FullRefresh);
        assert_eq!(session.refreshes, 1);
    }
}
