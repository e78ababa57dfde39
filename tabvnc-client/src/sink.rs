//! Channel-backed remote event sink

use heapless::Deque;

use tabvnc_core::traits::RemoteSink;
use tabvnc_protocol::RemoteEvent;

use crate::channels::{EventChannel, LinkStatus, EVENT_CHANNEL_SIZE};

/// Channel slots drag samples may not use
///
/// Keeps room for the release that ends a drag and for refresh requests.
const RESERVED_SLOTS: usize = 4;

/// Events held back while the channel is full
const BACKLOG_SIZE: usize = 16;

/// Sink that queues events for the session loop
///
/// Never blocks: the input loop runs on a fixed cadence. Under load, drag
/// samples are skipped since the next sample supersedes them. Releases, wheel
/// steps, keys and refresh requests wait in a backlog instead, flushed ahead
/// of anything sent later.
pub struct ChannelSink<'c> {
    channel: &'c EventChannel,
    link: &'c LinkStatus,
    backlog: Deque<RemoteEvent, BACKLOG_SIZE>,
}

impl<'c> ChannelSink<'c> {
    pub fn new(channel: &'c EventChannel, link: &'c LinkStatus) -> Self {
        Self {
            channel,
            link,
            backlog: Deque::new(),
        }
    }

    /// Move backlogged events into the channel while it has room
    pub fn flush(&mut self) {
        while let Some(&event) = self.backlog.front() {
            if self.channel.try_send(event).is_err() {
                return;
            }
            self.backlog.pop_front();
        }
    }

    /// Events waiting for channel space
    pub fn backlog_len(&self) -> usize {
        self.backlog.len()
    }
}

impl RemoteSink for ChannelSink<'_> {
    fn send(&mut self, event: RemoteEvent) {
        self.flush();

        if event.is_drag_sample() {
            let room = EVENT_CHANNEL_SIZE - self.channel.len();
            if !self.backlog.is_empty() || room <= RESERVED_SLOTS {
                trace!("Remote event channel busy, skipping drag sample");
                return;
            }
        }

        if self.backlog.is_empty() && self.channel.try_send(event).is_ok() {
            return;
        }
        if self.backlog.push_back(event).is_err() {
            warn!("Remote event backlog full, dropping event");
        }
    }

    fn is_connected(&self) -> bool {
        self.link.vnc_connected()
    }
}
