//! Session loop
//!
//! Runs the protocol client, which decodes server messages and calls into
//! the renderer, then delivers queued input events back to the server.

use embassy_futures::yield_now;

use tabvnc_core::traits::{dispatch, RemoteSession, RfbDisplay};
use tabvnc_protocol::RemoteEvent;

use crate::channels::{EventChannel, LinkStatus, LINK_STATUS, REMOTE_EVENTS};

/// RFB client library surface used by the session loop
#[allow(async_fn_in_trait)]
pub trait ProtocolClient: RemoteSession {
    /// Handle pending server messages, calling back into `display`
    ///
    /// Also responsible for connecting and reconnecting.
    async fn process<D: RfbDisplay>(&mut self, display: &mut D);

    /// True while the network link under the session is up
    fn network_connected(&self) -> bool;
}

/// Deliver every queued event to the session
///
/// Events queued while the session is down are discarded so a reconnect
/// does not replay stale input. Returns the number delivered.
pub fn drain_events<S: RemoteSession + ?Sized>(channel: &EventChannel, session: &mut S) -> usize {
    let mut delivered = 0;
    while let Ok(event) = channel.try_receive() {
        if !session.is_connected() {
            trace!("Session down, discarding {:?}", event);
            continue;
        }
        if event == RemoteEvent::FullRefresh {
            debug!("Requesting full refresh");
        }
        dispatch(session, event);
        delivered += 1;
    }
    delivered
}

/// Publish the session state for the input side and the info screen
pub fn publish_connection<S: RemoteSession + ?Sized>(session: &S, link: &LinkStatus) {
    let connected = session.is_connected();
    if link.set_vnc_connected(connected) != connected {
        if connected {
            info!("VNC session connected");
        } else {
            warn!("VNC session lost");
        }
    }
}

/// Publish the network link state for the info screen
pub fn publish_network(connected: bool, link: &LinkStatus) {
    if link.set_wifi_connected(connected) != connected {
        if connected {
            info!("Network up");
        } else {
            warn!("Network down");
        }
    }
}

/// Session loop
pub async fn session_task<C, D>(mut client: C, mut display: D) -> !
where
    C: ProtocolClient,
    D: RfbDisplay,
{
    info!("Session task started");

    loop {
        client.process(&mut display).await;
        publish_network(client.network_connected(), &LINK_STATUS);
        publish_connection(&client, &LINK_STATUS);
        drain_events(&REMOTE_EVENTS, &mut client);
        yield_now().await;
    }
}
