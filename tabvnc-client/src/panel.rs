//! Connection info panel
//!
//! The alternate screen: SSID, server, port and link status, drawn as text
//! lines through a `StatusBackend`.

use heapless::String;

use tabvnc_core::config::{ViewerConfig, MAX_HOST_LEN, MAX_SSID_LEN};
use tabvnc_core::traits::AlternateScreen;
use tabvnc_display::{ConnectionInfo, InfoScreen, StatusBackend};

use crate::channels::LinkStatus;

/// Color the primary area is cleared to before remote rendering resumes
const PRIMARY_BACKGROUND: u16 = 0x0000;

/// Alternate screen drawn from the viewer configuration and link state
pub struct InfoPanel<'a, T> {
    backend: T,
    screen: InfoScreen,
    ssid: String<MAX_SSID_LEN>,
    host: String<MAX_HOST_LEN>,
    port: u16,
    link: &'a LinkStatus,
}

impl<'a, T: StatusBackend> InfoPanel<'a, T> {
    pub fn new(backend: T, config: &ViewerConfig, link: &'a LinkStatus) -> Self {
        Self {
            backend,
            screen: InfoScreen::new(),
            ssid: config.network.ssid.clone(),
            host: config.server.host.clone(),
            port: config.server.port,
            link,
        }
    }

    /// Lines shown by the last `show`
    pub fn screen(&self) -> &InfoScreen {
        &self.screen
    }

    pub fn backend(&self) -> &T {
        &self.backend
    }
}

impl<T: StatusBackend> AlternateScreen for InfoPanel<'_, T> {
    fn show(&mut self) {
        self.screen.show_connection(&ConnectionInfo {
            ssid: &self.ssid,
            host: &self.host,
            port: self.port,
            wifi_connected: self.link.wifi_connected(),
            vnc_connected: self.link.vnc_connected(),
        });
        if let Err(e) = self.screen.render(&mut self.backend) {
            warn!("Info screen render failed: {:?}", e);
        }
    }

    fn clear_primary(&mut self) {
        let result = self
            .backend
            .clear(PRIMARY_BACKGROUND)
            .and_then(|()| self.backend.flush());
        if let Err(e) = result {
            warn!("Primary clear failed: {:?}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::ToString;
    use alloc::vec::Vec;
    use tabvnc_display::{DisplayError, LineStyle};

    #[derive(Default)]
    struct RecordingStatus {
        clears: Vec<u16>,
        lines: Vec<(u8, LineStyle, alloc::string::String)>,
        flushes: usize,
        fail: bool,
    }

    impl StatusBackend for RecordingStatus {
        fn clear(&mut self, color: u16) -> Result<(), DisplayError> {
            if self.fail {
                return Err(DisplayError::Communication);
            }
            self.clears.push(color);
            self.lines.clear();
            Ok(())
        }

        fn draw_line(&mut self, row: u8, style: LineStyle, text: &str) -> Result<(), DisplayError> {
            self.lines.push((row, style, text.to_string()));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn config() -> ViewerConfig {
        let mut config = ViewerConfig::default();
        let _ = config.network.ssid.push_str("lab-net");
        let _ = config.server.host.push_str("192.168.1.20");
        config.server.port = 5901;
        config
    }

    #[test]
    fn test_show_lists_connection() {
        let link = LinkStatus::new();
        link.set_wifi_connected(true);
        let mut panel = InfoPanel::new(RecordingStatus::default(), &config(), &link);

        panel.show();

        let lines = &panel.backend().lines;
        assert_eq!(lines[0], (0, LineStyle::Title, "Connection Info".to_string()));
        assert!(lines.contains(&(2, LineStyle::Value, "lab-net".to_string())));
        assert!(lines.contains(&(4, LineStyle::Value, "192.168.1.20".to_string())));
        assert!(lines.contains(&(6, LineStyle::Value, "5901".to_string())));
        assert!(lines.contains(&(7, LineStyle::StatusOk, "WiFi OK".to_string())));
        assert!(lines.contains(&(8, LineStyle::StatusError, "VNC Disconnected".to_string())));
        assert_eq!(
            lines.last().map(|l| l.2.as_str()),
            Some("Touch with 3 fingers to return to VNC")
        );
        assert_eq!(panel.backend().flushes, 1);
    }

    #[test]
    fn test_clear_primary_blanks_and_flushes() {
        let link = LinkStatus::new();
        let mut panel = InfoPanel::new(RecordingStatus::default(), &config(), &link);

        panel.clear_primary();

        assert_eq!(panel.backend().clears, [PRIMARY_BACKGROUND]);
        assert_eq!(panel.backend().flushes, 1);
    }

    #[test]
    fn test_backend_failure_is_not_fatal() {
        let link = LinkStatus::new();
        let backend = RecordingStatus {
            fail: true,
            ..Default::default()
        };
        let mut panel = InfoPanel::new(backend, &config(), &link);

        panel.show();
        panel.clear_primary();

        assert_eq!(panel.backend().flushes, 0);
    }
}
