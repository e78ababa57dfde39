//! Connection info screen model
//!
//! The info screen is what the viewer shows instead of the remote desktop
//! while rendering is paused. This module only builds the text lines; a
//! `StatusBackend` turns them into pixels.

use core::fmt::Write;

use heapless::String;

use crate::backend::{DisplayError, LineStyle, StatusBackend};

/// Number of lines on the info screen
pub const INFO_ROWS: usize = 10;

/// Maximum characters per line
pub const LINE_LEN: usize = 48;

const TITLE: &str = "Connection Info";
const FOOTER: &str = "Touch with 3 fingers to return to VNC";

/// Values shown on the info screen
#[derive(Debug, Clone, Copy)]
pub struct ConnectionInfo<'a> {
    /// Wireless network name
    pub ssid: &'a str,
    /// VNC server host
    pub host: &'a str,
    /// VNC server port
    pub port: u16,
    /// Network link state
    pub wifi_connected: bool,
    /// RFB session state
    pub vnc_connected: bool,
}

/// Line buffer for the info screen
#[derive(Clone)]
pub struct InfoScreen {
    /// Text per row
    lines: [String<LINE_LEN>; INFO_ROWS],
    /// Style per row
    styles: [LineStyle; INFO_ROWS],
    /// Whether the screen needs to be redrawn
    dirty: bool,
}

impl Default for InfoScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl InfoScreen {
    /// Create a new empty screen
    pub fn new() -> Self {
        Self {
            lines: core::array::from_fn(|_| String::new()),
            styles: [LineStyle::Value; INFO_ROWS],
            dirty: true,
        }
    }

    /// Clear every line
    pub fn clear(&mut self) {
        for line in &mut self.lines {
            line.clear();
        }
        self.styles = [LineStyle::Value; INFO_ROWS];
        self.dirty = true;
    }

    /// Set the content of a row, truncating to `LINE_LEN` characters
    pub fn set_line(&mut self, row: usize, style: LineStyle, text: &str) {
        if row < INFO_ROWS {
            let line = &mut self.lines[row];
            line.clear();
            for ch in text.chars() {
                if line.push(ch).is_err() {
                    break;
                }
            }
            self.styles[row] = style;
            self.dirty = true;
        }
    }

    /// Get the content of a row
    pub fn line(&self, row: usize) -> Option<(LineStyle, &str)> {
        self.lines
            .get(row)
            .map(|text| (self.styles[row], text.as_str()))
    }

    /// Iterate over non-empty rows as `(row, style, text)`
    pub fn lines(&self) -> impl Iterator<Item = (u8, LineStyle, &str)> {
        self.lines
            .iter()
            .zip(self.styles.iter())
            .enumerate()
            .filter(|(_, (text, _))| !text.is_empty())
            .map(|(row, (text, style))| (row as u8, *style, text.as_str()))
    }

    /// Fill the screen from connection state
    pub fn show_connection(&mut self, info: &ConnectionInfo<'_>) {
        self.clear();
        self.set_line(0, LineStyle::Title, TITLE);
        self.set_line(1, LineStyle::Label, "WiFi Network");
        self.set_line(2, LineStyle::Value, info.ssid);
        self.set_line(3, LineStyle::Label, "VNC Server");
        self.set_line(4, LineStyle::Value, info.host);
        self.set_line(5, LineStyle::Label, "Port");

        let mut port: String<8> = String::new();
        let _ = write!(port, "{}", info.port);
        self.set_line(6, LineStyle::Value, &port);

        if info.wifi_connected {
            self.set_line(7, LineStyle::StatusOk, "WiFi OK");
        } else {
            self.set_line(7, LineStyle::StatusError, "WiFi Disconnected");
        }
        if info.vnc_connected {
            self.set_line(8, LineStyle::StatusOk, "VNC Connected");
        } else {
            self.set_line(8, LineStyle::StatusError, "VNC Disconnected");
        }
        self.set_line(9, LineStyle::Footer, FOOTER);
    }

    /// Draw all non-empty lines to a backend and mark the screen clean
    pub fn render<B: StatusBackend + ?Sized>(&mut self, backend: &mut B) -> Result<(), DisplayError> {
        backend.clear(0x0000)?;
        for (row, style, text) in self.lines() {
            backend.draw_line(row, style, text)?;
        }
        backend.flush()?;
        self.dirty = false;
        Ok(())
    }

    /// Check if screen needs redrawing
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Mark screen as dirty (needs redraw)
    pub fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    /// Get number of rows
    pub const fn rows(&self) -> usize {
        INFO_ROWS
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    extern crate std;
    use std::vec::Vec;

    struct RecordingStatus {
        lines: Vec<(u8, LineStyle, std::string::String)>,
        clears: usize,
        flushes: usize,
    }

    impl StatusBackend for RecordingStatus {
        fn clear(&mut self, _color: u16) -> Result<(), DisplayError> {
            self.clears += 1;
            self.lines.clear();
            Ok(())
        }

        fn draw_line(&mut self, row: u8, style: LineStyle, text: &str) -> Result<(), DisplayError> {
            self.lines.push((row, style, text.into()));
            Ok(())
        }

        fn flush(&mut self) -> Result<(), DisplayError> {
            self.flushes += 1;
            Ok(())
        }
    }

    fn info(wifi: bool, vnc: bool) -> ConnectionInfo<'static> {
        ConnectionInfo {
            ssid: "workshop",
            host: "192.168.1.100",
            port: 5900,
            wifi_connected: wifi,
            vnc_connected: vnc,
        }
    }

    #[test]
    fn test_connection_lines() {
        let mut screen = InfoScreen::new();
        screen.show_connection(&info(true, false));

        assert_eq!(screen.line(0), Some((LineStyle::Title, "Connection Info")));
        assert_eq!(screen.line(2), Some((LineStyle::Value, "workshop")));
        assert_eq!(screen.line(4), Some((LineStyle::Value, "192.168.1.100")));
        assert_eq!(screen.line(6), Some((LineStyle::Value, "5900")));
        assert_eq!(screen.line(7), Some((LineStyle::StatusOk, "WiFi OK")));
        assert_eq!(screen.line(8), Some((LineStyle::StatusError, "VNC Disconnected")));
        assert_eq!(screen.line(9).map(|(s, _)| s), Some(LineStyle::Footer));
    }

    #[test]
    fn test_long_lines_truncate() {
        let mut screen = InfoScreen::new();
        let long = "x".repeat(LINE_LEN + 10);
        screen.set_line(2, LineStyle::Value, &long);
        assert_eq!(screen.line(2).map(|(_, t)| t.len()), Some(LINE_LEN));
    }

    #[test]
    fn test_out_of_range_row_ignored() {
        let mut screen = InfoScreen::new();
        screen.set_line(INFO_ROWS, LineStyle::Value, "nope");
        assert_eq!(screen.lines().count(), 0);
        assert!(screen.line(INFO_ROWS).is_none());
    }

    #[test]
    fn test_render_draws_every_line_and_cleans() {
        let mut screen = InfoScreen::new();
        screen.show_connection(&info(false, true));
        let mut backend = RecordingStatus {
            lines: Vec::new(),
            clears: 0,
            flushes: 0,
        };

        screen.render(&mut backend).unwrap();

        assert_eq!(backend.clears, 1);
        assert_eq!(backend.flushes, 1);
        assert_eq!(backend.lines.len(), INFO_ROWS);
        assert_eq!(backend.lines[7].2, "WiFi Disconnected");
        assert!(!screen.is_dirty());
    }
}
