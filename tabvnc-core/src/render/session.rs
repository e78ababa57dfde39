//! Streamed area update bookkeeping

use super::pixel::Rect;

/// State of one streamed area update
///
/// The cursor counts pixels consumed since the session began and wraps back
/// to zero once a full rectangle has been consumed, so it always stays below
/// `w * h`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AreaUpdateSession {
    rect: Rect,
    cursor: u32,
    open: bool,
}

impl AreaUpdateSession {
    /// Create a closed session
    pub const fn new() -> Self {
        Self {
            rect: Rect::new(0, 0, 0, 0),
            cursor: 0,
            open: false,
        }
    }

    /// Start a new session, discarding any unfinished one
    pub fn begin(&mut self, rect: Rect) {
        self.rect = rect;
        self.cursor = 0;
        self.open = true;
    }

    /// Close the session
    pub fn end(&mut self) {
        self.cursor = 0;
        self.open = false;
    }

    /// Consume `count` pixels
    pub fn advance(&mut self, count: u32) {
        let area = self.rect.area();
        if area == 0 {
            return;
        }
        self.cursor = ((self.cursor as u64 + count as u64) % area as u64) as u32;
    }

    /// Absolute position of the pixel `offset` places after the cursor
    ///
    /// Returns `None` for an empty target rectangle.
    pub fn position(&self, offset: u32) -> Option<(u32, u32)> {
        let area = self.rect.area();
        if area == 0 {
            return None;
        }
        let index = ((self.cursor as u64 + offset as u64) % area as u64) as u32;
        Some(self.rect.point_at(index))
    }

    /// Target rectangle
    pub fn rect(&self) -> Rect {
        self.rect
    }

    /// Pixels consumed in the current rectangle
    pub fn cursor(&self) -> u32 {
        self.cursor
    }

    /// True between `begin` and `end`
    pub fn is_open(&self) -> bool {
        self.open
    }
}
