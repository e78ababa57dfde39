//! Render adapter
//!
//! Translates RFB update callbacks into framebuffer writes:
//!
//! - every pixel is converted from wire to panel byte order
//! - raw rectangles are written inside one scoped write context
//! - streamed updates keep their write context open across batches
//! - copy-rect goes through a scratch buffer, degrading to row-sized and then
//!   stack-sized buffers when the fast memory pool is exhausted
//!
//! While the shared paused flag is set no panel writes happen at all, but the
//! stream cursor keeps advancing so the session stays consistent with what the
//! server sent.

use alloc::vec::Vec;
use core::ops::{Deref, DerefMut};

use tabvnc_display::{DisplayError, FramebufferBackend};

use super::pixel::{swap_bytes, wire_pixels, Rect};
use super::session::AreaUpdateSession;
use crate::config::RenderConfig;
use crate::mode::ModeFlags;
use crate::traits::RfbDisplay;

/// Pixels per on-stack chunk when no scratch memory is available at all
const STACK_CHUNK_PX: usize = 64;

/// Counters for diagnostics
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RenderStats {
    /// Rectangles drawn (raw, fill, copy, and streamed sessions)
    pub rects: u32,
    /// Pixels written to the panel one at a time
    pub pixels_written: u32,
    /// Pixels received while paused and discarded
    pub pixels_dropped: u32,
    /// Copy-rect calls that could not get a full scratch buffer
    pub copy_fallbacks: u32,
}

/// Open write context, closed on drop
///
/// Guarantees `end_write` runs on every exit path of a scoped write,
/// including early returns through `?`.
struct WriteGuard<'a, B: FramebufferBackend> {
    backend: &'a mut B,
}

impl<'a, B: FramebufferBackend> WriteGuard<'a, B> {
    fn open(backend: &'a mut B) -> Result<Self, DisplayError> {
        backend.begin_write()?;
        Ok(Self { backend })
    }
}

impl<B: FramebufferBackend> Deref for WriteGuard<'_, B> {
    type Target = B;

    fn deref(&self) -> &B {
        self.backend
    }
}

impl<B: FramebufferBackend> DerefMut for WriteGuard<'_, B> {
    fn deref_mut(&mut self) -> &mut B {
        self.backend
    }
}

impl<B: FramebufferBackend> Drop for WriteGuard<'_, B> {
    fn drop(&mut self) {
        self.backend.end_write();
    }
}

/// RFB display implementation on top of a framebuffer backend
pub struct RenderAdapter<'m, B> {
    backend: B,
    flags: &'m ModeFlags,
    session: AreaUpdateSession,
    /// True while the streamed update holds the write context
    stream_open: bool,
    /// Largest scratch buffer (in pixels) copy-rect may allocate
    scratch_limit: usize,
    stats: RenderStats,
}

impl<'m, B: FramebufferBackend> RenderAdapter<'m, B> {
    /// Create an adapter reading the paused flag from `flags`
    pub fn new(backend: B, flags: &'m ModeFlags) -> Self {
        Self {
            backend,
            flags,
            session: AreaUpdateSession::new(),
            stream_open: false,
            scratch_limit: usize::MAX,
            stats: RenderStats::default(),
        }
    }

    /// Cap scratch allocations at `pixels`
    ///
    /// Requests above the cap are treated like an allocation failure.
    pub fn with_scratch_limit(mut self, pixels: usize) -> Self {
        self.scratch_limit = pixels;
        self
    }

    /// Apply renderer settings
    pub fn with_config(self, config: &RenderConfig) -> Self {
        self.with_scratch_limit(config.scratch_limit())
    }

    /// Fill a rectangle with a wire-order color
    pub fn draw_filled_rect(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        color: u16,
    ) -> Result<(), DisplayError> {
        if self.is_paused() {
            return Ok(());
        }
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.backend.fill_rect(x, y, w, h, swap_bytes(color))?;
        self.stats.rects = self.stats.rects.wrapping_add(1);
        Ok(())
    }

    /// Write a rectangle of wire-order pixels, row-major
    pub fn draw_area(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        pixels: &[u16],
    ) -> Result<(), DisplayError> {
        self.draw_pixels(Rect::new(x, y, w, h), pixels.iter().copied())
    }

    /// Copy a panel rectangle to another position
    pub fn copy_rect(
        &mut self,
        src_x: u32,
        src_y: u32,
        dst_x: u32,
        dst_y: u32,
        w: u32,
        h: u32,
    ) -> Result<(), DisplayError> {
        if self.is_paused() {
            return Ok(());
        }
        if w == 0 || h == 0 {
            return Ok(());
        }
        self.release_stream();
        self.stats.rects = self.stats.rects.wrapping_add(1);

        let len = w as usize * h as usize;
        if let Some(mut buf) = self.scratch(len) {
            self.backend.read_rect(src_x, src_y, w, h, &mut buf)?;
            return self.backend.blit(dst_x, dst_y, w, h, &buf);
        }

        self.stats.copy_fallbacks = self.stats.copy_fallbacks.wrapping_add(1);

        // Walk rows away from the destination so overlapping copies read
        // source rows before they are overwritten.
        let bottom_up = dst_y > src_y;
        let rows = (0..h).map(move |i| if bottom_up { h - 1 - i } else { i });

        if let Some(mut line) = self.scratch(w as usize) {
            for row in rows {
                self.backend.read_rect(src_x, src_y + row, w, 1, &mut line)?;
                self.backend.blit(dst_x, dst_y + row, w, 1, &line)?;
            }
            return Ok(());
        }

        let mut chunk = [0u16; STACK_CHUNK_PX];
        let chunk_w = STACK_CHUNK_PX as u32;
        let chunks = w.div_ceil(chunk_w);
        let right_to_left = dst_x > src_x;
        for row in rows {
            for i in 0..chunks {
                let index = if right_to_left { chunks - 1 - i } else { i };
                let offset = index * chunk_w;
                let span = chunk_w.min(w - offset);
                let buf = &mut chunk[..span as usize];
                self.backend
                    .read_rect(src_x + offset, src_y + row, span, 1, buf)?;
                self.backend
                    .blit(dst_x + offset, dst_y + row, span, 1, buf)?;
            }
        }
        Ok(())
    }

    /// Start a streamed update of a rectangle
    ///
    /// An unfinished previous session is abandoned: its write context is
    /// released and its cursor discarded.
    pub fn begin_area_update(&mut self, x: u32, y: u32, w: u32, h: u32) -> Result<(), DisplayError> {
        self.release_stream();
        self.session.begin(Rect::new(x, y, w, h));
        if !self.is_paused() {
            self.open_stream()?;
        }
        self.stats.rects = self.stats.rects.wrapping_add(1);
        Ok(())
    }

    /// Append a batch of wire-order pixels to the open update
    pub fn append_area_update(&mut self, pixels: &[u16]) -> Result<(), DisplayError> {
        self.append_pixels(pixels.iter().copied(), pixels.len() as u32)
    }

    /// Finish the streamed update
    ///
    /// The cursor is reset whether or not rendering is paused.
    pub fn end_area_update(&mut self) {
        self.release_stream();
        self.session.end();
    }

    /// Set the shared paused flag
    ///
    /// Resuming does not repaint; the caller requests a full refresh.
    pub fn set_paused(&self, paused: bool) {
        self.flags.set_paused(paused);
    }

    /// Read the shared paused flag
    pub fn is_paused(&self) -> bool {
        self.flags.is_paused()
    }

    /// Copy-rect is always supported
    pub fn has_copy_rect(&self) -> bool {
        true
    }

    /// Current stream bookkeeping
    pub fn session(&self) -> &AreaUpdateSession {
        &self.session
    }

    /// True while a streamed update holds the write context
    pub fn is_stream_open(&self) -> bool {
        self.stream_open
    }

    /// Diagnostic counters
    pub fn stats(&self) -> RenderStats {
        self.stats
    }

    /// Borrow the backend
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// Mutably borrow the backend
    pub fn backend_mut(&mut self) -> &mut B {
        &mut self.backend
    }

    fn draw_pixels<I>(&mut self, rect: Rect, pixels: I) -> Result<(), DisplayError>
    where
        I: Iterator<Item = u16>,
    {
        if self.is_paused() {
            return Ok(());
        }
        if rect.is_empty() {
            return Ok(());
        }
        self.release_stream();
        self.stats.rects = self.stats.rects.wrapping_add(1);

        let mut ctx = WriteGuard::open(&mut self.backend)?;
        ctx.set_window(rect.x, rect.y, rect.w, rect.h)?;
        for (i, color) in pixels.take(rect.area() as usize).enumerate() {
            let (px, py) = rect.point_at(i as u32);
            ctx.write_pixel(px, py, swap_bytes(color))?;
            self.stats.pixels_written = self.stats.pixels_written.wrapping_add(1);
        }
        Ok(())
    }

    fn append_pixels<I>(&mut self, pixels: I, count: u32) -> Result<(), DisplayError>
    where
        I: Iterator<Item = u16>,
    {
        if !self.session.is_open() {
            return Ok(());
        }
        if self.is_paused() {
            // Paused mid-stream: give the panel back to the alternate screen.
            self.release_stream();
            self.session.advance(count);
            self.stats.pixels_dropped = self.stats.pixels_dropped.wrapping_add(count);
            return Ok(());
        }
        if !self.stream_open {
            // Resumed mid-stream
            self.open_stream()?;
        }

        let mut result = Ok(());
        for (i, color) in pixels.take(count as usize).enumerate() {
            let Some((px, py)) = self.session.position(i as u32) else {
                break;
            };
            if let Err(e) = self.backend.write_pixel(px, py, swap_bytes(color)) {
                result = Err(e);
                break;
            }
            self.stats.pixels_written = self.stats.pixels_written.wrapping_add(1);
        }
        self.session.advance(count);
        result
    }

    fn open_stream(&mut self) -> Result<(), DisplayError> {
        self.backend.begin_write()?;
        self.stream_open = true;
        let rect = self.session.rect();
        self.backend.set_window(rect.x, rect.y, rect.w, rect.h)
    }

    fn release_stream(&mut self) {
        if self.stream_open {
            self.backend.end_write();
            self.stream_open = false;
        }
    }

    fn scratch(&self, len: usize) -> Option<Vec<u16>> {
        if len > self.scratch_limit {
            return None;
        }
        let mut buf = Vec::new();
        buf.try_reserve_exact(len).ok()?;
        buf.resize(len, 0);
        Some(buf)
    }
}

impl<B: FramebufferBackend> RfbDisplay for RenderAdapter<'_, B> {
    fn has_copy_rect(&self) -> bool {
        RenderAdapter::has_copy_rect(self)
    }

    fn width(&self) -> u32 {
        self.backend.width()
    }

    fn height(&self) -> u32 {
        self.backend.height()
    }

    fn draw_area(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        data: &[u8],
    ) -> Result<(), DisplayError> {
        self.draw_pixels(Rect::new(x, y, w, h), wire_pixels(data))
    }

    fn draw_rect(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.draw_filled_rect(x, y, w, h, color)
    }

    fn copy_rect(
        &mut self,
        src_x: u32,
        src_y: u32,
        dst_x: u32,
        dst_y: u32,
        w: u32,
        h: u32,
    ) -> Result<(), DisplayError> {
        RenderAdapter::copy_rect(self, src_x, src_y, dst_x, dst_y, w, h)
    }

    fn area_update_start(&mut self, x: u32, y: u32, w: u32, h: u32) -> Result<(), DisplayError> {
        self.begin_area_update(x, y, w, h)
    }

    fn area_update_data(&mut self, data: &[u8], pixels: u32) -> Result<(), DisplayError> {
        self.append_pixels(wire_pixels(data), pixels)
    }

    fn area_update_end(&mut self) {
        self.end_area_update()
    }
}
