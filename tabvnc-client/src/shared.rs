//! Framebuffer shared between contexts
//!
//! The renderer and the info panel both draw onto the same panel. Each
//! backend call runs under a critical-section mutex, and `with` gives a
//! caller exclusive access for a whole sequence of calls.

use core::cell::RefCell;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;

use tabvnc_core::config::RenderConfig;
use tabvnc_core::mode::ModeFlags;
use tabvnc_core::render::RenderAdapter;
use tabvnc_display::{DisplayError, FramebufferBackend};

/// Mutex-protected framebuffer backend
pub struct SharedFramebuffer<B> {
    inner: Mutex<CriticalSectionRawMutex, RefCell<B>>,
}

impl<B: FramebufferBackend> SharedFramebuffer<B> {
    pub const fn new(backend: B) -> Self {
        Self {
            inner: Mutex::new(RefCell::new(backend)),
        }
    }

    /// Run `f` with exclusive access to the backend
    pub fn with<R>(&self, f: impl FnOnce(&mut B) -> R) -> R {
        self.inner.lock(|cell| f(&mut cell.borrow_mut()))
    }

    /// Renderer drawing onto this panel with the given settings
    pub fn renderer<'m>(
        &self,
        flags: &'m ModeFlags,
        config: &RenderConfig,
    ) -> RenderAdapter<'m, &Self> {
        RenderAdapter::new(self, flags).with_config(config)
    }
}

impl<B: FramebufferBackend> FramebufferBackend for &SharedFramebuffer<B> {
    fn width(&self) -> u32 {
        self.inner.lock(|cell| cell.borrow().width())
    }

    fn height(&self) -> u32 {
        self.inner.lock(|cell| cell.borrow().height())
    }

    fn begin_write(&mut self) -> Result<(), DisplayError> {
        self.with(|b| b.begin_write())
    }

    fn end_write(&mut self) {
        self.with(|b| b.end_write())
    }

    fn set_window(&mut self, x: u32, y: u32, w: u32, h: u32) -> Result<(), DisplayError> {
        self.with(|b| b.set_window(x, y, w, h))
    }

    fn write_pixel(&mut self, x: u32, y: u32, color: u16) -> Result<(), DisplayError> {
        self.with(|b| b.write_pixel(x, y, color))
    }

    fn fill_rect(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.with(|b| b.fill_rect(x, y, w, h, color))
    }

    fn read_rect(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        buf: &mut [u16],
    ) -> Result<(), DisplayError> {
        self.with(|b| b.read_rect(x, y, w, h, buf))
    }

    fn blit(&mut self, x: u32, y: u32, w: u32, h: u32, buf: &[u16]) -> Result<(), DisplayError> {
        self.with(|b| b.blit(x, y, w, h, buf))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabvnc_display::MemoryFramebuffer;

    #[test]
    fn test_adapter_draws_through_shared_panel() {
        let shared = SharedFramebuffer::new(MemoryFramebuffer::new(8, 8));
        let flags = ModeFlags::new();
        let mut render = RenderAdapter::new(&shared, &flags);

        render.draw_area(2, 3, 1, 1, &[0x00f8]).unwrap();
        drop(render);

        assert_eq!(shared.with(|fb| fb.pixel(2, 3)), Some(0xf800));
        assert!(!shared.with(|fb| fb.is_writing()));
    }

    #[test]
    fn test_renderer_applies_scratch_limit() {
        let shared = SharedFramebuffer::new(MemoryFramebuffer::new(16, 4));
        shared.with(|fb| {
            for x in 0..4 {
                fb.write_pixel(x, 0, x as u16 + 1).unwrap();
            }
        });
        let flags = ModeFlags::new();
        let config = RenderConfig {
            scratch_limit_px: Some(0),
        };
        let mut render = shared.renderer(&flags, &config);

        render.copy_rect(0, 0, 8, 0, 4, 1).unwrap();

        assert_eq!(render.stats().copy_fallbacks, 1);
        drop(render);
        assert_eq!(shared.with(|fb| fb.pixel(11, 0)), Some(4));
    }

    #[test]
    fn test_dimensions_forwarded() {
        let shared = SharedFramebuffer::new(MemoryFramebuffer::new(12, 7));
        let view = &shared;
        assert_eq!(view.width(), 12);
        assert_eq!(view.height(), 7);
    }
}
