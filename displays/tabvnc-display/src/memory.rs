//! RAM-backed framebuffer
//!
//! Behaves like a real panel driver: writes outside the panel are clipped,
//! and opening a second write context is rejected. Every call is also
//! recorded so a host simulation can inspect exactly what reached the panel.

use alloc::vec;
use alloc::vec::Vec;

use crate::backend::{DisplayError, FramebufferBackend};

/// One recorded backend call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DrawOp {
    /// `begin_write`
    BeginWrite,
    /// `end_write`
    EndWrite,
    /// `set_window`
    Window { x: u32, y: u32, w: u32, h: u32 },
    /// `write_pixel`
    Pixel { x: u32, y: u32, color: u16 },
    /// `fill_rect`
    Fill { x: u32, y: u32, w: u32, h: u32, color: u16 },
    /// `read_rect`
    Read { x: u32, y: u32, w: u32, h: u32 },
    /// `blit`
    Blit { x: u32, y: u32, w: u32, h: u32 },
}

/// In-memory RGB565 panel
pub struct MemoryFramebuffer {
    width: u32,
    height: u32,
    pixels: Vec<u16>,
    writing: bool,
    ops: Vec<DrawOp>,
    /// Pixel writes remaining before an injected communication error
    fault_after: Option<usize>,
}

impl MemoryFramebuffer {
    /// Create a black panel
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; (width * height) as usize],
            writing: false,
            ops: Vec::new(),
            fault_after: None,
        }
    }

    /// Read back one pixel (`None` outside the panel)
    pub fn pixel(&self, x: u32, y: u32) -> Option<u16> {
        self.index(x, y).map(|i| self.pixels[i])
    }

    /// Recorded calls, oldest first
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Forget recorded calls
    pub fn clear_ops(&mut self) {
        self.ops.clear();
    }

    /// Recorded pixel writes as `(x, y, color)`
    pub fn pixel_writes(&self) -> impl Iterator<Item = (u32, u32, u16)> + '_ {
        self.ops.iter().filter_map(|op| match *op {
            DrawOp::Pixel { x, y, color } => Some((x, y, color)),
            _ => None,
        })
    }

    /// Number of recorded calls that modify pixels
    pub fn write_count(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| {
                matches!(
                    op,
                    DrawOp::Pixel { .. } | DrawOp::Fill { .. } | DrawOp::Blit { .. }
                )
            })
            .count()
    }

    /// True while a write context is open
    pub fn is_writing(&self) -> bool {
        self.writing
    }

    /// Fail pixel writes with `DisplayError::Communication` after `n` more succeed
    pub fn inject_fault_after(&mut self, n: usize) {
        self.fault_after = Some(n);
    }

    fn index(&self, x: u32, y: u32) -> Option<usize> {
        if x < self.width && y < self.height {
            Some((y * self.width + x) as usize)
        } else {
            None
        }
    }

    fn put(&mut self, x: u32, y: u32, color: u16) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = color;
        }
    }
}

impl FramebufferBackend for MemoryFramebuffer {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn begin_write(&mut self) -> Result<(), DisplayError> {
        if self.writing {
            return Err(DisplayError::ContextBusy);
        }
        self.writing = true;
        self.ops.push(DrawOp::BeginWrite);
        Ok(())
    }

    fn end_write(&mut self) {
        self.writing = false;
        self.ops.push(DrawOp::EndWrite);
    }

    fn set_window(&mut self, x: u32, y: u32, w: u32, h: u32) -> Result<(), DisplayError> {
        self.ops.push(DrawOp::Window { x, y, w, h });
        Ok(())
    }

    fn write_pixel(&mut self, x: u32, y: u32, color: u16) -> Result<(), DisplayError> {
        if let Some(remaining) = self.fault_after.as_mut() {
            if *remaining == 0 {
                return Err(DisplayError::Communication);
            }
            *remaining -= 1;
        }
        self.ops.push(DrawOp::Pixel { x, y, color });
        self.put(x, y, color);
        Ok(())
    }

    fn fill_rect(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        color: u16,
    ) -> Result<(), DisplayError> {
        self.ops.push(DrawOp::Fill { x, y, w, h, color });
        for row in y..y.saturating_add(h) {
            for col in x..x.saturating_add(w) {
                self.put(col, row, color);
            }
        }
        Ok(())
    }

    fn read_rect(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        buf: &mut [u16],
    ) -> Result<(), DisplayError> {
        if buf.len() < (w * h) as usize {
            return Err(DisplayError::BufferSize);
        }
        self.ops.push(DrawOp::Read { x, y, w, h });
        for row in 0..h {
            for col in 0..w {
                let value = self.pixel(x + col, y + row).unwrap_or(0);
                buf[(row * w + col) as usize] = value;
            }
        }
        Ok(())
    }

    fn blit(&mut self, x: u32, y: u32, w: u32, h: u32, buf: &[u16]) -> Result<(), DisplayError> {
        if buf.len() < (w * h) as usize {
            return Err(DisplayError::BufferSize);
        }
        self.ops.push(DrawOp::Blit { x, y, w, h });
        for row in 0..h {
            for col in 0..w {
                self.put(x + col, y + row, buf[(row * w + col) as usize]);
            }
        }
        Ok(())
    }
}
