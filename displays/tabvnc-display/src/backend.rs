//! Display backend traits
//!
//! Defines the interface for pixel panels and status text output.

/// Display backend errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Communication error with display
    Communication,
    /// Invalid coordinates or dimensions
    InvalidCoordinates,
    /// A write context is already open
    ContextBusy,
    /// Buffer length does not match the requested area
    BufferSize,
}

/// Pixel-addressable framebuffer panel
///
/// Colors are RGB565 in the panel's native byte order. Writes between
/// `begin_write` and `end_write` form one exclusive write context; callers
/// never nest contexts.
pub trait FramebufferBackend {
    /// Panel width in pixels
    fn width(&self) -> u32;

    /// Panel height in pixels
    fn height(&self) -> u32;

    /// Open the exclusive write context
    fn begin_write(&mut self) -> Result<(), DisplayError>;

    /// Close the write context
    ///
    /// Must be safe to call on every exit path, including after a failed write.
    fn end_write(&mut self);

    /// Set the addressable window for subsequent pixel writes
    fn set_window(&mut self, x: u32, y: u32, w: u32, h: u32) -> Result<(), DisplayError>;

    /// Write a single pixel
    fn write_pixel(&mut self, x: u32, y: u32, color: u16) -> Result<(), DisplayError>;

    /// Fill a rectangle with a solid color
    fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: u16)
        -> Result<(), DisplayError>;

    /// Read a rectangle into `buf` (row-major, `w * h` pixels)
    fn read_rect(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        buf: &mut [u16],
    ) -> Result<(), DisplayError>;

    /// Write a rectangle from `buf` (row-major, `w * h` pixels)
    fn blit(&mut self, x: u32, y: u32, w: u32, h: u32, buf: &[u16]) -> Result<(), DisplayError>;
}

impl<T: FramebufferBackend + ?Sized> FramebufferBackend for &mut T {
    fn width(&self) -> u32 {
        (**self).width()
    }

    fn height(&self) -> u32 {
        (**self).height()
    }

    fn begin_write(&mut self) -> Result<(), DisplayError> {
        (**self).begin_write()
    }

    fn end_write(&mut self) {
        (**self).end_write()
    }

    fn set_window(&mut self, x: u32, y: u32, w: u32, h: u32) -> Result<(), DisplayError> {
        (**self).set_window(x, y, w, h)
    }

    fn write_pixel(&mut self, x: u32, y: u32, color: u16) -> Result<(), DisplayError> {
        (**self).write_pixel(x, y, color)
    }

    fn fill_rect(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        color: u16,
    ) -> Result<(), DisplayError> {
        (**self).fill_rect(x, y, w, h, color)
    }

    fn read_rect(
        &mut self,
        x: u32,
        y: u32,
        w: u32,
        h: u32,
        buf: &mut [u16],
    ) -> Result<(), DisplayError> {
        (**self).read_rect(x, y, w, h, buf)
    }

    fn blit(&mut self, x: u32, y: u32, w: u32, h: u32, buf: &[u16]) -> Result<(), DisplayError> {
        (**self).blit(x, y, w, h, buf)
    }
}

/// Visual role of a status line
///
/// Backends pick font and color per role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LineStyle {
    /// Screen title bar
    Title,
    /// Field label
    Label,
    /// Field value
    #[default]
    Value,
    /// Healthy status indicator
    StatusOk,
    /// Failed status indicator
    StatusError,
    /// Instruction footer
    Footer,
}

/// Line-oriented text output
///
/// Rasterisation (fonts, layout) is up to the implementation.
pub trait StatusBackend {
    /// Clear the whole screen to `color`
    fn clear(&mut self, color: u16) -> Result<(), DisplayError>;

    /// Draw one line of text at `row`
    fn draw_line(&mut self, row: u8, style: LineStyle, text: &str) -> Result<(), DisplayError>;

    /// Flush buffered content to the panel
    fn flush(&mut self) -> Result<(), DisplayError>;
}
