//! Display interface driven by the RFB client
//!
//! The RFB client library decodes framebuffer updates and calls into an
//! implementation of this trait. Pixel data arrives in wire format: RGB565
//! with the byte order reversed relative to the panel.

use tabvnc_display::DisplayError;

/// Inbound framebuffer update callbacks
pub trait RfbDisplay {
    /// Whether the server may use CopyRect encoding
    fn has_copy_rect(&self) -> bool;

    /// Working area width in pixels
    fn width(&self) -> u32;

    /// Working area height in pixels
    fn height(&self) -> u32;

    /// Raw encoding: `w * h` wire pixels, row-major
    fn draw_area(&mut self, x: u32, y: u32, w: u32, h: u32, data: &[u8])
        -> Result<(), DisplayError>;

    /// Solid fill (RRE/Hextile subrects)
    fn draw_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: u16)
        -> Result<(), DisplayError>;

    /// CopyRect encoding
    fn copy_rect(
        &mut self,
        src_x: u32,
        src_y: u32,
        dst_x: u32,
        dst_y: u32,
        w: u32,
        h: u32,
    ) -> Result<(), DisplayError>;

    /// Start a streamed update of the given rectangle
    fn area_update_start(&mut self, x: u32, y: u32, w: u32, h: u32) -> Result<(), DisplayError>;

    /// Next batch of `pixels` wire pixels for the open update
    fn area_update_data(&mut self, data: &[u8], pixels: u32) -> Result<(), DisplayError>;

    /// Finish the streamed update
    fn area_update_end(&mut self);
}
