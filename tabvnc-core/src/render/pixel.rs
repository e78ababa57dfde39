//! Wire pixel helpers

/// Convert an RGB565 value between wire and panel byte order
///
/// The transform is its own inverse.
#[inline]
pub const fn swap_bytes(value: u16) -> u16 {
    (value >> 8) | (value << 8)
}

/// Iterate 16-bit pixels from a raw wire buffer
///
/// The buffer is read in native order, exactly as the RFB client stored it;
/// callers still apply `swap_bytes` before writing to the panel. A trailing
/// odd byte is ignored.
pub fn wire_pixels(data: &[u8]) -> impl Iterator<Item = u16> + '_ {
    data.chunks_exact(2)
        .map(|pair| u16::from_ne_bytes([pair[0], pair[1]]))
}

/// Screen rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Rect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl Rect {
    /// Create a rectangle
    pub const fn new(x: u32, y: u32, w: u32, h: u32) -> Self {
        Self { x, y, w, h }
    }

    /// Number of pixels covered
    pub const fn area(&self) -> u32 {
        self.w * self.h
    }

    /// True if the rectangle covers no pixels
    pub const fn is_empty(&self) -> bool {
        self.w == 0 || self.h == 0
    }

    /// Absolute coordinate of the `index`-th pixel in row-major order
    ///
    /// `w` must be non-zero.
    pub const fn point_at(&self, index: u32) -> (u32, u32) {
        (self.x + index % self.w, self.y + index / self.w)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_bytes_matches_masked_formula() {
        for v in [0x0000u16, 0x00f8, 0x1f00, 0xe007, 0xffff, 0x1234] {
            let expected = (((v as u32) >> 8 | (v as u32) << 8) & 0xffff) as u16;
            assert_eq!(swap_bytes(v), expected);
        }
    }

    #[test]
    fn test_swap_known_colors() {
        assert_eq!(swap_bytes(0x00f8), 0xf800);
        assert_eq!(swap_bytes(0x1f00), 0x001f);
        assert_eq!(swap_bytes(0xe007), 0x07e0);
        assert_eq!(swap_bytes(0xffff), 0xffff);
    }

    #[test]
    fn test_wire_pixels_ignores_odd_tail() {
        let data = 0x1234u16
            .to_ne_bytes()
            .into_iter()
            .chain([0xaa])
            .collect::<heapless::Vec<u8, 3>>();
        let mut pixels = wire_pixels(&data);
        assert_eq!(pixels.next(), Some(0x1234));
        assert_eq!(pixels.next(), None);
    }

    #[test]
    fn test_point_at_row_major() {
        let rect = Rect::new(10, 20, 4, 2);
        assert_eq!(rect.point_at(0), (10, 20));
        assert_eq!(rect.point_at(3), (13, 20));
        assert_eq!(rect.point_at(4), (10, 21));
        assert_eq!(rect.area(), 8);
        assert!(Rect::new(0, 0, 0, 5).is_empty());
    }
}
