//! Events sent from the viewer to the remote session

/// RFB pointer button mask
///
/// Bit `n` corresponds to button `n + 1`. Buttons 4 and 5 are the scroll
/// wheel; a wheel "click" is a press followed by a release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonMask(u8);

impl ButtonMask {
    /// No buttons pressed
    pub const NONE: Self = Self(0);
    /// Left button (button 1)
    pub const LEFT: Self = Self(1 << 0);
    /// Middle button (button 2)
    pub const MIDDLE: Self = Self(1 << 1);
    /// Right button (button 3)
    pub const RIGHT: Self = Self(1 << 2);
    /// Wheel up (button 4)
    pub const WHEEL_UP: Self = Self(1 << 3);
    /// Wheel down (button 5)
    pub const WHEEL_DOWN: Self = Self(1 << 4);

    /// Build a mask from raw bits
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Raw mask value as carried in a PointerEvent
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// True if every button in `other` is pressed in `self`
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// True if no button is pressed
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Combine two masks
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }
}

impl core::ops::BitOr for ButtonMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

/// Scroll wheel direction
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScrollDirection {
    /// Content scrolls up (wheel button 4)
    Up,
    /// Content scrolls down (wheel button 5)
    Down,
}

impl ScrollDirection {
    /// Wheel button that produces this direction
    pub const fn button(self) -> ButtonMask {
        match self {
            ScrollDirection::Up => ButtonMask::WHEEL_UP,
            ScrollDirection::Down => ButtonMask::WHEEL_DOWN,
        }
    }
}

/// Outbound event for the remote session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemoteEvent {
    /// Pointer position with the current button state
    Pointer {
        /// X coordinate in framebuffer pixels
        x: u16,
        /// Y coordinate in framebuffer pixels
        y: u16,
        /// Buttons held at this position
        buttons: ButtonMask,
    },
    /// Key press or release
    Key {
        /// X11 keysym
        keysym: u32,
        /// True for press, false for release
        pressed: bool,
    },
    /// Ask the server for a non-incremental update of the whole screen
    FullRefresh,
}

impl RemoteEvent {
    /// Pointer event helper
    pub const fn pointer(x: u16, y: u16, buttons: ButtonMask) -> Self {
        RemoteEvent::Pointer { x, y, buttons }
    }

    /// Key event helper
    pub const fn key(keysym: u32, pressed: bool) -> Self {
        RemoteEvent::Key { keysym, pressed }
    }

    /// Returns true for pointer events
    pub fn is_pointer(&self) -> bool {
        matches!(self, RemoteEvent::Pointer { .. })
    }

    /// Returns true for a pointer event with no buttons held
    pub fn is_pointer_release(&self) -> bool {
        matches!(self, RemoteEvent::Pointer { buttons, .. } if buttons.is_empty())
    }

    /// Returns true for a pointer move with only the left button held
    ///
    /// A later sample supersedes it, so it may be skipped under load.
    pub fn is_drag_sample(&self) -> bool {
        matches!(self, RemoteEvent::Pointer { buttons, .. } if *buttons == ButtonMask::LEFT)
    }
}
