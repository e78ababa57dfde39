//! X11 keysyms and the CardKB key code table
//!
//! CardKB reports printable characters as plain ASCII and a handful of
//! control keys as single-byte codes. RFB key events carry X11 keysyms,
//! which coincide with ASCII for the printable range.

/// Return / Enter
pub const XK_RETURN: u32 = 0xff0d;
/// BackSpace
pub const XK_BACKSPACE: u32 = 0xff08;
/// Escape
pub const XK_ESCAPE: u32 = 0xff1b;
/// Tab
pub const XK_TAB: u32 = 0xff09;
/// Left arrow
pub const XK_LEFT: u32 = 0xff51;
/// Up arrow
pub const XK_UP: u32 = 0xff52;
/// Right arrow
pub const XK_RIGHT: u32 = 0xff53;
/// Down arrow
pub const XK_DOWN: u32 = 0xff54;
/// Delete
pub const XK_DELETE: u32 = 0xffff;

// CardKB control key codes
const CARDKB_BACKSPACE: u8 = 0x08;
const CARDKB_TAB: u8 = 0x09;
const CARDKB_LINE_FEED: u8 = 0x0a;
const CARDKB_ENTER: u8 = 0x0d;
const CARDKB_ESCAPE: u8 = 0x1b;
const CARDKB_LEFT: u8 = 0xb4;
const CARDKB_UP: u8 = 0xb5;
const CARDKB_DOWN: u8 = 0xb6;
const CARDKB_RIGHT: u8 = 0xb7;
const CARDKB_DELETE: u8 = 0xff;

/// Translate a CardKB key code into an X11 keysym
///
/// Returns `None` for codes with no mapping (including `0`, which CardKB
/// reports when no key is pending).
pub fn cardkb_to_keysym(code: u8) -> Option<u32> {
    match code {
        0x20..=0x7e => Some(code as u32),
        CARDKB_LINE_FEED | CARDKB_ENTER => Some(XK_RETURN),
        CARDKB_BACKSPACE => Some(XK_BACKSPACE),
        CARDKB_ESCAPE => Some(XK_ESCAPE),
        CARDKB_TAB => Some(XK_TAB),
        CARDKB_LEFT => Some(XK_LEFT),
        CARDKB_RIGHT => Some(XK_RIGHT),
        CARDKB_UP => Some(XK_UP),
        CARDKB_DOWN => Some(XK_DOWN),
        CARDKB_DELETE => Some(XK_DELETE),
        _ => None,
    }
}
