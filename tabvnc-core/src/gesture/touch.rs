//! Touch snapshots

use heapless::Vec;

/// Contacts reported by the touch controller
pub const MAX_CONTACTS: usize = 5;

/// One finger on the panel, in display coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Contact {
    pub x: u16,
    pub y: u16,
}

impl Contact {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }
}

/// Active contacts at one instant
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TouchSnapshot {
    contacts: Vec<Contact, MAX_CONTACTS>,
}

impl TouchSnapshot {
    /// No contacts
    pub const fn new() -> Self {
        Self {
            contacts: Vec::new(),
        }
    }

    /// Build from `(x, y)` pairs; pairs beyond `MAX_CONTACTS` are ignored
    pub fn from_points(points: &[(u16, u16)]) -> Self {
        let mut snapshot = Self::new();
        for &(x, y) in points {
            if !snapshot.push(Contact::new(x, y)) {
                break;
            }
        }
        snapshot
    }

    /// Add a contact, returning `false` when full
    pub fn push(&mut self, contact: Contact) -> bool {
        self.contacts.push(contact).is_ok()
    }

    pub fn count(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// First reported contact
    pub fn first(&self) -> Option<Contact> {
        self.contacts.first().copied()
    }

    /// Average position of all contacts
    pub fn centroid(&self) -> Option<Contact> {
        let n = self.contacts.len() as u32;
        if n == 0 {
            return None;
        }
        let (sx, sy) = self
            .contacts
            .iter()
            .fold((0u32, 0u32), |(sx, sy), c| (sx + c.x as u32, sy + c.y as u32));
        Some(Contact::new((sx / n) as u16, (sy / n) as u16))
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TouchSnapshot {
    fn format(&self, f: defmt::Formatter) {
        defmt::write!(f, "TouchSnapshot({=usize} contacts)", self.contacts.len());
    }
}
