//! Touch controller interface

use crate::gesture::TouchSnapshot;

/// Source of per-tick touch state
///
/// Implementations return the contacts currently on the panel, already
/// mapped to display coordinates.
pub trait TouchSource {
    /// Active contacts at this instant
    fn snapshot(&mut self) -> TouchSnapshot;
}
