//! Alternate screen content

/// Content shown while the remote desktop is paused
///
/// Implementations draw directly to the panel; they are only called while
/// rendering of remote pixels is paused.
pub trait AlternateScreen {
    /// Draw the alternate content
    fn show(&mut self);

    /// Clear the primary display area before remote rendering resumes
    fn clear_primary(&mut self);
}
