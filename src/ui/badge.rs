//! Unread badge view-model.
//!
//! The page's badge element is removed after a short fade once its
//! category is marked read. This models that lifecycle headlessly: a
//! renderer drives the fade with a timer and calls
//! [`Badge::finish_fade`] when the animation ends.

use std::time::Duration;

/// Duration of the fade-out before the badge element is removed.
pub const FADE_OUT: Duration = Duration::from_millis(300);

/// Where the badge is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BadgePhase {
    /// Rendered with a count.
    Visible,
    /// Fade-out animation running.
    FadingOut,
    /// Gone from the page.
    Removed,
}

/// A category's unread badge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    count: u32,
    phase: BadgePhase,
}

impl Badge {
    /// Creates a badge; a zero count renders nothing.
    pub fn new(count: u32) -> Self {
        let phase = if count > 0 {
            BadgePhase::Visible
        } else {
            BadgePhase::Removed
        };
        Self { count, phase }
    }

    /// Returns the badge's unread count.
    pub fn count(&self) -> u32 {
        self.count
    }

    /// Returns the current lifecycle phase.
    pub fn phase(&self) -> BadgePhase {
        self.phase
    }

    /// Returns whether the badge still occupies the page.
    pub fn is_visible(&self) -> bool {
        !matches!(self.phase, BadgePhase::Removed)
    }

    /// Starts the fade-out after a successful read-mark. Idempotent; a
    /// badge already fading or removed stays where it is.
    pub fn clear(&mut self) {
        self.count = 0;
        if self.phase == BadgePhase::Visible {
            self.phase = BadgePhase::FadingOut;
        }
    }

    /// Completes the fade-out and removes the badge.
    pub fn finish_fade(&mut self) {
        if self.phase == BadgePhase::FadingOut {
            self.phase = BadgePhase::Removed;
        }
    }
}
