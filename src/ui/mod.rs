//! Headless view-models for the page's feedback widgets.
//!
//! The actual rendering (class toggles, element removal, inserted alerts)
//! belongs to the page; these types carry the state a renderer needs:
//! - `badge`: unread badge with its fade-then-remove lifecycle
//! - `toast`: corner notifications with an auto-dismiss window

pub mod badge;
pub mod toast;

pub use badge::{Badge, BadgePhase, FADE_OUT};
pub use toast::{Toast, ToastLevel, ToastStack, AUTO_DISMISS};
