//! Client-side glue for the Ivy campus forum front end.
//!
//! The forum's pages lean on a handful of small behaviors: three mutually
//! exclusive inbox panels in the header that mark themselves read when
//! opened, share/repost/quote buttons on posts, image previews under file
//! inputs, and a CSRF token that rides along on every same-origin POST.
//! This crate models those behaviors as typed state machines and an async
//! HTTP gateway, so they can be driven and tested off the page.
//!
//! Organization:
//! - [`domain`]: panel and post identifiers, with the page's selector
//!   surface attached as data
//! - [`app`]: the panel registry, the inbox controller, and the
//!   completion-event channel its spawned calls report back on
//! - [`services`]: the HTTP gateway, CSRF plumbing, the sharing flow, and
//!   upload previews
//! - [`ui`]: headless badge and toast view-models
//!
//! Network calls are fire-and-forget: one POST per trigger, no retries, no
//! coalescing. A failed call logs a warning and leaves client state alone.

pub mod app;
pub mod domain;
pub mod error;
pub mod services;
pub mod ui;

pub use app::{AppEvent, EventBus, InboxController, PanelRegistry};
pub use domain::{PanelId, PostId, PostKind, ShareKind, ShareRequest};
pub use error::ApiError;
pub use services::{ApiClient, CsrfToken, ForumGateway, ShareFlow};
