//! Services wrapping the forum's HTTP boundary and form helpers.
//!
//! - `api`: the [`ForumGateway`] trait and its reqwest client
//! - `csrf`: cookie-to-header token plumbing
//! - `sharing`: share/repost/quote flow with its local gates
//! - `preview`: pre-upload image preview building

pub mod api;
pub mod csrf;
pub mod preview;
pub mod sharing;

pub use api::{Ack, ApiClient, ForumGateway};
pub use csrf::{token_from_cookie_header, CsrfToken, CSRF_COOKIE, CSRF_HEADER};
pub use preview::{build_previews, format_file_size, PreviewItem, SelectedFile};
pub use sharing::ShareFlow;

#[cfg(test)]
pub use api::MockForumGateway;
