//! Share, repost, and quote actions on posts.
//!
//! [`ShareFlow`] guards a share request (login, quote text), dispatches it
//! as a fire-and-forget call, and turns the completion into user feedback:
//! a toast either way, plus a bumped share counter on success. Failures are
//! logged and never retried.

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::app::{AppEvent, EventBus};
use crate::domain::{PostId, PostKind, ShareKind, ShareRequest};
use crate::error::ApiError;
use crate::services::ForumGateway;
use crate::ui::{ToastLevel, ToastStack};

/// Toast shown when an unauthenticated user tries to share.
const LOGIN_PROMPT: &str = "Please log in to share posts";
/// Toast shown when a quote is submitted without any text.
const EMPTY_QUOTE_WARNING: &str = "Please add some text to your quote";

/// Drives share/repost/quote submissions and their UI feedback.
pub struct ShareFlow {
    gateway: Arc<dyn ForumGateway>,
    events: EventBus,
    toasts: ToastStack,
    counts: HashMap<(PostKind, PostId), u32>,
    authenticated: bool,
}

impl ShareFlow {
    /// Creates a flow for a page rendered with the given auth state.
    pub fn new(gateway: Arc<dyn ForumGateway>, events: EventBus, authenticated: bool) -> Self {
        Self {
            gateway,
            events,
            toasts: ToastStack::new(),
            counts: HashMap::new(),
            authenticated,
        }
    }

    /// Submits a share action.
    ///
    /// Two local gates run before anything leaves the page: the user must be
    /// logged in, and a quote must carry non-whitespace text. A gated
    /// request produces a toast and no network traffic.
    pub fn submit(&mut self, request: ShareRequest) {
        if !self.authenticated {
            self.toasts.push(ToastLevel::Info, LOGIN_PROMPT);
            return;
        }
        if request.share_kind == ShareKind::Quote {
            let text = request.quote_text.as_deref().unwrap_or("");
            if text.trim().is_empty() {
                self.toasts.push(ToastLevel::Warning, EMPTY_QUOTE_WARNING);
                return;
            }
        }

        debug!(
            post_id = %request.post_id,
            kind = request.share_kind.as_str(),
            "dispatching share"
        );
        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = gateway.share_post(&request).await;
            events.post(AppEvent::ShareCompleted { request, result });
        });
    }

    /// Applies the outcome of a finished share call.
    pub fn on_share_completed(&mut self, request: ShareRequest, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.toasts
                    .push(ToastLevel::Success, request.share_kind.success_message());
                let key = (request.post_kind, request.post_id);
                *self.counts.entry(key).or_insert(0) += 1;
            }
            Err(err) => {
                warn!(
                    post_id = %request.post_id,
                    kind = request.share_kind.as_str(),
                    error = %err,
                    "share failed"
                );
                self.toasts
                    .push(ToastLevel::Error, request.share_kind.error_message());
            }
        }
    }

    /// Returns the locally tracked share count of a post.
    pub fn share_count(&self, kind: PostKind, id: &PostId) -> u32 {
        self.counts
            .get(&(kind, id.clone()))
            .copied()
            .unwrap_or(0)
    }

    /// Returns the toast stack for rendering.
    pub fn toasts(&self) -> &ToastStack {
        &self.toasts
    }

    /// Mutable toast access, for pruning expired entries on a timer tick.
    pub fn toasts_mut(&mut self) -> &mut ToastStack {
        &mut self.toasts
    }
}
