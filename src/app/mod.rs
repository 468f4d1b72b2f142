//! Application state and event wiring.
//!
//! This module contains:
//! - Panel visibility state machine (state.rs)
//! - Completion-event channel for async network calls (events.rs)
//! - [`InboxController`], which ties the registry, badges, and the server
//!   gateway together
//!
//! The intended wiring is one receive loop per page: drain the receiver
//! returned by [`EventBus::channel`] and route each event to the component
//! that dispatched it —
//! [`AppEvent::ReadMarkCompleted`] to [`InboxController::on_read_mark_completed`],
//! [`AppEvent::ShareCompleted`] to
//! [`ShareFlow::on_share_completed`](crate::services::ShareFlow::on_share_completed).

pub mod events;
pub mod state;

pub use events::{AppEvent, EventBus};
pub use state::{Panel, PanelRegistry, ToggleOutcome};

use std::collections::HashMap;
use std::sync::Arc;

use tracing::{debug, warn};

use crate::domain::PanelId;
use crate::error::ApiError;
use crate::services::ForumGateway;
use crate::ui::Badge;

/// Drives the three inbox panels: exclusivity, read-marking, badge state.
///
/// Panel toggles mutate state synchronously; the read-mark call they can
/// trigger is dispatched on a spawned task and reported back through the
/// event bus. In-flight calls are not deduplicated — an open/close/open
/// cycle faster than one round trip issues two requests, which is fine
/// because marking everything read is idempotent on the server.
pub struct InboxController {
    registry: PanelRegistry,
    badges: HashMap<PanelId, Badge>,
    count_labels: HashMap<PanelId, String>,
    gateway: Arc<dyn ForumGateway>,
    events: EventBus,
}

impl InboxController {
    /// Creates a controller with all panels closed and no unread items.
    pub fn new(gateway: Arc<dyn ForumGateway>, events: EventBus) -> Self {
        Self {
            registry: PanelRegistry::new(),
            badges: HashMap::new(),
            count_labels: HashMap::new(),
            gateway,
            events,
        }
    }

    /// Seeds a panel's unread count from the server-rendered page state.
    pub fn set_unread(&mut self, panel: PanelId, unread: u32) {
        self.registry.set_unread(panel, unread);
        if panel.badge_selector().is_some() {
            self.badges.insert(panel, Badge::new(unread));
        }
        if panel.count_selector().is_some() {
            let label = match panel {
                PanelId::Achievements => format!("+{unread}"),
                _ => unread.to_string(),
            };
            self.count_labels.insert(panel, label);
        }
    }

    /// Toggles a panel open or closed, enforcing exclusivity.
    ///
    /// A closed-to-open transition on a category with a read endpoint
    /// dispatches exactly one read-mark call. Direct closes, forced closes,
    /// and the Reviews panel dispatch nothing.
    pub fn toggle_panel(&mut self, target: PanelId) {
        let outcome = self.registry.toggle(target);
        debug!(
            panel = target.display_name(),
            now_open = outcome.now_open,
            "panel toggled"
        );
        if let Some(panel) = outcome.read_mark {
            if panel.read_endpoint().is_some() {
                self.dispatch_read_mark(panel);
            }
        }
    }

    /// Flips a panel's icon fill; driven by the icon's own click handler,
    /// not by panel visibility.
    pub fn toggle_icon(&mut self, panel: PanelId) {
        self.registry.toggle_indicator(panel);
    }

    /// Applies the outcome of a finished read-mark call.
    ///
    /// Success zeroes the unread count, starts the badge fade-out, and
    /// resets the count label. Failure leaves every piece of state exactly
    /// as it was; a stale badge is preferable to a wrong "all read".
    pub fn on_read_mark_completed(&mut self, panel: PanelId, result: Result<(), ApiError>) {
        match result {
            Ok(()) => {
                self.registry.clear_unread(panel);
                if let Some(badge) = self.badges.get_mut(&panel) {
                    badge.clear();
                }
                if let Some(label) = panel.cleared_count_label() {
                    self.count_labels.insert(panel, label.to_string());
                }
            }
            Err(err) => {
                warn!(
                    panel = panel.display_name(),
                    error = %err,
                    "failed to mark panel as read"
                );
            }
        }
    }

    /// Returns the panel registry.
    pub fn registry(&self) -> &PanelRegistry {
        &self.registry
    }

    /// Returns the badge for a panel, if the panel has one.
    pub fn badge(&self, panel: PanelId) -> Option<&Badge> {
        self.badges.get(&panel)
    }

    /// Returns the current text of a panel's unread count label.
    pub fn count_label(&self, panel: PanelId) -> Option<&str> {
        self.count_labels.get(&panel).map(String::as_str)
    }

    fn dispatch_read_mark(&self, panel: PanelId) {
        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = match panel {
                PanelId::Notifications => gateway.mark_all_notifications_read().await,
                PanelId::Achievements => gateway.mark_all_achievements_read().await,
                // No endpoint; the dispatch site already filters this out.
                PanelId::Reviews => return,
            };
            events.post(AppEvent::ReadMarkCompleted { panel, result });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::MockForumGateway;
    use crate::ui::BadgePhase;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc::UnboundedReceiver;

    fn controller_with(mock: MockForumGateway) -> (InboxController, UnboundedReceiver<AppEvent>) {
        let (events, rx) = EventBus::channel();
        (InboxController::new(Arc::new(mock), events), rx)
    }

    async fn drain_one(controller: &mut InboxController, rx: &mut UnboundedReceiver<AppEvent>) {
        match rx.recv().await {
            Some(AppEvent::ReadMarkCompleted { panel, result }) => {
                controller.on_read_mark_completed(panel, result);
            }
            other => panic!("expected a read-mark completion, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn opening_notifications_issues_exactly_one_read_mark() {
        let mut mock = MockForumGateway::new();
        mock.expect_mark_all_notifications_read()
            .times(1)
            .returning(|| Ok(()));

        let (mut controller, mut rx) = controller_with(mock);
        controller.toggle_panel(PanelId::Notifications);
        drain_one(&mut controller, &mut rx).await;
    }

    #[tokio::test]
    async fn reopening_issues_a_second_request() {
        let mut mock = MockForumGateway::new();
        mock.expect_mark_all_notifications_read()
            .times(2)
            .returning(|| Ok(()));

        let (mut controller, mut rx) = controller_with(mock);
        controller.toggle_panel(PanelId::Notifications);
        drain_one(&mut controller, &mut rx).await;
        controller.toggle_panel(PanelId::Notifications); // close, no request
        controller.toggle_panel(PanelId::Notifications); // reopen, second request
        drain_one(&mut controller, &mut rx).await;
    }

    #[tokio::test]
    async fn forced_close_emits_no_read_mark_for_the_closed_panel() {
        let mut mock = MockForumGateway::new();
        mock.expect_mark_all_notifications_read()
            .times(1)
            .returning(|| Ok(()));
        mock.expect_mark_all_achievements_read()
            .times(1)
            .returning(|| Ok(()));

        let (mut controller, mut rx) = controller_with(mock);
        controller.toggle_panel(PanelId::Notifications);
        drain_one(&mut controller, &mut rx).await;

        // Opening achievements force-closes notifications; only the
        // achievements endpoint may be hit.
        controller.toggle_panel(PanelId::Achievements);
        drain_one(&mut controller, &mut rx).await;
        assert_eq!(
            controller.registry().open_panel(),
            Some(PanelId::Achievements)
        );
    }

    #[tokio::test]
    async fn opening_reviews_never_touches_the_network() {
        let mock = MockForumGateway::new(); // any call would panic

        let (mut controller, _rx) = controller_with(mock);
        controller.toggle_panel(PanelId::Reviews);
        controller.toggle_panel(PanelId::Reviews);
        controller.toggle_panel(PanelId::Reviews);
        tokio::task::yield_now().await;
    }

    #[tokio::test]
    async fn success_clears_badge_and_resets_labels() {
        let mut mock = MockForumGateway::new();
        mock.expect_mark_all_notifications_read()
            .times(1)
            .returning(|| Ok(()));
        mock.expect_mark_all_achievements_read()
            .times(1)
            .returning(|| Ok(()));

        let (mut controller, mut rx) = controller_with(mock);
        controller.set_unread(PanelId::Notifications, 17);
        controller.set_unread(PanelId::Achievements, 4);
        assert_eq!(controller.count_label(PanelId::Notifications), Some("17"));
        assert_eq!(controller.count_label(PanelId::Achievements), Some("+4"));

        controller.toggle_panel(PanelId::Notifications);
        drain_one(&mut controller, &mut rx).await;
        controller.toggle_panel(PanelId::Achievements);
        drain_one(&mut controller, &mut rx).await;

        assert_eq!(controller.count_label(PanelId::Notifications), Some("0"));
        assert_eq!(controller.count_label(PanelId::Achievements), Some("+0"));
        assert_eq!(controller.registry().panel(PanelId::Notifications).unread, 0);
        assert_eq!(
            controller.badge(PanelId::Notifications).map(Badge::phase),
            Some(BadgePhase::FadingOut)
        );
    }

    #[tokio::test]
    async fn failure_leaves_unread_count_and_badge_untouched() {
        let mut mock = MockForumGateway::new();
        mock.expect_mark_all_notifications_read()
            .times(1)
            .returning(|| {
                Err(ApiError::Status {
                    status: 500,
                    path: "/notification/read_All_Notifications/".into(),
                })
            });

        let (mut controller, mut rx) = controller_with(mock);
        controller.set_unread(PanelId::Notifications, 9);

        controller.toggle_panel(PanelId::Notifications);
        drain_one(&mut controller, &mut rx).await;

        assert_eq!(controller.registry().panel(PanelId::Notifications).unread, 9);
        assert_eq!(controller.count_label(PanelId::Notifications), Some("9"));
        assert_eq!(
            controller.badge(PanelId::Notifications).map(Badge::phase),
            Some(BadgePhase::Visible)
        );
    }
}
