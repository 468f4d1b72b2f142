//! Completion events for fire-and-forget network calls.
//!
//! Network dispatch happens on spawned tasks; their outcomes come back to
//! the owner of the state as events on a single channel, the same way the
//! page's AJAX callbacks all land back on the one UI thread. Nothing is
//! cancelled or coalesced: two dispatches produce two completion events, in
//! whatever order the server answers.

use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::domain::{PanelId, ShareRequest};
use crate::error::ApiError;

/// A completed network call, delivered back to the state owner.
#[derive(Debug)]
pub enum AppEvent {
    /// A read-mark call for a panel category finished.
    ReadMarkCompleted {
        panel: PanelId,
        result: Result<(), ApiError>,
    },
    /// A share/repost/quote call finished.
    ShareCompleted {
        request: ShareRequest,
        result: Result<(), ApiError>,
    },
}

/// Sender half of the completion channel.
///
/// Cheap to clone into spawned tasks. Sends never block; if the receiver is
/// gone the completion is dropped, which matches a page that has been torn
/// down.
#[derive(Debug, Clone)]
pub struct EventBus {
    tx: UnboundedSender<AppEvent>,
}

impl EventBus {
    /// Creates a bus and the receiver its events drain from.
    pub fn channel() -> (Self, UnboundedReceiver<AppEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }

    /// Posts an event. Silently drops it if the receiver has been closed.
    pub fn post(&self, event: AppEvent) {
        let _ = self.tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn events_arrive_in_post_order() {
        tokio_test::block_on(async {
            let (bus, mut rx) = EventBus::channel();
            bus.post(AppEvent::ReadMarkCompleted {
                panel: PanelId::Notifications,
                result: Ok(()),
            });
            bus.post(AppEvent::ReadMarkCompleted {
                panel: PanelId::Achievements,
                result: Ok(()),
            });

            match rx.recv().await {
                Some(AppEvent::ReadMarkCompleted { panel, .. }) => {
                    assert_eq!(panel, PanelId::Notifications);
                }
                other => panic!("unexpected event: {other:?}"),
            }
            match rx.recv().await {
                Some(AppEvent::ReadMarkCompleted { panel, .. }) => {
                    assert_eq!(panel, PanelId::Achievements);
                }
                other => panic!("unexpected event: {other:?}"),
            }
        });
    }

    #[test]
    fn post_after_receiver_drop_is_silently_discarded() {
        let (bus, rx) = EventBus::channel();
        drop(rx);
        bus.post(AppEvent::ReadMarkCompleted {
            panel: PanelId::Reviews,
            result: Ok(()),
        });
    }
}
