//! Panel visibility state machine.
//!
//! Three header panels share one slot of screen space: opening any panel
//! force-closes the other two. The registry owns all three and is the only
//! place panel visibility is mutated, so the exclusivity invariant can be
//! checked in one spot.

use crate::domain::PanelId;

/// Per-panel client state.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Panel {
    /// Whether the panel container is visible.
    pub is_open: bool,
    /// Whether the panel's header icon is rendered filled.
    ///
    /// Icon fill is driven by its own click handler and is not coupled to
    /// panel visibility; the two can disagree.
    pub indicator_active: bool,
    /// Unread item count, as last reported by the server.
    pub unread: u32,
}

/// Result of a [`PanelRegistry::toggle`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleOutcome {
    /// The panel the toggle targeted.
    pub target: PanelId,
    /// Whether the target ended up open.
    pub now_open: bool,
    /// Panels that were open and got force-closed by exclusivity.
    pub forced_closed: Vec<PanelId>,
    /// Set exactly when the target went from closed to open. Forced closes
    /// and direct closes never set this.
    pub read_mark: Option<PanelId>,
}

/// Owns the three panels for the lifetime of the page.
#[derive(Debug, Clone, Default)]
pub struct PanelRegistry {
    panels: [Panel; 3],
}

fn index(id: PanelId) -> usize {
    match id {
        PanelId::Notifications => 0,
        PanelId::Achievements => 1,
        PanelId::Reviews => 2,
    }
}

impl PanelRegistry {
    /// Creates a registry with all panels closed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the state of one panel.
    pub fn panel(&self, id: PanelId) -> &Panel {
        &self.panels[index(id)]
    }

    /// Sets the unread count for a panel (initial page state or a server push).
    pub fn set_unread(&mut self, id: PanelId, unread: u32) {
        self.panels[index(id)].unread = unread;
    }

    /// Zeroes the unread count after a successful read-mark.
    pub fn clear_unread(&mut self, id: PanelId) {
        self.panels[index(id)].unread = 0;
    }

    /// Returns the currently open panel, if any.
    pub fn open_panel(&self) -> Option<PanelId> {
        PanelId::all()
            .iter()
            .copied()
            .find(|id| self.panels[index(*id)].is_open)
    }

    /// Toggles the target panel and enforces exclusivity.
    ///
    /// The prior state of the target is read before the flip; the returned
    /// `read_mark` is set only on the closed-to-open edge. Opening a panel
    /// also drops the icon fill on the other two icons, matching the page's
    /// open handlers.
    pub fn toggle(&mut self, target: PanelId) -> ToggleOutcome {
        let was_open = self.panels[index(target)].is_open;
        self.panels[index(target)].is_open = !was_open;

        let mut forced_closed = Vec::new();
        for &other in PanelId::all() {
            if other == target {
                continue;
            }
            let panel = &mut self.panels[index(other)];
            if panel.is_open {
                panel.is_open = false;
                forced_closed.push(other);
            }
            if panel.indicator_active {
                panel.indicator_active = false;
            }
        }

        let now_open = !was_open;
        ToggleOutcome {
            target,
            now_open,
            forced_closed,
            read_mark: now_open.then_some(target),
        }
    }

    /// Flips the icon fill for one panel.
    ///
    /// Separate entry point from [`toggle`](Self::toggle): the icons carry
    /// their own click handlers, independent of panel visibility.
    pub fn toggle_indicator(&mut self, id: PanelId) {
        let panel = &mut self.panels[index(id)];
        panel.indicator_active = !panel.indicator_active;
    }

    /// Returns how many panels are open. Never exceeds one after a
    /// [`toggle`](Self::toggle) call.
    pub fn open_count(&self) -> usize {
        self.panels.iter().filter(|p| p.is_open).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn all_panels_start_closed() {
        let registry = PanelRegistry::new();
        assert_eq!(registry.open_count(), 0);
        assert_eq!(registry.open_panel(), None);
    }

    #[test]
    fn open_then_close_round_trip() {
        let mut registry = PanelRegistry::new();

        let opened = registry.toggle(PanelId::Notifications);
        assert!(opened.now_open);
        assert_eq!(opened.read_mark, Some(PanelId::Notifications));
        assert_eq!(registry.open_panel(), Some(PanelId::Notifications));

        let closed = registry.toggle(PanelId::Notifications);
        assert!(!closed.now_open);
        assert_eq!(closed.read_mark, None);
        assert_eq!(registry.open_panel(), None);
    }

    #[test]
    fn opening_one_panel_force_closes_the_other() {
        let mut registry = PanelRegistry::new();
        registry.toggle(PanelId::Notifications);

        let outcome = registry.toggle(PanelId::Achievements);
        assert!(outcome.now_open);
        assert_eq!(outcome.forced_closed, vec![PanelId::Notifications]);
        assert_eq!(registry.open_panel(), Some(PanelId::Achievements));
    }

    #[test]
    fn forced_close_does_not_set_read_mark_for_the_closed_panel() {
        let mut registry = PanelRegistry::new();
        registry.toggle(PanelId::Notifications);

        let outcome = registry.toggle(PanelId::Achievements);
        // The read mark belongs to the panel that opened, never to the one
        // that got closed along the way.
        assert_eq!(outcome.read_mark, Some(PanelId::Achievements));
    }

    #[test]
    fn at_most_one_panel_open_over_arbitrary_sequences() {
        let mut registry = PanelRegistry::new();
        let sequence = [
            PanelId::Notifications,
            PanelId::Achievements,
            PanelId::Achievements,
            PanelId::Reviews,
            PanelId::Notifications,
            PanelId::Reviews,
            PanelId::Reviews,
            PanelId::Achievements,
            PanelId::Notifications,
            PanelId::Notifications,
        ];
        for &id in &sequence {
            registry.toggle(id);
            assert!(registry.open_count() <= 1, "exclusivity violated after {id:?}");
        }
    }

    #[test]
    fn indicator_toggles_independently_of_visibility() {
        let mut registry = PanelRegistry::new();
        registry.toggle_indicator(PanelId::Reviews);
        assert!(registry.panel(PanelId::Reviews).indicator_active);
        assert!(!registry.panel(PanelId::Reviews).is_open);

        registry.toggle_indicator(PanelId::Reviews);
        assert!(!registry.panel(PanelId::Reviews).indicator_active);
    }

    #[test]
    fn opening_a_panel_clears_the_other_icons() {
        let mut registry = PanelRegistry::new();
        registry.toggle_indicator(PanelId::Achievements);
        registry.toggle_indicator(PanelId::Reviews);

        registry.toggle(PanelId::Notifications);
        assert!(!registry.panel(PanelId::Achievements).indicator_active);
        assert!(!registry.panel(PanelId::Reviews).indicator_active);
    }

    #[test]
    fn unread_counts_track_per_panel() {
        let mut registry = PanelRegistry::new();
        registry.set_unread(PanelId::Notifications, 12);
        registry.set_unread(PanelId::Achievements, 3);

        registry.clear_unread(PanelId::Notifications);
        assert_eq!(registry.panel(PanelId::Notifications).unread, 0);
        assert_eq!(registry.panel(PanelId::Achievements).unread, 3);
    }
}
