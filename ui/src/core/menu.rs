//! Open/closed state of a collapsible menu.
//!
//! `MenuState` is a plain value held in a component-local signal. Every
//! transition is total: there is nothing to validate and nothing to fail.
//!
//! ```text
//!            toggle
//!   closed ---------> open
//!     ^                |
//!     +----------------+
//!      toggle | entry activated
//! ```
//!
//! Activating an entry while closed leaves the state closed.

use dioxus::logger::tracing::debug;

use crate::core::entries::NavEntry;
use crate::core::icons::IconId;

/// User interactions that drive the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuEvent {
    /// The toggle control was activated.
    Toggle,
    /// The entry with this id was activated.
    EntryActivated(&'static str),
}

/// Starts closed (`Default`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Apply one interaction and return the resulting state.
    pub fn apply(&mut self, event: MenuEvent) -> MenuState {
        let before = *self;
        match event {
            MenuEvent::Toggle => self.toggle(),
            MenuEvent::EntryActivated(_) => self.close(),
        }
        debug!(?event, from = before.open, to = self.open, "menu transition");
        *self
    }

    /// Glyph shown on the toggle control: a hamburger while closed, an X while open.
    pub fn toggle_icon(&self) -> IconId {
        if self.open {
            IconId::X
        } else {
            IconId::Menu
        }
    }

    /// Mobile panel for this state.
    ///
    /// Expanded iff open; the items are the configured entries in order
    /// followed by a single "More" item.
    pub fn panel(&self, entries: &'static [NavEntry]) -> Panel {
        if !self.open {
            return Panel::Collapsed;
        }
        let items = entries
            .iter()
            .map(PanelItem::Nav)
            .chain(std::iter::once(PanelItem::More))
            .collect();
        Panel::Expanded(items)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Panel {
    Collapsed,
    Expanded(Vec<PanelItem>),
}

impl Panel {
    pub fn is_expanded(&self) -> bool {
        matches!(self, Panel::Expanded(_))
    }

    pub fn items(&self) -> &[PanelItem] {
        match self {
            Panel::Collapsed => &[],
            Panel::Expanded(items) => items,
        }
    }
}

/// One activatable row of the mobile panel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelItem {
    Nav(&'static NavEntry),
    /// Bare label; the descriptive grid is desktop only.
    More,
}

impl PanelItem {
    pub fn id(&self) -> &'static str {
        match self {
            PanelItem::Nav(entry) => entry.id,
            PanelItem::More => "more",
        }
    }

    pub fn icon(&self) -> IconId {
        match self {
            PanelItem::Nav(entry) => entry.icon,
            PanelItem::More => IconId::MoreHorizontal,
        }
    }

    /// Event raised when this row is activated.
    pub fn activation(&self) -> MenuEvent {
        MenuEvent::EntryActivated(self.id())
    }

    pub fn label(&self) -> String {
        match self {
            PanelItem::Nav(entry) => entry.label(),
            PanelItem::More => crate::t!("nav-more"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::entries::NAV_ENTRIES;

    #[test]
    fn starts_closed() {
        let menu = MenuState::default();
        assert!(!menu.is_open());
        assert_eq!(menu.panel(NAV_ENTRIES), Panel::Collapsed);
        assert_eq!(menu.toggle_icon(), IconId::Menu);
    }

    #[test]
    fn toggle_parity_matches_activation_count() {
        for n in 0..64 {
            let mut menu = MenuState::default();
            for _ in 0..n {
                menu.apply(MenuEvent::Toggle);
            }
            assert_eq!(menu.is_open(), n % 2 == 1, "after {n} toggles");
        }
    }

    #[test]
    fn close_is_idempotent() {
        let mut menu = MenuState::default();
        menu.close();
        menu.close();
        assert!(!menu.is_open());

        menu.toggle();
        menu.close();
        menu.close();
        assert!(!menu.is_open());
    }

    #[test]
    fn panel_follows_open_flag() {
        let mut menu = MenuState::default();
        menu.toggle();
        assert!(menu.panel(NAV_ENTRIES).is_expanded());
        assert_eq!(menu.toggle_icon(), IconId::X);
        menu.toggle();
        assert!(!menu.panel(NAV_ENTRIES).is_expanded());
        assert!(menu.panel(NAV_ENTRIES).items().is_empty());
    }

    #[test]
    fn expanded_panel_lists_entries_then_more() {
        let mut menu = MenuState::default();
        menu.toggle();
        let panel = menu.panel(NAV_ENTRIES);
        let ids: Vec<_> = panel.items().iter().map(PanelItem::id).collect();
        assert_eq!(ids, ["features", "showcase", "status", "more"]);
        assert_eq!(panel.items().last().map(PanelItem::icon), Some(IconId::MoreHorizontal));
    }

    #[test]
    fn activation_names_the_row() {
        let mut menu = MenuState::default();
        menu.toggle();
        let events: Vec<_> = menu.panel(NAV_ENTRIES).items().iter().map(PanelItem::activation).collect();
        assert_eq!(
            events,
            [
                MenuEvent::EntryActivated("features"),
                MenuEvent::EntryActivated("showcase"),
                MenuEvent::EntryActivated("status"),
                MenuEvent::EntryActivated("more"),
            ]
        );
    }

    #[test]
    fn apply_returns_the_new_state() {
        let mut menu = MenuState::default();
        assert!(menu.apply(MenuEvent::Toggle).is_open());
        assert!(!menu.apply(MenuEvent::EntryActivated("status")).is_open());
        assert!(!menu.apply(MenuEvent::EntryActivated("more")).is_open());
    }
}
