use app::navigation::{
    AUTH_ACTIONS, MenuState, NAVIGATION_ITEMS, SCROLL_THRESHOLD_PX, ScrollState, active_item,
    close_menu, is_active, toggle_menu,
};
use leptos::prelude::{GetUntracked, Memo, Owner, RwSignal, With};
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

#[cfg(test)]
mod navigation_tests {

    use super::*;

    /// Labels of every entry the bar renders as a clickable link.
    fn clickable_entries() -> Vec<&'static str> {
        NAVIGATION_ITEMS
            .iter()
            .map(|item| item.label)
            .chain(AUTH_ACTIONS.iter().map(|action| action.label))
            .collect()
    }

    /// A memo over `menu` counting how often it had to recompute.
    fn watch(menu: RwSignal<MenuState>) -> (Memo<bool>, Arc<AtomicUsize>) {
        let runs = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&runs);
        let memo = Memo::new(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            menu.with(|state| state.is_open())
        });
        (memo, runs)
    }

    // === Active-route scenarios ===

    #[test]
    fn test_elearning_route_highlights_only_elearning() {
        for item in &NAVIGATION_ITEMS {
            assert_eq!(
                is_active("/elearning", item.destination),
                item.label == "E-Learning",
                "unexpected state for {}",
                item.label
            );
        }
    }

    #[test]
    fn test_nested_elearning_route_uses_prefix_match() {
        let active = active_item("/elearning/algebra").map(|item| item.label);
        assert_eq!(active, Some("E-Learning"));
    }

    #[test]
    fn test_root_route_highlights_nothing() {
        assert!(NAVIGATION_ITEMS.iter().all(|item| !is_active("/", item.destination)));
        assert!(active_item("/").is_none());
    }

    #[test]
    fn test_each_destination_activates_itself() {
        for item in &NAVIGATION_ITEMS {
            let active = active_item(item.destination).map(|active| active.label);
            assert_eq!(active, Some(item.label));
        }
    }

    #[test]
    fn test_auth_destinations_are_not_navigation_items() {
        for action in &AUTH_ACTIONS {
            assert!(active_item(action.destination).is_none());
        }
    }

    #[test]
    fn test_matching_is_deterministic() {
        let first: Vec<_> = NAVIGATION_ITEMS
            .iter()
            .map(|item| is_active("/kisah-inspiratif/1", item.destination))
            .collect();
        let second: Vec<_> = NAVIGATION_ITEMS
            .iter()
            .map(|item| is_active("/kisah-inspiratif/1", item.destination))
            .collect();
        assert_eq!(first, second);
        assert_eq!(first.iter().filter(|active| **active).count(), 1);
    }

    // === Menu state ===

    #[test]
    fn test_activating_any_entry_closes_open_menu() {
        let entries = clickable_entries();
        assert_eq!(entries.len(), 7);
        Owner::new().with(|| {
            for label in entries {
                let menu = RwSignal::new(MenuState::default());
                assert!(toggle_menu(menu), "menu did not open before clicking {label}");
                close_menu(menu);
                assert!(!menu.get_untracked().is_open(), "menu left open after clicking {label}");
            }
        });
    }

    #[test]
    fn test_activating_entry_with_closed_menu_keeps_it_closed() {
        Owner::new().with(|| {
            let menu = RwSignal::new(MenuState::default());
            close_menu(menu);
            assert!(!menu.get_untracked().is_open());
        });
    }

    #[test]
    fn test_closing_closed_menu_notifies_nobody() {
        Owner::new().with(|| {
            let menu = RwSignal::new(MenuState::default());
            let (open, runs) = watch(menu);
            assert!(!open.get_untracked());
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            close_menu(menu);
            close_menu(menu);
            assert!(!open.get_untracked());
            assert_eq!(runs.load(Ordering::SeqCst), 1);
        });
    }

    #[test]
    fn test_closing_open_menu_notifies_subscribers() {
        Owner::new().with(|| {
            let menu = RwSignal::new(MenuState::default());
            let (open, runs) = watch(menu);

            toggle_menu(menu);
            assert!(open.get_untracked());
            assert_eq!(runs.load(Ordering::SeqCst), 1);

            close_menu(menu);
            assert!(!open.get_untracked());
            assert_eq!(runs.load(Ordering::SeqCst), 2);
        });
    }

    #[test]
    fn test_open_close_open_yields_open() {
        let mut menu = MenuState::default();
        menu.toggle();
        menu.close();
        menu.toggle();
        assert!(menu.is_open());
    }

    // === Scroll state ===

    #[test]
    fn test_scroll_session_flips_once_per_crossing() {
        let mut scroll = ScrollState::default();
        let mut flips = Vec::new();
        let offsets = [
            0.0,
            3.0,
            SCROLL_THRESHOLD_PX,
            SCROLL_THRESHOLD_PX + 1.0,
            240.0,
            900.0,
            SCROLL_THRESHOLD_PX + 0.1,
            SCROLL_THRESHOLD_PX,
            0.0,
        ];
        for offset in offsets {
            if scroll.observe(offset) {
                flips.push((offset, scroll.is_scrolled()));
            }
        }
        assert_eq!(
            flips,
            vec![(SCROLL_THRESHOLD_PX + 1.0, true), (SCROLL_THRESHOLD_PX, false)]
        );
    }

    #[test]
    fn test_fresh_state_matches_mount_defaults() {
        assert!(!MenuState::default().is_open());
        assert!(!ScrollState::default().is_scrolled());
    }
}
