//! This module holds the static navigation entries of the portal together with
//! the small pieces of state the navigation bar keeps while it is mounted.
//!
//! Everything here is plain data and pure functions so it can be exercised
//! without a browser; the `navbar` component wires it to Leptos signals through
//! [`close_menu`] and [`toggle_menu`].

use icondata::{BsBook, BsBoxArrowInRight, BsHouseDoor, BsMortarboard, BsPeople, BsPersonPlus, BsStars, Icon};
use leptos::prelude::{GetUntracked, RwSignal, Update};

/// Vertical scroll offset, in CSS pixels, past which the bar switches to its
/// compact style.
pub const SCROLL_THRESHOLD_PX: f64 = 10.0;

const ROOT: &str = "/";

/// A single fixed entry in the primary navigation list.
#[derive(Clone, Copy)]
pub struct NavigationItem {
    pub label: &'static str,
    pub destination: &'static str,
    pub icon: Icon,
}

/// A link to the external authentication flow. These close the menu like any
/// other link but never take part in active-route matching.
#[derive(Clone, Copy)]
pub struct AuthAction {
    pub label: &'static str,
    pub destination: &'static str,
    pub icon: Icon,
    pub primary: bool,
}

pub static NAVIGATION_ITEMS: [NavigationItem; 5] = [
    NavigationItem {
        label: "Home",
        destination: "/home",
        icon: BsHouseDoor,
    },
    NavigationItem {
        label: "E-Learning",
        destination: "/elearning",
        icon: BsBook,
    },
    NavigationItem {
        label: "Kisah Inspiratif",
        destination: "/kisah-inspiratif",
        icon: BsStars,
    },
    NavigationItem {
        label: "E-Mentoring",
        destination: "/ementoring",
        icon: BsPeople,
    },
    NavigationItem {
        label: "Course",
        destination: "/course",
        icon: BsMortarboard,
    },
];

pub static AUTH_ACTIONS: [AuthAction; 2] = [
    AuthAction {
        label: "Masuk",
        destination: "/auth/login",
        icon: BsBoxArrowInRight,
        primary: false,
    },
    AuthAction {
        label: "Daftar",
        destination: "/auth/login?tab=register",
        icon: BsPersonPlus,
        primary: true,
    },
];

/// Strips any query string or fragment so only the path is compared.
fn route_path(route: &str) -> &str {
    route.split(['?', '#']).next().unwrap_or(route)
}

/// Returns whether `destination` should be highlighted for the current route.
///
/// The root destination only matches the root route exactly; every other
/// destination matches any route it is a prefix of.
#[must_use]
pub fn is_active(route: &str, destination: &str) -> bool {
    let route = route_path(route);
    if destination == ROOT {
        route == ROOT
    } else {
        route.starts_with(destination)
    }
}

/// Finds the navigation entry matching `route`, if any.
#[must_use]
pub fn active_item(route: &str) -> Option<&'static NavigationItem> {
    NAVIGATION_ITEMS
        .iter()
        .find(|item| is_active(route, item.destination))
}

/// Open/closed state of the mobile menu panel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    /// Closes the panel, returning `true` if it was open.
    pub fn close(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }
}

/// Closes the menu held in `menu`. Subscribers are only notified when it was
/// actually open.
pub fn close_menu(menu: RwSignal<MenuState>) {
    menu.maybe_update(MenuState::close);
}

/// Flips the menu held in `menu` and returns whether it is now open.
pub fn toggle_menu(menu: RwSignal<MenuState>) -> bool {
    menu.update(MenuState::toggle);
    menu.get_untracked().is_open()
}

/// Tracks whether the viewport has been scrolled past [`SCROLL_THRESHOLD_PX`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ScrollState {
    scrolled: bool,
}

impl ScrollState {
    #[must_use]
    pub const fn is_scrolled(self) -> bool {
        self.scrolled
    }

    /// Feeds a new vertical offset and returns `true` only when the offset
    /// crossed the threshold, i.e. when the flag actually flipped.
    pub fn observe(&mut self, offset: f64) -> bool {
        let scrolled = offset > SCROLL_THRESHOLD_PX;
        if scrolled == self.scrolled {
            return false;
        }
        self.scrolled = scrolled;
        true
    }
}
