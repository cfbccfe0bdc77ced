//! This module defines the `navbar` component, the fixed navigation bar shown on
//! every page of the portal.
//!
//! The bar renders two variants of the same entry list: a desktop row and a
//! collapsible mobile panel. It owns two signals for as long as it is mounted:
//! the open/closed state of the mobile panel and whether the viewport has been
//! scrolled past the compact-style threshold.

use crate::components::icons;
use crate::navigation::{
    AUTH_ACTIONS, AuthAction, MenuState, NAVIGATION_ITEMS, NavigationItem, ScrollState, close_menu,
    is_active, toggle_menu,
};
use icondata::{BsList, BsXLg};
use leptos::{ev, prelude::*};
use leptos_router::{components::A, hooks::use_location};

const HEADER_BASE: &str = "fixed top-0 right-0 left-0 z-20 transition-all duration-300";
const HEADER_EXPANDED: &str = "h-20 bg-white";
const HEADER_COMPACT: &str = "h-16 shadow-md bg-white/80 backdrop-blur-md";

const LINK_BASE: &str = "flex flex-row gap-2 items-center py-2 px-3 rounded-lg transition-colors duration-200";
const LINK_ACTIVE: &str = "font-semibold text-sky-700 bg-sky-50";
const LINK_IDLE: &str = "text-slate-600 hover:text-sky-700 hover:bg-slate-50";

/// Registers the window scroll listener for the lifetime of the current owner.
///
/// The signal is only written when the offset crosses the threshold, so plain
/// scrolling never notifies subscribers.
fn track_scroll(scroll: RwSignal<ScrollState>) {
    let read_offset = || window().scroll_y().unwrap_or_default();

    // Pick up the initial offset when hydrating a page restored mid-scroll.
    Effect::new(move |_| {
        scroll.maybe_update(|state| state.observe(read_offset()));
    });

    let handle = window_event_listener(ev::scroll, move |_| {
        scroll.maybe_update(|state| state.observe(read_offset()));
    });
    on_cleanup(move || handle.remove());
}

fn link_class(active: bool, layout: &str) -> String {
    let state = if active { LINK_ACTIVE } else { LINK_IDLE };
    format!("{LINK_BASE} {layout} {state}")
}

fn navigation_link(
    item: NavigationItem,
    pathname: Memo<String>,
    menu: RwSignal<MenuState>,
    layout: &'static str,
) -> impl IntoView {
    let active = move || pathname.with(|path| is_active(path, item.destination));

    view! {
        <li on:click=move |_| close_menu(menu)>
            <A href=item.destination attr:class=move || link_class(active(), layout)>
                {icons::component(item.icon, "size-4")}
                <span>{item.label}</span>
                <Show when=active>
                    <span class="ml-auto rounded-full md:hidden size-1.5 bg-sky-700" aria-hidden="true"></span>
                </Show>
            </A>
        </li>
    }
}

// Auth routes are served by the authentication backend, so these are full
// page loads rather than client-side navigations.
fn auth_link(action: AuthAction, menu: RwSignal<MenuState>) -> impl IntoView {
    let class = if action.primary {
        "flex flex-row gap-2 justify-center items-center py-2 px-4 font-semibold text-white rounded-lg transition-colors bg-sky-700 hover:bg-sky-800"
    } else {
        "flex flex-row gap-2 justify-center items-center py-2 px-4 font-semibold rounded-lg border transition-colors text-sky-700 border-sky-700 hover:bg-sky-50"
    };

    view! {
        <a
            href=action.destination
            class=class
            on:click=move |_| close_menu(menu)
        >
            {icons::component(action.icon, "size-4")}
            <span>{action.label}</span>
        </a>
    }
}

/// Renders the navigation bar.
///
/// Reactive state:
/// - `menu`: a `RwSignal<MenuState>` controlling the mobile panel. It is closed
///   by every link activation and by any change of the router pathname.
/// - `scroll`: a `RwSignal<ScrollState>` fed by the window scroll listener and
///   driving the compact header style.
///
/// The active entry is derived from `use_location` on every render and never stored.
pub fn component() -> impl IntoView {
    let menu = RwSignal::new(MenuState::default());
    let scroll = RwSignal::new(ScrollState::default());
    let pathname = use_location().pathname;

    track_scroll(scroll);

    Effect::new(move |_| {
        pathname.track();
        close_menu(menu);
    });

    let menu_open = move || menu.with(|state| state.is_open());
    let header_class = move || {
        let style = if scroll.with(|state| state.is_scrolled()) {
            HEADER_COMPACT
        } else {
            HEADER_EXPANDED
        };
        format!("{HEADER_BASE} {style}")
    };

    view! {
        <header class=header_class>
            <nav class="container flex flex-row justify-between items-center px-4 mx-auto h-full max-w-6xl">
                <div class="text-xl font-bold sm:text-2xl text-sky-700" on:click=move |_| close_menu(menu)>
                    <A href="/">"Portal"</A>
                </div>

                <ul class="hidden flex-row gap-1 items-center md:flex">
                    {NAVIGATION_ITEMS
                        .iter()
                        .copied()
                        .map(|item| navigation_link(item, pathname, menu, "whitespace-nowrap"))
                        .collect_view()}
                </ul>

                <div class="hidden flex-row gap-2 items-center md:flex">
                    {AUTH_ACTIONS.iter().copied().map(|action| auth_link(action, menu)).collect_view()}
                </div>

                <button
                    type="button"
                    class="p-2 rounded-lg md:hidden text-slate-700 hover:bg-slate-100"
                    aria-label="Toggle navigation menu"
                    aria-controls="mobile-navigation"
                    aria-expanded=move || menu_open().to_string()
                    on:click=move |_| {
                        let open = toggle_menu(menu);
                        log::debug!("navigation menu open: {open}");
                    }
                >
                    {move || {
                        if menu_open() {
                            icons::component(BsXLg, "size-6")
                        } else {
                            icons::component(BsList, "size-6")
                        }
                    }}
                </button>
            </nav>

            <Show when=menu_open>
                <div id="mobile-navigation" class="absolute right-0 left-0 px-4 pb-6 bg-white shadow-lg md:hidden top-full">
                    <ul class="flex flex-col gap-1 pt-2">
                        {NAVIGATION_ITEMS
                            .iter()
                            .copied()
                            .map(|item| navigation_link(item, pathname, menu, "w-full"))
                            .collect_view()}
                    </ul>
                    <div class="flex flex-col gap-2 pt-4 mt-4 border-t border-slate-200">
                        {AUTH_ACTIONS.iter().copied().map(|action| auth_link(action, menu)).collect_view()}
                    </div>
                </div>
            </Show>
        </header>
    }
}
