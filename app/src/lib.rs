// Core application modules and components
use crate::components::{error_template, navbar};
use crate::navigation::NAVIGATION_ITEMS;
use chrono::{Datelike as _, Utc};
use leptos::{
    html::{body, div, footer, head, html, meta, p},
    prelude::*,
};
use leptos_meta::{MetaTags, Stylesheet, StylesheetProps, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{FlatRoutes, Route, Router},
};

mod components;
#[cfg(feature = "ssr")]
pub mod config;
pub mod navigation;
mod pages;

pub use components::error_template::AppError;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    let html_comp = html().lang("id").child((
        head().child((
            meta().charset("utf-8"),
            meta()
                .name("viewport")
                .content("width=device-width, initial-scale=1"),
            HydrationScripts(HydrationScriptsProps::builder().options(options).build()),
            MetaTags(),
            Stylesheet(
                StylesheetProps::builder()
                    .id("leptos")
                    .href("/pkg/portal.css")
                    .build(),
            ),
        )),
        body().class("bg-slate-50").child(self::component),
    ));

    view! {
        <!DOCTYPE html>
        {html_comp}
    }
}

#[must_use]
pub fn component() -> impl IntoView {
    view! {
        <Router>
            <div class="min-h-screen text-slate-800 font-poppins">
                {navbar::component}
                <main class="container flex flex-col gap-8 px-4 pt-28 pb-16 mx-auto max-w-6xl">
                    <FlatRoutes fallback=|| {
                        let mut outside_errors = Errors::default();
                        outside_errors.insert_with_default_key(AppError::NotFound);
                        error_template::component(Some(outside_errors), None)
                    }>
                        <Route path=StaticSegment("") view=pages::landing/>
                        <Route path=StaticSegment("home") view=|| pages::component(NAVIGATION_ITEMS[0].label)/>
                        <Route path=StaticSegment("elearning") view=|| pages::component(NAVIGATION_ITEMS[1].label)/>
                        <Route path=StaticSegment("kisah-inspiratif") view=|| pages::component(NAVIGATION_ITEMS[2].label)/>
                        <Route path=StaticSegment("ementoring") view=|| pages::component(NAVIGATION_ITEMS[3].label)/>
                        <Route path=StaticSegment("course") view=|| pages::component(NAVIGATION_ITEMS[4].label)/>
                    </FlatRoutes>
                </main>
                {footer_component()}
            </div>
        </Router>
    }
}

fn footer_component() -> impl IntoView {
    footer()
        .class("py-6 text-center border-t border-slate-200 bg-white")
        .child(
            div().class("flex flex-col gap-1 justify-center items-center").child(
                p().class("text-sm text-slate-400").child(format!(
                    "\u{a9} {} {}",
                    Utc::now().year(),
                    pages::SITE_NAME
                )),
            ),
        )
}
