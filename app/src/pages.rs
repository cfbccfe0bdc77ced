//! Placeholder pages for the routes the navigation bar links to.
//!
//! Page content lives outside this shell; each page only sets the document
//! title and shows its heading so routing and highlighting can be exercised.

use leptos::{
    html::{h1, p, section},
    prelude::*,
};
use leptos_meta::{Title, TitleProps};

pub const SITE_NAME: &str = "Portal";

/// Formats the document title for a page.
#[must_use]
pub fn document_title(page: &str) -> String {
    if page.is_empty() {
        SITE_NAME.to_owned()
    } else {
        format!("{page} | {SITE_NAME}")
    }
}

pub fn component(title: &'static str) -> impl IntoView {
    section().class("flex flex-col gap-4").child((
        Title(TitleProps::builder().text(document_title(title)).build()),
        h1().class("text-3xl font-bold sm:text-4xl text-slate-800").child(title),
        p().class("text-slate-500").child("Content for this section is coming soon."),
    ))
}

/// Landing page served at `/`; no navigation entry is highlighted here.
pub fn landing() -> impl IntoView {
    section().class("flex flex-col gap-4").child((
        Title(TitleProps::builder().text(document_title("")).build()),
        h1().class("text-4xl font-extrabold sm:text-5xl text-sky-700").child("Belajar, bertumbuh, berbagi."),
        p().class("text-slate-500").child("Pick a section from the navigation bar to get started."),
    ))
}
