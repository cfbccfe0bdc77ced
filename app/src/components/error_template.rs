//! This module defines the `error_template` component, shown when a route does
//! not resolve to any page of the portal.
//!
//! It includes an `AppError` enum for application-level errors and sets the
//! matching HTTP status code on the server response.

use crate::components::icons;
use http::status::StatusCode;
use icondata::BsArrowLeft;
use leptos::{
    html::{div, h1, p},
    prelude::*,
};
use leptos_router::components::{A, AProps};
use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Not Found")]
    NotFound,
}

impl AppError {
    /// Returns the HTTP status code associated with the error.
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotFound => StatusCode::NOT_FOUND,
        }
    }
}

/// Collects the `AppError`s stored in an `Errors` map, ignoring foreign error types.
pub fn app_errors(errors: Errors) -> Vec<AppError> {
    errors
        .into_iter()
        .filter_map(|(_key, error)| error.downcast_ref::<AppError>().cloned())
        .collect()
}

/// Renders the error page for the given errors.
///
/// `outside_errors` takes precedence (it is what the router fallback passes
/// during SSR); otherwise the reactive `errors` signal of an error boundary is used.
pub fn component(
    outside_errors: Option<Errors>,
    errors: Option<RwSignal<Errors>>,
) -> impl IntoView {
    let errors = outside_errors
        .or_else(|| errors.map(|signal| signal.get_untracked()))
        .unwrap_or_default();
    let errors = app_errors(errors);

    #[cfg(feature = "ssr")]
    {
        use leptos_axum::ResponseOptions;
        if let (Some(response), Some(first)) = (use_context::<ResponseOptions>(), errors.first()) {
            response.set_status(first.status_code());
        }
    }

    let heading = if errors.len() > 1 { "Errors" } else { "Error" };

    div().class("grid place-content-center px-4 h-full antialiased text-slate-700").child((
        h1().class("mb-6 text-center text-2xl font-bold").child(heading),
        errors
            .into_iter()
            .map(|error| {
                p().class("text-xl tracking-widest text-center uppercase text-slate-400")
                    .child(format!("{}| {error}", error.status_code()))
            })
            .collect_view(),
        div().class("flex gap-1 justify-center items-center mt-6 duration-200 hover:text-sky-700").child(
            A(AProps::builder()
                .href("/home")
                .children(ToChildren::to_children(move || {
                    vec![
                        icons::component(BsArrowLeft, "size-4").into_any(),
                        "Back to home".into_any(),
                    ]
                }))
                .build()),
        ),
    ))
}
