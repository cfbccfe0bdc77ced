use app::config::SiteConfig;
use axum::extract::FromRef;
use leptos::prelude::LeptosOptions;
use std::sync::Arc;
use std::time::Duration;

const UPSTREAM_TIMEOUT: Duration = Duration::from_secs(30);

/// Shared state handed to every axum handler and to the Leptos route context.
#[derive(FromRef, Debug, Clone)]
pub struct AppState {
    pub leptos_options: LeptosOptions,
    pub site: Arc<SiteConfig>,
    pub http: reqwest::Client,
}

impl AppState {
    pub fn new(leptos_options: LeptosOptions, site: SiteConfig) -> Result<Self, reqwest::Error> {
        // Redirects are relayed to the browser, never followed here.
        let http = reqwest::Client::builder()
            .timeout(UPSTREAM_TIMEOUT)
            .redirect(reqwest::redirect::Policy::none())
            .build()?;
        Ok(Self {
            leptos_options,
            site: Arc::new(site),
            http,
        })
    }
}
