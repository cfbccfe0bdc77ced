//! Reverse proxy for `/api/*` and the allowlisted remote image endpoint.

use crate::state::AppState;
use axum::{
    Router,
    body::{Body, Bytes, to_bytes},
    extract::{Query, Request, State},
    http::{HeaderMap, HeaderName, StatusCode, header},
    response::{IntoResponse, Response},
    routing::{any, get},
};
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, error, warn};
use url::Url;

/// Largest request body forwarded to the API origin.
const MAX_BODY_BYTES: usize = 10 * 1024 * 1024;

const HOP_BY_HOP: [HeaderName; 7] = [
    header::CONNECTION,
    header::PROXY_AUTHENTICATE,
    header::PROXY_AUTHORIZATION,
    header::TE,
    header::TRAILER,
    header::TRANSFER_ENCODING,
    header::UPGRADE,
];

#[derive(Debug, Error)]
pub enum ProxyError {
    #[error("path `{0}` is not under the API prefix")]
    NotProxied(String),
    #[error("failed to read request body: {0}")]
    Body(#[from] axum::Error),
    #[error("upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
    #[error("malformed image url `{url}`: {source}")]
    InvalidImageUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("image url `{0}` is not allowed")]
    ImageNotAllowed(String),
    #[error("image url `{0}` redirects elsewhere")]
    ImageRedirected(String),
}

impl ProxyError {
    pub const fn status_code(&self) -> StatusCode {
        match self {
            Self::NotProxied(_) => StatusCode::NOT_FOUND,
            Self::Body(_) | Self::InvalidImageUrl { .. } => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::ImageNotAllowed(_) | Self::ImageRedirected(_) => StatusCode::FORBIDDEN,
        }
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        if status.is_server_error() {
            error!(error = %self, "Proxy request failed");
        } else {
            warn!(error = %self, "Proxy request rejected");
        }
        (status, self.to_string()).into_response()
    }
}

fn strip_hop_by_hop(headers: &mut HeaderMap) {
    for name in &HOP_BY_HOP {
        headers.remove(name);
    }
}

async fn into_response(upstream: reqwest::Response) -> Result<Response, ProxyError> {
    let status = upstream.status();
    let mut headers = upstream.headers().clone();
    strip_hop_by_hop(&mut headers);
    headers.remove(header::CONTENT_LENGTH);
    let body: Bytes = upstream.bytes().await?;

    let mut response = Response::new(Body::from(body));
    *response.status_mut() = status;
    *response.headers_mut() = headers;
    Ok(response)
}

/// Forwards the request to the configured API origin, keeping method, the path
/// remainder, the query, headers (minus hop-by-hop ones) and the body.
pub async fn api_proxy(State(state): State<AppState>, req: Request) -> Result<Response, ProxyError> {
    let path_and_query = req
        .uri()
        .path_and_query()
        .map_or_else(|| req.uri().path().to_owned(), |pq| pq.as_str().to_owned());
    let target = state
        .site
        .api
        .rewrite(&path_and_query)
        .ok_or_else(|| ProxyError::NotProxied(path_and_query.clone()))?;

    let (parts, body) = req.into_parts();
    let body = to_bytes(body, MAX_BODY_BYTES).await?;
    let mut headers = parts.headers;
    headers.remove(header::HOST);
    strip_hop_by_hop(&mut headers);

    debug!(method = %parts.method, %target, "Proxying API request");
    let upstream = state
        .http
        .request(parts.method, target)
        .headers(headers)
        .body(body)
        .send()
        .await?;

    into_response(upstream).await
}

#[derive(Debug, Deserialize)]
pub struct ImageQuery {
    pub url: String,
}

/// Fetches a remote image if its URL matches one of the configured patterns.
pub async fn image_proxy(
    State(state): State<AppState>,
    Query(query): Query<ImageQuery>,
) -> Result<Response, ProxyError> {
    let url = Url::parse(&query.url).map_err(|source| ProxyError::InvalidImageUrl {
        url: query.url.clone(),
        source,
    })?;
    if !state.site.image_allowed(&url) {
        return Err(ProxyError::ImageNotAllowed(url.into()));
    }

    debug!(%url, "Fetching remote image");
    let upstream = state.http.get(url.clone()).send().await?;
    // The redirect target was never checked against the allowlist.
    if upstream.status().is_redirection() {
        return Err(ProxyError::ImageRedirected(url.into()));
    }
    into_response(upstream).await
}

/// Routes served by this module, to be merged into the main router.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/api", any(api_proxy))
        .route("/api/", any(api_proxy))
        .route("/api/{*path}", any(api_proxy))
        .route("/_image", get(image_proxy))
}
