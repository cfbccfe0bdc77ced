//! Site-level configuration consumed by the server: the `/api/*` rewrite to the
//! remote API origin and the allowlist of remote image locations.

use std::env;
use thiserror::Error;
use tracing::info;
use url::Url;

pub const API_PREFIX: &str = "/api";
pub const PUBLIC_FILES_PATTERN: &str = "/files/public/**";

const DEFAULT_API_ORIGIN: &str = "http://127.0.0.1:8080";
const DEFAULT_IMAGE_ORIGIN: &str = "http://127.0.0.1:8080";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {name} origin `{value}`: {source}")]
    InvalidOrigin {
        name: &'static str,
        value: String,
        #[source]
        source: url::ParseError,
    },
    #[error("{name} origin `{value}` has no host")]
    MissingHost { name: &'static str, value: String },
}

fn parse_origin(name: &'static str, value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|source| ConfigError::InvalidOrigin {
        name,
        value: value.to_owned(),
        source,
    })?;
    if url.host_str().is_none() {
        return Err(ConfigError::MissingHost {
            name,
            value: value.to_owned(),
        });
    }
    Ok(url)
}

fn route_path(path_and_query: &str) -> &str {
    path_and_query.split(['?', '#']).next().unwrap_or(path_and_query)
}

fn has_dot_segment(path: &str) -> bool {
    path.split('/').any(|segment| {
        let segment = segment.to_ascii_lowercase().replace("%2e", ".");
        segment == "." || segment == ".."
    })
}

/// Forwards every request under [`API_PREFIX`] to a remote origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRewrite {
    destination: Url,
}

impl ApiRewrite {
    pub fn new(destination: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            destination: parse_origin("API", destination)?,
        })
    }

    pub fn destination(&self) -> &Url {
        &self.destination
    }

    /// Maps a local path (with optional query) onto the remote origin.
    ///
    /// Returns `None` when the path is not under the API prefix; `/apiary` is
    /// not an API path, `/api` and `/api?x=1` are. Paths carrying `.` or `..`
    /// segments, plain or percent-encoded, are refused so they cannot climb
    /// above the destination's base path.
    #[must_use]
    pub fn rewrite(&self, path_and_query: &str) -> Option<String> {
        let rest = path_and_query.strip_prefix(API_PREFIX)?;
        let rest = match rest.chars().next() {
            None | Some('?') => format!("/{rest}"),
            Some('/') => rest.to_owned(),
            Some(_) => return None,
        };
        if has_dot_segment(route_path(&rest)) {
            return None;
        }
        let base = self.destination.as_str().trim_end_matches('/');
        Some(format!("{base}{rest}"))
    }
}

/// A remote location images may be loaded from.
///
/// `pathname` is either an exact path or a prefix ending in `/**`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemotePattern {
    pub protocol: String,
    pub hostname: String,
    pub port: Option<u16>,
    pub pathname: String,
}

impl RemotePattern {
    pub fn from_origin(origin: &str, pathname: &str) -> Result<Self, ConfigError> {
        let url = parse_origin("image", origin)?;
        Ok(Self {
            protocol: url.scheme().to_owned(),
            hostname: url.host_str().unwrap_or_default().to_owned(),
            port: url.port(),
            pathname: pathname.to_owned(),
        })
    }

    fn matches_path(&self, path: &str) -> bool {
        match self.pathname.strip_suffix("**") {
            Some(prefix) => path.starts_with(prefix) && path.len() > prefix.len(),
            None => path == self.pathname,
        }
    }

    /// Checks scheme, host, port and path of an already parsed URL.
    ///
    /// `Url` normalises dot segments (including percent-encoded ones) while
    /// parsing, so traversal out of the prefix is caught by the path check.
    #[must_use]
    pub fn allows(&self, url: &Url) -> bool {
        url.scheme() == self.protocol
            && url.host_str() == Some(self.hostname.as_str())
            && url.port() == self.port
            && self.matches_path(url.path())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    pub api: ApiRewrite,
    pub images: Vec<RemotePattern>,
}

impl SiteConfig {
    pub fn new(api_origin: &str, image_origin: &str) -> Result<Self, ConfigError> {
        Ok(Self {
            api: ApiRewrite::new(api_origin)?,
            images: vec![RemotePattern::from_origin(image_origin, PUBLIC_FILES_PATTERN)?],
        })
    }

    /// Reads `API_ORIGIN` and `IMAGE_ORIGIN`, falling back to local defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        let api_origin = env::var("API_ORIGIN").unwrap_or_else(|_| DEFAULT_API_ORIGIN.to_owned());
        let image_origin =
            env::var("IMAGE_ORIGIN").unwrap_or_else(|_| DEFAULT_IMAGE_ORIGIN.to_owned());
        let config = Self::new(&api_origin, &image_origin)?;
        info!(
            api_origin = %config.api.destination(),
            image_origin = %image_origin,
            "Loaded site configuration"
        );
        Ok(config)
    }

    /// Returns whether any configured pattern allows loading `url`.
    #[must_use]
    pub fn image_allowed(&self, url: &Url) -> bool {
        self.images.iter().any(|pattern| pattern.allows(url))
    }
}
