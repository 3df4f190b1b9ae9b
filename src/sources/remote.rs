//! Published version lookup on vendor pages.

use serde::Serialize;
use thiserror::Error;

use crate::config::RemoteSourceSpec;
use crate::version::normalize_for_display;

use super::fetch::{describe_failure, HttpFetcher};
use super::html::{find_element_text, strip_trailer};

/// The version advertised on a vendor page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RemoteVersion {
    /// Element text before the `|` trailer.
    pub raw_text: String,
    /// Display form, patch annotations kept.
    pub display: String,
}

/// Why the published version could not be read.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RemoteError {
    /// Network failure, timeout, or non-2xx status.
    #[error("{message}")]
    Fetch { message: String },

    /// The page loaded but holds no matching element with version text.
    #[error("no <{tag} class=\"{class}\"> element with a version")]
    ElementNotFound { tag: String, class: String },
}

/// Fetch the page and extract the advertised version.
pub fn resolve_remote(
    spec: &RemoteSourceSpec,
    fetcher: &HttpFetcher,
) -> Result<RemoteVersion, RemoteError> {
    let body = fetcher.fetch(&spec.url).map_err(|e| RemoteError::Fetch {
        message: describe_failure(&e),
    })?;

    parse_remote_version(&body, spec)
}

/// Extract the advertised version from an already fetched page.
pub fn parse_remote_version(
    html: &str,
    spec: &RemoteSourceSpec,
) -> Result<RemoteVersion, RemoteError> {
    let not_found = || RemoteError::ElementNotFound {
        tag: spec.tag.clone(),
        class: spec.class.clone(),
    };

    let text = find_element_text(html, &spec.tag, &spec.class).ok_or_else(not_found)?;
    let raw_text = strip_trailer(&text).to_string();
    let shown = normalize_for_display(&raw_text);

    if shown.is_empty() {
        return Err(not_found());
    }

    tracing::debug!(url = %spec.url, version = %shown, "Found published version");

    Ok(RemoteVersion {
        raw_text,
        display: shown,
    })
}
