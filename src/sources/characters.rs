//! HTTP client for the Rick and Morty character endpoint.

use std::time::Duration;

use serde::Deserialize;
use tracing::{debug, info, warn};

use super::{CharacterSource, FetchError};
use crate::state::{Character, Page};

/// Default character listing endpoint.
pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api/character";

/// Pagination block of the API envelope. Only `next` drives behavior.
#[derive(Debug, Default, Deserialize)]
struct ApiInfo {
    /// URL of the following page, `null` on the last page.
    #[serde(default)]
    next: Option<String>,
    /// Total number of matching records.
    #[serde(default)]
    count: u64,
    /// Total number of pages.
    #[serde(default)]
    pages: u32,
}

/// Top-level response envelope.
#[derive(Debug, Deserialize)]
struct ApiResponse {
    /// Pagination info.
    #[serde(default)]
    info: ApiInfo,
    /// Records on this page.
    results: Vec<Character>,
}

/// What: Decode a response body into a [`Page`].
///
/// Inputs:
/// - `body`: Raw JSON text `{ info: { next, .. }, results: [..] }`
///
/// Output:
/// - `Ok(Page)`; `Err` when the body does not match the envelope.
///
/// # Errors
/// - Returns `Err` when JSON parsing fails or `results` is missing.
pub fn parse_page(body: &str) -> Result<Page, serde_json::Error> {
    let resp: ApiResponse = serde_json::from_str(body)?;
    debug!(
        count = resp.info.count,
        pages = resp.info.pages,
        "decoded character page envelope"
    );
    Ok(Page {
        results: resp.results,
        has_next: resp.info.next.is_some(),
    })
}

/// Character API client bound to one base endpoint.
#[derive(Clone, Debug)]
pub struct CharacterApi {
    /// Pooled HTTP client.
    client: reqwest::Client,
    /// Endpoint without trailing slash.
    base_url: String,
}

impl CharacterApi {
    /// What: Build a client for `base_url` with the given timeouts.
    ///
    /// Inputs:
    /// - `base_url`: Character endpoint; a trailing `/` is ignored
    /// - `connect_timeout`: TCP/TLS connect limit
    /// - `request_timeout`: Whole-request limit
    ///
    /// Output:
    /// - `Ok(CharacterApi)`; `Err` if the underlying client cannot be created.
    ///
    /// # Errors
    /// - Returns `Err(FetchError::Network)` when the TLS backend fails to initialize.
    pub fn new(
        base_url: &str,
        connect_timeout: Duration,
        request_timeout: Duration,
    ) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .connect_timeout(connect_timeout)
            .timeout(request_timeout)
            .user_agent(format!("mortydex/{}", env!("CARGO_PKG_VERSION")))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Build a client from the loaded settings.
    ///
    /// # Errors
    /// - Same as [`CharacterApi::new`].
    pub fn from_settings(settings: &crate::theme::Settings) -> Result<Self, FetchError> {
        Self::new(
            &settings.base_url,
            Duration::from_secs(settings.connect_timeout_secs),
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    /// What: Full request URL for a query string.
    ///
    /// Inputs:
    /// - `query`: Query string, appended verbatim after `/?`
    ///
    /// Output:
    /// - `"{base}/?{query}"`
    ///
    /// Details:
    /// - No encoding happens here; reqwest percent-encodes what the URL parser
    ///   requires (spaces become `%20`).
    #[must_use]
    pub fn page_url(&self, query: &str) -> String {
        format!("{}/?{query}", self.base_url)
    }
}

impl CharacterSource for CharacterApi {
    async fn fetch_page(&self, query: &str) -> Result<Page, FetchError> {
        let url = self.page_url(query);
        debug!(url = %url, "fetching character page");
        let resp = self.client.get(&url).send().await?;
        let status = resp.status();
        let body = resp.text().await?;
        if !status.is_success() {
            let preview: String = body.chars().take(200).collect();
            warn!(
                status = status.as_u16(),
                preview = %preview,
                "character api returned non-success status"
            );
            return Err(FetchError::Status {
                status: status.as_u16(),
            });
        }
        let page = parse_page(&body)?;
        info!(
            count = page.results.len(),
            has_next = page.has_next,
            bytes = body.len(),
            "fetched character page"
        );
        Ok(page)
    }
}
