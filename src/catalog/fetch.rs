//! Font catalog HTTP client
//!
//! One GET for the font list, plus the URL scheme for per-character font
//! resources. Callers decide how to degrade: the engine treats a failed
//! fetch as an empty catalog, the settings dialog shows its load-failed
//! area.

use thiserror::Error;

use super::types::FontInfo;

/// Base URL of the font catalog service
pub const API_BASE: &str = "https://webfont-zh.toolforge.org";

/// Errors from the catalog service
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Transport failure before any response arrived
    #[error("network error: {0}")]
    Network(String),

    /// Non-success HTTP status
    #[error("catalog error ({code}): {message}")]
    Api { code: u16, message: String },

    /// Response body was not a font list
    #[error("parse error: {0}")]
    Parse(String),
}

/// Fetch the ordered font list from `{base}/api/v1/list`
pub async fn fetch_font_list(
    client: &reqwest::Client,
    base: &str,
) -> Result<Vec<FontInfo>, CatalogError> {
    let url = format!("{base}/api/v1/list");
    let response = client
        .get(&url)
        .send()
        .await
        .map_err(|err| CatalogError::Network(err.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Api {
            code: status.as_u16(),
            message: status.canonical_reason().unwrap_or("unknown").to_string(),
        });
    }

    response
        .json::<Vec<FontInfo>>()
        .await
        .map_err(|err| CatalogError::Parse(err.to_string()))
}

/// Build the per-character font resource URL. The style engine fetches it
/// lazily once an injected rule's unicode-range matches rendered text.
pub fn font_api_url(base: &str, font_id: &str, code_point: u32, version: Option<&str>) -> String {
    let mut url = format!("{base}/api/v1/font?id={font_id}&char={code_point}");
    if let Some(version) = version {
        url.push_str("&v=");
        url.push_str(version);
    }
    url
}

#[cfg(test)]
#[path = "fetch_tests.rs"]
mod fetch_tests;
