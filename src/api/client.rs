//! HTTP API Client
//!
//! Functions for talking to the T-Whispers backend, plus the
//! localStorage-backed deployment configuration (API base URL and
//! submission mode).

use gloo_net::http::Request;

use crate::state::store::Confession;

/// Default API base URL (the backend's default bind).
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Get the API base URL from local storage or use the default.
pub fn get_api_base() -> String {
    let url = if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(url)) = storage.get_item("whispers_api_url") {
                url
            } else {
                DEFAULT_API_BASE.to_string()
            }
        } else {
            DEFAULT_API_BASE.to_string()
        }
    } else {
        DEFAULT_API_BASE.to_string()
    };
    // Normalize: remove trailing slash
    url.trim_end_matches('/').to_string()
}

// ============ Deployment Mode ============

/// Submission flow variant, fixed for the lifetime of the page.
///
/// Local keeps new confessions in page memory only; Remote sends them to
/// the backend and rebuilds the wall from server state.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitMode {
    #[default]
    Local,
    Remote,
}

impl SubmitMode {
    /// Parse a persisted value; anything unrecognized falls back to local.
    pub fn parse(value: &str) -> SubmitMode {
        match value {
            "remote" => SubmitMode::Remote,
            _ => SubmitMode::Local,
        }
    }
}

/// Read the deployment mode from local storage (default local).
pub fn get_submit_mode() -> SubmitMode {
    if let Some(window) = web_sys::window() {
        if let Ok(Some(storage)) = window.local_storage() {
            if let Ok(Some(value)) = storage.get_item("whispers_mode") {
                return SubmitMode::parse(&value);
            }
        }
    }
    SubmitMode::default()
}

// ============ Response Types ============

/// One confession row as the backend serializes it.
///
/// The backend also sends `id` and its vote tallies; only the fields the
/// wall renders are kept.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct ConfessionDto {
    pub content: String,
    #[serde(default)]
    pub created_at: Option<String>,
}

impl ConfessionDto {
    /// Convert a wire row into a wall record.
    ///
    /// Reactions are a client-side feature, so fetched records start with
    /// an empty tally. An absent or unparsable timestamp falls back to
    /// `now_ms` rather than dropping the record.
    pub fn into_confession(self, now_ms: i64) -> Confession {
        let created_at = self
            .created_at
            .as_deref()
            .and_then(parse_timestamp_ms)
            .unwrap_or(now_ms);
        Confession::new(self.content, created_at)
    }
}

/// Parse a backend datetime, which may or may not carry an offset.
fn parse_timestamp_ms(raw: &str) -> Option<i64> {
    if let Ok(dt) = chrono::DateTime::parse_from_rfc3339(raw) {
        return Some(dt.timestamp_millis());
    }
    raw.parse::<chrono::NaiveDateTime>()
        .ok()
        .map(|dt| dt.and_utc().timestamp_millis())
}

#[derive(Debug, serde::Deserialize)]
struct ApiErrorBody {
    #[serde(default)]
    detail: Option<serde_json::Value>,
}

// ============ API Functions ============

/// Fetch the wall from the backend (newest first, server-limited).
pub async fn fetch_confessions() -> Result<Vec<ConfessionDto>, String> {
    let api_base = get_api_base();

    let response = Request::get(&format!("{}/confessions", api_base))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let detail = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .and_then(|detail| detail.as_str().map(str::to_string));
        return Err(
            detail.unwrap_or_else(|| format!("Server returned status {}", response.status()))
        );
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}

/// Submit a new confession.
///
/// Success is any 2xx; the response body is unused because the caller
/// reloads the wall from server state afterwards.
pub async fn submit_confession(content: &str) -> Result<(), String> {
    #[derive(serde::Serialize)]
    struct SubmitRequest {
        content: String,
    }

    let api_base = get_api_base();

    let response = Request::post(&format!("{}/confessions", api_base))
        .json(&SubmitRequest {
            content: content.to_string(),
        })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    if !response.ok() {
        let detail = response
            .json::<ApiErrorBody>()
            .await
            .ok()
            .and_then(|body| body.detail)
            .and_then(|detail| detail.as_str().map(str::to_string));
        return Err(
            detail.unwrap_or_else(|| format!("Server returned status {}", response.status()))
        );
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_submit_mode_strings() {
        assert_eq!(SubmitMode::parse("local"), SubmitMode::Local);
        assert_eq!(SubmitMode::parse("remote"), SubmitMode::Remote);
        assert_eq!(SubmitMode::parse("weird"), SubmitMode::Local);
        assert_eq!(SubmitMode::default(), SubmitMode::Local);
    }

    #[test]
    fn test_confession_dto_parses_backend_row() {
        let raw = r#"{
            "id": 7,
            "content": "I talk to my houseplants",
            "created_at": "2025-08-08T22:06:40+00:00",
            "upvotes": 3,
            "downvotes": 1
        }"#;

        let dto: ConfessionDto = serde_json::from_str(raw).unwrap();
        let confession = dto.into_confession(0);

        assert_eq!(confession.text, "I talk to my houseplants");
        assert_eq!(confession.created_at, 1_754_690_800_000);
        assert!(confession.reactions.is_empty());
    }

    #[test]
    fn test_confession_dto_accepts_naive_datetime() {
        let dto: ConfessionDto =
            serde_json::from_str(r#"{"content": "x", "created_at": "2025-08-08T22:06:40"}"#)
                .unwrap();

        assert_eq!(dto.into_confession(0).created_at, 1_754_690_800_000);
    }

    #[test]
    fn test_confession_dto_falls_back_to_now() {
        let now = 1_700_000_000_000;

        let missing: ConfessionDto = serde_json::from_str(r#"{"content": "x"}"#).unwrap();
        assert_eq!(missing.into_confession(now).created_at, now);

        let garbled: ConfessionDto =
            serde_json::from_str(r#"{"content": "x", "created_at": "yesterday-ish"}"#).unwrap();
        assert_eq!(garbled.into_confession(now).created_at, now);
    }
}
