//! Shared blocking HTTP plumbing for the providers.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::provider::FetchError;

/// Per-request timeout applied when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

/// Build a blocking client with a bounded per-request timeout.
pub fn build_client(timeout: Duration) -> Result<reqwest::blocking::Client, FetchError> {
    reqwest::blocking::Client::builder()
        .timeout(timeout)
        .user_agent(USER_AGENT)
        .build()
        .map_err(|e| FetchError::Client(e.to_string()))
}

/// GET `url` and decode a JSON body, mapping transport and status failures.
///
/// `label` is what gets logged; it must not contain credentials.
pub fn get_json<T: DeserializeOwned>(
    client: &reqwest::blocking::Client,
    provider: &str,
    url: &str,
    label: &str,
    symbol: &str,
    timeout: Duration,
) -> Result<T, FetchError> {
    tracing::debug!(provider, request = label, "fetching");

    let resp = client.get(url).send().map_err(|e| {
        if e.is_timeout() {
            FetchError::Timeout {
                timeout_secs: timeout.as_secs(),
            }
        } else {
            FetchError::Network(e.to_string())
        }
    })?;

    let status = resp.status();
    match status {
        reqwest::StatusCode::NOT_FOUND => {
            return Err(FetchError::SymbolNotFound {
                symbol: symbol.to_string(),
            })
        }
        reqwest::StatusCode::TOO_MANY_REQUESTS => {
            return Err(FetchError::RateLimited {
                provider: provider.to_string(),
            })
        }
        reqwest::StatusCode::UNAUTHORIZED | reqwest::StatusCode::FORBIDDEN => {
            return Err(FetchError::Unauthorized {
                provider: provider.to_string(),
            })
        }
        s if !s.is_success() => {
            return Err(FetchError::HttpStatus {
                provider: provider.to_string(),
                status: s.as_u16(),
            })
        }
        _ => {}
    }

    resp.json::<T>().map_err(|e| {
        FetchError::ResponseFormatChanged(format!("failed to parse {label} for {symbol}: {e}"))
    })
}
