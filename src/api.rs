/// Synchronous client for the **measurement store** HTTP endpoint.
///
/// The store exposes a single read-only query, `GET {base_url}/api/parameters`, returning a JSON
/// array of records. This module fetches that array and returns it as
/// [`models::Measurement`](crate::models::Measurement) rows in the order received.
///
/// ### Notes
/// - Records may use `totalValue`/`roValue` or the raw column names `total_etp`/`etp_ro`.
/// - SQL DECIMAL columns often arrive as strings (`"80.50"`); both strings and numbers are
///   accepted.
/// - Transient failures (network errors, HTTP 5xx) are retried with a short backoff.
///
/// Typical usage:
/// ```no_run
/// # use etp_report::Client;
/// let client = Client::new("http://localhost:3000");
/// let rows = client.fetch_measurements()?;
/// # Ok::<(), anyhow::Error>(())
/// ```
use crate::models::Measurement;
use anyhow::{Context, Result, bail};
use reqwest::blocking::Client as HttpClient;
use reqwest::redirect::Policy;
use serde_json::Value;
use std::time::Duration;

/// Path of the measurement query below the base URL.
pub const PARAMETERS_PATH: &str = "/api/parameters";

/// Default base URL of the measurement store.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

#[derive(Debug, Clone)]
pub struct Client {
    pub base_url: String,
    http: HttpClient,
}

impl Default for Client {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl Client {
    /// Client with the default 30s request timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_timeout(base_url, Duration::from_secs(30))
    }

    pub fn with_timeout(base_url: impl Into<String>, timeout: Duration) -> Self {
        let http = HttpClient::builder()
            .timeout(timeout) // total request timeout
            .connect_timeout(Duration::from_secs(10)) // connect timeout
            .redirect(Policy::limited(5)) // cap redirects
            .user_agent(concat!("etp_report/", env!("CARGO_PKG_VERSION"))) // set user agent
            .build()
            .expect("reqwest client build");
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http,
        }
    }

    /// Fetch all measurement records.
    ///
    /// ### Errors
    /// - Network/HTTP error (after retries for 5xx and connection failures)
    /// - JSON decoding error
    /// - Response body that is not an array of measurement records
    pub fn fetch_measurements(&self) -> Result<Vec<Measurement>> {
        let url = format!("{}{}", self.base_url, PARAMETERS_PATH);
        let v = self.get_json(&url).with_context(|| format!("GET {}", url))?;
        parse_measurements(v)
    }

    /// GET with a small retry for transient failures (5xx / network errors).
    fn get_json(&self, url: &str) -> Result<Value> {
        const BACKOFF_MS: [u64; 3] = [100, 300, 700];
        let mut last_err: Option<anyhow::Error> = None;
        for (attempt, backoff_ms) in BACKOFF_MS.into_iter().enumerate() {
            match self.http.get(url).send() {
                Ok(r) if r.status().is_success() => {
                    return r.json().context("decode json");
                }
                Ok(r) if r.status().is_server_error() => {
                    log::warn!("{} returned HTTP {}, retrying", url, r.status());
                    last_err = Some(anyhow::anyhow!("server error: HTTP {}", r.status()));
                }
                Ok(r) => bail!("request failed with HTTP {}", r.status()),
                Err(e) => {
                    log::warn!("request to {} failed, retrying: {}", url, e);
                    last_err = Some(e.into());
                }
            }
            if attempt + 1 < BACKOFF_MS.len() {
                std::thread::sleep(Duration::from_millis(backoff_ms));
            }
        }
        match last_err {
            Some(e) => Err(e.context("giving up after 3 attempts")),
            None => bail!("giving up after 3 attempts"),
        }
    }
}

/// Decode the store's response body. Order is preserved.
pub fn parse_measurements(v: Value) -> Result<Vec<Measurement>> {
    if !v.is_array() {
        bail!("unexpected response shape: not a top-level array");
    }
    let rows: Vec<Measurement> = serde_json::from_value(v).context("parse measurement records")?;
    log::debug!("decoded {} measurement records", rows.len());
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_keeps_source_order() {
        let rows = parse_measurements(json!([
            {"date": "2024-01-03", "totalValue": 1, "roValue": 2},
            {"date": "2024-01-01", "totalValue": 3, "roValue": 4},
        ]))
        .unwrap();
        assert_eq!(rows[0].date, "2024-01-03");
        assert_eq!(rows[1].date, "2024-01-01");
    }

    #[test]
    fn parse_rejects_error_object() {
        let err = parse_measurements(json!({"error": "Internal server error"})).unwrap_err();
        assert!(err.to_string().contains("not a top-level array"));
    }

    #[test]
    fn base_url_trailing_slash_is_trimmed() {
        let c = Client::new("http://example.test/");
        assert_eq!(c.base_url, "http://example.test");
    }
}
