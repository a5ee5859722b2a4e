// src/checker/http.rs
// =============================================================================
// This module checks if a URL is alive by making HTTP requests.
//
// Key functionality:
// - Makes an HTTP HEAD request first (lightweight, no body download)
// - Falls back to GET when HEAD comes back with an error status, since
//   plenty of servers reject HEAD but serve GET fine
// - Treats 403 and 429 as "blocked, but it exists" rather than broken
// - Gives every attempt its own timeout; expiry only aborts that request
//
// Redirects are followed by reqwest; only the final status matters.
// =============================================================================

use std::time::Duration;

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, ACCEPT_LANGUAGE};
use reqwest::{Client, Method, StatusCode};
use tracing::debug;

use crate::config;

/// Verdict for one URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckResult {
    pub ok: bool,
    /// Why the link failed; None when it passed
    pub reason: Option<String>,
}

impl CheckResult {
    pub fn pass() -> Self {
        Self { ok: true, reason: None }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Self {
            ok: false,
            reason: Some(reason.into()),
        }
    }
}

/// Reusable HTTP prober. One instance is shared by every worker so they all
/// draw from the same connection pool.
pub struct LinkChecker {
    client: Client,
    timeout: Duration,
}

impl LinkChecker {
    pub fn new(timeout: Duration) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(config::ACCEPT));
        headers.insert(ACCEPT_LANGUAGE, HeaderValue::from_static(config::ACCEPT_LANGUAGE));

        let client = Client::builder()
            .user_agent(config::USER_AGENT)
            .default_headers(headers)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()
            .context("failed to create HTTP client")?;

        Ok(Self { client, timeout })
    }

    /// Checks a single URL. Never errors: every failure mode is a CheckResult.
    pub async fn check(&self, url: &str) -> CheckResult {
        let head_status = match self.probe(Method::HEAD, url).await {
            Ok(status) => status,
            Err(failed) => return failed,
        };

        let status = if needs_get_fallback(head_status) {
            debug!(%url, status = head_status.as_u16(), "HEAD rejected, retrying with GET");
            match self.probe(Method::GET, url).await {
                Ok(status) => status,
                Err(failed) => return failed,
            }
        } else {
            head_status
        };

        let result = classify_status(status);
        debug!(%url, status = status.as_u16(), ok = result.ok, "checked");
        result
    }

    // One request under its own timeout. Dropping the send future on expiry
    // cancels the request.
    async fn probe(&self, method: Method, url: &str) -> Result<StatusCode, CheckResult> {
        let request = self.client.request(method, url).send();

        match tokio::time::timeout(self.timeout, request).await {
            Ok(Ok(response)) => Ok(response.status()),
            Ok(Err(error)) => Err(categorize_error(&error)),
            Err(_elapsed) => Err(CheckResult::fail("timeout")),
        }
    }
}

// Retry with GET on any error status, or on 429
fn needs_get_fallback(status: StatusCode) -> bool {
    status.as_u16() >= 400 || status == StatusCode::TOO_MANY_REQUESTS
}

/// Maps the final HTTP status to a verdict.
///
/// - 404                  -> fail "HTTP 404"
/// - 403, 429             -> pass (bot protection, not absence)
/// - anything outside 2xx/3xx -> fail "HTTP {code}"
/// - otherwise            -> pass
pub fn classify_status(status: StatusCode) -> CheckResult {
    let code = status.as_u16();

    if status == StatusCode::NOT_FOUND {
        CheckResult::fail("HTTP 404")
    } else if config::SOFT_BLOCK_STATUSES.contains(&code) {
        CheckResult::pass()
    } else if !(200..400).contains(&code) {
        CheckResult::fail(format!("HTTP {code}"))
    } else {
        CheckResult::pass()
    }
}

// reqwest reports its own timeouts too (e.g. while connecting)
fn categorize_error(error: &reqwest::Error) -> CheckResult {
    if error.is_timeout() {
        return CheckResult::fail("timeout");
    }

    let message = error.to_string();
    if message.is_empty() {
        CheckResult::fail("unknown error")
    } else {
        CheckResult::fail(message)
    }
}
