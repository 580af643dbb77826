use std::time::Duration;

use anyhow::{Context, Result};
use once_cell::sync::OnceCell;
use reqwest::blocking::Client;
use reqwest::header::{ACCEPT, USER_AGENT};
use serde_json::Value;
use tracing::debug;

const REQUEST_TIMEOUT_SECS: u64 = 20;
const ERROR_BODY_CHARS: usize = 220;

static CLIENT: OnceCell<Client> = OnceCell::new();

pub fn http_client() -> Result<&'static Client> {
    CLIENT.get_or_try_init(|| {
        Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .context("failed to build http client")
    })
}

/// Anything that can hand back a decoded JSON document for a URL.
pub trait JsonSource {
    fn fetch_json(&self, url: &str) -> Result<Value>;
}

/// Live ESPN access over the shared blocking client.
#[derive(Debug, Default, Clone, Copy)]
pub struct HttpJsonSource;

impl JsonSource for HttpJsonSource {
    fn fetch_json(&self, url: &str) -> Result<Value> {
        fetch_json(url)
    }
}

pub fn fetch_json(url: &str) -> Result<Value> {
    let client = http_client()?;
    debug!(url, "GET");
    let resp = client
        .get(url)
        .header(USER_AGENT, "Mozilla/5.0")
        .header(ACCEPT, "application/json")
        .send()
        .with_context(|| format!("request failed: {url}"))?;

    let status = resp.status();
    let body = resp.text().context("failed reading body")?;
    if !status.is_success() {
        return Err(anyhow::anyhow!(
            "http {} for {}: {}",
            status,
            url,
            body_snippet(&body)
        ));
    }
    parse_json_body(&body).with_context(|| format!("invalid json from {url}"))
}

/// First line-folded stretch of an error body.
fn body_snippet(body: &str) -> String {
    body.trim()
        .replace(['\n', '\r'], " ")
        .chars()
        .take(ERROR_BODY_CHARS)
        .collect()
}

/// Empty and `null` bodies decode to `Value::Null` rather than failing.
pub fn parse_json_body(raw: &str) -> Result<Value> {
    let trimmed = raw.trim();
    if trimmed.is_empty() || trimmed == "null" {
        return Ok(Value::Null);
    }
    Ok(serde_json::from_str(trimmed)?)
}
