// src/core/net.rs

// Blocking HTTP GET over reqwest (the group page is HTTPS-only)

use reqwest::blocking::Client;

use crate::config::consts::USER_AGENT;
use crate::error::Result;

/// Fetch `url` and return the body as text.
///
/// One attempt, no retry. A non-success status is an error.
pub fn http_get(url: &str) -> Result<String> {
    let client = Client::builder().user_agent(USER_AGENT).build()?;

    logf!("GET {url}");
    let resp = client.get(url).send()?.error_for_status()?;
    let body = resp.text()?;
    logd!("{} bytes from {url}", body.len());

    Ok(body)
}
