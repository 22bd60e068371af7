// src/core/net.rs
//
// Blocking HTTP GET with connect + total timeouts. Non-200 is an error.

use std::time::Duration;

use reqwest::blocking::{Client, Response};

use crate::config::consts::{CONNECT_TIMEOUT_SECS, USER_AGENT};
use crate::error::{DashError, Result};

fn client(timeout_secs: u64) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS.min(timeout_secs)))
        .timeout(Duration::from_secs(timeout_secs))
        .build()?;
    Ok(client)
}

fn get(url: &str, timeout_secs: u64) -> Result<Response> {
    logd!("Net: GET {} (timeout {}s)", url, timeout_secs);
    let resp = client(timeout_secs)?.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(DashError::HttpStatus { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp)
}

pub fn http_get(url: &str, timeout_secs: u64) -> Result<String> {
    let body = get(url, timeout_secs)?.text()?;
    logd!("Net: {} bytes from {}", body.len(), url);
    Ok(body)
}

pub fn http_get_bytes(url: &str, timeout_secs: u64) -> Result<Vec<u8>> {
    let bytes = get(url, timeout_secs)?.bytes()?;
    Ok(bytes.to_vec())
}
