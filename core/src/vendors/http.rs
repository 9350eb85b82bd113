use macvend_common::config::Config;
use reqwest::{Client, RequestBuilder};

use super::SourceError;

/// HTTP client shared by every source, with the per-request timeout from `cfg`.
pub fn build_client(cfg: &Config) -> reqwest::Result<Client> {
    Client::builder()
        .timeout(cfg.timeout)
        .user_agent(concat!("macvend/", env!("CARGO_PKG_VERSION")))
        .build()
}

/// Sends `request` and returns the trimmed body of a successful answer.
pub(crate) async fn fetch_text(request: RequestBuilder) -> Result<String, SourceError> {
    let response = request.send().await?;
    let status = response.status();
    if !status.is_success() {
        return Err(SourceError::Status(status.as_u16()));
    }

    let body = response.text().await?;
    let body = body.trim();
    if body.is_empty() {
        return Err(SourceError::EmptyBody);
    }
    Ok(body.to_string())
}
