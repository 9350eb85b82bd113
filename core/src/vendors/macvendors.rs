use async_trait::async_trait;
use macvend_common::lookup::LookupOutcome;
use reqwest::Client;

use super::{VendorSource, http, into_outcome};

const NAME: &str = "MacVendors";
const BASE_URL: &str = "https://api.macvendors.com";

/// api.macvendors.com: plain-text vendor name, 404 when unknown.
pub struct MacVendors {
    client: Client,
    base_url: String,
}

impl MacVendors {
    pub fn new(client: Client) -> Self {
        Self::with_base_url(client, BASE_URL)
    }

    pub fn with_base_url(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
        }
    }
}

#[async_trait]
impl VendorSource for MacVendors {
    fn name(&self) -> &str {
        NAME
    }

    async fn query(&self, prefix: &str) -> LookupOutcome {
        let url = format!("{}/{}", self.base_url.trim_end_matches('/'), prefix);
        let result = http::fetch_text(self.client.get(url)).await;
        into_outcome(NAME, result)
    }
}
