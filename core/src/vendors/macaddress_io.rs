use async_trait::async_trait;
use macvend_common::config::Config;
use macvend_common::lookup::LookupOutcome;
use reqwest::Client;

use super::{VendorSource, http, into_outcome};

const NAME: &str = "MacAddress.io";
const BASE_URL: &str = "https://api.macaddress.io";

/// api.macaddress.io, vendor-only output. Requires an API key.
///
/// A placeholder key is still sent; the service then rejects the request
/// and the outcome is [`NotFound`](macvend_common::lookup::LookupStatus::NotFound).
pub struct MacAddressIo {
    client: Client,
    base_url: String,
    api_key: String,
}

impl MacAddressIo {
    pub fn new(client: Client, cfg: &Config) -> Self {
        Self::with_base_url(client, cfg, BASE_URL)
    }

    pub fn with_base_url(client: Client, cfg: &Config, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into(),
            api_key: cfg.mac_address_api_key.clone(),
        }
    }
}

#[async_trait]
impl VendorSource for MacAddressIo {
    fn name(&self) -> &str {
        NAME
    }

    async fn query(&self, prefix: &str) -> LookupOutcome {
        let url = format!("{}/v1", self.base_url.trim_end_matches('/'));
        let request = self.client.get(url).query(&[
            ("apiKey", self.api_key.as_str()),
            ("output", "vendor"),
            ("search", prefix),
        ]);
        into_outcome(NAME, http::fetch_text(request).await)
    }
}
