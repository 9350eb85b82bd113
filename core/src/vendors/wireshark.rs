use std::sync::OnceLock;

use async_trait::async_trait;
use macvend_common::lookup::LookupOutcome;
use regex::Regex;
use reqwest::Client;

use super::{SourceError, VendorSource, http, into_outcome};

const NAME: &str = "Wireshark";
const BASE_URL: &str = "https://www.wireshark.org";

static VENDOR_CELL: OnceLock<Regex> = OnceLock::new();

/// The first non-blank table cell of the lookup page holds the vendor.
fn vendor_cell() -> &'static Regex {
    VENDOR_CELL.get_or_init(|| Regex::new(r"<td>([^<]+)</td>").expect("valid vendor pattern"))
}

fn extract_vendor(html: &str) -> Result<String, SourceError> {
    vendor_cell()
        .captures_iter(html)
        .filter_map(|caps| caps.get(1))
        .map(|cell| cell.as_str().trim())
        .find(|vendor| !vendor.is_empty())
        .map(str::to_string)
        .ok_or(SourceError::NoMatch)
}

/// Wireshark's OUI lookup page, scraped.
pub struct Wireshark {
    client: Client,
    base_url: String,
}

impl Wireshark {
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
impl VendorSource for Wireshark {
    fn name(&self) -> &str {
        NAME
    }

    async fn query(&self, prefix: &str) -> LookupOutcome {
        let url = format!("{}/tools/oui-lookup.html", self.base_url.trim_end_matches('/'));
        let request = self.client.get(url).query(&[("query", prefix)]);
        let result = http::fetch_text(request)
            .await
            .and_then(|html| extract_vendor(&html));
        into_outcome(NAME, result)
    }
}
