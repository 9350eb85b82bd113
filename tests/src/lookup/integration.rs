use std::sync::Arc;
use std::time::Duration;

use macvend_common::config::Config;
use macvend_common::lookup::LookupStatus;
use macvend_core::batch::BatchCoordinator;
use macvend_core::resolver::{AddressResolver, FanOutResolver};
use macvend_core::vendors::{self, MacAddressIo, MacVendors, VendorSource, Wireshark};

use crate::util::{Reply, StubServer, refused_base_url};

fn test_config() -> Config {
    Config {
        mac_address_api_key: "at_test_key".to_string(),
        timeout: Duration::from_millis(500),
        ..Config::default()
    }
}

#[tokio::test]
async fn macvendors_returns_plain_text_vendor() {
    let server = StubServer::start(Reply::ok("Apple, Inc.\n")).await;
    let client = vendors::build_client(&test_config()).unwrap();
    let source = MacVendors::with_base_url(client, &server.base_url);

    let outcome = source.query("AABBCC").await;

    assert_eq!(outcome.source(), "MacVendors");
    assert_eq!(outcome.status(), &LookupStatus::Found("Apple, Inc.".into()));
    assert_eq!(server.requests(), ["GET /AABBCC HTTP/1.1"]);
}

#[tokio::test]
async fn macvendors_404_is_not_found() {
    let server = StubServer::start(Reply::status(404)).await;
    let client = vendors::build_client(&test_config()).unwrap();
    let source = MacVendors::with_base_url(client, &server.base_url);

    assert_eq!(source.query("FFFFFF").await.status(), &LookupStatus::NotFound);
}

#[tokio::test]
async fn macaddress_io_sends_the_configured_key() {
    let server = StubServer::start(Reply::ok("Cisco Systems, Inc")).await;
    let cfg = test_config();
    let client = vendors::build_client(&cfg).unwrap();
    let source = MacAddressIo::with_base_url(client, &cfg, &server.base_url);

    let outcome = source.query("00000C").await;

    assert_eq!(outcome.source(), "MacAddress.io");
    assert_eq!(outcome.status(), &LookupStatus::Found("Cisco Systems, Inc".into()));
    let requests = server.requests();
    assert_eq!(requests.len(), 1);
    assert!(requests[0].starts_with("GET /v1?"));
    assert!(requests[0].contains("apiKey=at_test_key"));
    assert!(requests[0].contains("output=vendor"));
    assert!(requests[0].contains("search=00000C"));
}

#[tokio::test]
async fn macaddress_io_with_placeholder_key_still_queries() {
    let server = StubServer::start(Reply::status(401)).await;
    let cfg = Config::default();
    let client = vendors::build_client(&cfg).unwrap();
    let source = MacAddressIo::with_base_url(client, &cfg, &server.base_url);

    assert_eq!(source.query("AABBCC").await.status(), &LookupStatus::NotFound);
    assert!(server.requests()[0].contains("apiKey=YOUR_API_KEY"));
}

#[tokio::test]
async fn wireshark_extracts_the_first_cell() {
    let page = "<html><table><tr><td>Apple, Inc.</td><td>1 Infinite Loop</td></tr></table></html>";
    let server = StubServer::start(Reply::ok(page)).await;
    let client = vendors::build_client(&test_config()).unwrap();
    let source = Wireshark::with_base_url(client, &server.base_url);

    let outcome = source.query("AABBCC").await;

    assert_eq!(outcome.status(), &LookupStatus::Found("Apple, Inc.".into()));
    assert_eq!(
        server.requests(),
        ["GET /tools/oui-lookup.html?query=AABBCC HTTP/1.1"]
    );
}

#[tokio::test]
async fn wireshark_page_without_match_is_not_found() {
    let server = StubServer::start(Reply::ok("<html><p>nothing here</p></html>")).await;
    let client = vendors::build_client(&test_config()).unwrap();
    let source = Wireshark::with_base_url(client, &server.base_url);

    assert_eq!(source.query("AABBCC").await.status(), &LookupStatus::NotFound);
}

#[tokio::test]
async fn refused_connection_is_a_connection_error() {
    let base = refused_base_url().await;
    let cfg = test_config();
    let client = vendors::build_client(&cfg).unwrap();
    let sources: Vec<Arc<dyn VendorSource>> = vec![
        Arc::new(MacVendors::with_base_url(client.clone(), &base)),
        Arc::new(MacAddressIo::with_base_url(client.clone(), &cfg, &base)),
        Arc::new(Wireshark::with_base_url(client, &base)),
    ];

    for source in sources {
        let outcome = source.query("AABBCC").await;
        assert_eq!(outcome.source(), source.name());
        assert_eq!(outcome.status(), &LookupStatus::ConnectionError);
    }
}

#[tokio::test]
async fn slow_source_times_out_as_connection_error() {
    let server = StubServer::start(Reply::Hang).await;
    let cfg = Config {
        timeout: Duration::from_millis(200),
        ..test_config()
    };
    let client = vendors::build_client(&cfg).unwrap();
    let source = MacVendors::with_base_url(client, &server.base_url);

    let outcome = tokio::time::timeout(Duration::from_secs(5), source.query("AABBCC"))
        .await
        .expect("client timeout should fire first");

    assert_eq!(outcome.status(), &LookupStatus::ConnectionError);
}

async fn mixed_resolver() -> (FanOutResolver, Vec<StubServer>) {
    let found = StubServer::start(Reply::ok("Apple, Inc.")).await;
    let missing = StubServer::start(Reply::status(404)).await;
    let refused = refused_base_url().await;

    let cfg = test_config();
    let client = vendors::build_client(&cfg).unwrap();
    let sources: Vec<Arc<dyn VendorSource>> = vec![
        Arc::new(MacVendors::with_base_url(client.clone(), &found.base_url)),
        Arc::new(MacAddressIo::with_base_url(client.clone(), &cfg, &missing.base_url)),
        Arc::new(Wireshark::with_base_url(client, &refused)),
    ];

    (FanOutResolver::new(sources), vec![found, missing])
}

#[tokio::test]
async fn fan_out_collects_every_source_despite_failures() {
    let (resolver, _servers) = mixed_resolver().await;

    let result = resolver.resolve("aa:bb:cc:11:22:33").await;

    assert_eq!(result.prefix, "AABBCC");
    assert_eq!(result.outcomes.len(), 3);
    assert_eq!(
        result.status_of("MacVendors"),
        Some(&LookupStatus::Found("Apple, Inc.".into()))
    );
    assert_eq!(result.status_of("MacAddress.io"), Some(&LookupStatus::NotFound));
    assert_eq!(
        result.status_of("Wireshark"),
        Some(&LookupStatus::ConnectionError)
    );
}

#[tokio::test]
async fn batch_maps_each_address_to_three_outcomes() {
    let (resolver, servers) = mixed_resolver().await;
    let coordinator = BatchCoordinator::new(resolver, &test_config());
    let addresses = vec!["AA:BB:CC:11:22:33".to_string(), "not-a-real-mac".to_string()];

    let batch = coordinator.resolve_batch(&addresses).await;

    assert_eq!(batch.len(), 2);
    for address in &addresses {
        let result = batch.get(address).unwrap();
        assert_eq!(result.outcomes.len(), 3, "{address}");
    }

    let mut seen = servers[0].requests();
    seen.sort();
    assert_eq!(seen, ["GET /AABBCC HTTP/1.1", "GET /NOTARE HTTP/1.1"]);
}
