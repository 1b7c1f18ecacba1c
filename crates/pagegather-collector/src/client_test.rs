use super::*;

#[test]
fn page_url_appends_page_parameter() {
    let url = ListingClient::page_url("https://venue.example.org/archive", 1).unwrap();
    assert_eq!(url, "https://venue.example.org/archive?page=1");
}

#[test]
fn page_url_preserves_existing_query() {
    let url = ListingClient::page_url("https://venue.example.org/archive?sort=date", 3).unwrap();
    assert_eq!(url, "https://venue.example.org/archive?sort=date&page=3");
}

#[test]
fn page_url_handles_trailing_slash() {
    let url = ListingClient::page_url("https://venue.example.org/", 2).unwrap();
    assert_eq!(url, "https://venue.example.org/?page=2");
}

#[test]
fn page_url_rejects_relative_endpoint() {
    let result = ListingClient::page_url("not-a-url", 1);
    assert!(result.is_err());
    let err = result.unwrap_err();
    assert!(
        matches!(err, CollectError::InvalidEndpoint { .. }),
        "expected InvalidEndpoint, got: {err:?}"
    );
}

#[test]
fn new_rejects_invalid_config() {
    let config = pagegather_core::CollectorConfig {
        user_agent: String::new(),
        ..pagegather_core::CollectorConfig::default()
    };
    let result = ListingClient::new(&config, Selectors::default());
    assert!(matches!(result, Err(CollectError::Config(_))));
}
