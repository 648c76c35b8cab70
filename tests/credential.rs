// tests/credential.rs
use lia_finder::ingest::providers::build_http_providers;
use lia_finder::ingest::providers::jobtech::{JobTechProvider, API_KEY_ENV};
use lia_finder::ingest::types::Source;
use lia_finder::pipeline::build_providers;
use lia_finder::LiaError;
use mockito::Matcher;
use serial_test::serial;

#[test]
#[serial]
fn missing_key_fails_before_building_providers() {
    std::env::remove_var(API_KEY_ENV);
    let err = build_providers().err().expect("must fail without a key");
    assert!(err.is_config());
    assert!(matches!(err, LiaError::MissingCredential { var } if var == API_KEY_ENV));
    assert!(err.to_string().contains(API_KEY_ENV));
}

#[test]
#[serial]
fn blank_key_counts_as_missing() {
    std::env::set_var(API_KEY_ENV, "   ");
    let err = JobTechProvider::from_env(Source::jobtech()).err().unwrap();
    std::env::remove_var(API_KEY_ENV);
    assert!(matches!(err, LiaError::MissingCredential { .. }));
}

#[tokio::test]
#[serial]
async fn no_request_is_made_without_a_key() {
    std::env::remove_var(API_KEY_ENV);
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("GET", "/search")
        .match_query(Matcher::Any)
        .expect(0)
        .create_async()
        .await;

    let res = build_http_providers(&[Source::jobtech_at(server.url())]);
    assert!(res.is_err());
    mock.assert_async().await;
}

#[test]
#[serial]
fn key_from_env_builds_one_provider() {
    std::env::set_var(API_KEY_ENV, "abc123");
    let providers = build_providers();
    std::env::remove_var(API_KEY_ENV);
    let providers = providers.unwrap();
    assert_eq!(providers.len(), 1);
    assert_eq!(providers[0].source().base_url, "https://jobsearch.api.jobtechdev.se");
}
