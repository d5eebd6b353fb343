use std::path::PathBuf;

use services::{CacheHint, DictionaryLoadError, DictionarySource, FileSource, HttpSource};
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const VERBS: &str = r#"{ "regular": ["hablar"], "irregular": { "ir": { "presente": ["voy", "vas", "va", "vamos", "van"] } } }"#;

fn scratch_file(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("conjuga-{}-{name}", std::process::id()))
}

#[tokio::test]
async fn file_source_reads_json() {
    let file = scratch_file("verbs.json");
    std::fs::write(&file, VERBS).unwrap();

    let dictionary = FileSource::new(&file).load().await.unwrap();
    assert_eq!(dictionary.verbs(), ["hablar", "ir"]);

    std::fs::remove_file(&file).ok();
}

#[tokio::test]
async fn file_source_reports_missing_path() {
    let file = scratch_file("missing.json");
    let err = FileSource::new(&file).load().await.unwrap_err();
    match err {
        DictionaryLoadError::Io { path, .. } => assert_eq!(path, file),
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn http_source_sends_cache_hint() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/verbs.json"))
        .and(header("cache-control", "no-cache"))
        .respond_with(ResponseTemplate::new(200).set_body_string(VERBS))
        .expect(1)
        .mount(&server)
        .await;

    let source = HttpSource::new(format!("{}/verbs.json", server.uri()))
        .with_cache_hint(CacheHint::NoCache);
    let dictionary = source.load().await.unwrap();
    assert!(dictionary.is_irregular("ir"));
}

#[tokio::test]
async fn http_source_surfaces_bad_status() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/verbs.json"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let err = HttpSource::new(format!("{}/verbs.json", server.uri()))
        .load()
        .await
        .unwrap_err();
    assert!(matches!(err, DictionaryLoadError::HttpStatus(status) if status.as_u16() == 404));
}

#[tokio::test]
async fn http_source_rejects_malformed_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[]"))
        .mount(&server)
        .await;

    let err = HttpSource::new(server.uri()).load().await.unwrap_err();
    assert!(matches!(err, DictionaryLoadError::Invalid(_)));
}
