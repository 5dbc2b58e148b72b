//! Service tests with in-memory and failing sources

use guide_common::{GuideError, Result};
use guide_config::{Config, SourceConfig};
use guide_core::{DocumentPipeline, DocumentSource, GuidelinesService, HttpSource, StaticSource};
use guide_test_helpers::fixtures::GUIDELINES_HTML;
use guide_test_helpers::logging::suppress_logs;
use std::future::Future;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Source that always fails with a decode error and counts its calls
#[derive(Default)]
struct BrokenSource {
    calls: AtomicUsize,
}

impl DocumentSource for BrokenSource {
    fn fetch(&self) -> impl Future<Output = Result<String>> + Send {
        self.calls.fetch_add(1, Ordering::SeqCst);
        async { Err(GuideError::DecodeFailure) }
    }
}

#[tokio::test]
async fn test_read_full_document() {
    suppress_logs();
    let service = GuidelinesService::new(StaticSource::new(GUIDELINES_HTML), DocumentPipeline::default());

    let text = service.read(None).await.unwrap();
    assert!(text.contains("API Design Guidelines"));
    assert!(!text.contains("Copyright"));
}

#[tokio::test]
async fn test_read_section() {
    let service = GuidelinesService::new(StaticSource::new(GUIDELINES_HTML), DocumentPipeline::default());

    let text = service.read(Some("Conventions")).await.unwrap();
    assert!(text.starts_with("Content for section \"Conventions\":\n\nConventions\n"));
    assert!(text.contains("<when possible>"));
}

#[tokio::test]
async fn test_repeated_reads_are_identical() {
    let service = GuidelinesService::new(StaticSource::new(GUIDELINES_HTML), DocumentPipeline::default());

    let first = service.read(Some("naming")).await.unwrap();
    let second = service.read(Some("naming")).await.unwrap();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_fetch_failure_is_not_retried() {
    let service = GuidelinesService::new(BrokenSource::default(), DocumentPipeline::default());

    let err = service.read(Some("Naming")).await.unwrap_err();
    assert!(matches!(err, GuideError::DecodeFailure));
    assert_eq!(service.source().calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn test_refused_connection_is_transport_failure() {
    let source = HttpSource::new(&SourceConfig {
        url: "http://127.0.0.1:9/guidelines".to_string(),
        timeout_secs: 5,
        ..SourceConfig::default()
    })
    .unwrap();
    let service = GuidelinesService::new(source, DocumentPipeline::default());

    let err = service.read(None).await.unwrap_err();
    assert!(matches!(err, GuideError::TransportFailure(_)), "got {:?}", err);
}

#[tokio::test]
async fn test_from_config_uses_extract_settings() {
    let mut config = Config::default();
    config.extract.line_cap = 2;
    config.source.url = "ftp://example.com/guide".to_string();

    let service = GuidelinesService::from_config(&config).unwrap();
    assert_eq!(service.pipeline().config().line_cap, 2);

    let err = service.read(None).await.unwrap_err();
    assert!(matches!(err, GuideError::InvalidSource(_)));
}
