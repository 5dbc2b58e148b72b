//! Document sources
//!
//! A source yields the raw markup of the document, or a fetch failure. Only a
//! 200 response with a UTF-8 body counts as a document.

use guide_common::{GuideError, Result};
use guide_config::SourceConfig;
use reqwest::{Client, StatusCode, Url};
use std::future::Future;
use std::time::Duration;
use tracing::Instrument;

/// Something that can produce the raw document markup
pub trait DocumentSource {
    fn fetch(&self) -> impl Future<Output = Result<String>> + Send;
}

/// Fetches the document with an HTTP GET
#[derive(Debug, Clone)]
pub struct HttpSource {
    client: Client,
    url: String,
}

impl HttpSource {
    /// Build the HTTP client. The URL itself is checked on every fetch.
    pub fn new(config: &SourceConfig) -> Result<Self> {
        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .timeout(Duration::from_secs(config.timeout_secs))
            .redirect(reqwest::redirect::Policy::limited(5))
            .build()
            .map_err(|e| {
                GuideError::TransportFailure(format!("failed to build HTTP client: {}", e))
            })?;

        Ok(Self {
            client,
            url: config.url.clone(),
        })
    }
}

impl DocumentSource for HttpSource {
    fn fetch(&self) -> impl Future<Output = Result<String>> + Send {
        let span = tracing::info_span!("fetch", url = %self.url);
        async move {
            let url = parse_source_url(&self.url)?;

            let response = self.client.get(url).send().await.map_err(|e| {
                tracing::warn!(error = %e, "Request failed");
                GuideError::TransportFailure(format!("HTTP request failed: {}", e))
            })?;

            let status = response.status();
            let body = response.bytes().await.map_err(|e| {
                GuideError::TransportFailure(format!("failed to read response body: {}", e))
            })?;

            tracing::info!(status = status.as_u16(), bytes = body.len(), "Fetched document");
            decode_response(status, body.to_vec())
        }
        .instrument(span)
    }
}

/// Serves a fixed document from memory
#[derive(Debug, Clone)]
pub struct StaticSource {
    markup: String,
}

impl StaticSource {
    pub fn new(markup: impl Into<String>) -> Self {
        Self {
            markup: markup.into(),
        }
    }
}

impl DocumentSource for StaticSource {
    fn fetch(&self) -> impl Future<Output = Result<String>> + Send {
        let markup = self.markup.clone();
        async move { Ok(markup) }
    }
}

/// Accept only absolute http(s) URLs
pub fn parse_source_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| GuideError::InvalidSource(format!("{}: {}", raw, e)))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(GuideError::InvalidSource(format!(
            "{}: unsupported scheme '{}'",
            raw, other
        ))),
    }
}

/// Turn a status and body into document text
pub fn decode_response(status: StatusCode, body: Vec<u8>) -> Result<String> {
    if status != StatusCode::OK {
        return Err(GuideError::TransportFailure(format!(
            "HTTP request failed with status {}",
            status.as_u16()
        )));
    }
    String::from_utf8(body).map_err(|_| GuideError::DecodeFailure)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_ok() {
        let text = decode_response(StatusCode::OK, "<main>ok</main>".as_bytes().to_vec()).unwrap();
        assert_eq!(text, "<main>ok</main>");
    }

    #[test]
    fn test_non_200_is_transport_failure() {
        for status in [StatusCode::NOT_FOUND, StatusCode::NO_CONTENT, StatusCode::BAD_GATEWAY] {
            let err = decode_response(status, Vec::new()).unwrap_err();
            assert!(matches!(err, GuideError::TransportFailure(_)), "status {}", status);
        }
    }

    #[test]
    fn test_invalid_utf8_is_decode_failure() {
        let err = decode_response(StatusCode::OK, vec![0x3c, 0xff, 0xfe]).unwrap_err();
        assert!(matches!(err, GuideError::DecodeFailure));
    }

    #[test]
    fn test_url_validation() {
        assert!(parse_source_url("https://swift.org/documentation/api-design-guidelines/").is_ok());
        assert!(matches!(
            parse_source_url("not a url"),
            Err(GuideError::InvalidSource(_))
        ));
        assert!(matches!(
            parse_source_url("ftp://example.com/doc"),
            Err(GuideError::InvalidSource(_))
        ));
    }

    #[tokio::test]
    async fn test_invalid_url_fails_on_fetch() {
        let source = HttpSource::new(&SourceConfig {
            url: "::bad::".to_string(),
            ..SourceConfig::default()
        })
        .unwrap();

        let err = source.fetch().await.unwrap_err();
        assert!(matches!(err, GuideError::InvalidSource(_)));
    }

    #[tokio::test]
    async fn test_static_source() {
        let source = StaticSource::new("<body>x</body>");
        assert_eq!(source.fetch().await.unwrap(), "<body>x</body>");
    }
}
