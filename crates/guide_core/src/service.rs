//! Guidelines service: one fetch, one extraction per request

use crate::pipeline::DocumentPipeline;
use crate::source::{DocumentSource, HttpSource};
use guide_common::Result;
use guide_config::Config;

/// Owns the document source and the pipeline; no state survives a request
#[derive(Debug, Clone)]
pub struct GuidelinesService<S> {
    source: S,
    pipeline: DocumentPipeline,
}

impl<S: DocumentSource> GuidelinesService<S> {
    pub fn new(source: S, pipeline: DocumentPipeline) -> Self {
        Self { source, pipeline }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn pipeline(&self) -> &DocumentPipeline {
        &self.pipeline
    }

    /// Fetch the document and extract the requested part
    ///
    /// Fetch failures are returned untouched. Extraction itself cannot fail.
    pub async fn read(&self, section: Option<&str>) -> Result<String> {
        let raw = self.source.fetch().await?;
        Ok(self.pipeline.extract(&raw, section))
    }
}

impl GuidelinesService<HttpSource> {
    /// HTTP-backed service built from the loaded configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        let source = HttpSource::new(&config.source)?;
        Ok(Self::new(source, DocumentPipeline::new(config.extract.clone())))
    }
}
