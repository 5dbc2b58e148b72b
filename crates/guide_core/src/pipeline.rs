//! Document pipeline: body lookup, tag stripping, optional section narrowing

use crate::body::locate_body;
use crate::section::match_section;
use crate::strip::strip_tags;
use guide_config::ExtractConfig;

/// Pure extraction pipeline configured once and reused across requests
#[derive(Debug, Clone, Default)]
pub struct DocumentPipeline {
    config: ExtractConfig,
}

impl DocumentPipeline {
    pub fn new(config: ExtractConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExtractConfig {
        &self.config
    }

    /// Body region of `raw` converted to plain text
    pub fn plain_text(&self, raw: &str) -> String {
        let region = locate_body(
            raw,
            &self.config.primary_boundary,
            &self.config.fallback_boundary,
        );
        strip_tags(region, &self.config.entities)
    }

    /// Full plain text, or the excerpt for `section` when one is given
    #[tracing::instrument(skip_all, fields(raw_len = raw.len(), section = ?section))]
    pub fn extract(&self, raw: &str, section: Option<&str>) -> String {
        let text = self.plain_text(raw);
        tracing::debug!(text_len = text.len(), "Converted markup to plain text");

        match section {
            Some(name) => match_section(
                &text,
                name,
                self.config.line_cap,
                self.config.sample_chars,
            ),
            None => text,
        }
    }
}

/// Extract with the default settings
///
/// # Example
/// ```
/// let html = "<p>Be <b>clear</b> &amp;   concise.</p>";
/// assert_eq!(guide_core::extract(html, None), "Be clear & concise.");
/// ```
pub fn extract(raw: &str, section: Option<&str>) -> String {
    DocumentPipeline::default().extract(raw, section)
}
