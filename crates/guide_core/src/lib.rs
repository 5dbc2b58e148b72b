//! Core engine for the guidelines server
//!
//! Turns a fetched guidelines page into plain text and, on request, into an
//! excerpt around a named section. Extraction is pattern based: no DOM is built.

pub mod body;
pub mod pipeline;
pub mod section;
pub mod service;
pub mod source;
pub mod strip;

pub use body::locate_body;
pub use pipeline::{extract, DocumentPipeline};
pub use section::match_section;
pub use service::GuidelinesService;
pub use source::{DocumentSource, HttpSource, StaticSource};
pub use strip::strip_tags;
