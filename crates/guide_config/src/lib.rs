//! Configuration management for the guidelines server
//!
//! This crate handles loading and validating `.guide/config.toml`

use guide_common::{EntityRule, GuideError, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Location of the config file relative to the workspace root
pub const CONFIG_RELATIVE_PATH: &str = ".guide/config.toml";

/// Environment variable naming the workspace root
pub const WORKSPACE_ENV: &str = "GUIDE_WORKSPACE";

/// Main configuration structure
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    /// Workspace root (set programmatically, not in TOML)
    #[serde(skip)]
    pub root: PathBuf,

    /// Document source settings
    #[serde(default)]
    pub source: SourceConfig,

    /// Extraction settings
    #[serde(default)]
    pub extract: ExtractConfig,

    /// MCP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

/// Document source configuration ([source])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    #[serde(default = "default_url")]
    pub url: String,

    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_url() -> String {
    "https://swift.org/documentation/api-design-guidelines/".to_string()
}
fn default_timeout_secs() -> u64 {
    30
}
fn default_user_agent() -> String {
    concat!("guide-mcp/", env!("CARGO_PKG_VERSION")).to_string()
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
        }
    }
}

/// Extraction configuration ([extract])
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ExtractConfig {
    /// Tag whose content is preferred as the document body
    #[serde(default = "default_primary_boundary")]
    pub primary_boundary: String,

    /// Tag used when the primary one is absent or unterminated
    #[serde(default = "default_fallback_boundary")]
    pub fallback_boundary: String,

    /// Maximum number of lines in a section excerpt
    #[serde(default = "default_line_cap")]
    pub line_cap: usize,

    /// Characters of the document shown when a section is missing
    #[serde(default = "default_sample_chars")]
    pub sample_chars: usize,

    /// Entities decoded in order, one pass each
    #[serde(default = "default_entities")]
    pub entities: Vec<EntityRule>,
}

fn default_primary_boundary() -> String {
    "main".to_string()
}
fn default_fallback_boundary() -> String {
    "body".to_string()
}
fn default_line_cap() -> usize {
    50
}
fn default_sample_chars() -> usize {
    500
}

/// The fixed entity table. `&amp;` stays last so its output is never decoded twice.
pub fn default_entities() -> Vec<EntityRule> {
    vec![
        EntityRule::new("&nbsp;", " "),
        EntityRule::new("&lt;", "<"),
        EntityRule::new("&gt;", ">"),
        EntityRule::new("&quot;", "\""),
        EntityRule::new("&#39;", "'"),
        EntityRule::new("&amp;", "&"),
    ]
}

impl Default for ExtractConfig {
    fn default() -> Self {
        Self {
            primary_boundary: default_primary_boundary(),
            fallback_boundary: default_fallback_boundary(),
            line_cap: default_line_cap(),
            sample_chars: default_sample_chars(),
            entities: default_entities(),
        }
    }
}

/// MCP server configuration ([server])
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_server_name")]
    pub name: String,

    #[serde(default = "default_tool_name")]
    pub tool_name: String,
}

fn default_server_name() -> String {
    "swift-api-guidelines".to_string()
}
fn default_tool_name() -> String {
    "readSwiftGuidelines".to_string()
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            name: default_server_name(),
            tool_name: default_tool_name(),
        }
    }
}

impl Config {
    /// Load configuration from workspace root
    pub fn load(workspace_root: &Path) -> Result<Self> {
        let config_path = workspace_root.join(CONFIG_RELATIVE_PATH);

        if !config_path.exists() {
            tracing::debug!(path = ?config_path, "No config file, using defaults");
            return Ok(Self {
                root: workspace_root.to_path_buf(),
                ..Self::default()
            });
        }

        let mut config = Self::from_file(&config_path)?;
        config.root = workspace_root.to_path_buf();
        Ok(config)
    }

    /// Load configuration from an explicit file path
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| GuideError::ConfigError(format!("Failed to read config: {}", e)))?;

        let mut config = Self::from_toml(&content)?;
        if let Some(parent) = path.parent().and_then(Path::parent) {
            config.root = parent.to_path_buf();
        }
        Ok(config)
    }

    /// Parse and validate TOML text
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)
            .map_err(|e| GuideError::ConfigError(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Workspace root from `GUIDE_WORKSPACE`, else the current directory
    pub fn workspace_root() -> Result<PathBuf> {
        match std::env::var(WORKSPACE_ENV) {
            Ok(dir) if !dir.trim().is_empty() => Ok(PathBuf::from(dir)),
            _ => Ok(std::env::current_dir()?),
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.extract.line_cap == 0 {
            return Err(GuideError::ConfigError(
                "extract.line_cap must be at least 1".to_string(),
            ));
        }
        if self.extract.primary_boundary.trim().is_empty()
            || self.extract.fallback_boundary.trim().is_empty()
        {
            return Err(GuideError::ConfigError(
                "extract boundaries must name a tag".to_string(),
            ));
        }
        if self.extract.entities.iter().any(|rule| rule.entity.is_empty()) {
            return Err(GuideError::ConfigError(
                "extract.entities cannot contain an empty entity".to_string(),
            ));
        }
        if self.source.timeout_secs == 0 {
            return Err(GuideError::ConfigError(
                "source.timeout_secs must be at least 1".to_string(),
            ));
        }
        if self.server.tool_name.trim().is_empty() {
            return Err(GuideError::ConfigError(
                "server.tool_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
