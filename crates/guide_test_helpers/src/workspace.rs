//! Workspace initialization utilities for tests

use assert_fs::TempDir;
use std::fs;

/// Create a temporary directory, removed when the `TempDir` drops
pub fn temp_dir() -> TempDir {
    TempDir::new().expect("Failed to create temp directory")
}

/// Create a temp workspace with an empty `.guide` directory
///
/// # Example
///
/// ```rust
/// use guide_test_helpers::workspace::init_workspace;
///
/// let workspace = init_workspace();
/// assert!(workspace.path().join(".guide").exists());
/// ```
pub fn init_workspace() -> TempDir {
    let temp = temp_dir();
    fs::create_dir_all(temp.path().join(".guide")).expect("Failed to create .guide directory");
    temp
}

/// Create a workspace whose `.guide/config.toml` holds `toml`
///
/// # Example
///
/// ```rust
/// use guide_test_helpers::workspace::workspace_with_config;
///
/// let workspace = workspace_with_config("[extract]\nline_cap = 5\n");
/// assert!(workspace.path().join(".guide/config.toml").exists());
/// ```
pub fn workspace_with_config(toml: &str) -> TempDir {
    let workspace = init_workspace();
    fs::write(workspace.path().join(".guide/config.toml"), toml)
        .expect("Failed to write config file");
    workspace
}
