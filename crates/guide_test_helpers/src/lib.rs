//! Shared test utilities for the guidelines server test suites
//!
//! # Modules
//!
//! - [`workspace`]: temp workspaces with a `.guide/config.toml`
//! - [`cli`]: command builders for the server binary
//! - [`logging`]: test logging configuration
//! - [`assertions`]: JSON-RPC and plain-text predicates
//! - [`fixtures`]: sample guideline pages
//!
//! # Example
//!
//! ```rust,no_run
//! use guide_test_helpers::prelude::*;
//!
//! let workspace = workspace_with_config("[source]\nurl = \"http://127.0.0.1:9/\"\n");
//! guide_mcp_command()
//!     .env("GUIDE_WORKSPACE", workspace.path())
//!     .write_stdin("{\"jsonrpc\":\"2.0\",\"id\":1,\"method\":\"ping\"}\n")
//!     .assert()
//!     .success();
//! ```

pub mod assertions;
pub mod cli;
pub mod fixtures;
pub mod logging;
pub mod workspace;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::assertions::*;
    pub use crate::cli::{command_for, guide_mcp_command};
    pub use crate::fixtures::*;
    pub use crate::logging::{init_test_logging, suppress_logs};
    pub use crate::workspace::{init_workspace, temp_dir, workspace_with_config};
}
