//! Command builders for the server binary
//!
//! Commands run with `RUST_LOG=error` and without the caller's workspace
//! variables so stderr stays quiet and the default config is not picked up.

use assert_cmd::Command;

/// Get a Command for the `guide_mcp` binary with clean environment
pub fn guide_mcp_command() -> Command {
    command_for("guide_mcp")
}

/// Get a Command for a specific binary with clean environment
///
/// # Arguments
///
/// * `bin_name` - Name of the binary (e.g., "guide_mcp")
#[allow(deprecated)]
pub fn command_for(bin_name: &str) -> Command {
    let mut cmd = Command::cargo_bin(bin_name)
        .unwrap_or_else(|_| panic!("Failed to find {} binary", bin_name));
    cmd.env("RUST_LOG", "error");
    cmd.env_remove("GUIDE_WORKSPACE");
    cmd
}
