//! Version command for the chitchat CLI.

/// The current version, read from Cargo.toml at compile time.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// `chitchat <version>`
pub fn version_line() -> String {
    format!("chitchat {}", VERSION)
}
