//! Compile-time build metadata exposed to the CLI.

/// Semver package version from `Cargo.toml`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// VCS commit hash captured at build time.
pub const GIT_COMMIT: &str = env!("ANSIMARK_BUILD_GIT_HASH");

/// Build timestamp captured at compile time.
pub const BUILD_TIMESTAMP: &str = env!("ANSIMARK_BUILD_TIMESTAMP");

/// Help trailer block that surfaces build metadata in `ansimark --help`.
pub const HELP_BUILD_METADATA: &str = concat!(
    "Build metadata:\n  commit: ",
    env!("ANSIMARK_BUILD_GIT_HASH"),
    "\n  built: ",
    env!("ANSIMARK_BUILD_TIMESTAMP")
);

/// Version block printed by `ansimark --version`.
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "\ncommit: ",
    env!("ANSIMARK_BUILD_GIT_HASH"),
    "\nbuilt: ",
    env!("ANSIMARK_BUILD_TIMESTAMP")
);
