//! System facts acquisition for Linux.
//!
//! Collectors read the `/proc` filesystem and shell out to package manager
//! tooling through two trait seams, so everything is testable without a
//! real Linux environment:
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │                        Collector                         │
//! │  ┌─────────────────┐ ┌───────────────┐ ┌──────────────┐  │
//! │  │ SystemCollector │ │ DistroResolver│ │   packages   │  │
//! │  │ /proc/meminfo   │ │ os-release /  │ │ detect/count │  │
//! │  │ /proc/uptime    │ │ lsb_release   │ │              │  │
//! │  │ /proc/version   │ └──────┬────────┘ └──────┬───────┘  │
//! │  └───────┬─────────┘        │                 │          │
//! │          │                  │                 │          │
//! │    ┌─────▼──────┐    ┌──────▼──────────┐      │          │
//! │    │ FileSystem │    │  CommandRunner  │◄─────┘          │
//! │    └─────┬──────┘    └──────┬──────────┘                 │
//! └──────────┼──────────────────┼────────────────────────────┘
//!            │                  │
//!     RealFs / MockFs    RealRunner / MockRunner
//! ```

#[allow(clippy::module_inception)]
mod collector;
pub mod distro;
pub mod mock;
pub mod packages;
pub mod procfs;
pub mod traits;

pub use collector::{Collector, shell_name};
pub use distro::DistroResolver;
pub use procfs::{ParseError, SystemCollector};
pub use traits::{CommandRunner, FileSystem, RealFs, RealRunner};

use crate::model::PackageManager;

/// Error type for collection failures.
#[derive(Debug)]
pub enum CollectError {
    /// I/O error reading a backing file.
    Io(std::io::Error),
    /// File opened but its content did not match the expected shape.
    Parse(String),
    /// Every distro resolution tier was exhausted.
    DistroResolution,
    /// No enumeration command is mapped for this package manager.
    UnsupportedManager(PackageManager),
    /// An external tool could not run or exited non-zero.
    Command(String),
}

impl std::fmt::Display for CollectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CollectError::Io(e) => write!(f, "I/O error: {}", e),
            CollectError::Parse(msg) => write!(f, "parse error: {}", msg),
            CollectError::DistroResolution => write!(
                f,
                "cannot determine distribution: os-release and lsb_release both unavailable"
            ),
            CollectError::UnsupportedManager(pm) => {
                write!(f, "unsupported package manager: {}", pm)
            }
            CollectError::Command(msg) => write!(f, "command failed: {}", msg),
        }
    }
}

impl std::error::Error for CollectError {}

impl From<std::io::Error> for CollectError {
    fn from(e: std::io::Error) -> Self {
        CollectError::Io(e)
    }
}
