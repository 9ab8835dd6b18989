//! Distribution identity resolution.
//!
//! Two fallback tiers, tried in order until one succeeds:
//! 1. `{etc_path}/os-release` (`KEY=VALUE` file) — opening the file counts
//!    as success even when no recognized keys are present.
//! 2. `lsb_release -a` output (`Key: Value` lines).
//!
//! The package manager is attached by the detector regardless of which tier
//! produced the identity fields; neither data source is consulted for it.

use std::path::Path;

use tracing::debug;

use crate::collector::CollectError;
use crate::collector::packages::detect_package_manager;
use crate::collector::procfs::parser::{DistroFields, parse_lsb_release, parse_os_release};
use crate::collector::traits::{CommandRunner, FileSystem};
use crate::model::DistroInfo;

/// Resolves distribution name, version and codename.
pub struct DistroResolver<F: FileSystem, R: CommandRunner> {
    fs: F,
    runner: R,
    etc_path: String,
}

impl<F: FileSystem, R: CommandRunner> DistroResolver<F, R> {
    /// Creates a new resolver.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `runner` - Subprocess implementation (real or mock)
    /// * `etc_path` - Base path for release files (usually "/etc")
    pub fn new(fs: F, runner: R, etc_path: impl Into<String>) -> Self {
        Self {
            fs,
            runner,
            etc_path: etc_path.into(),
        }
    }

    /// Resolves distribution identity, first successful tier wins.
    ///
    /// Fails with [`CollectError::DistroResolution`] only when every tier
    /// fails to produce output.
    pub fn resolve(&self) -> Result<DistroInfo, CollectError> {
        let tiers: [fn(&Self) -> Result<DistroFields, CollectError>; 2] =
            [Self::from_os_release, Self::from_lsb_release];

        for tier in tiers {
            match tier(self) {
                Ok(fields) => {
                    return Ok(DistroInfo {
                        name: fields.name,
                        version: fields.version,
                        codename: fields.codename,
                        package_manager: detect_package_manager(&self.runner),
                    });
                }
                Err(e) => debug!("distro resolution tier failed: {}", e),
            }
        }

        Err(CollectError::DistroResolution)
    }

    fn from_os_release(&self) -> Result<DistroFields, CollectError> {
        let path = format!("{}/os-release", self.etc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        Ok(parse_os_release(&content))
    }

    fn from_lsb_release(&self) -> Result<DistroFields, CollectError> {
        let output = self
            .runner
            .run("lsb_release", &["-a"])
            .map_err(|e| CollectError::Command(format!("lsb_release: {}", e)))?;
        Ok(parse_lsb_release(&output))
    }
}
