//! Package manager detection and installed-package counting.

use tracing::debug;

use crate::collector::CollectError;
use crate::collector::traits::CommandRunner;
use crate::model::PackageManager;

/// Probes the executable search path for known package managers.
///
/// Detection order is fixed ([`PackageManager::DETECTION_ORDER`]); the first
/// resolvable executable wins. Pure probe, no side effects beyond path
/// lookups.
pub fn detect_package_manager<R: CommandRunner>(runner: &R) -> PackageManager {
    PackageManager::DETECTION_ORDER
        .into_iter()
        .find(|pm| runner.lookup(pm.executable()).is_some())
        .unwrap_or(PackageManager::Unknown)
}

/// Counts installed packages by running the manager's enumeration command.
///
/// The count is the number of non-empty output lines, so empty output yields
/// zero rather than the negative value the naive "lines minus trailing"
/// arithmetic would produce.
pub fn count_packages<R: CommandRunner>(
    runner: &R,
    manager: PackageManager,
) -> Result<u64, CollectError> {
    let (program, args): (&str, &[&str]) = match manager {
        PackageManager::Pacman => ("pacman", &["-Q"]),
        PackageManager::Apt => ("dpkg", &["--get-selections"]),
        PackageManager::Dnf | PackageManager::Yum => ("rpm", &["-qa"]),
        other => return Err(CollectError::UnsupportedManager(other)),
    };

    debug!("counting packages via {} {:?}", program, args);
    let output = runner
        .run(program, args)
        .map_err(|e| CollectError::Command(format!("{}: {}", program, e)))?;

    Ok(output.lines().filter(|l| !l.trim().is_empty()).count() as u64)
}
