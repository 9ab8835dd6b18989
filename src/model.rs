//! Data model for a collected system snapshot.
//!
//! Every invocation builds a fresh snapshot; nothing here is mutated after
//! construction and no state is shared across runs.

use serde::Serialize;

/// Known package manager families, in fixed detection priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PackageManager {
    Apt,
    Dnf,
    Yum,
    Pacman,
    Zypper,
    Unknown,
}

impl PackageManager {
    /// Probe order for detection. Earlier entries win when several managers
    /// are installed side by side.
    pub const DETECTION_ORDER: [PackageManager; 5] = [
        PackageManager::Apt,
        PackageManager::Dnf,
        PackageManager::Yum,
        PackageManager::Pacman,
        PackageManager::Zypper,
    ];

    /// Executable name probed on the search path.
    pub fn executable(&self) -> &'static str {
        match self {
            PackageManager::Apt => "apt",
            PackageManager::Dnf => "dnf",
            PackageManager::Yum => "yum",
            PackageManager::Pacman => "pacman",
            PackageManager::Zypper => "zypper",
            PackageManager::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for PackageManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.executable())
    }
}

/// Distribution identity resolved from `/etc/os-release` or `lsb_release`.
///
/// Fields default to empty strings when the source omits a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DistroInfo {
    pub name: String,
    pub version: String,
    pub codename: String,
    pub package_manager: PackageManager,
}

/// Memory figures from `/proc/meminfo`, all in KiB.
///
/// `used` and `swap_used` are derived at collection time
/// (`total - free - cached` and `swap_total - swap_free`, clamped at zero
/// for abnormal meminfo content).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SystemMemory {
    pub total: u64,
    pub used: u64,
    pub free: u64,
    pub cached: u64,
    pub swap_total: u64,
    pub swap_used: u64,
}

/// Uptime figures from `/proc/uptime`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct UptimeInfo {
    pub uptime_seconds: f64,
    pub idle_seconds: f64,
}

/// Complete set of system facts gathered in a single invocation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub hostname: String,
    pub user: String,
    pub distro: DistroInfo,
    pub kernel: String,
    pub memory: SystemMemory,
    pub uptime: UptimeInfo,
    pub shell: String,
    pub cpu_count: usize,
    pub package_count: u64,
}
