//! Main collector that aggregates all system facts into a snapshot.

use std::thread;

use tracing::warn;

use crate::collector::CollectError;
use crate::collector::distro::DistroResolver;
use crate::collector::packages::count_packages;
use crate::collector::procfs::SystemCollector;
use crate::collector::traits::{CommandRunner, FileSystem};
use crate::model::Snapshot;

/// Aggregates system, distro and package facts.
///
/// Collection is strictly sequential and one-shot. Any failure in
/// hostname/distro/kernel/memory/uptime acquisition is fatal to the
/// snapshot; a package-count failure alone degrades to a zero count.
pub struct Collector<F: FileSystem + Clone, R: CommandRunner + Clone> {
    system: SystemCollector<F>,
    distro: DistroResolver<F, R>,
    runner: R,
}

impl<F: FileSystem + Clone, R: CommandRunner + Clone> Collector<F, R> {
    /// Creates a new collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `runner` - Subprocess implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    /// * `etc_path` - Base path for release files (usually "/etc")
    pub fn new(
        fs: F,
        runner: R,
        proc_path: impl Into<String>,
        etc_path: impl Into<String>,
    ) -> Self {
        Self {
            system: SystemCollector::new(fs.clone(), proc_path),
            distro: DistroResolver::new(fs, runner.clone(), etc_path),
            runner,
        }
    }

    /// Collects a complete snapshot of system facts.
    pub fn collect_snapshot(&self) -> Result<Snapshot, CollectError> {
        let hostname = self.system.collect_hostname()?;
        let distro = self.distro.resolve()?;
        let kernel = self.system.collect_kernel_version()?;
        let memory = self.system.collect_memory()?;
        let uptime = self.system.collect_uptime()?;

        // Degraded mode: an uncountable package set is not worth failing
        // the whole snapshot over.
        let package_count = match count_packages(&self.runner, distro.package_manager) {
            Ok(count) => count,
            Err(e) => {
                warn!("package count unavailable: {}", e);
                0
            }
        };

        Ok(Snapshot {
            hostname,
            user: std::env::var("USER").unwrap_or_else(|_| "unknown".to_string()),
            distro,
            kernel,
            memory,
            uptime,
            shell: shell_name(std::env::var("SHELL").ok().as_deref()),
            cpu_count: thread::available_parallelism().map(|n| n.get()).unwrap_or(1),
            package_count,
        })
    }
}

/// Derives the shell name from the `$SHELL` value: the last path segment,
/// or `"unknown"` when unset or malformed.
pub fn shell_name(shell: Option<&str>) -> String {
    shell
        .and_then(|s| s.rsplit('/').next())
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| "unknown".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::collector::mock::{MockFs, MockRunner};
    use crate::model::PackageManager;

    #[test]
    fn test_collect_snapshot() {
        let fs = MockFs::typical_system();
        let runner = MockRunner::apt_system();
        let collector = Collector::new(fs, runner, "/proc", "/etc");

        let snapshot = collector.collect_snapshot().unwrap();

        assert_eq!(snapshot.hostname, "testhost");
        assert_eq!(snapshot.distro.name, "Ubuntu");
        assert_eq!(snapshot.distro.package_manager, PackageManager::Apt);
        assert_eq!(snapshot.kernel, "6.8.0-45-generic");
        assert_eq!(snapshot.memory.total, 16384000);
        assert_eq!(snapshot.memory.used, 16384000 - 8192000 - 2048000);
        assert!((snapshot.uptime.uptime_seconds - 12345.67).abs() < 0.001);
        assert_eq!(snapshot.package_count, 3);
    }

    #[test]
    fn test_package_count_failure_degrades_to_zero() {
        let fs = MockFs::typical_system();
        let mut runner = MockRunner::new();
        runner.install("apt");
        // dpkg not scripted: counting fails, snapshot must still succeed

        let collector = Collector::new(fs, runner, "/proc", "/etc");
        let snapshot = collector.collect_snapshot().unwrap();

        assert_eq!(snapshot.package_count, 0);
    }

    #[test]
    fn test_missing_meminfo_is_fatal() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/sys/kernel/hostname", "host\n");
        fs.add_file("/proc/uptime", "1.0 2.0\n");
        fs.add_file("/proc/version", "Linux version 6.1.0 extra tokens\n");
        fs.add_file("/etc/os-release", "NAME=Test\n");

        let collector = Collector::new(fs, MockRunner::new(), "/proc", "/etc");
        assert!(collector.collect_snapshot().is_err());
    }

    #[test]
    fn test_shell_name() {
        assert_eq!(shell_name(Some("/usr/bin/zsh")), "zsh");
        assert_eq!(shell_name(Some("bash")), "bash");
        assert_eq!(shell_name(Some("/bin/")), "unknown");
        assert_eq!(shell_name(Some("")), "unknown");
        assert_eq!(shell_name(None), "unknown");
    }
}
