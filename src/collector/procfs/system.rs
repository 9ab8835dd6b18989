//! System collector reading global facts from `/proc/`.

use std::path::Path;

use crate::collector::CollectError;
use crate::collector::procfs::parser::{parse_kernel_version, parse_meminfo, parse_uptime};
use crate::collector::traits::FileSystem;
use crate::model::{SystemMemory, UptimeInfo};

/// Collects system-wide facts from `/proc/`.
pub struct SystemCollector<F: FileSystem> {
    fs: F,
    proc_path: String,
}

impl<F: FileSystem> SystemCollector<F> {
    /// Creates a new system collector.
    ///
    /// # Arguments
    /// * `fs` - Filesystem implementation (real or mock)
    /// * `proc_path` - Base path to proc filesystem (usually "/proc")
    pub fn new(fs: F, proc_path: impl Into<String>) -> Self {
        Self {
            fs,
            proc_path: proc_path.into(),
        }
    }

    /// Collects memory information from `/proc/meminfo`.
    ///
    /// `used` and `swap_used` are derived here. Abnormal meminfo content
    /// (free + cached exceeding total) clamps to zero instead of wrapping.
    pub fn collect_memory(&self) -> Result<SystemMemory, CollectError> {
        let path = format!("{}/meminfo", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        let info = parse_meminfo(&content);

        Ok(SystemMemory {
            total: info.mem_total,
            used: info
                .mem_total
                .saturating_sub(info.mem_free)
                .saturating_sub(info.cached),
            free: info.mem_free,
            cached: info.cached,
            swap_total: info.swap_total,
            swap_used: info.swap_total.saturating_sub(info.swap_free),
        })
    }

    /// Collects uptime and idle time from `/proc/uptime`.
    pub fn collect_uptime(&self) -> Result<UptimeInfo, CollectError> {
        let path = format!("{}/uptime", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        let (uptime, idle) = parse_uptime(&content).map_err(|e| CollectError::Parse(e.message))?;

        Ok(UptimeInfo {
            uptime_seconds: uptime,
            idle_seconds: idle,
        })
    }

    /// Collects the kernel version string from `/proc/version`.
    pub fn collect_kernel_version(&self) -> Result<String, CollectError> {
        let path = format!("{}/version", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        parse_kernel_version(&content).map_err(|e| CollectError::Parse(e.message))
    }

    /// Collects the hostname from `/proc/sys/kernel/hostname`.
    pub fn collect_hostname(&self) -> Result<String, CollectError> {
        let path = format!("{}/sys/kernel/hostname", self.proc_path);
        let content = self.fs.read_to_string(Path::new(&path))?;
        Ok(content.trim_end().to_string())
    }
}
