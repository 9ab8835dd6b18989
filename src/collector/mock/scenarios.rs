//! Pre-built mock scenarios for testing.
//!
//! These provide realistic filesystem and subprocess states so tests don't
//! repeat the same fixture content.

use super::filesystem::MockFs;
use super::runner::MockRunner;

impl MockFs {
    /// A typical Ubuntu system: populated `/proc` files and os-release.
    pub fn typical_system() -> Self {
        let mut fs = Self::new();

        fs.add_file("/proc/sys/kernel/hostname", "testhost\n");
        fs.add_file("/proc/uptime", "12345.67 98765.43\n");
        fs.add_file(
            "/proc/version",
            "Linux version 6.8.0-45-generic (buildd@lcy02-amd64-078) \
             (x86_64-linux-gnu-gcc-13) #45-Ubuntu SMP PREEMPT_DYNAMIC\n",
        );
        fs.add_file(
            "/proc/meminfo",
            "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
",
        );
        fs.add_file(
            "/etc/os-release",
            "\
NAME=\"Ubuntu\"
VERSION=\"24.04.1 LTS (Noble Numbat)\"
VERSION_ID=\"24.04\"
VERSION_CODENAME=noble
ID=ubuntu
",
        );

        fs
    }
}

impl MockRunner {
    /// An apt-based system with three dpkg selections.
    pub fn apt_system() -> Self {
        let mut runner = Self::new();
        runner.install("apt");
        runner.on_run(
            "dpkg",
            "bash\t\t\tinstall\ncoreutils\t\tinstall\nvim\t\t\tinstall\n",
        );
        runner
    }

    /// A pacman-based system with two installed packages.
    pub fn pacman_system() -> Self {
        let mut runner = Self::new();
        runner.install("pacman");
        runner.on_run("pacman", "bash 5.2.026-2\nlinux 6.10.10-1\n");
        runner
    }
}
