//! ANSI-colored table rendering for snapshots and disk usage.

use std::fmt::Write as _;

use crossterm::style::Stylize;

use crate::fmt::{format_kib_gb, format_uptime};
use crate::model::Snapshot;

const SEPARATOR_WIDTH: usize = 40;

/// Renders a snapshot as a colored summary table.
pub fn format_snapshot(snapshot: &Snapshot) -> String {
    let mut out = String::new();
    let separator = "─".repeat(SEPARATOR_WIDTH);

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        format!("{}@{}", snapshot.user, snapshot.hostname)
            .cyan()
            .bold()
    );
    let _ = writeln!(out, "{}", separator.as_str().cyan().bold());

    let os = format!("{} {}", snapshot.distro.name, snapshot.distro.version);
    row(&mut out, "OS", os.trim());
    row(&mut out, "Kernel", &snapshot.kernel);
    row(
        &mut out,
        "Uptime",
        &format_uptime(snapshot.uptime.uptime_seconds),
    );
    row(&mut out, "Shell", &snapshot.shell);
    row(&mut out, "CPU", &format!("{} cores", snapshot.cpu_count));
    row(
        &mut out,
        "Memory",
        &format!(
            "{} / {}",
            format_kib_gb(snapshot.memory.used),
            format_kib_gb(snapshot.memory.total)
        ),
    );
    row(
        &mut out,
        "Packages",
        &format!(
            "{} ({})",
            snapshot.package_count, snapshot.distro.package_manager
        ),
    );

    let _ = writeln!(out, "{}", separator.as_str().cyan().bold());
    out
}

fn row(out: &mut String, label: &str, value: &str) {
    let _ = writeln!(
        out,
        "{} │ {}",
        format!("{:<9}", label).cyan().bold(),
        value.white().bold()
    );
}

/// Prefixes of pseudo-filesystems hidden from the disk table.
const HIDDEN_FS_PREFIXES: [&str; 4] = ["tmpfs", "dev", "run", "efivarfs"];

/// Renders `df -h` output as a colored table of real filesystems.
///
/// Header and pseudo-filesystem rows are dropped, device paths are reduced
/// to their last segment. Input with fewer than two lines is passed through
/// unchanged.
pub fn format_disk_table(df_output: &str) -> String {
    let lines: Vec<&str> = df_output.lines().collect();
    if lines.len() < 2 {
        return df_output.to_string();
    }

    let mut out = String::new();
    let separator = "─".repeat(60);

    let _ = writeln!(out);
    let _ = writeln!(out, "{}", separator.as_str().cyan().bold());
    let _ = writeln!(out, "{}", "Disk Usage Information".cyan().bold());
    let _ = writeln!(out, "{}", separator.as_str().cyan().bold());
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{}",
        format!(
            "{:<15} {:<10} {:<10} {:<8}",
            "Filesystem", "Size", "Used", "Use%"
        )
        .yellow()
        .bold()
    );
    let _ = writeln!(out, "{}", "─".repeat(45).as_str().cyan().bold());

    for line in &lines[1..] {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 5 {
            continue;
        }
        if HIDDEN_FS_PREFIXES
            .iter()
            .any(|prefix| fields[0].starts_with(prefix))
        {
            continue;
        }

        let device = fields[0].rsplit('/').next().unwrap_or(fields[0]);
        let _ = writeln!(
            out,
            "{}",
            format!(
                "{:<15} {:<10} {:<10} {:<8}",
                device, fields[1], fields[2], fields[4]
            )
            .white()
            .bold()
        );
    }

    out.push('\n');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{DistroInfo, PackageManager, SystemMemory, UptimeInfo};

    fn sample_snapshot() -> Snapshot {
        Snapshot {
            hostname: "testhost".to_string(),
            user: "user".to_string(),
            distro: DistroInfo {
                name: "Ubuntu".to_string(),
                version: "24.04".to_string(),
                codename: "noble".to_string(),
                package_manager: PackageManager::Apt,
            },
            kernel: "6.8.0-45-generic".to_string(),
            memory: SystemMemory {
                total: 16384000,
                used: 6144000,
                free: 8192000,
                cached: 2048000,
                swap_total: 4096000,
                swap_used: 0,
            },
            uptime: UptimeInfo {
                uptime_seconds: 12345.67,
                idle_seconds: 98765.43,
            },
            shell: "zsh".to_string(),
            cpu_count: 8,
            package_count: 1234,
        }
    }

    #[test]
    fn test_format_snapshot_contains_facts() {
        let rendered = format_snapshot(&sample_snapshot());

        assert!(rendered.contains("user@testhost"));
        assert!(rendered.contains("Ubuntu 24.04"));
        assert!(rendered.contains("6.8.0-45-generic"));
        assert!(rendered.contains("3h 25m"));
        assert!(rendered.contains("8 cores"));
        assert!(rendered.contains("5.9 GB / 15.6 GB"));
        assert!(rendered.contains("1234 (apt)"));
    }

    #[test]
    fn test_format_disk_table_filters_pseudo_filesystems() {
        let df = "\
Filesystem      Size  Used Avail Use% Mounted on
/dev/sda1       100G   40G   55G  42% /
tmpfs           7.8G  1.2M  7.8G   1% /run
efivarfs        128K   50K   74K  41% /sys/firmware/efi/efivars
/dev/nvme0n1p2  500G  200G  275G  41% /home
";
        let table = format_disk_table(df);

        assert!(table.contains("sda1"));
        assert!(table.contains("nvme0n1p2"));
        assert!(table.contains("42%"));
        assert!(!table.contains("tmpfs"));
        assert!(!table.contains("efivarfs"));
    }

    #[test]
    fn test_format_disk_table_short_input_passthrough() {
        assert_eq!(format_disk_table("whatever"), "whatever");
    }
}
