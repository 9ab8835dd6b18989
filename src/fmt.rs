//! Human-readable formatting helpers.

/// Formats an uptime in seconds as `"1d 2h 3m"`, omitting larger units
/// when they are zero.
///
/// Decomposition is floor-based: `12345.67` seconds renders as `"3h 25m"`.
pub fn format_uptime(secs: f64) -> String {
    let total = secs.max(0.0) as u64;
    let days = total / 86400;
    let hours = (total % 86400) / 3600;
    let minutes = (total % 3600) / 60;

    if days > 0 {
        format!("{}d {}h {}m", days, hours, minutes)
    } else if hours > 0 {
        format!("{}h {}m", hours, minutes)
    } else {
        format!("{}m", minutes)
    }
}

/// Formats a KiB quantity (as exposed by `/proc/meminfo`) as gigabytes.
pub fn format_kib_gb(kib: u64) -> String {
    format!("{:.1} GB", kib as f64 / (1024.0 * 1024.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_uptime_hours_minutes() {
        assert_eq!(format_uptime(12345.67), "3h 25m");
    }

    #[test]
    fn test_format_uptime_minutes_only() {
        assert_eq!(format_uptime(59.9), "0m");
        assert_eq!(format_uptime(125.0), "2m");
    }

    #[test]
    fn test_format_uptime_days() {
        // 2 days, 3 hours, 4 minutes
        assert_eq!(format_uptime((2 * 86400 + 3 * 3600 + 4 * 60) as f64), "2d 3h 4m");
    }

    #[test]
    fn test_format_uptime_omits_zero_days_not_minutes() {
        assert_eq!(format_uptime(3600.0), "1h 0m");
    }

    #[test]
    fn test_format_kib_gb() {
        assert_eq!(format_kib_gb(16384000), "15.6 GB");
        assert_eq!(format_kib_gb(0), "0.0 GB");
    }
}
