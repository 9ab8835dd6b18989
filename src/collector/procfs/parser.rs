//! Parsers for `/proc` pseudo-files and distribution release data.
//!
//! These are pure functions that parse file content into structured data.
//! They are designed to be easily testable with string inputs.

/// Error type for parsing failures.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseError {
    pub message: String,
}

impl ParseError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self {
            message: msg.into(),
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Parse error: {}", self.message)
    }
}

impl std::error::Error for ParseError {}

/// Raw memory figures from `/proc/meminfo`, in KiB.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemInfo {
    pub mem_total: u64,
    pub mem_free: u64,
    pub cached: u64,
    pub swap_total: u64,
    pub swap_free: u64,
}

/// Parses `/proc/meminfo` content.
///
/// Lenient per-key: unrecognized keys are ignored and missing keys leave the
/// corresponding field at zero. This never fails for well-formed or
/// truncated input.
pub fn parse_meminfo(content: &str) -> MemInfo {
    let mut info = MemInfo::default();

    let parse_kb = |line: &str| -> u64 {
        line.split_whitespace()
            .nth(1)
            .and_then(|s| s.parse().ok())
            .unwrap_or(0)
    };

    for line in content.lines() {
        if line.starts_with("MemTotal:") {
            info.mem_total = parse_kb(line);
        } else if line.starts_with("MemFree:") {
            info.mem_free = parse_kb(line);
        } else if line.starts_with("Cached:") && !line.starts_with("SwapCached:") {
            info.cached = parse_kb(line);
        } else if line.starts_with("SwapTotal:") {
            info.swap_total = parse_kb(line);
        } else if line.starts_with("SwapFree:") {
            info.swap_free = parse_kb(line);
        }
    }

    info
}

/// Parses `/proc/uptime` content.
///
/// Expects exactly two whitespace-separated floats (uptime and cumulative
/// idle time, both in seconds); any other shape is an error.
pub fn parse_uptime(content: &str) -> Result<(f64, f64), ParseError> {
    let fields: Vec<&str> = content.split_whitespace().collect();
    if fields.len() != 2 {
        return Err(ParseError::new(format!(
            "expected 2 fields in uptime, got {}",
            fields.len()
        )));
    }

    let uptime: f64 = fields[0]
        .parse()
        .map_err(|_| ParseError::new("invalid uptime seconds"))?;
    let idle: f64 = fields[1]
        .parse()
        .map_err(|_| ParseError::new("invalid idle seconds"))?;

    Ok((uptime, idle))
}

/// Parses `/proc/version` content.
///
/// The version string is the third whitespace-separated token
/// ("Linux version 6.8.0-45-generic ...").
pub fn parse_kernel_version(content: &str) -> Result<String, ParseError> {
    content
        .split_whitespace()
        .nth(2)
        .map(str::to_string)
        .ok_or_else(|| ParseError::new("unable to parse kernel version"))
}

/// Distribution identity fields shared by both resolution tiers.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DistroFields {
    pub name: String,
    pub version: String,
    pub codename: String,
}

/// Parses `/etc/os-release` content (`KEY=VALUE` lines, values optionally
/// double-quoted).
///
/// Malformed lines are skipped; zero recognized keys still yields a
/// (fully defaulted) result.
pub fn parse_os_release(content: &str) -> DistroFields {
    let mut fields = DistroFields::default();

    for line in content.lines() {
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let value = value.trim_matches('"');
        match key {
            "NAME" => fields.name = value.to_string(),
            "VERSION_ID" => fields.version = value.to_string(),
            "VERSION_CODENAME" => fields.codename = value.to_string(),
            _ => {}
        }
    }

    fields
}

/// Parses `lsb_release -a` output (`Key: Value` colon-separated lines).
pub fn parse_lsb_release(output: &str) -> DistroFields {
    let mut fields = DistroFields::default();

    for line in output.lines() {
        let Some((key, value)) = line.split_once(':') else {
            continue;
        };
        let value = value.trim();
        match key.trim() {
            "Distributor ID" => fields.name = value.to_string(),
            "Release" => fields.version = value.to_string(),
            "Codename" => fields.codename = value.to_string(),
            _ => {}
        }
    }

    fields
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_meminfo() {
        let content = "\
MemTotal:       16384000 kB
MemFree:         8192000 kB
MemAvailable:   12000000 kB
Buffers:          512000 kB
Cached:          2048000 kB
SwapCached:            0 kB
SwapTotal:       4096000 kB
SwapFree:        4096000 kB
";
        let info = parse_meminfo(content);

        assert_eq!(info.mem_total, 16384000);
        assert_eq!(info.mem_free, 8192000);
        assert_eq!(info.cached, 2048000);
        assert_eq!(info.swap_total, 4096000);
        assert_eq!(info.swap_free, 4096000);
    }

    #[test]
    fn test_parse_meminfo_swap_cached_does_not_shadow_cached() {
        let content = "\
SwapCached:       123456 kB
Cached:          2048000 kB
";
        let info = parse_meminfo(content);
        assert_eq!(info.cached, 2048000);
    }

    #[test]
    fn test_parse_meminfo_missing_keys_default_to_zero() {
        let content = "MemTotal:       1000 kB\n";
        let info = parse_meminfo(content);

        assert_eq!(info.mem_total, 1000);
        assert_eq!(info.mem_free, 0);
        assert_eq!(info.cached, 0);
        assert_eq!(info.swap_total, 0);
    }

    #[test]
    fn test_parse_meminfo_empty_content() {
        assert_eq!(parse_meminfo(""), MemInfo::default());
    }

    #[test]
    fn test_parse_uptime() {
        let (uptime, idle) = parse_uptime("12345.67 6789.01\n").unwrap();
        assert!((uptime - 12345.67).abs() < 0.001);
        assert!((idle - 6789.01).abs() < 0.001);
    }

    #[test]
    fn test_parse_uptime_wrong_field_count() {
        assert!(parse_uptime("12345.67\n").is_err());
        assert!(parse_uptime("1.0 2.0 3.0\n").is_err());
        assert!(parse_uptime("").is_err());
    }

    #[test]
    fn test_parse_uptime_non_numeric() {
        assert!(parse_uptime("abc def\n").is_err());
    }

    #[test]
    fn test_parse_kernel_version() {
        let content = "Linux version 6.8.0-45-generic (buildd@lcy02-amd64-078) #45-Ubuntu SMP\n";
        assert_eq!(parse_kernel_version(content).unwrap(), "6.8.0-45-generic");
    }

    #[test]
    fn test_parse_kernel_version_too_few_tokens() {
        let err = parse_kernel_version("Linux version\n").unwrap_err();
        assert!(err.message.contains("kernel version"));
    }

    #[test]
    fn test_parse_os_release() {
        let content = "\
NAME=\"Ubuntu\"
VERSION=\"24.04.1 LTS (Noble Numbat)\"
VERSION_ID=\"24.04\"
VERSION_CODENAME=noble
ID=ubuntu
";
        let fields = parse_os_release(content);

        assert_eq!(fields.name, "Ubuntu");
        assert_eq!(fields.version, "24.04");
        assert_eq!(fields.codename, "noble");
    }

    #[test]
    fn test_parse_os_release_skips_malformed_lines() {
        let content = "garbage line without equals\nNAME=Arch Linux\n";
        let fields = parse_os_release(content);
        assert_eq!(fields.name, "Arch Linux");
    }

    #[test]
    fn test_parse_os_release_empty_content() {
        assert_eq!(parse_os_release(""), DistroFields::default());
    }

    #[test]
    fn test_parse_lsb_release() {
        let output = "\
Distributor ID:\tDebian
Description:\tDebian GNU/Linux 12 (bookworm)
Release:\t12
Codename:\tbookworm
";
        let fields = parse_lsb_release(output);

        assert_eq!(fields.name, "Debian");
        assert_eq!(fields.version, "12");
        assert_eq!(fields.codename, "bookworm");
    }
}
