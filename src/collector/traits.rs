//! Abstractions for filesystem and subprocess access to enable testing.
//!
//! The `FileSystem` trait lets collectors read the real `/proc` on Linux or
//! an in-memory mock in tests; `CommandRunner` does the same for external
//! tools (`lsb_release`, `dpkg`, `rpm`, ...).

use std::io;
use std::path::{Path, PathBuf};

/// Abstraction for read-only filesystem access.
pub trait FileSystem: Send + Sync {
    /// Reads the entire contents of a file as a string.
    fn read_to_string(&self, path: &Path) -> io::Result<String>;
}

/// Real filesystem implementation that delegates to `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealFs;

impl RealFs {
    /// Creates a new `RealFs` instance.
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for RealFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        std::fs::read_to_string(path)
    }
}

/// Abstraction for invoking external tools.
///
/// Every invocation is blocking and attempted exactly once; there is no
/// timeout, so a hung tool blocks the whole snapshot.
pub trait CommandRunner: Send + Sync {
    /// Runs a program and returns its captured stdout.
    ///
    /// A non-zero exit status is reported as an error.
    fn run(&self, program: &str, args: &[&str]) -> io::Result<String>;

    /// Resolves a program name on the executable search path.
    fn lookup(&self, program: &str) -> Option<PathBuf>;
}

/// Real subprocess implementation built on `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RealRunner;

impl RealRunner {
    /// Creates a new `RealRunner` instance.
    pub fn new() -> Self {
        Self
    }
}

impl CommandRunner for RealRunner {
    fn run(&self, program: &str, args: &[&str]) -> io::Result<String> {
        let output = std::process::Command::new(program).args(args).output()?;
        if !output.status.success() {
            return Err(io::Error::other(format!(
                "{} exited with {}",
                program, output.status
            )));
        }
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn lookup(&self, program: &str) -> Option<PathBuf> {
        let path = std::env::var_os("PATH")?;
        for dir in std::env::split_paths(&path) {
            let candidate = dir.join(program);
            if is_executable(&candidate) {
                return Some(candidate);
            }
        }
        None
    }
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    std::fs::metadata(path)
        .map(|m| m.is_file() && m.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
