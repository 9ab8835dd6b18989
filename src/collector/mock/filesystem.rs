//! In-memory mock filesystem for testing collectors without real `/proc`.

use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};

use crate::collector::traits::FileSystem;

/// In-memory filesystem for testing.
///
/// Stores file contents by path, allowing tests to simulate various `/proc`
/// and `/etc` states without actual Linux access.
#[derive(Debug, Clone, Default)]
pub struct MockFs {
    files: HashMap<PathBuf, String>,
}

impl MockFs {
    /// Creates a new empty mock filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a file with the given content.
    pub fn add_file(&mut self, path: impl AsRef<Path>, content: impl Into<String>) {
        self.files
            .insert(path.as_ref().to_path_buf(), content.into());
    }
}

impl FileSystem for MockFs {
    fn read_to_string(&self, path: &Path) -> io::Result<String> {
        self.files.get(path).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("mock file not found: {}", path.display()),
            )
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_read_existing_file() {
        let mut fs = MockFs::new();
        fs.add_file("/proc/uptime", "1.0 2.0\n");

        assert_eq!(
            fs.read_to_string(Path::new("/proc/uptime")).unwrap(),
            "1.0 2.0\n"
        );
    }

    #[test]
    fn test_read_missing_file_is_not_found() {
        let fs = MockFs::new();
        let err = fs.read_to_string(Path::new("/proc/uptime")).unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::NotFound);
    }
}
