//! Scripted subprocess mock for testing without external tools.

use std::collections::{HashMap, HashSet};
use std::io;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use crate::collector::traits::CommandRunner;

/// Scripted command runner for testing.
///
/// Programs must be explicitly "installed" to resolve on the search path,
/// and runs return pre-scripted stdout. Clones share the invocation log, so
/// tests can hand a clone to a collector and still observe which programs
/// were run.
#[derive(Debug, Clone, Default)]
pub struct MockRunner {
    installed: HashSet<String>,
    outputs: HashMap<String, String>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MockRunner {
    /// Creates a new mock with nothing installed and nothing scripted.
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes a program resolvable on the mock search path.
    pub fn install(&mut self, program: &str) {
        self.installed.insert(program.to_string());
    }

    /// Scripts the stdout a program produces when run.
    pub fn on_run(&mut self, program: &str, stdout: &str) {
        self.outputs.insert(program.to_string(), stdout.to_string());
    }

    /// Returns the programs run so far, in invocation order.
    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().map(|c| c.clone()).unwrap_or_default()
    }
}

impl CommandRunner for MockRunner {
    fn run(&self, program: &str, _args: &[&str]) -> io::Result<String> {
        if let Ok(mut calls) = self.calls.lock() {
            calls.push(program.to_string());
        }
        self.outputs.get(program).cloned().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                format!("mock command not scripted: {}", program),
            )
        })
    }

    fn lookup(&self, program: &str) -> Option<PathBuf> {
        if self.installed.contains(program) {
            Some(PathBuf::from("/usr/bin").join(program))
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_only_installed() {
        let mut runner = MockRunner::new();
        runner.install("apt");

        assert!(runner.lookup("apt").is_some());
        assert!(runner.lookup("dnf").is_none());
    }

    #[test]
    fn test_run_scripted_output() {
        let mut runner = MockRunner::new();
        runner.on_run("dpkg", "bash\nvim\n");

        assert_eq!(runner.run("dpkg", &[]).unwrap(), "bash\nvim\n");
        assert!(runner.run("rpm", &[]).is_err());
    }

    #[test]
    fn test_clones_share_call_log() {
        let runner = MockRunner::new();
        let clone = runner.clone();
        let _ = clone.run("lsb_release", &["-a"]);

        assert_eq!(runner.calls(), vec!["lsb_release".to_string()]);
    }
}
