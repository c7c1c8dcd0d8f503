//! Common test utilities for termux-setup integration tests

use std::path::PathBuf;

use assert_cmd::Command;
use tempfile::TempDir;

/// Registry with a three-step chain: a, b (needs a), c (needs b), plus standalone d
#[allow(dead_code)]
pub const CHAIN_REGISTRY: &str = r"
components:
  - id: a
    name: Alpha
    description: First step
    estimated_time: 1 second
    script: a.sh
  - id: b
    name: Bravo
    script: b.sh
    dependencies: [a]
  - id: c
    name: Charlie
    script: c.sh
    dependencies: [b]
  - id: d
    name: Delta
    script: d.sh
    standalone: true
";

/// A test workspace with a scripts directory and a run log
pub struct TestWorkspace {
    /// Temporary directory
    #[allow(dead_code)]
    pub temp: TempDir,
    /// Path to workspace root
    pub path: PathBuf,
}

impl TestWorkspace {
    /// Create a new test workspace
    pub fn new() -> Self {
        let temp = TempDir::new().expect("Failed to create temp directory");
        let path = temp.path().to_path_buf();
        std::fs::create_dir_all(path.join("scripts")).expect("Failed to create scripts directory");
        Self { temp, path }
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.path.join("scripts")
    }

    /// Write a script into the scripts directory
    #[allow(dead_code)]
    pub fn write_script(&self, name: &str, body: &str) {
        std::fs::write(self.scripts_dir().join(name), body).expect("Failed to write script");
    }

    /// Script that appends its id to `run.log` and exits with `code`
    #[allow(dead_code)]
    pub fn logging_script(&self, id: &str, code: i32) {
        self.write_script(
            &format!("{id}.sh"),
            &format!("echo {id} >> ../run.log\nexit {code}\n"),
        );
    }

    /// Lines of `run.log`, in execution order
    #[allow(dead_code)]
    pub fn run_log(&self) -> Vec<String> {
        std::fs::read_to_string(self.path.join("run.log"))
            .unwrap_or_default()
            .lines()
            .map(str::to_string)
            .collect()
    }

    /// Write a registry file and return its path
    #[allow(dead_code)]
    pub fn write_registry(&self, content: &str) -> PathBuf {
        let path = self.path.join("registry.yaml");
        std::fs::write(&path, content).expect("Failed to write registry");
        path
    }

    /// Check if a file exists in workspace
    #[allow(dead_code)]
    pub fn file_exists(&self, path: &str) -> bool {
        self.path.join(path).exists()
    }

    /// termux-setup command isolated from the caller's environment
    #[allow(deprecated)]
    pub fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("termux-setup").expect("binary is built");
        cmd.current_dir(&self.path)
            .env_remove("TERMUX_SETUP_REGISTRY")
            .env_remove("TERMUX_SETUP_LOG")
            .env("TERMUX_SETUP_SCRIPTS_DIR", self.scripts_dir())
            .env("NO_COLOR", "1");
        cmd
    }
}

impl Default for TestWorkspace {
    fn default() -> Self {
        Self::new()
    }
}
