//! Common test utilities for CLI integration tests.
//!
//! Every command runs with `HOME` and the working directory pointed into a
//! temporary directory, so no user or project configuration leaks in.

use assert_cmd::Command;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Test environment with an isolated home, working directory and tree.
pub struct TestEnv {
    /// Temporary directory (kept alive for the duration of the test)
    #[allow(dead_code)]
    temp_dir: TempDir,
    /// Directory served as `--root`
    pub root: PathBuf,
    /// Stand-in home directory
    pub home: PathBuf,
    /// Working directory commands run in
    pub work: PathBuf,
}

#[allow(dead_code)]
impl TestEnv {
    /// Create an empty environment.
    pub fn new() -> Self {
        let temp_dir = tempfile::tempdir().expect("Failed to create temp dir");
        let base = temp_dir.path().to_path_buf();
        let env = Self {
            root: base.join("root"),
            home: base.join("home"),
            work: base.join("work"),
            temp_dir,
        };
        for dir in [&env.root, &env.home, &env.work] {
            std::fs::create_dir_all(dir).expect("Failed to create test directory");
        }
        env
    }

    /// Create an environment whose root holds a small release layout:
    ///
    /// ```text
    /// index.html
    /// current -> releases/v2
    /// releases/v1/app
    /// releases/v2/app
    /// releases/v2/shared -> ../../shared
    /// shared/data
    /// bad -> /etc/passwd
    /// ```
    #[cfg(unix)]
    pub fn with_site() -> Self {
        let env = Self::new();
        env.write("index.html", "<html>");
        env.write("releases/v1/app", "v1");
        env.write("releases/v2/app", "v2");
        env.write("shared/data", "shared");
        env.symlink("releases/v2", "current");
        env.symlink("../../shared", "releases/v2/shared");
        env.symlink("/etc/passwd", "bad");
        env
    }

    /// A command with the isolated environment but no flags.
    pub fn command_bare(&self) -> Command {
        let mut cmd = Command::cargo_bin("fslink").expect("Failed to find fslink binary");
        cmd.current_dir(&self.work)
            .env("HOME", &self.home)
            .env_remove("FSLINK_ROOT")
            .env_remove("FSLINK_LINK_POLICY")
            .env_remove("FSLINK_OUTPUT_FORMAT")
            .env_remove("FSLINK_LOG_MODE");
        cmd
    }

    /// A command with `--root` set to this environment's root.
    pub fn command(&self) -> Command {
        let mut cmd = self.command_bare();
        cmd.arg("--root").arg(&self.root);
        cmd
    }

    /// Write a file below the root, creating parents.
    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.root.join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent");
        }
        std::fs::write(&path, contents).expect("Failed to write file");
        path
    }

    /// Create the link `name` below the root holding `target`.
    #[cfg(unix)]
    pub fn symlink(&self, target: &str, name: &str) {
        std::os::unix::fs::symlink(target, self.root.join(name)).expect("Failed to create link");
    }

    /// Write a configuration file relative to the environment.
    pub fn write_config(&self, path: &Path, contents: &str) {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create config dir");
        }
        std::fs::write(path, contents).expect("Failed to write config");
    }

    /// Run a command and return its stdout, asserting success.
    pub fn stdout(mut cmd: Command) -> String {
        let output = cmd.output().expect("Failed to run command");
        assert!(
            output.status.success(),
            "command failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8(output.stdout).expect("Invalid UTF-8 in output")
    }
}
