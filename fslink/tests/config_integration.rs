//! Integration tests for configuration discovery, merging and environment
//! overrides.
//!
//! Tests that modify environment variables are marked `#[serial]`.

use serial_test::serial;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use fslink::config::environment::{LINK_POLICY_ENV, OUTPUT_FORMAT_ENV};
use fslink::config::{Config, ConfigBuilder};
use fslink::error::Error;
use fslink::output::OutputFormat;
use fslink::path::LinkTargetPolicy;

fn create_temp_config(dir: &Path, filename: &str, content: &str) -> PathBuf {
    let path = dir.join(filename);
    fs::write(&path, content).unwrap();
    path
}

/// RAII guard for setting and restoring environment variables.
struct EnvGuard {
    key: String,
    old_value: Option<String>,
}

impl EnvGuard {
    fn new(key: &str, value: &str) -> Self {
        let old_value = env::var(key).ok();
        env::set_var(key, value);
        Self {
            key: key.to_string(),
            old_value,
        }
    }

    fn remove(key: &str) -> Self {
        let old_value = env::var(key).ok();
        env::remove_var(key);
        Self {
            key: key.to_string(),
            old_value,
        }
    }
}

impl Drop for EnvGuard {
    fn drop(&mut self) {
        match &self.old_value {
            Some(v) => env::set_var(&self.key, v),
            None => env::remove_var(&self.key),
        }
    }
}

/// A project directory plus an empty user directory.
struct Layout {
    user: TempDir,
    project: TempDir,
}

impl Layout {
    fn new() -> Self {
        Self {
            user: TempDir::new().unwrap(),
            project: TempDir::new().unwrap(),
        }
    }

    fn builder(&self) -> ConfigBuilder {
        ConfigBuilder::new()
            .with_user_dir(self.user.path())
            .with_working_dir(self.project.path())
    }
}

#[test]
#[serial]
fn test_project_overrides_user() {
    let _p = EnvGuard::remove(LINK_POLICY_ENV);
    let _f = EnvGuard::remove(OUTPUT_FORMAT_ENV);
    let layout = Layout::new();
    create_temp_config(
        layout.user.path(),
        "config.yaml",
        "link_policy: contained\noutput_format: json\n",
    );
    create_temp_config(layout.project.path(), "fslink.yaml", "link_policy: relative\n");

    let config = layout.builder().build().unwrap();
    assert_eq!(config.link_policy(), LinkTargetPolicy::Relative);
    assert_eq!(config.output_format(), OutputFormat::Json);
}

#[test]
#[serial]
fn test_project_config_found_from_subdirectory() {
    let _p = EnvGuard::remove(LINK_POLICY_ENV);
    let layout = Layout::new();
    create_temp_config(layout.project.path(), "fslink.yaml", "link_policy: contained\n");
    let nested = layout.project.path().join("deep/er");
    fs::create_dir_all(&nested).unwrap();

    let config = ConfigBuilder::new()
        .with_user_dir(layout.user.path())
        .with_working_dir(&nested)
        .build()
        .unwrap();
    assert_eq!(config.link_policy(), LinkTargetPolicy::Contained);
}

#[test]
#[serial]
fn test_env_overrides_files() {
    let _p = EnvGuard::new(LINK_POLICY_ENV, "relative");
    let _f = EnvGuard::new(OUTPUT_FORMAT_ENV, "TEXT");
    let layout = Layout::new();
    create_temp_config(
        layout.project.path(),
        "fslink.yaml",
        "link_policy: contained\noutput_format: json\n",
    );

    let config = layout.builder().build().unwrap();
    assert_eq!(config.link_policy(), LinkTargetPolicy::Relative);
    assert_eq!(config.output_format(), OutputFormat::Text);
}

#[test]
#[serial]
fn test_programmatic_overrides_env() {
    let _p = EnvGuard::new(LINK_POLICY_ENV, "relative");
    let layout = Layout::new();

    let config = layout
        .builder()
        .with_config(Config {
            link_policy: Some(LinkTargetPolicy::Contained),
            output_format: None,
        })
        .build()
        .unwrap();
    assert_eq!(config.link_policy(), LinkTargetPolicy::Contained);
}

#[test]
#[serial]
fn test_skip_env_ignores_variables() {
    let _p = EnvGuard::new(LINK_POLICY_ENV, "not-a-policy");
    let config = ConfigBuilder::new().skip_files().skip_env().build().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
#[serial]
fn test_invalid_env_value_is_validation_error() {
    let _p = EnvGuard::remove(LINK_POLICY_ENV);
    let _f = EnvGuard::new(OUTPUT_FORMAT_ENV, "xml");
    let err = ConfigBuilder::new().skip_files().build().unwrap_err();
    match err {
        Error::Validation { field, message } => {
            assert_eq!(field, OUTPUT_FORMAT_ENV);
            assert!(message.contains("xml"));
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_unknown_key_is_configuration_error() {
    let layout = Layout::new();
    create_temp_config(layout.project.path(), "fslink.yaml", "follow_links: true\n");
    let err = layout.builder().skip_env().build().unwrap_err();
    assert!(matches!(err, Error::Configuration(_)));
    assert!(err.to_string().starts_with("configuration error"));
}

#[test]
fn test_skip_files_ignores_broken_file() {
    let layout = Layout::new();
    create_temp_config(layout.project.path(), "fslink.yaml", ": : :\n");
    let config = layout.builder().skip_files().skip_env().build().unwrap();
    assert_eq!(config, Config::default());
}
