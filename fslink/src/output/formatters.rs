//! Output formatter implementations.

use std::time::SystemTime;

use chrono::{DateTime, Utc};
use serde_json::{json, Value};

use super::OutputFormatter;
use crate::fs::{DirEntry, FileInfo};

fn timestamp(modified: Option<SystemTime>) -> Option<DateTime<Utc>> {
    modified.map(DateTime::<Utc>::from)
}

/// `ls -l` style output.
pub struct HumanFormatter;

impl HumanFormatter {
    fn line(name: &str, info: &FileInfo) -> String {
        let when = timestamp(info.modified()).map_or_else(
            || "-".repeat(16),
            |t| t.format("%Y-%m-%d %H:%M").to_string(),
        );
        format!("{} {:>10} {when} {name}", info.mode(), info.size())
    }
}

impl OutputFormatter for HumanFormatter {
    fn info(&self, path: &str, info: &FileInfo) -> String {
        Self::line(path, info)
    }

    fn entries(&self, entries: &[DirEntry]) -> String {
        entries
            .iter()
            .map(|e| Self::line(e.name(), e.info()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn link(&self, _path: &str, target: &str) -> String {
        target.to_string()
    }
}

/// JSON output.
pub struct JsonFormatter;

impl JsonFormatter {
    fn value(info: &FileInfo) -> Value {
        json!({
            "name": info.name(),
            "mode": info.mode().to_string(),
            "mode_bits": info.mode().bits(),
            "is_dir": info.is_dir(),
            "is_symlink": info.is_symlink(),
            "size": info.size(),
            "modified": timestamp(info.modified()).map(|t| t.to_rfc3339()),
        })
    }
}

impl OutputFormatter for JsonFormatter {
    fn info(&self, path: &str, info: &FileInfo) -> String {
        let mut value = Self::value(info);
        value["path"] = Value::from(path);
        value.to_string()
    }

    fn entries(&self, entries: &[DirEntry]) -> String {
        let values: Vec<Value> = entries.iter().map(|e| Self::value(e.info())).collect();
        Value::Array(values).to_string()
    }

    fn link(&self, path: &str, target: &str) -> String {
        json!({ "path": path, "target": target }).to_string()
    }
}
