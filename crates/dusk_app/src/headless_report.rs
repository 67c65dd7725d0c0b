//! Report output model for headless toggle runs.

use crate::render::FrameSample;
use anyhow::{bail, Result};
use serde::Serialize;
use std::io::Write;
use std::path::{Component, Path};

/// Report status for a headless run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Passed,
    Failed,
}

/// Machine-readable result of a headless run.
#[derive(Debug, Clone, Serialize)]
pub struct HeadlessReport {
    pub status: ReportStatus,
    pub failed_step_index: Option<usize>,
    pub assertion: Option<String>,
    pub code: Option<String>,
    pub message: Option<String>,
    pub elapsed_frames: u64,
    pub elapsed_ms: u64,
    pub toggles: u64,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub samples: Vec<FrameSample>,
}

impl HeadlessReport {
    pub fn passed(elapsed_frames: u64, elapsed_ms: u64, toggles: u64) -> Self {
        Self {
            status: ReportStatus::Passed,
            failed_step_index: None,
            assertion: None,
            code: None,
            message: None,
            elapsed_frames,
            elapsed_ms,
            toggles,
            samples: Vec::new(),
        }
    }

    pub fn failed(
        assertion: &str,
        failed_step_index: usize,
        code: String,
        message: String,
        elapsed_frames: u64,
        elapsed_ms: u64,
        toggles: u64,
    ) -> Self {
        Self {
            status: ReportStatus::Failed,
            failed_step_index: Some(failed_step_index),
            assertion: Some(assertion.to_string()),
            code: Some(code),
            message: Some(message),
            elapsed_frames,
            elapsed_ms,
            toggles,
            samples: Vec::new(),
        }
    }

    pub fn with_samples(mut self, samples: Vec<FrameSample>) -> Self {
        self.samples = samples;
        self
    }

    pub fn write_to_path(&self, path: &Path) -> Result<()> {
        if path.is_absolute() || path.has_root() {
            bail!("report path must be relative and must not start with a separator");
        }
        if path
            .components()
            .any(|c| matches!(c, Component::ParentDir | Component::Prefix(_)))
        {
            bail!("report path cannot contain '..' or drive prefixes");
        }
        let payload = serde_json::to_string_pretty(self)?;
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(path, payload)?;
        Ok(())
    }

    pub fn write_to_writer<W: Write>(&self, writer: &mut W) -> Result<()> {
        let payload = serde_json::to_string_pretty(self)?;
        writer.write_all(payload.as_bytes())?;
        writer.write_all(b"\n")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_passed_report_json_shape() {
        let report = HeadlessReport::passed(38, 608, 1);
        let mut out = Vec::new();
        report.write_to_writer(&mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["status"], "passed");
        assert_eq!(json["elapsed_frames"], 38);
        assert_eq!(json["toggles"], 1);
        assert!(json.get("samples").is_none());
    }

    #[test]
    fn test_writes_failed_report_to_relative_path() {
        let dir = Path::new("target/dusk-report-test");
        let path = dir.join("nested/report.json");
        let report = HeadlessReport::failed(
            "assert_active",
            2,
            "active_mismatch".to_string(),
            "expected is_active=false, got true".to_string(),
            2,
            32,
            1,
        );

        report.write_to_path(&path).unwrap();
        let written = std::fs::read_to_string(&path).unwrap();
        std::fs::remove_dir_all(dir).unwrap();

        let json: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(json["status"], "failed");
        assert_eq!(json["failed_step_index"], 2);
        assert_eq!(json["code"], "active_mismatch");
        assert_eq!(json["elapsed_ms"], 32);
    }

    #[test]
    fn test_rejects_escaping_paths() {
        let report = HeadlessReport::passed(0, 0, 0);
        assert!(report.write_to_path(Path::new("/tmp/report.json")).is_err());
        assert!(report.write_to_path(Path::new("../report.json")).is_err());
    }
}
