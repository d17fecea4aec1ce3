use crate::report::model::LinkReport;
use anyhow::Context;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Renders a `LinkReport` as text or JSON and optionally appends it to a log file.
pub struct ReportWriter {
    path: Option<PathBuf>,
}

impl ReportWriter {
    pub fn new(path: Option<PathBuf>) -> Self {
        Self { path }
    }

    pub fn summary(&self, report: &LinkReport) -> String {
        report.to_string()
    }

    pub fn to_json(&self, report: &LinkReport) -> anyhow::Result<String> {
        serde_json::to_string_pretty(report).context("serializing link report")
    }

    /// Appends the report as one JSON line when a path was configured.
    pub fn append(&self, report: &LinkReport) -> anyhow::Result<()> {
        let Some(path) = self.path.as_deref() else {
            return Ok(());
        };
        append_line(path, report)
    }
}

fn append_line(path: &Path, report: &LinkReport) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating report directory {}", parent.display()))?;
    }
    let mut line = serde_json::to_string(report).context("serializing link report")?;
    line.push('\n');

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening report {}", path.display()))?;
    file.write_all(line.as_bytes())
        .with_context(|| format!("writing report {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::model::GratingLobe;
    use tempfile::tempdir;

    fn sample_report() -> LinkReport {
        LinkReport {
            scenario: Some("unit".into()),
            wavelength: 0.1,
            spacing_safe: false,
            grating_lobes: vec![
                GratingLobe::from_angle(-1, -0.5),
                GratingLobe::from_angle(2, f64::NAN),
            ],
            received_power: f64::INFINITY,
            ..Default::default()
        }
    }

    #[test]
    fn summary_lists_only_visible_lobes() {
        let writer = ReportWriter::new(None);
        let text = writer.summary(&sample_report());
        assert!(text.starts_with("scenario unit"));
        assert!(text.contains("m=-1"));
        assert!(!text.contains("m=2"));
        assert!(!text.contains("pattern"));
    }

    #[test]
    fn non_finite_values_serialize_as_null() {
        let writer = ReportWriter::new(None);
        let json = writer.to_json(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert!(value["received_power"].is_null());
        assert!(value["grating_lobes"][1]["angle_rad"].is_null());
    }

    #[test]
    fn append_writes_one_line_per_report() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested").join("reports.jsonl");
        let writer = ReportWriter::new(Some(path.clone()));
        writer.append(&sample_report()).unwrap();
        writer.append(&sample_report()).unwrap();

        let contents = fs::read_to_string(&path).unwrap();
        assert_eq!(contents.lines().count(), 2);
    }

    #[test]
    fn append_without_path_is_a_no_op() {
        let writer = ReportWriter::new(None);
        assert!(writer.append(&sample_report()).is_ok());
    }
}
