//! Append-only feedback log.
//!
//! Each submission becomes one CSV row. Rows are never rewritten or keyed;
//! the file only grows.

use anyhow::{Context, Result, ensure};
use catalog::CostCategory;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

/// Header written at the top of a new feedback file
pub const HEADER: &str = "city,cuisines,budget,satisfaction,relevant,comments";

/// One user's verdict on a set of recommendations
#[derive(Debug, Clone, PartialEq)]
pub struct FeedbackRecord {
    pub city: Option<String>,
    pub cuisines: Vec<String>,
    pub budget: Option<CostCategory>,
    /// 1 (poor) to 5 (great)
    pub satisfaction: u8,
    pub relevant: bool,
    pub comments: String,
}

impl FeedbackRecord {
    pub fn validate(&self) -> Result<()> {
        ensure!(
            (1..=5).contains(&self.satisfaction),
            "satisfaction must be between 1 and 5, got {}",
            self.satisfaction
        );
        Ok(())
    }

    /// Encode as a CSV row (no trailing newline)
    pub fn to_csv_row(&self) -> String {
        let fields = [
            self.city.clone().unwrap_or_default(),
            self.cuisines.join(", "),
            self.budget.map(|b| b.to_string()).unwrap_or_default(),
            self.satisfaction.to_string(),
            if self.relevant { "yes" } else { "no" }.to_string(),
            self.comments.clone(),
        ];
        fields
            .iter()
            .map(|f| escape_field(f))
            .collect::<Vec<_>>()
            .join(",")
    }
}

fn escape_field(field: &str) -> String {
    if field.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Validate `record` and append it to the log at `path`
///
/// Creates the file (with a header row) if it does not exist yet.
pub fn append_feedback(path: &Path, record: &FeedbackRecord) -> Result<()> {
    record.validate()?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("Failed to open feedback file {}", path.display()))?;
    let is_new = file
        .metadata()
        .with_context(|| format!("Failed to inspect feedback file {}", path.display()))?
        .len()
        == 0;

    if is_new {
        writeln!(file, "{HEADER}")?;
    }
    writeln!(file, "{}", record.to_csv_row())
        .with_context(|| format!("Failed to write feedback to {}", path.display()))?;
    tracing::info!("Recorded feedback in {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> FeedbackRecord {
        FeedbackRecord {
            city: Some("New Delhi".to_string()),
            cuisines: vec!["North Indian".to_string(), "Cafe".to_string()],
            budget: Some(CostCategory::Low),
            satisfaction: 4,
            relevant: true,
            comments: "Loved it, said \"again\"".to_string(),
        }
    }

    #[test]
    fn test_csv_row_escapes_fields() {
        assert_eq!(
            sample().to_csv_row(),
            r#"New Delhi,"North Indian, Cafe",low,4,yes,"Loved it, said ""again""""#
        );
    }

    #[test]
    fn test_csv_row_with_empty_fields() {
        let record = FeedbackRecord {
            city: None,
            cuisines: Vec::new(),
            budget: None,
            satisfaction: 1,
            relevant: false,
            comments: String::new(),
        };
        assert_eq!(record.to_csv_row(), ",,,1,no,");
    }

    #[test]
    fn test_satisfaction_out_of_range_is_rejected() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.csv");

        for satisfaction in [0, 6] {
            let record = FeedbackRecord {
                satisfaction,
                ..sample()
            };
            assert!(append_feedback(&path, &record).is_err());
        }
        assert!(!path.exists());
    }

    #[test]
    fn test_append_writes_header_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("feedback.csv");

        append_feedback(&path, &sample()).unwrap();
        append_feedback(
            &path,
            &FeedbackRecord {
                relevant: false,
                satisfaction: 2,
                ..sample()
            },
        )
        .unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], HEADER);
        assert!(lines[1].contains(",4,yes,"));
        assert!(lines[2].contains(",2,no,"));
    }
}
