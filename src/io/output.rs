use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::AnnotationRecord;

/// Render one record as its CSV report line.
///
/// Fields in order: filename, original label, labels joined by `-`, trim
/// start timecode, trim end timecode, notes. Trim fields are empty when
/// the note carried no timespan.
pub fn csv_line(record: &AnnotationRecord) -> String {
    let (start, end) = match &record.trim {
        Some(trim) => (trim.start_timecode.as_str(), trim.end_timecode.as_str()),
        None => ("", ""),
    };

    format!(
        "{},{},{},{},{},{}",
        record.filename,
        record.original_label,
        record.labels.join("-"),
        start,
        end,
        record.notes
    )
}

/// Write the CSV report, one line per record, no header
pub fn write_csv_report(records: &[AnnotationRecord], path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    for record in records {
        writeln!(file, "{}", csv_line(record))?;
    }
    Ok(())
}

/// Write the extended JSON report: an array of full records
pub fn write_json_report(records: &[AnnotationRecord], path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    serde_json::to_writer_pretty(file, records).context("Failed to write JSON report")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RevisionState, TrimSpan};

    fn trimmed_record() -> AnnotationRecord {
        AnnotationRecord {
            filename: "school.G336_00042_person_opens_door_17.mp4".to_string(),
            original_label: "person_opens_door".to_string(),
            labels: vec!["person_closes_door".to_string(), "person_exits".to_string()],
            notes: String::new(),
            trim: Some(TrimSpan::from_endpoints(10.0, 25.5)),
            video_duration: None,
            state: RevisionState::RelabelTrim,
        }
    }

    #[test]
    fn test_csv_line_with_trim() {
        let line = csv_line(&trimmed_record());

        assert_eq!(
            line,
            "school.G336_00042_person_opens_door_17.mp4,person_opens_door,\
             person_closes_door-person_exits,00:00:10.000,00:00:25.500,"
        );
    }

    #[test]
    fn test_csv_line_without_trim() {
        let record = AnnotationRecord {
            filename: "cam.G1_0001_walking_2.mp4".to_string(),
            original_label: "walking".to_string(),
            labels: vec![],
            notes: "revisit".to_string(),
            trim: None,
            video_duration: Some(5.0),
            state: RevisionState::Revisit,
        };

        assert_eq!(csv_line(&record), "cam.G1_0001_walking_2.mp4,walking,,,,revisit");
    }

    #[test]
    fn test_write_csv_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");

        write_csv_report(&[trimmed_record()], &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(written.lines().count(), 1);
        assert!(written.starts_with("school.G336_00042_person_opens_door_17.mp4,"));
        assert!(written.ends_with('\n'));
    }

    #[test]
    fn test_write_json_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");

        write_json_report(&[trimmed_record()], &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value.as_array().unwrap().len(), 1);
        assert_eq!(value[0]["state"], "relabel_trim");
        assert_eq!(value[0]["trim"]["end_timecode"], "00:00:25.500");
        assert!(value[0].get("video_duration").is_none());
    }
}
