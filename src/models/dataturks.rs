use serde::{Deserialize, Serialize};

/// One line of the annotation tool's line-delimited JSON export
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ClipEntry {
    /// Source media path or URL for the clip
    pub content: String,
    /// Human feedback; null when the annotator submitted nothing
    #[serde(default)]
    pub annotation: Option<Annotation>,
}

/// Replacement labels and free-text note assigned by the annotator
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Annotation {
    /// Replacement action label(s); may repeat, order as submitted
    #[serde(default)]
    pub labels: Vec<String>,
    /// Free-text note, possibly encoding a trim timespan
    #[serde(default)]
    pub note: String,
}

impl ClipEntry {
    /// Replacement labels, empty when no annotation was submitted
    pub fn labels(&self) -> &[String] {
        self.annotation
            .as_ref()
            .map(|a| a.labels.as_slice())
            .unwrap_or(&[])
    }

    /// Annotator note, empty when no annotation was submitted
    pub fn note(&self) -> &str {
        self.annotation
            .as_ref()
            .map(|a| a.note.as_str())
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_entry_with_annotation() {
        let json = r#"{
            "content": "http://host:9000/clips/school.G336_00042_person_opens_door_17.mp4",
            "annotation": {"labels": ["person_opens_door"], "note": "10.000-25.500"}
        }"#;

        let entry: ClipEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.labels(), &["person_opens_door".to_string()]);
        assert_eq!(entry.note(), "10.000-25.500");
    }

    #[test]
    fn test_parse_entry_null_annotation() {
        let json = r#"{"content": "./clips/school.G336_00042_person_opens_door_17.mp4", "annotation": null}"#;

        let entry: ClipEntry = serde_json::from_str(json).unwrap();

        assert!(entry.annotation.is_none());
        assert!(entry.labels().is_empty());
        assert_eq!(entry.note(), "");
    }

    #[test]
    fn test_parse_entry_partial_annotation() {
        // The tool omits keys the annotator never touched
        let json = r#"{"content": "clip.G1_0001_walking_2.mp4", "annotation": {"labels": ["running"]}}"#;

        let entry: ClipEntry = serde_json::from_str(json).unwrap();

        assert_eq!(entry.labels(), &["running".to_string()]);
        assert_eq!(entry.note(), "");
    }

    #[test]
    fn test_parse_entry_ignores_extra_fields() {
        let json = r#"{
            "content": "clip.G1_0001_walking_2.mp4",
            "annotation": {"labels": [], "note": "revisit"},
            "extras": {"assignee": "worker-7"},
            "metadata": {"first_done_at": 1552748162000}
        }"#;

        let entry: ClipEntry = serde_json::from_str(json).unwrap();

        assert!(entry.labels().is_empty());
        assert_eq!(entry.note(), "revisit");
    }
}
