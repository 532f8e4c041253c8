use serde::Serialize;

use crate::parse::timespan::{DEFAULT_PRECISION, format_timecode};

/// Final revision decision for a clip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RevisionState {
    /// Original label confirmed, clip kept as-is
    Ok,
    /// Replacement label(s) assigned, no trim requested
    Relabel,
    /// Original label confirmed but the clip needs trimming
    OkTrim,
    /// Replacement label(s) assigned and the clip needs trimming
    RelabelTrim,
    /// No replacement label given; needs another human pass
    Revisit,
    /// Clip (or its requested trim) is under one second; discard
    ShortClip,
}

impl RevisionState {
    /// Snake-case name used in reports and logs
    pub fn as_str(self) -> &'static str {
        match self {
            RevisionState::Ok => "ok",
            RevisionState::Relabel => "relabel",
            RevisionState::OkTrim => "ok_trim",
            RevisionState::RelabelTrim => "relabel_trim",
            RevisionState::Revisit => "revisit",
            RevisionState::ShortClip => "short_clip",
        }
    }

    /// Whether the original label was among the replacement labels
    pub fn labels_agree(self) -> bool {
        matches!(self, RevisionState::Ok | RevisionState::OkTrim)
    }

    /// Whether the note carried a trim timespan
    pub fn needs_trim(self) -> bool {
        matches!(self, RevisionState::OkTrim | RevisionState::RelabelTrim)
    }
}

/// Trim interval recovered from a timespan note
#[derive(Debug, Clone, Serialize)]
pub struct TrimSpan {
    pub start_seconds: f64,
    pub end_seconds: f64,
    /// end - start; negative when the note's endpoints were reversed
    pub duration_seconds: f64,
    pub start_timecode: String,
    pub end_timecode: String,
}

impl TrimSpan {
    /// Build a span from note endpoints, deriving duration and timecodes
    pub fn from_endpoints(start_seconds: f64, end_seconds: f64) -> Self {
        Self {
            start_seconds,
            end_seconds,
            duration_seconds: end_seconds - start_seconds,
            start_timecode: format_timecode(start_seconds, DEFAULT_PRECISION),
            end_timecode: format_timecode(end_seconds, DEFAULT_PRECISION),
        }
    }
}

/// Fully classified per-clip record, one per input entry
#[derive(Debug, Clone, Serialize)]
pub struct AnnotationRecord {
    /// Basename of the clip's media path
    pub filename: String,
    /// Action label encoded in the filename, lower-cased
    pub original_label: String,
    /// Replacement label(s) assigned by the annotator; not deduplicated
    pub labels: Vec<String>,
    /// Post-classification note: free text, empty, "short clip", or "revisit"
    pub notes: String,
    /// Present iff the raw note matched the timespan pattern exactly once
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trim: Option<TrimSpan>,
    /// Probed whole-clip duration; populated iff `labels` is empty
    #[serde(skip_serializing_if = "Option::is_none")]
    pub video_duration: Option<f64>,
    /// Derived revision decision
    pub state: RevisionState,
}
