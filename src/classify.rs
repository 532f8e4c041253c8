use std::path::Path;

use thiserror::Error;
use tracing::{info, warn};

use crate::media::probe::{DurationProbe, ProbeError};
use crate::models::{AnnotationRecord, ClipEntry, RevisionState, TrimSpan};
use crate::parse::filename::{FilenameError, parse_clip_filename};
use crate::parse::timespan::parse_timespan;

/// Note vocabulary written by the classifier
const NOTE_SHORT_CLIP: &str = "short clip";
const NOTE_REVISIT: &str = "revisit";

/// Spans and whole clips under this length are junk, not real content
const MIN_KEEP_SECONDS: f64 = 1.0;

#[derive(Debug, Error)]
pub enum ClassifyError {
    #[error(transparent)]
    Filename(#[from] FilenameError),
    #[error(transparent)]
    Probe(#[from] ProbeError),
}

/// Classify one raw entry into a final revision decision.
///
/// Signals combine in a fixed precedence: the note's timespan is parsed
/// first, then the empty-labels duration check overwrites whatever note
/// the trim step left behind (last write wins), and the closed note
/// vocabulary decides the state ahead of the agree/trim matrix. The
/// duration probe runs only on the empty-labels path, against
/// `clip_dir/<filename>`.
pub fn classify_entry<P: DurationProbe>(
    entry: &ClipEntry,
    probe: &P,
    clip_dir: &Path,
) -> Result<AnnotationRecord, ClassifyError> {
    let filename = Path::new(&entry.content)
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default()
        .to_string();
    let parts = parse_clip_filename(&entry.content)?;

    let labels: Vec<String> = entry.labels().to_vec();
    let mut notes = entry.note().trim().to_string();

    let labels_agree = labels.iter().any(|l| l == &parts.original_label);

    let trim = parse_timespan(&notes).map(|(start, end)| TrimSpan::from_endpoints(start, end));
    let needs_trim = trim.is_some();
    if let Some(span) = &trim {
        notes = if span.duration_seconds < MIN_KEEP_SECONDS {
            NOTE_SHORT_CLIP.to_string()
        } else {
            String::new()
        };
    }

    let mut video_duration = None;
    if labels.is_empty() {
        let clip_path = clip_dir.join(&filename);
        let duration = probe.duration_seconds(&clip_path)?;
        video_duration = Some(duration);
        notes = if duration < MIN_KEEP_SECONDS {
            NOTE_SHORT_CLIP.to_string()
        } else {
            NOTE_REVISIT.to_string()
        };
    }

    let state = derive_state(labels_agree, needs_trim, &notes);

    Ok(AnnotationRecord {
        filename,
        original_label: parts.original_label,
        labels,
        notes,
        trim,
        video_duration,
        state,
    })
}

/// Map the three classification signals onto the final state.
/// The closed note vocabulary is terminal and beats the agree/trim matrix.
fn derive_state(labels_agree: bool, needs_trim: bool, notes: &str) -> RevisionState {
    match notes {
        NOTE_SHORT_CLIP => RevisionState::ShortClip,
        NOTE_REVISIT => RevisionState::Revisit,
        _ => match (labels_agree, needs_trim) {
            (true, false) => RevisionState::Ok,
            (true, true) => RevisionState::OkTrim,
            (false, false) => RevisionState::Relabel,
            (false, true) => RevisionState::RelabelTrim,
        },
    }
}

/// Result of classifying a batch of entries
#[derive(Debug)]
pub struct BatchResult {
    /// Fully classified records, input order preserved
    pub records: Vec<AnnotationRecord>,
    /// Entries dropped after a malformed filename or a probe failure
    pub skipped: usize,
}

/// Classify every entry in input order.
///
/// Entries whose filename cannot be parsed or whose duration probe fails
/// are reported and skipped; one bad entry never takes down the batch.
pub fn classify_batch<P: DurationProbe>(
    entries: &[ClipEntry],
    probe: &P,
    clip_dir: &Path,
) -> BatchResult {
    let mut records = Vec::with_capacity(entries.len());
    let mut skipped = 0;

    for entry in entries {
        match classify_entry(entry, probe, clip_dir) {
            Ok(record) => records.push(record),
            Err(e) => {
                warn!("Skipping {}: {}", entry.content, e);
                skipped += 1;
            }
        }
    }

    info!("Classified {} records ({} skipped)", records.len(), skipped);

    BatchResult { records, skipped }
}
