use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;
use tracing::debug;

use crate::models::{AnnotationRecord, TrimSpan};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to create {}: {source}", .dir.display())]
    CreateDir {
        dir: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to copy {} to {}: {source}", .src.display(), .dst.display())]
    Copy {
        src: PathBuf,
        dst: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("ffmpeg failed to start for {}: {source}", .src.display())]
    Invoke {
        src: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("ffmpeg exited with {status} trimming {}", .src.display())]
    TrimFailed {
        src: PathBuf,
        status: std::process::ExitStatus,
    },
}

/// What the export step did for one record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportOutcome {
    /// Source copied through unchanged
    Copied,
    /// One trimmed clip written per assigned label
    Trimmed(usize),
    /// No operational output defined for this state
    Skipped,
}

/// Materialize the operational outcome of a classified record.
///
/// When the labels agree and no trim is needed, the clip is copied
/// through unchanged under its label directory. When a trim is needed,
/// one trimmed clip is written per assigned label. Everything else
/// (RELABEL without a trim, REVISIT, SHORT_CLIP) has no defined output
/// and is skipped.
pub fn export_record(
    record: &AnnotationRecord,
    clip_dir: &Path,
    export_dir: &Path,
) -> Result<ExportOutcome, ExportError> {
    let src = clip_dir.join(&record.filename);

    if record.state.labels_agree() && !record.state.needs_trim() {
        let dst = labeled_path(export_dir, &record.original_label, &record.filename)?;
        fs::copy(&src, &dst).map_err(|source| ExportError::Copy {
            src: src.clone(),
            dst,
            source,
        })?;
        return Ok(ExportOutcome::Copied);
    }

    if record.state.needs_trim() {
        let Some(trim) = &record.trim else {
            // Trim states always carry a span; treat a bare one as a no-op
            return Ok(ExportOutcome::Skipped);
        };
        let mut written = 0;
        for label in &record.labels {
            let dst = labeled_path(export_dir, label, &record.filename)?;
            trim_clip(&src, &dst, trim)?;
            written += 1;
        }
        return Ok(ExportOutcome::Trimmed(written));
    }

    debug!("No export defined for {} ({})", record.filename, record.state.as_str());
    Ok(ExportOutcome::Skipped)
}

/// Ensure `export_dir/<label>/` exists and return the destination path
fn labeled_path(export_dir: &Path, label: &str, filename: &str) -> Result<PathBuf, ExportError> {
    let dir = export_dir.join(label);
    fs::create_dir_all(&dir).map_err(|source| ExportError::CreateDir {
        dir: dir.clone(),
        source,
    })?;
    Ok(dir.join(filename))
}

/// Cut the span out of `src` into `dst` with ffmpeg
fn trim_clip(src: &Path, dst: &Path, trim: &TrimSpan) -> Result<(), ExportError> {
    let status = Command::new("ffmpeg")
        .args(["-v", "error", "-y", "-i"])
        .arg(src)
        .args(["-ss", &trim.start_timecode, "-to", &trim.end_timecode])
        .arg(dst)
        .status()
        .map_err(|source| ExportError::Invoke {
            src: src.to_path_buf(),
            source,
        })?;

    if !status.success() {
        return Err(ExportError::TrimFailed {
            src: src.to_path_buf(),
            status,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::RevisionState;

    fn record(state: RevisionState) -> AnnotationRecord {
        AnnotationRecord {
            filename: "school.G336_00042_person_opens_door_17.mp4".to_string(),
            original_label: "person_opens_door".to_string(),
            labels: vec!["person_opens_door".to_string()],
            notes: String::new(),
            trim: None,
            video_duration: None,
            state,
        }
    }

    #[test]
    fn test_export_copies_accepted_clip() {
        let clips = tempfile::tempdir().unwrap();
        let exports = tempfile::tempdir().unwrap();
        let record = record(RevisionState::Ok);
        std::fs::write(clips.path().join(&record.filename), b"fake video bytes").unwrap();

        let outcome = export_record(&record, clips.path(), exports.path()).unwrap();

        assert_eq!(outcome, ExportOutcome::Copied);
        let exported = exports
            .path()
            .join("person_opens_door")
            .join(&record.filename);
        assert_eq!(std::fs::read(exported).unwrap(), b"fake video bytes");
    }

    #[test]
    fn test_export_copy_fails_without_source() {
        let clips = tempfile::tempdir().unwrap();
        let exports = tempfile::tempdir().unwrap();
        let record = record(RevisionState::Ok);

        let result = export_record(&record, clips.path(), exports.path());

        assert!(matches!(result, Err(ExportError::Copy { .. })));
    }

    #[test]
    fn test_export_skips_states_without_outputs() {
        let clips = tempfile::tempdir().unwrap();
        let exports = tempfile::tempdir().unwrap();

        for state in [
            RevisionState::Relabel,
            RevisionState::Revisit,
            RevisionState::ShortClip,
        ] {
            let outcome = export_record(&record(state), clips.path(), exports.path()).unwrap();
            assert_eq!(outcome, ExportOutcome::Skipped);
        }
    }

    #[test]
    fn test_export_skips_trim_state_missing_span() {
        let clips = tempfile::tempdir().unwrap();
        let exports = tempfile::tempdir().unwrap();
        let record = record(RevisionState::OkTrim);

        let outcome = export_record(&record, clips.path(), exports.path()).unwrap();

        assert_eq!(outcome, ExportOutcome::Skipped);
    }
}
