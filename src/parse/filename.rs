use std::path::Path;

use thiserror::Error;

/// Camera ID and original action label recovered from a clip filename
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilenameParts {
    /// Last dot-separated segment of the first underscore token
    pub camera_id: String,
    /// Underscore tokens 2..n-1 of the stem, joined and lower-cased
    pub original_label: String,
}

#[derive(Debug, Error)]
pub enum FilenameError {
    /// The stem has too few underscore tokens to carry a label
    #[error("malformed clip filename {0:?}: expected <site>.<camera>_<seq>_<label tokens>_<index>")]
    Malformed(String),
}

/// Parse the clip naming convention into camera ID and original label.
///
/// `school.G336_00042_person_opens_door_17.mp4` yields camera `G336` and
/// label `person_opens_door`. Works on full paths and URLs; only the
/// basename matters.
pub fn parse_clip_filename(path: &str) -> Result<FilenameParts, FilenameError> {
    let stem = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();

    let tokens: Vec<&str> = stem.split('_').collect();
    if tokens.len() < 3 {
        return Err(FilenameError::Malformed(path.to_string()));
    }

    let camera_id = tokens[0].rsplit('.').next().unwrap_or_default().to_string();
    let original_label = tokens[2..tokens.len() - 1].join("_").to_lowercase();

    // A stem with exactly three tokens leaves no label tokens at all;
    // an empty label would force every downstream comparison to disagree.
    if original_label.is_empty() {
        return Err(FilenameError::Malformed(path.to_string()));
    }

    Ok(FilenameParts {
        camera_id,
        original_label,
    })
}
