use std::path::{Path, PathBuf};
use std::process::Command;

use thiserror::Error;

/// Duration source for a clip on disk.
///
/// The classifier needs the whole-clip duration only for entries with no
/// replacement labels; everything else about the media stays opaque.
pub trait DurationProbe {
    fn duration_seconds(&self, path: &Path) -> Result<f64, ProbeError>;
}

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("ffprobe failed to start for {}: {source}", .path.display())]
    Invoke {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("ffprobe exited with {status} for {}", .path.display())]
    Failed {
        path: PathBuf,
        status: std::process::ExitStatus,
    },
    #[error("unparsable ffprobe duration {output:?} for {}", .path.display())]
    BadDuration { path: PathBuf, output: String },
}

/// Probes clip duration by shelling out to ffprobe
#[derive(Debug, Clone, Copy, Default)]
pub struct Ffprobe;

impl DurationProbe for Ffprobe {
    fn duration_seconds(&self, path: &Path) -> Result<f64, ProbeError> {
        let output = Command::new("ffprobe")
            .arg("-i")
            .arg(path)
            .args(["-show_entries", "format=duration", "-v", "quiet", "-of", "csv=p=0"])
            .output()
            .map_err(|source| ProbeError::Invoke {
                path: path.to_path_buf(),
                source,
            })?;

        if !output.status.success() {
            return Err(ProbeError::Failed {
                path: path.to_path_buf(),
                status: output.status,
            });
        }

        parse_duration_output(&String::from_utf8_lossy(&output.stdout), path)
    }
}

/// Parse the `csv=p=0` duration output: a bare float and a newline.
/// Anything else is an error, never a default duration.
fn parse_duration_output(stdout: &str, path: &Path) -> Result<f64, ProbeError> {
    let trimmed = stdout.trim();
    trimmed.parse::<f64>().map_err(|_| ProbeError::BadDuration {
        path: path.to_path_buf(),
        output: trimmed.to_string(),
    })
}
