use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

/// A clip listed for re-annotation, with the identity recovered from its
/// filename
#[derive(Debug, Clone)]
pub struct PreparedClip {
    /// Path as given in the input list
    pub path: String,
    pub camera_id: String,
    pub label: String,
}

/// Join the media server URL and a clip path, dropping a leading `./`
pub fn media_url(base: &str, clip_path: &str) -> String {
    let rel = clip_path.strip_prefix("./").unwrap_or(clip_path);
    format!("{}/{}", base.trim_end_matches('/'), rel)
}

/// Render one upload line for the annotation tool.
///
/// `sample_id` is the clip's 1-based position in the batch, threaded in
/// explicitly by the caller.
pub fn upload_line(url: &str, label: &str, sample_id: usize) -> String {
    format!("{}\t{}\tid={}\tnote={}", url, label, sample_id, label)
}

/// Write the bookkeeping catalog: `path,camera_id,label` per clip
pub fn write_catalog_csv(clips: &[PreparedClip], path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    for clip in clips {
        writeln!(file, "{},{},{}", clip.path, clip.camera_id, clip.label)?;
    }
    Ok(())
}

/// Write the annotation-tool upload list, numbering clips from 1 in input
/// order
pub fn write_upload_list(clips: &[PreparedClip], base_url: &str, path: &Path) -> Result<()> {
    let mut file = std::fs::File::create(path)
        .with_context(|| format!("Failed to create file: {:?}", path))?;
    for (index, clip) in clips.iter().enumerate() {
        let url = media_url(base_url, &clip.path);
        writeln!(file, "{}", upload_line(&url, &clip.label, index + 1))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clips() -> Vec<PreparedClip> {
        vec![
            PreparedClip {
                path: "./batch1/cam.G1_0001_walking_2.mp4".to_string(),
                camera_id: "G1".to_string(),
                label: "walking".to_string(),
            },
            PreparedClip {
                path: "batch1/cam.G2_0002_running_7.mp4".to_string(),
                camera_id: "G2".to_string(),
                label: "running".to_string(),
            },
        ]
    }

    #[test]
    fn test_media_url_strips_dot_slash() {
        assert_eq!(
            media_url("http://viz-host:9000", "./batch1/clip.mp4"),
            "http://viz-host:9000/batch1/clip.mp4"
        );
        assert_eq!(
            media_url("http://viz-host:9000/", "batch1/clip.mp4"),
            "http://viz-host:9000/batch1/clip.mp4"
        );
    }

    #[test]
    fn test_upload_line() {
        assert_eq!(
            upload_line("http://viz-host:9000/clip.mp4", "walking", 7),
            "http://viz-host:9000/clip.mp4\twalking\tid=7\tnote=walking"
        );
    }

    #[test]
    fn test_write_catalog_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("catalog.csv");

        write_catalog_csv(&clips(), &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        assert_eq!(
            written,
            "./batch1/cam.G1_0001_walking_2.mp4,G1,walking\n\
             batch1/cam.G2_0002_running_7.mp4,G2,running\n"
        );
    }

    #[test]
    fn test_write_upload_list_numbers_from_one() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("upload.txt");

        write_upload_list(&clips(), "http://viz-host:9000", &path).unwrap();

        let written = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = written.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].ends_with("\twalking\tid=1\tnote=walking"));
        assert!(lines[1].ends_with("\trunning\tid=2\tnote=running"));
        assert!(lines[0].starts_with("http://viz-host:9000/batch1/"));
    }
}
