use std::path::Path;

use anyhow::{Context, Result};

use crate::models::ClipEntry;

/// Read an annotation export where every non-blank line is one JSON entry
pub fn read_entries_file(path: &Path) -> Result<Vec<ClipEntry>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;
    read_entries(&content)
}

/// Parse line-delimited JSON entries, skipping blank lines
pub fn read_entries(input: &str) -> Result<Vec<ClipEntry>> {
    let mut entries = Vec::new();

    for (number, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let entry: ClipEntry = serde_json::from_str(line)
            .with_context(|| format!("Malformed annotation entry on line {}", number + 1))?;
        entries.push(entry);
    }

    Ok(entries)
}

/// Read a clip list: one path per line, blanks skipped
pub fn read_clip_list(path: &Path) -> Result<Vec<String>> {
    let content =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {:?}", path))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .map(String::from)
        .collect())
}
