//! Writing rendered transcripts to disk and keeping the form data as JSON.
//!
//! This is the "download" side of the tool: the renderer hands over a string
//! and a suggested name, and these helpers put exactly those bytes in a file.

use crate::error::{Result, TranscriptError};
use crate::model::TranscriptData;
use crate::render::{render_transcript, transcript_file_name};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Renders `data` and writes it into `dir` under its suggested file name
///
/// An existing file with the same name is overwritten.
///
/// # Arguments
/// * `data` - Snapshot to render
/// * `dir` - Existing directory to write into
///
/// # Returns
/// * `Ok(PathBuf)` - Path of the written document
/// * `Err` - If the file can't be written
pub fn export_transcript(data: &TranscriptData, dir: &Path) -> Result<PathBuf> {
    let html = render_transcript(data);
    let path = dir.join(transcript_file_name(data));

    fs::write(&path, html.as_bytes()).map_err(|e| TranscriptError::io(&path, e))?;

    info!(
        "Exported course schedule for {} courses to {} ({} bytes)",
        data.courses.len(),
        path.display(),
        html.len()
    );

    Ok(path)
}

/// Saves the form data as pretty-printed JSON.
pub fn save_transcript_json(data: &TranscriptData, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(data)?;
    fs::write(path, json).map_err(|e| TranscriptError::io(path, e))?;
    info!("Saved transcript data to {}", path.display());
    Ok(())
}

/// Loads form data previously written by [`save_transcript_json`].
pub fn load_transcript_json(path: &Path) -> Result<TranscriptData> {
    let content = fs::read_to_string(path).map_err(|e| TranscriptError::io(path, e))?;
    let data: TranscriptData = serde_json::from_str(&content)?;
    info!(
        "Loaded transcript data from {} ({} courses)",
        path.display(),
        data.courses.len()
    );
    Ok(data)
}
