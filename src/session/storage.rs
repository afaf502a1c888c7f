//! Board file I/O: atomic save and guarded load.

use super::codec;
use crate::config::StorageConfig;
use crate::draw::DrawingAction;
use anyhow::{Context as _, Result, bail};
use log::{info, warn};
use std::fs::{self, OpenOptions};
use std::io::Write as _;
use std::path::{Path, PathBuf};

/// Default artifact name for a saved board.
pub const BOARD_FILE_NAME: &str = "whiteboard-state.json";

/// Writes the committed actions to `path` atomically (temp file + rename).
///
/// A crash mid-write leaves the previous file intact.
pub fn save_board(path: &Path, actions: &[DrawingAction]) -> Result<()> {
    let payload = codec::serialize_actions(actions).context("failed to serialise board payload")?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create board directory {}", parent.display()))?;
        }
    }

    let tmp_path = temp_path(path);
    {
        let mut tmp_file = OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&tmp_path)
            .with_context(|| format!("failed to open temporary board file {}", tmp_path.display()))?;
        tmp_file
            .write_all(payload.as_bytes())
            .context("failed to write board payload")?;
        tmp_file.sync_all().context("failed to sync temporary board file")?;
    }

    fs::rename(&tmp_path, path).with_context(|| {
        format!(
            "failed to move temporary board file {} -> {}",
            tmp_path.display(),
            path.display()
        )
    })?;

    info!("board saved to {} ({} actions)", path.display(), actions.len());
    Ok(())
}

/// Reads and decodes a board file, enforcing the configured limits.
///
/// On any failure the caller's current log is untouched; the error carries
/// the user-facing "Invalid file format" context when decoding failed.
pub fn load_board(path: &Path, limits: &StorageConfig) -> Result<Vec<DrawingAction>> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("failed to stat board file {}", path.display()))?;
    let max_bytes = limits.max_file_size_mb.saturating_mul(1024 * 1024);
    if metadata.len() > max_bytes {
        bail!(
            "board file {} is {} bytes which exceeds the limit of {} bytes",
            path.display(),
            metadata.len(),
            max_bytes
        );
    }

    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read board file {}", path.display()))?;

    let mut actions = codec::deserialize_actions(&contents).context("Invalid file format")?;

    if limits.max_actions > 0 && actions.len() > limits.max_actions {
        warn!(
            "board file {} contains {} actions which exceeds the limit of {}; truncating",
            path.display(),
            actions.len(),
            limits.max_actions
        );
        actions.truncate(limits.max_actions);
    }

    info!("board loaded from {} ({} actions)", path.display(), actions.len());
    Ok(actions)
}

fn temp_path(target: &Path) -> PathBuf {
    let mut candidate = target.with_extension("json.tmp");
    let mut counter = 0u32;
    while candidate.exists() {
        counter += 1;
        candidate = target.with_extension(format!("json.tmp{counter}"));
    }
    candidate
}
