use anyhow::{Context, Result};
use std::path::Path;

use crate::binary_diff;
use crate::config::DiffOptions;
use crate::delta_format::DeltaList;
use crate::util;

/// Result of diffing two files on disk.
#[derive(Debug)]
pub struct FileDiff {
    pub deltas: DeltaList,
    pub old_len: usize,
    pub new_len: usize,
    /// Set when the BLAKE3 digests matched and no tables were built.
    pub identical: bool,
}

/// Diff two files. Both are memory-mapped concurrently, then compared on a
/// blocking task.
pub async fn diff_files(
    old_path: &Path,
    new_path: &Path,
    options: &DiffOptions,
) -> Result<FileDiff> {
    let old_owned = old_path.to_path_buf();
    let new_owned = new_path.to_path_buf();

    let (old_map, new_map) = tokio::try_join!(
        tokio::task::spawn_blocking(move || util::mmap_file(&old_owned)),
        tokio::task::spawn_blocking(move || util::mmap_file(&new_owned)),
    )?;
    let old_map = old_map?;
    let new_map = new_map?;

    let options = *options;
    let old_display = old_path.display().to_string();
    let new_display = new_path.display().to_string();

    tokio::task::spawn_blocking(move || -> Result<FileDiff> {
        let old: &[u8] = &old_map;
        let new: &[u8] = &new_map;
        tracing::info!(old = old.len(), new = new.len(), window = options.window(), "diffing");

        // Short inputs must still reach the core so they fail as too short.
        let window = options.window();
        let identical = old.len() >= window
            && old.len() == new.len()
            && util::hash_bytes(old) == util::hash_bytes(new);

        let deltas = if identical {
            tracing::debug!("content digests match, skipping hash tables");
            DeltaList::new()
        } else {
            binary_diff::compute_diff(old, new, &options)
                .with_context(|| format!("Failed to diff {} against {}", old_display, new_display))?
        };

        Ok(FileDiff {
            deltas,
            old_len: old.len(),
            new_len: new.len(),
            identical,
        })
    })
    .await?
}
