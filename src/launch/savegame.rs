//! Savegame resolution — newest entry in a package's save directory.

use std::fs;
use std::path::Path;
use std::time::SystemTime;

use tracing::debug;

/// Return the name of the most recently modified entry directly
/// inside `dir`, or `None` if the directory is missing or empty.
///
/// Non-recursive; files and subdirectories are both eligible (some
/// ports keep each save as a directory). Entries whose metadata
/// cannot be read are skipped. Equal modification times order by
/// name, lexically ascending, so the result is deterministic.
pub fn last_save_game(dir: &Path) -> Option<String> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => {
            debug!(dir = %dir.display(), "save directory not readable, no save to load");
            return None;
        }
    };

    let mut saves: Vec<(String, SystemTime)> = entries
        .filter_map(|entry| {
            let entry = entry.ok()?;
            let modified = entry.metadata().ok()?.modified().ok()?;
            Some((entry.file_name().to_string_lossy().into_owned(), modified))
        })
        .collect();

    saves.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    saves.into_iter().next().map(|(name, _)| name)
}
