//! Context list persistence: load/save with atomic writes

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::Context;

const CONTEXTS_FILENAME: &str = "contexts.json";

/// Resolve the context list file under a data directory, creating the
/// directory if missing.
pub fn contexts_path(data_dir: &Path) -> Result<PathBuf> {
    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }
    Ok(data_dir.join(CONTEXTS_FILENAME))
}

/// Load the persisted context list. A missing file is an empty store; a
/// corrupted file is a storage error surfaced to the caller.
pub fn load_contexts(path: &Path) -> Result<Vec<Context>> {
    if !path.exists() {
        return Ok(Vec::new());
    }

    let json = fs::read_to_string(path)?;
    let contexts = serde_json::from_str(&json)?;
    Ok(contexts)
}

/// Persist the context list atomically (temp file + rename), so a crash
/// mid-write never leaves a truncated store behind.
pub fn save_contexts(path: &Path, contexts: &[Context]) -> Result<()> {
    let json = serde_json::to_string_pretty(contexts)?;

    let tmp = path.with_extension("json.tmp");
    fs::write(&tmp, json)?;
    fs::rename(&tmp, path)?;
    Ok(())
}
