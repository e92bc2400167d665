//! Saved-plan persistence
//!
//! File-backed analog of the planner's local storage: one JSON document
//! holding the `SavedData` snapshot. A missing file is simply "nothing
//! saved yet"; an unreadable or unparseable file is a `Storage` error so
//! the caller can report it and fall back to a fresh scaffold.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{PlanError, PlanResult};
use crate::session::SavedData;

/// Default saved-plan location under the platform data directory
pub fn default_data_path() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("gradplan")
        .join("plan.json")
}

/// Load the saved snapshot, `None` when nothing has been saved
pub fn load(path: &Path) -> PlanResult<Option<SavedData>> {
    if !path.exists() {
        return Ok(None);
    }
    let json = fs::read_to_string(path)
        .map_err(|e| PlanError::storage(format!("{}: {e}", path.display())))?;
    let data = serde_json::from_str(&json)
        .map_err(|e| PlanError::storage(format!("{}: {e}", path.display())))?;
    Ok(Some(data))
}

/// Write the snapshot, creating parent directories as needed
pub fn save(path: &Path, data: &SavedData) -> PlanResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .map_err(|e| PlanError::storage(format!("{}: {e}", parent.display())))?;
    }
    let json = serde_json::to_string_pretty(data).map_err(PlanError::storage)?;
    fs::write(path, json).map_err(|e| PlanError::storage(format!("{}: {e}", path.display())))?;
    Ok(())
}
