//! Browser storage sink for generated snapshots.
//!
//! One fixed key, one JSON value, overwritten on every Generate. The app
//! never reads the blob back; whoever consumes the portfolio does so from
//! the browser's storage directly.

use common::model::snapshot::Snapshot;

/// `localStorage` key the generated snapshot lives under.
pub const STORAGE_KEY: &str = "generatedPortfolio";

/// Serializes the snapshot and writes it to `window.localStorage`,
/// overwriting any previous value. Returns a description of the failure when
/// the browser denies the write (quota exceeded, storage disabled).
pub fn save_snapshot(snapshot: &Snapshot) -> Result<(), String> {
    let json = serde_json::to_string(snapshot).map_err(|e| e.to_string())?;

    let storage = web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or_else(|| "localStorage no está disponible".to_string())?;

    storage
        .set_item(STORAGE_KEY, &json)
        .map_err(|_| "el navegador rechazó la escritura".to_string())
}
