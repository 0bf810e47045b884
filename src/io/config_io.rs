use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use crate::io::store_io::StoreError;
use crate::model::config::Settings;
use crate::model::sort::SortKey;

/// Settings file looked up in the working directory
pub const SETTINGS_FILE_NAME: &str = "tasktrack.toml";

/// Read `tasktrack.toml` from `dir`. A missing file gives the defaults.
pub fn read_settings(dir: &Path) -> Result<Settings, StoreError> {
    let path = dir.join(SETTINGS_FILE_NAME);
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Settings::default()),
        Err(e) => {
            return Err(StoreError::ReadError { path, source: e });
        }
    };
    let settings: Settings =
        toml::from_str(&text).map_err(|e| StoreError::ConfigParseError { path: path.clone(), source: e })?;
    let sort_by = settings.display.sort_by;
    if !SortKey::SELECTABLE.contains(&sort_by) {
        return Err(StoreError::InvalidSetting {
            path,
            message: format!("display.sort_by cannot be {}; set display.grouped instead", sort_by),
        });
    }
    Ok(settings)
}
