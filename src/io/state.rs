use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::model::config::DisplayConfig;
use crate::model::sort::{SortKey, SortSpec};

const STATE_FILE_NAME: &str = ".tasktrack-state.json";

/// How the list is currently ordered (written to .tasktrack-state.json)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ViewState {
    pub sort_by: SortKey,
    #[serde(default)]
    pub reversed: bool,
    #[serde(default = "default_grouped")]
    pub grouped: bool,
}

fn default_grouped() -> bool {
    true
}

impl ViewState {
    pub fn from_display(display: &DisplayConfig) -> Self {
        ViewState {
            sort_by: display.sort_by,
            reversed: display.reversed,
            grouped: display.grouped,
        }
    }

    pub fn sort_spec(&self) -> SortSpec {
        SortSpec::for_view(self.sort_by, self.grouped, self.reversed)
    }
}

pub fn state_path(dir: &Path) -> PathBuf {
    dir.join(STATE_FILE_NAME)
}

/// Read the saved view state, if there is a readable one
pub fn read_view_state(dir: &Path) -> Option<ViewState> {
    let content = fs::read_to_string(state_path(dir)).ok()?;
    match serde_json::from_str(&content) {
        Ok(state) => Some(state),
        Err(e) => {
            tracing::warn!(error = %e, "ignoring unreadable view state");
            None
        }
    }
}

pub fn write_view_state(dir: &Path, state: &ViewState) -> Result<(), std::io::Error> {
    let content = serde_json::to_string_pretty(state)?;
    fs::write(state_path(dir), content)
}
