use crate::canvas::model::StrokeStyle;
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE: &str = "gesture_board.json";

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardSettings {
    /// Enables `debug` level logging and per-transition gesture traces.
    pub debug_logging: bool,
    pub stroke: StrokeStyle,
}

/// Load settings from `path`. A missing or empty file yields defaults;
/// malformed JSON is an error.
pub fn load_settings(path: &str) -> anyhow::Result<BoardSettings> {
    let content = std::fs::read_to_string(path).unwrap_or_default();
    if content.trim().is_empty() {
        return Ok(BoardSettings::default());
    }
    let settings: BoardSettings = serde_json::from_str(&content)?;
    Ok(settings)
}

pub fn save_settings(path: &str, settings: &BoardSettings) -> anyhow::Result<()> {
    let json = serde_json::to_string_pretty(settings)?;
    std::fs::write(path, json)?;
    Ok(())
}
