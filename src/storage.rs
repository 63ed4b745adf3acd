/// Persisted settings and (de)serialization of the synced storage blobs
use crate::board::{default_boards, Board, DEFAULT_BOARD_ID};
use crate::error::ApiError;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Storage key of the settings blob
pub const SETTINGS_KEY: &str = "appSettings";
/// Storage key of the id -> metadata map
pub const METADATA_KEY: &str = "bookmarkMetadata";

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn toggled(self) -> Theme {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    Feed,
    Tabs,
}

/// What the sidebar has selected: a pseudo collection or a folder of the board.
/// Stored as a plain string ("tabs", "reminders", "notes" or a folder id).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SidebarTarget {
    #[default]
    Tabs,
    Reminders,
    Notes,
    Folder(String),
}

impl From<String> for SidebarTarget {
    fn from(value: String) -> Self {
        match value.as_str() {
            "tabs" => SidebarTarget::Tabs,
            "reminders" => SidebarTarget::Reminders,
            "notes" => SidebarTarget::Notes,
            _ => SidebarTarget::Folder(value),
        }
    }
}

impl From<SidebarTarget> for String {
    fn from(value: SidebarTarget) -> Self {
        match value {
            SidebarTarget::Tabs => "tabs".to_string(),
            SidebarTarget::Reminders => "reminders".to_string(),
            SidebarTarget::Notes => "notes".to_string(),
            SidebarTarget::Folder(id) => id,
        }
    }
}

/// The `appSettings` blob. Missing fields take their defaults, so older or
/// partial blobs merge cleanly on load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Settings {
    pub theme: Theme,
    pub sidebar_collapsed: bool,
    pub view_mode: ViewMode,
    pub active_board_id: String,
    pub active_sidebar_target: SidebarTarget,
    pub boards: Vec<Board>,
    pub collapsed_sections: BTreeSet<String>,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            theme: Theme::Light,
            sidebar_collapsed: false,
            view_mode: ViewMode::Feed,
            active_board_id: DEFAULT_BOARD_ID.to_string(),
            active_sidebar_target: SidebarTarget::Tabs,
            boards: default_boards(),
            collapsed_sections: BTreeSet::new(),
        }
    }
}

impl Settings {
    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_collapsed = !self.sidebar_collapsed;
    }

    /// Flip a section's collapsed state; returns whether it is now collapsed
    pub fn toggle_section(&mut self, section_id: &str) -> bool {
        if self.collapsed_sections.remove(section_id) {
            false
        } else {
            self.collapsed_sections.insert(section_id.to_string());
            true
        }
    }

    pub fn is_collapsed(&self, section_id: &str) -> bool {
        self.collapsed_sections.contains(section_id)
    }

    /// Switching boards resets the sidebar selection, folder ids don't carry over
    pub fn set_active_board(&mut self, board_id: &str) {
        self.active_board_id = board_id.to_string();
        self.active_sidebar_target = SidebarTarget::Tabs;
    }

    pub fn board_name(&self, board_id: &str) -> Option<&str> {
        self.boards
            .iter()
            .find(|board| board.id == board_id)
            .map(|board| board.name.as_str())
    }
}

/// Decode a stored blob; an unset key yields the default value
pub fn decode_blob<T>(value: Option<serde_json::Value>) -> Result<T, ApiError>
where
    T: DeserializeOwned + Default,
{
    match value {
        None | Some(serde_json::Value::Null) => Ok(T::default()),
        Some(value) => Ok(serde_json::from_value(value)?),
    }
}

pub fn encode_blob<T: Serialize>(value: &T) -> Result<serde_json::Value, ApiError> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metadata::MetadataMap;
    use serde_json::json;

    #[test]
    fn test_settings_default() {
        let settings = Settings::default();

        assert_eq!(settings.active_board_id, "1");
        assert_eq!(settings.view_mode, ViewMode::Feed);
        assert_eq!(settings.active_sidebar_target, SidebarTarget::Tabs);
        assert_eq!(settings.boards, default_boards());
        assert!(settings.collapsed_sections.is_empty());
    }

    #[test]
    fn test_partial_blob_merges_with_defaults() {
        let stored = json!({"theme": "dark", "activeBoardId": "77"});

        let settings: Settings = decode_blob(Some(stored)).unwrap();

        assert_eq!(settings.theme, Theme::Dark);
        assert_eq!(settings.active_board_id, "77");
        assert_eq!(settings.view_mode, ViewMode::Feed);
        assert_eq!(settings.boards, default_boards());
    }

    #[test]
    fn test_unset_blob_is_default() {
        let settings: Settings = decode_blob(None).unwrap();
        assert_eq!(settings, Settings::default());

        let metadata: MetadataMap = decode_blob(Some(serde_json::Value::Null)).unwrap();
        assert!(metadata.is_empty());
    }

    #[test]
    fn test_corrupt_blob_is_an_error() {
        let result: Result<Settings, ApiError> = decode_blob(Some(json!({"theme": 12})));
        assert!(result.is_err());
    }

    #[test]
    fn test_settings_wire_format() {
        let mut settings = Settings::default();
        settings.active_sidebar_target = SidebarTarget::Folder("15".to_string());
        settings.toggle_section("reminders");

        let value = encode_blob(&settings).unwrap();

        assert_eq!(value["activeSidebarTarget"], "15");
        assert_eq!(value["viewMode"], "feed");
        assert_eq!(value["collapsedSections"], json!(["reminders"]));
        assert_eq!(value["boards"][0], json!({"id": "1", "name": "Bookmarks Bar"}));
    }

    #[test]
    fn test_sidebar_target_strings() {
        assert_eq!(SidebarTarget::from("reminders".to_string()), SidebarTarget::Reminders);
        assert_eq!(SidebarTarget::from("notes".to_string()), SidebarTarget::Notes);
        assert_eq!(
            SidebarTarget::from("123".to_string()),
            SidebarTarget::Folder("123".to_string())
        );
        assert_eq!(String::from(SidebarTarget::Tabs), "tabs");
    }

    #[test]
    fn test_toggle_section() {
        let mut settings = Settings::default();

        assert!(settings.toggle_section("folder-12"));
        assert!(settings.is_collapsed("folder-12"));
        assert!(!settings.toggle_section("folder-12"));
        assert!(!settings.is_collapsed("folder-12"));
    }

    #[test]
    fn test_set_active_board_resets_target() {
        let mut settings = Settings::default();
        settings.active_sidebar_target = SidebarTarget::Folder("15".to_string());

        settings.set_active_board("20");

        assert_eq!(settings.active_board_id, "20");
        assert_eq!(settings.active_sidebar_target, SidebarTarget::Tabs);
    }

    #[test]
    fn test_theme_toggle() {
        let mut settings = Settings::default();
        settings.toggle_theme();
        assert_eq!(settings.theme, Theme::Dark);
        settings.toggle_theme();
        assert_eq!(settings.theme, Theme::Light);
    }
}
