use std::fmt;
use std::str::FromStr;

use filedeck_common::FileBrowserError;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    #[default]
    List,
    Grid,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Name,
    Date,
    Size,
    Type,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    Auto,
}

/// 用户设置，整体以 JSON 形式持久化
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AppSettings {
    pub view_mode: ViewMode,
    pub sort_order: SortOrder,
    pub show_hidden_files: bool,
    pub confirm_before_delete: bool,
    pub theme: ThemeMode,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            view_mode: ViewMode::List,
            sort_order: SortOrder::Name,
            show_hidden_files: false,
            confirm_before_delete: true,
            theme: ThemeMode::Auto,
        }
    }
}

/// A single-field update to [`AppSettings`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    ViewMode(ViewMode),
    SortOrder(SortOrder),
    ShowHiddenFiles(bool),
    ConfirmBeforeDelete(bool),
    Theme(ThemeMode),
}

impl Setting {
    pub const KEYS: [&'static str; 5] = [
        "viewMode",
        "sortOrder",
        "showHiddenFiles",
        "confirmBeforeDelete",
        "theme",
    ];

    /// Parses `key=value` using the persisted camelCase key names.
    pub fn parse(key: &str, value: &str) -> Result<Self, FileBrowserError> {
        let value = value.trim();
        match key {
            "viewMode" => Ok(Setting::ViewMode(value.parse()?)),
            "sortOrder" => Ok(Setting::SortOrder(value.parse()?)),
            "showHiddenFiles" => Ok(Setting::ShowHiddenFiles(parse_bool(key, value)?)),
            "confirmBeforeDelete" => Ok(Setting::ConfirmBeforeDelete(parse_bool(key, value)?)),
            "theme" => Ok(Setting::Theme(value.parse()?)),
            other => Err(FileBrowserError::Settings(format!(
                "unknown setting {other:?}, expected one of {}",
                Self::KEYS.join(", ")
            ))),
        }
    }

    pub fn apply_to(self, settings: &mut AppSettings) {
        match self {
            Setting::ViewMode(v) => settings.view_mode = v,
            Setting::SortOrder(v) => settings.sort_order = v,
            Setting::ShowHiddenFiles(v) => settings.show_hidden_files = v,
            Setting::ConfirmBeforeDelete(v) => settings.confirm_before_delete = v,
            Setting::Theme(v) => settings.theme = v,
        }
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool, FileBrowserError> {
    value
        .parse::<bool>()
        .map_err(|_| FileBrowserError::Settings(format!("{key} expects true or false, got {value:?}")))
}

macro_rules! keyword_enum {
    ($ty:ident { $($variant:ident => $word:literal),+ $(,)? }) => {
        impl $ty {
            pub fn as_str(self) -> &'static str {
                match self {
                    $($ty::$variant => $word,)+
                }
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $ty {
            type Err = FileBrowserError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($word => Ok($ty::$variant),)+
                    other => Err(FileBrowserError::Settings(format!(
                        concat!("invalid ", stringify!($ty), ": {:?}"),
                        other
                    ))),
                }
            }
        }
    };
}

keyword_enum!(ViewMode { List => "list", Grid => "grid" });
keyword_enum!(SortOrder { Name => "name", Date => "date", Size => "size", Type => "type" });
keyword_enum!(ThemeMode { Light => "light", Dark => "dark", Auto => "auto" });
