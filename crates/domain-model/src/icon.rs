use std::fmt;
use std::str::FromStr;

use filedeck_common::FileBrowserError;
use serde::{Deserialize, Serialize};

/// Symbolic icon names used by the screens, each with a Material fallback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Icon {
    Folder,
    Doc,
    Photo,
    Video,
    MusicNote,
    DocText,
    ArchiveBox,
    MagnifyingGlass,
    Gear,
    Ellipsis,
    Trash,
    Share,
    Duplicate,
    MoveToFolder,
    Add,
    Back,
    Close,
    Check,
    Info,
    PieChart,
    ChevronRight,
}

impl Icon {
    pub const ALL: [Icon; 21] = [
        Icon::Folder,
        Icon::Doc,
        Icon::Photo,
        Icon::Video,
        Icon::MusicNote,
        Icon::DocText,
        Icon::ArchiveBox,
        Icon::MagnifyingGlass,
        Icon::Gear,
        Icon::Ellipsis,
        Icon::Trash,
        Icon::Share,
        Icon::Duplicate,
        Icon::MoveToFolder,
        Icon::Add,
        Icon::Back,
        Icon::Close,
        Icon::Check,
        Icon::Info,
        Icon::PieChart,
        Icon::ChevronRight,
    ];

    pub fn symbol(self) -> &'static str {
        match self {
            Icon::Folder => "folder.fill",
            Icon::Doc => "doc.fill",
            Icon::Photo => "photo.fill",
            Icon::Video => "video.fill",
            Icon::MusicNote => "music.note",
            Icon::DocText => "doc.text.fill",
            Icon::ArchiveBox => "archivebox.fill",
            Icon::MagnifyingGlass => "magnifyingglass",
            Icon::Gear => "gearshape.fill",
            Icon::Ellipsis => "ellipsis.circle.fill",
            Icon::Trash => "trash.fill",
            Icon::Share => "square.and.arrow.up",
            Icon::Duplicate => "doc.on.doc",
            Icon::MoveToFolder => "folder.badge.plus",
            Icon::Add => "plus.circle.fill",
            Icon::Back => "arrow.left",
            Icon::Close => "xmark",
            Icon::Check => "checkmark",
            Icon::Info => "info.circle",
            Icon::PieChart => "chart.pie.fill",
            Icon::ChevronRight => "chevron.right",
        }
    }

    /// Material Icons name for platforms without the symbolic set.
    pub fn material_name(self) -> &'static str {
        match self {
            Icon::Folder => "folder",
            Icon::Doc => "insert-drive-file",
            Icon::Photo => "image",
            Icon::Video => "videocam",
            Icon::MusicNote => "audiotrack",
            Icon::DocText => "description",
            Icon::ArchiveBox => "archive",
            Icon::MagnifyingGlass => "search",
            Icon::Gear => "settings",
            Icon::Ellipsis => "more-vert",
            Icon::Trash => "delete",
            Icon::Share => "share",
            Icon::Duplicate => "content-copy",
            Icon::MoveToFolder => "drive-file-move",
            Icon::Add => "add-circle",
            Icon::Back => "arrow-back",
            Icon::Close => "close",
            Icon::Check => "check",
            Icon::Info => "info",
            Icon::PieChart => "pie-chart",
            Icon::ChevronRight => "chevron-right",
        }
    }
}

impl fmt::Display for Icon {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Icon {
    type Err = FileBrowserError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icon::ALL
            .iter()
            .copied()
            .find(|icon| icon.symbol() == s)
            .ok_or_else(|| FileBrowserError::Unsupported(format!("unknown icon: {s}")))
    }
}

impl TryFrom<String> for Icon {
    type Error = FileBrowserError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Icon> for String {
    fn from(icon: Icon) -> Self {
        icon.symbol().to_string()
    }
}
