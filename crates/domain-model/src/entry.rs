use serde::{Deserialize, Serialize};

use crate::{Category, Icon};

/// 目录项类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    File,
    Folder,
}

/// 目录中的一个直接子项，列目录时生成的快照
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    pub name: String,
    pub path: String,
    pub is_directory: bool,
    pub size: u64,
    /// Unix 时间戳（秒），最近修改时间
    pub modification_time: i64,
}

impl Entry {
    pub fn kind(&self) -> EntryKind {
        if self.is_directory {
            EntryKind::Folder
        } else {
            EntryKind::File
        }
    }

    /// 按名称分类（目录同样按名称，聚合时不会用到）
    pub fn category(&self) -> Category {
        Category::from_file_name(&self.name)
    }

    pub fn icon(&self) -> Icon {
        if self.is_directory {
            Icon::Folder
        } else {
            self.category().icon()
        }
    }
}
