use serde::{Deserialize, Serialize};

/// 执行动作
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum FileAction {
    CreateFolder { path: String },
    Delete { path: String },
    Copy { from: String, to: String },
    Move { from: String, to: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardOperation {
    Copy,
    Move,
}

/// 剪贴板中待粘贴的条目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClipboardItem {
    pub path: String,
    pub operation: ClipboardOperation,
}

impl ClipboardItem {
    pub fn copy(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            operation: ClipboardOperation::Copy,
        }
    }

    pub fn cut(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            operation: ClipboardOperation::Move,
        }
    }

    /// The action pasting this item into `destination` performs.
    pub fn to_action(&self, destination: String) -> FileAction {
        let from = self.path.clone();
        match self.operation {
            ClipboardOperation::Copy => FileAction::Copy { from, to: destination },
            ClipboardOperation::Move => FileAction::Move { from, to: destination },
        }
    }
}
