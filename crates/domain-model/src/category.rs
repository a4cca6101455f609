use std::iter::Sum;
use std::ops::{Add, AddAssign};

use serde::{Deserialize, Serialize};

use crate::{classify, Icon};

/// 文件分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Image,
    Video,
    Audio,
    Document,
    Archive,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::Image,
        Category::Video,
        Category::Audio,
        Category::Document,
        Category::Archive,
        Category::Other,
    ];

    pub fn from_file_name(name: &str) -> Self {
        classify(name)
    }

    /// Dashboard label.
    pub fn label(self) -> &'static str {
        match self {
            Category::Image => "Images",
            Category::Video => "Videos",
            Category::Audio => "Audio",
            Category::Document => "Documents",
            Category::Archive => "Archives",
            Category::Other => "Other",
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            Category::Image => "#8B5CF6",
            Category::Video => "#EC4899",
            Category::Audio => "#14B8A6",
            Category::Document => "#F97316",
            Category::Archive => "#6366F1",
            Category::Other => "#6B7280",
        }
    }

    pub fn icon(self) -> Icon {
        match self {
            Category::Image => Icon::Photo,
            Category::Video => Icon::Video,
            Category::Audio => Icon::MusicNote,
            Category::Document => Icon::DocText,
            Category::Archive => Icon::ArchiveBox,
            Category::Other => Icon::Doc,
        }
    }
}

/// 按分类累计的字节数
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryTotals {
    pub images: u64,
    pub videos: u64,
    pub audio: u64,
    pub documents: u64,
    pub archives: u64,
    pub other: u64,
}

impl CategoryTotals {
    pub fn record(&mut self, category: Category, bytes: u64) {
        *self.slot_mut(category) += bytes;
    }

    pub fn get(&self, category: Category) -> u64 {
        match category {
            Category::Image => self.images,
            Category::Video => self.videos,
            Category::Audio => self.audio,
            Category::Document => self.documents,
            Category::Archive => self.archives,
            Category::Other => self.other,
        }
    }

    pub fn total(&self) -> u64 {
        Category::ALL.iter().map(|c| self.get(*c)).sum()
    }

    /// Share of `category` in the total, in percent.
    pub fn percentage(&self, category: Category) -> f64 {
        let total = self.total();
        if total == 0 {
            return 0.0;
        }
        self.get(category) as f64 / total as f64 * 100.0
    }

    pub fn iter(&self) -> impl Iterator<Item = (Category, u64)> + '_ {
        Category::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    fn slot_mut(&mut self, category: Category) -> &mut u64 {
        match category {
            Category::Image => &mut self.images,
            Category::Video => &mut self.videos,
            Category::Audio => &mut self.audio,
            Category::Document => &mut self.documents,
            Category::Archive => &mut self.archives,
            Category::Other => &mut self.other,
        }
    }
}

impl AddAssign for CategoryTotals {
    fn add_assign(&mut self, rhs: Self) {
        for category in Category::ALL {
            *self.slot_mut(category) += rhs.get(category);
        }
    }
}

impl Add for CategoryTotals {
    type Output = Self;

    fn add(mut self, rhs: Self) -> Self {
        self += rhs;
        self
    }
}

impl Sum for CategoryTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}
