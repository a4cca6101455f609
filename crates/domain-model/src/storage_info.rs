use serde::{Deserialize, Serialize};

/// 卷容量信息（字节）
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StorageInfo {
    pub total_space: u64,
    pub free_space: u64,
    pub used_space: u64,
}

impl StorageInfo {
    pub fn new(total_space: u64, free_space: u64) -> Self {
        Self {
            total_space,
            free_space,
            used_space: total_space.saturating_sub(free_space),
        }
    }

    pub fn used_percentage(&self) -> f64 {
        if self.total_space == 0 {
            return 0.0;
        }
        self.used_space as f64 / self.total_space as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_used_space() {
        let info = StorageInfo::new(50_000_000_000, 10_000_000_000);
        assert_eq!(info.used_space, 40_000_000_000);
        assert!((info.used_percentage() - 80.0).abs() < 1e-9);
    }

    #[test]
    fn test_empty_volume() {
        let info = StorageInfo::default();
        assert_eq!(info.used_percentage(), 0.0);
        assert_eq!(StorageInfo::new(10, 20).used_space, 0);
    }
}
