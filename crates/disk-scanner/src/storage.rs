use filedeck_domain::StorageInfo;

use crate::FileAccess;

/// Capacity of the volume behind `fs`; all zeros when it cannot be read.
pub fn storage_info<F>(fs: &F) -> StorageInfo
where
    F: FileAccess + ?Sized,
{
    match (fs.total_disk_capacity(), fs.free_disk_space()) {
        (Ok(total), Ok(free)) => StorageInfo::new(total, free),
        (Err(e), _) | (_, Err(e)) => {
            log::error!("failed to get storage info: {e}");
            StorageInfo::default()
        }
    }
}
