pub mod aggregator;
pub mod file_access;
pub mod lister;
pub mod memory;
pub mod paths;
pub mod search;
pub mod std_fs;
pub mod storage;
mod walk;

pub use aggregator::{aggregate_by_category, aggregate_by_category_par};
pub use file_access::*;
pub use lister::{compare_entries, compare_names, list_directory, try_list_directory};
pub use memory::MemoryFileAccess;
pub use paths::{file_name, join_path, parent_path};
pub use search::{is_searchable_query, search, MIN_QUERY_LEN};
pub use std_fs::StdFileAccess;
pub use storage::storage_info;

pub use filedeck_domain::{classify, Category, CategoryTotals, Entry, StorageInfo};
