pub mod action;
pub mod category;
pub mod classifier;
pub mod entry;
pub mod icon;
pub mod settings;
pub mod storage_info;

pub use action::*;
pub use category::*;
pub use classifier::*;
pub use entry::*;
pub use icon::*;
pub use settings::*;
pub use storage_info::*;
