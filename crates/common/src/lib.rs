pub mod error;
pub mod config;
pub mod format;
pub mod telemetry;

pub use error::*;
pub use config::*;
pub use format::*;
pub use telemetry::*;
