pub mod action;
pub mod clipboard;
pub mod copy;
pub mod create;
pub mod delete;
pub mod r#move;
mod outcome;

pub use action::*;
pub use clipboard::*;
pub use copy::*;
pub use create::*;
pub use delete::*;
pub use r#move::*;
