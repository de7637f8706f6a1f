//! 命令处理器

pub mod change_password_handler;

pub use change_password_handler::*;
