//! 用户命令

pub mod change_password_command;

pub use change_password_command::*;
