//! 仓储接口

pub mod user_repository;

pub use user_repository::*;
