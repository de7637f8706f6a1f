//! 用户领域实体

pub mod user;

pub use user::*;
