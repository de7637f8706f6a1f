//! 领域服务

pub mod password_encoder;

pub use password_encoder::*;
