//! 值对象

pub mod email;
pub mod password;

pub use email::*;
pub use password::*;
