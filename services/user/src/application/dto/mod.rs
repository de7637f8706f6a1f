//! 请求/响应 DTO

pub mod change_password_request;

pub use change_password_request::*;
