//! 服务错误定义

use expert_errors::AppError;
use thiserror::Error;

/// 用户服务错误
#[derive(Debug, Error)]
pub enum UserError {
    #[error("User not found")]
    UserNotFound,

    #[error("current password mismatch")]
    CurrentPasswordMismatch,

    #[error("new password must differ from current password")]
    PasswordUnchanged,

    #[error("Invalid user role")]
    InvalidUserRole,
}

impl From<UserError> for AppError {
    fn from(err: UserError) -> Self {
        match err {
            UserError::UserNotFound => AppError::not_found(err.to_string()),
            UserError::CurrentPasswordMismatch
            | UserError::PasswordUnchanged
            | UserError::InvalidUserRole => AppError::validation(err.to_string()),
        }
    }
}
