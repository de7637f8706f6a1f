//! 修改密码请求 DTO
//!
//! 字段校验是业务规则之前的显式前置检查，所有违规一次性返回。

use expert_common::UserId;
use expert_config::PasswordPolicyConfig;
use serde::{Deserialize, Serialize};

use crate::application::commands::ChangePasswordCommand;

/// 字段级校验错误
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

impl FieldError {
    fn new(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            field,
            message: message.into(),
        }
    }
}

/// 修改密码请求
#[derive(Debug, Clone, Deserialize)]
pub struct ChangePasswordRequest {
    pub old_password: String,
    pub new_password: String,
}

impl ChangePasswordRequest {
    /// 按密码策略校验请求，收集全部字段错误
    ///
    /// 各条规则相互独立：空的新密码同时报长度、数字、大写违规。
    pub fn validate(&self, policy: &PasswordPolicyConfig) -> Result<(), Vec<FieldError>> {
        let mut errors = Vec::new();

        if self.old_password.trim().is_empty() {
            errors.push(FieldError::new("old_password", "current password is required"));
        }

        if self.new_password.trim().is_empty() {
            errors.push(FieldError::new("new_password", "new password is required"));
        }

        if self.new_password.chars().count() < policy.min_length {
            errors.push(FieldError::new(
                "new_password",
                format!(
                    "new password must be at least {} characters",
                    policy.min_length
                ),
            ));
        }

        if policy.require_digit && !self.new_password.chars().any(|c| c.is_ascii_digit()) {
            errors.push(FieldError::new(
                "new_password",
                "new password must contain at least one digit",
            ));
        }

        if policy.require_uppercase && !self.new_password.chars().any(|c| c.is_uppercase()) {
            errors.push(FieldError::new(
                "new_password",
                "new password must contain at least one uppercase letter",
            ));
        }

        if errors.is_empty() { Ok(()) } else { Err(errors) }
    }

    /// 结合目标用户 ID 转为命令
    pub fn into_command(self, user_id: &UserId) -> ChangePasswordCommand {
        ChangePasswordCommand {
            user_id: user_id.to_string(),
            old_password: self.old_password,
            new_password: self.new_password,
        }
    }
}
