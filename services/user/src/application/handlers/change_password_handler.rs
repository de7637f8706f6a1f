//! 修改密码处理器

use std::sync::Arc;

use async_trait::async_trait;
use expert_common::UserId;
use expert_cqrs_core::CommandHandler;
use expert_errors::{AppError, AppResult};
use tracing::{info, warn};

use crate::application::commands::ChangePasswordCommand;
use crate::domain::repositories::UserRepository;
use crate::domain::services::PasswordEncoder;
use crate::error::UserError;

/// 修改密码处理器
pub struct ChangePasswordHandler {
    user_repo: Arc<dyn UserRepository>,
    password_encoder: Arc<dyn PasswordEncoder>,
}

impl ChangePasswordHandler {
    pub fn new(
        user_repo: Arc<dyn UserRepository>,
        password_encoder: Arc<dyn PasswordEncoder>,
    ) -> Self {
        Self {
            user_repo,
            password_encoder,
        }
    }
}

#[async_trait]
impl CommandHandler<ChangePasswordCommand> for ChangePasswordHandler {
    async fn handle(&self, command: ChangePasswordCommand) -> AppResult<()> {
        info!(user_id = %command.user_id, "Handling ChangePasswordCommand");

        // 1. 解析用户 ID
        let user_id = UserId::from_string(&command.user_id)
            .map_err(|_| AppError::validation("Invalid user id"))?;

        // 2. 查找用户
        let mut user = self
            .user_repo
            .find_by_id(&user_id)
            .await?
            .ok_or(UserError::UserNotFound)?;

        // 3. 验证当前密码
        if !self
            .password_encoder
            .matches(&command.old_password, &user.password_hash)?
        {
            warn!(user_id = %user.id, "Current password mismatch");
            return Err(UserError::CurrentPasswordMismatch.into());
        }

        // 4. 新密码必须不同于当前密码
        if self
            .password_encoder
            .matches(&command.new_password, &user.password_hash)?
        {
            warn!(user_id = %user.id, "New password equals current password");
            return Err(UserError::PasswordUnchanged.into());
        }

        // 5. 编码新密码并持久化
        let new_hash = self.password_encoder.encode(&command.new_password)?;
        user.update_password(new_hash);
        self.user_repo.update(&user).await?;

        info!(user_id = %user.id, "Password changed");
        Ok(())
    }
}
