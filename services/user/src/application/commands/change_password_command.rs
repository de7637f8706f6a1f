//! 修改密码命令

use expert_cqrs_core::Command;
use serde::{Deserialize, Serialize};

/// 修改密码命令
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChangePasswordCommand {
    /// 用户 ID
    pub user_id: String,

    /// 当前密码（明文声明，仅用于比对）
    pub old_password: String,

    /// 新密码（明文声明，仅用于编码）
    pub new_password: String,
}

impl Command for ChangePasswordCommand {
    type Result = ();
}
