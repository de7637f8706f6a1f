//! 用户实体

use chrono::{DateTime, Utc};
use expert_common::{AuditInfo, UserId};
use serde::{Deserialize, Serialize};

use crate::domain::value_objects::{Email, HashedPassword};
use crate::error::UserError;

/// 用户角色
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UserRole {
    User,
    Admin,
}

impl UserRole {
    /// 从字符串解析角色
    pub fn of(role: &str) -> Result<Self, UserError> {
        match role.to_ascii_uppercase().as_str() {
            "USER" => Ok(Self::User),
            "ADMIN" => Ok(Self::Admin),
            _ => Err(UserError::InvalidUserRole),
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UserRole::User => write!(f, "USER"),
            UserRole::Admin => write!(f, "ADMIN"),
        }
    }
}

/// 用户实体
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub email: Email,
    pub password_hash: HashedPassword,
    pub role: UserRole,
    pub last_password_change_at: Option<DateTime<Utc>>,
    pub audit_info: AuditInfo,
}

impl User {
    pub fn new(email: Email, password_hash: HashedPassword, role: UserRole) -> Self {
        Self {
            id: UserId::new(),
            email,
            password_hash,
            role,
            last_password_change_at: Some(Utc::now()),
            audit_info: AuditInfo::default(),
        }
    }

    /// 更新密码并记录修改时间
    pub fn update_password(&mut self, password_hash: HashedPassword) {
        self.password_hash = password_hash;
        self.last_password_change_at = Some(Utc::now());
        self.audit_info.update(Some(self.id.clone()));
    }

    /// 变更角色
    pub fn update_role(&mut self, role: UserRole) {
        self.role = role;
        self.audit_info.update(None);
    }

    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}
