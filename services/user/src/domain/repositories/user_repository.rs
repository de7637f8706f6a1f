//! 用户 Repository trait
//!
//! 持久化引擎由实现方负责，包括锁和事务纪律。

use async_trait::async_trait;
use expert_common::UserId;
use expert_errors::AppResult;

use crate::domain::user::User;

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// 根据 ID 查找用户
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>>;

    /// 保存新用户
    async fn save(&self, user: &User) -> AppResult<()>;

    /// 更新已有用户
    async fn update(&self, user: &User) -> AppResult<()>;
}
