//! 密码编码服务
//!
//! 修改密码规则通过该接口验证和编码密码明文，
//! 默认实现委托给 Argon2。

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng},
};
use expert_errors::{AppError, AppResult};

use crate::domain::value_objects::HashedPassword;

/// 密码编码接口
#[cfg_attr(test, mockall::automock)]
pub trait PasswordEncoder: Send + Sync {
    /// 验证明文密码是否与存储哈希匹配
    fn matches(&self, plain_password: &str, hash: &HashedPassword) -> AppResult<bool>;

    /// 编码明文密码为存储哈希
    fn encode(&self, plain_password: &str) -> AppResult<HashedPassword>;
}

/// Argon2 密码编码器
pub struct Argon2PasswordEncoder;

impl PasswordEncoder for Argon2PasswordEncoder {
    fn matches(&self, plain_password: &str, hash: &HashedPassword) -> AppResult<bool> {
        let parsed_hash = PasswordHash::new(hash.as_str())
            .map_err(|e| AppError::internal(format!("Invalid password hash: {}", e)))?;

        Ok(Argon2::default()
            .verify_password(plain_password.as_bytes(), &parsed_hash)
            .is_ok())
    }

    fn encode(&self, plain_password: &str) -> AppResult<HashedPassword> {
        let salt = SaltString::generate(&mut OsRng);

        let password_hash = Argon2::default()
            .hash_password(plain_password.as_bytes(), &salt)
            .map_err(|e| AppError::internal(format!("Password hashing failed: {}", e)))?
            .to_string();

        Ok(HashedPassword::from_hash(password_hash))
    }
}
