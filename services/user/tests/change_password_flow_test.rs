//! 修改密码端到端流程测试（内存仓储 + 真实 Argon2 编码器）

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use expert_common::UserId;
use expert_config::PasswordPolicyConfig;
use expert_cqrs_core::CommandHandler;
use expert_errors::{AppError, AppResult};
use expert_user::application::dto::ChangePasswordRequest;
use expert_user::application::handlers::ChangePasswordHandler;
use expert_user::domain::repositories::UserRepository;
use expert_user::domain::services::{Argon2PasswordEncoder, PasswordEncoder};
use expert_user::domain::user::{User, UserRole};
use expert_user::domain::value_objects::Email;

// Mocks
struct InMemoryUserRepository {
    users: Mutex<HashMap<UserId, User>>,
}

impl InMemoryUserRepository {
    fn new() -> Self {
        Self {
            users: Mutex::new(HashMap::new()),
        }
    }

    fn get(&self, id: &UserId) -> Option<User> {
        self.users.lock().unwrap().get(id).cloned()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_id(&self, id: &UserId) -> AppResult<Option<User>> {
        Ok(self.users.lock().unwrap().get(id).cloned())
    }

    async fn save(&self, user: &User) -> AppResult<()> {
        self.users
            .lock()
            .unwrap()
            .insert(user.id.clone(), user.clone());
        Ok(())
    }

    async fn update(&self, user: &User) -> AppResult<()> {
        let mut users = self.users.lock().unwrap();
        if !users.contains_key(&user.id) {
            return Err(AppError::database("User does not exist"));
        }
        users.insert(user.id.clone(), user.clone());
        Ok(())
    }
}

async fn seed_user(repo: &InMemoryUserRepository, plain_password: &str) -> User {
    let encoder = Argon2PasswordEncoder;
    let user = User::new(
        Email::new("test@example.com").unwrap(),
        encoder.encode(plain_password).unwrap(),
        UserRole::User,
    );
    repo.save(&user).await.unwrap();
    user
}

fn request(old: &str, new: &str) -> ChangePasswordRequest {
    ChangePasswordRequest {
        old_password: old.to_string(),
        new_password: new.to_string(),
    }
}

#[tokio::test]
async fn test_change_password_end_to_end() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let encoder = Arc::new(Argon2PasswordEncoder);
    let handler = ChangePasswordHandler::new(repo.clone(), encoder.clone());

    let user = seed_user(&repo, "OldPass123").await;
    let policy = PasswordPolicyConfig::default();

    // 前置校验通过后才进入业务规则
    let req = request("OldPass123", "NewPass123");
    req.validate(&policy).unwrap();

    handler.handle(req.into_command(&user.id)).await.unwrap();

    let stored = repo.get(&user.id).unwrap();
    assert!(encoder.matches("NewPass123", &stored.password_hash).unwrap());
    assert!(!encoder.matches("OldPass123", &stored.password_hash).unwrap());
    assert_ne!(stored.password_hash.as_str(), "NewPass123");
}

#[tokio::test]
async fn test_change_password_is_not_idempotent() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let handler = ChangePasswordHandler::new(repo.clone(), Arc::new(Argon2PasswordEncoder));

    let user = seed_user(&repo, "OldPass123").await;

    // 第一次成功，旧密码随之失效
    handler
        .handle(request("OldPass123", "NewPass123").into_command(&user.id))
        .await
        .unwrap();

    // 相同的请求第二次必然失败
    let err = handler
        .handle(request("OldPass123", "NewPass123").into_command(&user.id))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::Validation(msg) if msg == "current password mismatch"));
}

#[tokio::test]
async fn test_change_password_unknown_user() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let handler = ChangePasswordHandler::new(repo, Arc::new(Argon2PasswordEncoder));

    let err = handler
        .handle(request("OldPass123", "NewPass123").into_command(&UserId::new()))
        .await
        .unwrap_err();

    assert!(matches!(err, AppError::NotFound(msg) if msg == "User not found"));
    assert_eq!(AppError::not_found("User not found").status_code(), 404);
}

#[tokio::test]
async fn test_rejected_request_never_reaches_the_rule() {
    let repo = Arc::new(InMemoryUserRepository::new());
    let user = seed_user(&repo, "OldPass123").await;
    let policy = PasswordPolicyConfig::default();

    let errors = request("OldPass123", "weak").validate(&policy).unwrap_err();
    assert!(!errors.is_empty());

    // 校验失败的请求不触发任何状态变化
    let encoder = Argon2PasswordEncoder;
    let stored = repo.get(&user.id).unwrap();
    assert!(encoder.matches("OldPass123", &stored.password_hash).unwrap());
}
