//! 用户服务库
//!
//! 用户账户领域的修改密码规则及其协作者接口：
//! - `domain`: User 实体、值对象、仓储接口、密码编码服务
//! - `application`: 请求 DTO、命令、处理器

pub mod application;
pub mod domain;
pub mod error;
