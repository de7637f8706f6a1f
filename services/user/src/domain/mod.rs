//! 领域层
//!
//! 包含用户实体、值对象、仓储接口和密码编码服务

pub mod repositories;
pub mod services;
pub mod user;
pub mod value_objects;
