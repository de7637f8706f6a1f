//! expert-cqrs-core - CQRS 核心库
//!
//! Command trait 与 Handler trait

mod command;

pub use command::*;
