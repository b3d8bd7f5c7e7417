//! 基础设施层 - 端口适配器

pub mod persistence;
pub mod upstream;
