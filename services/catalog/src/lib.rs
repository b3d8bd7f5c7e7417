//! Catalog Service - 商品目录服务
//!
//! 读穿透缓存：本地存储未命中时回源上游并回写

pub mod api;
pub mod application;
pub mod infrastructure;
