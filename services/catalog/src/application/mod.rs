//! 应用层 - 读穿透查找编排

mod service;

pub use service::CatalogService;
