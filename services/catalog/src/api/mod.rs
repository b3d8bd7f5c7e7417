//! API layer - HTTP 路由与错误映射

mod error;
mod routes;

pub use error::ApiError;
pub use routes::{api_routes, ops_routes};
