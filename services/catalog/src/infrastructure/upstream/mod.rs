//! 上游目录适配器

mod http;
mod stub;

pub use http::HttpCatalogClient;
pub use stub::StubCatalogClient;
