//! tienda-domain-core - 商品目录领域核心类型

mod price;
mod product;

pub use price::*;
pub use product::*;
