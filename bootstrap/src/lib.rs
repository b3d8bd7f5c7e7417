//! tienda-bootstrap - 服务启动支撑
//!
//! 运行时初始化、关闭信号与 metrics 导出

mod metrics;
mod runtime;

pub use metrics::MetricsRecorder;
pub use runtime::{init_runtime, shutdown_signal};
