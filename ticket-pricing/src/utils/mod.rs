//! 工具模块 - 日志等

pub mod logger;

pub use logger::init_logger;
