//! 应用层：错误、日志与配置

pub mod config;
pub mod error;
pub mod logging;
