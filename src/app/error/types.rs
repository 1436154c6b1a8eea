//! 错误类型定义

use thiserror::Error;

/// 分页器错误类型
#[derive(Error, Debug)]
pub enum PaginatorError {
    #[error("Invalid config: {0}")]
    ConfigError(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
}

/// 应用程序通用结果类型
pub type Result<T> = anyhow::Result<T>;
