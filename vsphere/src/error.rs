//! vSphere 客户端错误定义

use thiserror::Error;

/// vSphere 客户端错误类型
#[derive(Error, Debug)]
pub enum VsphereError {
    #[error("HTTP 错误: {0}")]
    HttpError(String),

    #[error("认证错误: {0}")]
    AuthError(String),

    #[error("API 错误 [{0}]: {1}")]
    ApiError(u16, String),

    #[error("解析错误: {0}")]
    ParseError(String),

    #[error("资源不存在: {0}")]
    NotFound(String),
}

/// vSphere 客户端结果类型
pub type Result<T> = std::result::Result<T, VsphereError>;
