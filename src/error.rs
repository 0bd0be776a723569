use thiserror::Error;

/// 全局错误类型：参数校验错误在发起任何网络调用之前返回，
/// 仓库侧错误原样透传（不重试、不降级）
#[derive(Error, Debug)]
pub enum Error {
    #[error("Unsupported table: {0} (expected one of: ndt5, ndt7)")]
    UnsupportedTable(String),

    #[error("Unsupported aggregate function: {0} (expected one of: avg, min, max)")]
    UnsupportedAggFunc(String),

    #[error("Missing date bound: {0} must not be empty")]
    MissingDateBound(&'static str),

    #[error("No active session: call login() before executing queries")]
    NoSession,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Warehouse error: {0}")]
    Warehouse(#[from] sqlx::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
