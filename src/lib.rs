//! ndt-guide - M-Lab NDT 数据表的查询助手
//!
//! 提供三件事：
//! - 逻辑表名（"ndt5"/"ndt7"）到仓库完整路径的解析
//! - 三条固定分析的 SQL 文本构造（按日聚合、服务器清单、客户端清单）
//! - 认证会话的建立与 SQL 的转发执行（结果物化为内存表）
//!
//! 聚合、过滤、分组全部交给外部查询引擎，这里只负责拼 SQL。
//!
//! ```ignore
//! use ndt_guide::{NdtGuide, QueryFilters, sql_daily_aggregate};
//!
//! let filters = QueryFilters { client_country: Some("us".into()), ..Default::default() };
//! let sql = sql_daily_aggregate("ndt7", "2023-01-01", "2023-01-31", "avg", &filters)?;
//!
//! let mut guide = NdtGuide::new();
//! guide.login().await?;
//! let result = guide.exec_sql(&sql).await?;
//! ```

pub mod core;
pub mod error;
pub mod guide;
pub mod infra;
pub mod models;

pub use crate::core::sql::{
    get_table_path, sql_daily_aggregate, sql_get_clients, sql_get_servers, NDT_NAMESPACE,
    SUPPORTED_TABLES,
};
pub use error::{Error, Result};
pub use guide::NdtGuide;
pub use infra::rows::ResultSet;
pub use infra::warehouse::{Session, PROJECT_ID};
pub use models::query::{AggFunc, QueryFilters};
pub use models::schema::get_schema;
