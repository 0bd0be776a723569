use std::env;
use std::str::FromStr;

use sqlx::postgres::{PgConnectOptions, PgPoolOptions};
use sqlx::PgPool;
use tracing::debug;

use crate::error::{Error, Result};
use crate::infra::rows::ResultSet;

/// 仓库侧固定的项目标识
pub const PROJECT_ID: &str = "measurement-lab";

const DATABASE_URL_VAR: &str = "MLAB_DATABASE_URL";

/// 已认证的仓库会话：一个进程通常只建一次，之后只读
pub struct Session {
    pool: PgPool,
    project: &'static str,
}

impl Session {
    /// 建立到仓库的认证连接
    ///
    /// 连接串从环境变量 `MLAB_DATABASE_URL` 读取（支持 .env 文件），
    /// 凭证校验完全交给仓库侧，这里不做重试。
    pub async fn connect() -> Result<Self> {
        dotenvy::dotenv().ok();
        let url = env::var(DATABASE_URL_VAR)
            .map_err(|_| Error::Config(format!("{} must be set", DATABASE_URL_VAR)))?;

        let options = PgConnectOptions::from_str(&url)?.application_name(PROJECT_ID);
        let pool = PgPoolOptions::new()
            .max_connections(5)
            .connect_with(options)
            .await?;

        Ok(Self {
            pool,
            project: PROJECT_ID,
        })
    }

    pub fn project(&self) -> &str {
        self.project
    }

    /// 提交任意 SQL，把完整结果集物化到内存
    ///
    /// 不分页、不限流、不设本地超时；引擎侧的失败原样抛出。
    pub async fn query(&self, sql: &str) -> Result<ResultSet> {
        debug!(project = self.project, sql, "提交仓库查询");
        let rows = sqlx::query(sql).fetch_all(&self.pool).await?;
        debug!(row_count = rows.len(), "查询返回");
        Ok(ResultSet::from_pg_rows(&rows))
    }
}
