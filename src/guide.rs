use tracing::info;

use crate::error::{Error, Result};
use crate::infra::rows::ResultSet;
use crate::infra::warehouse::Session;

/// NDT 查询门面：持有（至多一个）仓库会话，转发 SQL 执行
///
/// 会话在 `login()` 成功前不存在；SQL 构造函数不依赖会话，
/// 可以在未登录时使用。
#[derive(Default)]
pub struct NdtGuide {
    session: Option<Session>,
}

impl NdtGuide {
    pub fn new() -> Self {
        Self { session: None }
    }

    /// 建立认证会话并持有；失败时原样抛出，不做重试
    pub async fn login(&mut self) -> Result<()> {
        let session = Session::connect().await?;
        info!(project = session.project(), "仓库会话已建立");
        self.session = Some(session);
        Ok(())
    }

    /// 当前会话；从未 login 则为 None（不校验会话存活）
    pub fn client(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// 执行任意 SQL，返回物化结果集；未登录时返回 NoSession
    pub async fn exec_sql(&self, sql: &str) -> Result<ResultSet> {
        let session = self.session.as_ref().ok_or(Error::NoSession)?;
        session.query(sql).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn client_is_absent_before_login() {
        let guide = NdtGuide::new();
        assert!(guide.client().is_none());
    }

    #[tokio::test]
    async fn exec_sql_without_session_fails_cleanly() {
        let guide = NdtGuide::new();
        let err = guide.exec_sql("SELECT 1").await.unwrap_err();
        assert!(matches!(err, Error::NoSession));
        assert!(err.to_string().contains("login"));
    }
}
