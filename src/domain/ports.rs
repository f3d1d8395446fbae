use crate::domain::model::SourceEntry;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::time::Duration;

/// 外部詞典來源 (例如維基詞典)
#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Fetches the raw entry for an already-normalized title.
    async fn fetch(&self, title: &str) -> Result<SourceEntry>;
}

pub trait ConfigProvider: Send + Sync {
    fn api_endpoint(&self) -> &str;
    fn timeout(&self) -> Duration;
    fn user_agent(&self) -> &str;

    /// 自訂標記表 (pure, foreign)；None 表示使用內建表
    fn markers(&self) -> Option<(&[String], &[String])> {
        None
    }
}
