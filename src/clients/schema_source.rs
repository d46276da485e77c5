/// 问卷文档来源
///
/// 负责拉取问卷 JSON；每次都取最新副本，不走缓存
use async_trait::async_trait;
use tracing::debug;

use crate::config::Config;
use crate::error::{ApiError, AppResult, SchemaError};
use crate::models::SurveyDocument;

/// 文档加载失败时展示的文案
pub const DOCUMENT_LOAD_ERROR: &str = "Failed to load survey.json";

/// 问卷文档来源抽象
#[async_trait]
pub trait SchemaSource: Send + Sync {
    /// 拉取最新的问卷文档
    async fn fetch_document(&self) -> AppResult<SurveyDocument>;
}

/// 基于 reqwest 的文档来源
pub struct HttpSchemaSource {
    http: reqwest::Client,
    url: String,
}

impl HttpSchemaSource {
    /// 创建新的文档来源
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            url: config.survey_url.clone(),
        }
    }
}

#[async_trait]
impl SchemaSource for HttpSchemaSource {
    async fn fetch_document(&self) -> AppResult<SurveyDocument> {
        let response = self
            .http
            .get(&self.url)
            // 问卷可能随部署更新，始终取最新副本
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| ApiError::request_failed(self.url.clone(), e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            return Err(ApiError::bad_status(self.url.clone(), status, DOCUMENT_LOAD_ERROR).into());
        }

        let body = response
            .text()
            .await
            .map_err(|e| ApiError::request_failed(self.url.clone(), e))?;

        debug!("问卷文档拉取完成: {} 字节", body.len());

        let document: SurveyDocument = serde_json::from_str(&body)
            .map_err(|e| SchemaError::DocumentParseFailed { source: e })?;

        Ok(document)
    }
}
