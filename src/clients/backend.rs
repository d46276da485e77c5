/// 后端 API 客户端
///
/// 封装提交与查重两个接口的调用逻辑
use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use crate::config::Config;
use crate::error::ApiError;
use crate::models::SubmissionPayload;

/// 提交失败且服务端没有给出响应体时的默认文案
pub const DEFAULT_SUBMISSION_ERROR: &str = "Submission failed. Please try again later.";

/// 后端能力抽象
///
/// 流程层只依赖这个 trait，测试里用内存实现替换真实后端
#[async_trait]
pub trait SurveyBackend: Send + Sync {
    /// 提交问卷负载
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), ApiError>;

    /// 查询参与者 ID 是否已有提交记录
    ///
    /// 查询本身失败时返回 Err，调用方不得把 Err 当作 false
    async fn check_uid_exists(&self, uid: &str) -> Result<bool, ApiError>;
}

/// 查重接口的响应体
#[derive(Debug, Deserialize)]
struct ExistsResponse {
    exists: bool,
}

/// 基于 reqwest 的后端客户端
pub struct BackendClient {
    http: reqwest::Client,
    base_url: String,
}

impl BackendClient {
    /// 创建新的后端客户端
    pub fn new(http: reqwest::Client, config: &Config) -> Self {
        Self {
            http,
            base_url: config.api_base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl SurveyBackend for BackendClient {
    async fn submit(&self, payload: &SubmissionPayload) -> Result<(), ApiError> {
        let endpoint = format!("{}/api/submit", self.base_url);

        debug!("提交负载: uid={}, 答案 {} 条", payload.uid, payload.answers.len());

        let response = self
            .http
            .post(&endpoint)
            .json(payload)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(endpoint.clone(), e))?;

        if response.status().is_success() {
            debug!("提交成功: uid={}", payload.uid);
            return Ok(());
        }

        let status = response.status().as_u16();
        // 失败响应体是纯文本错误信息；为空时用默认文案
        let body = response.text().await.unwrap_or_default();
        let message = if body.trim().is_empty() {
            DEFAULT_SUBMISSION_ERROR.to_string()
        } else {
            body
        };

        Err(ApiError::bad_status(endpoint, status, message))
    }

    async fn check_uid_exists(&self, uid: &str) -> Result<bool, ApiError> {
        let endpoint = format!("{}/api/check/{}", self.base_url, uid);

        let response = self
            .http
            .get(&endpoint)
            .send()
            .await
            .map_err(|e| ApiError::request_failed(endpoint.clone(), e))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::bad_status(endpoint, status, body));
        }

        let parsed: ExistsResponse = response
            .json()
            .await
            .map_err(|e| ApiError::JsonParseFailed {
                endpoint: endpoint.clone(),
                source: e,
            })?;

        debug!("查重结果: uid={}, exists={}", uid, parsed.exists);

        Ok(parsed.exists)
    }
}
