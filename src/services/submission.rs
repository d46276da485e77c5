//! 提交协调器 - 业务能力层
//!
//! 打包最终答案并发送；失败不自动重试，
//! 失败后的走向由流程层跑查重判定再决定。

use std::sync::Arc;
use tracing::debug;

use crate::clients::SurveyBackend;
use crate::config::Config;
use crate::error::ApiError;
use crate::models::{AnswerSet, SubmissionPayload};

/// 提交协调器
pub struct SubmissionCoordinator {
    backend: Arc<dyn SurveyBackend>,
    client_signature: String,
}

impl SubmissionCoordinator {
    /// 创建新的提交协调器
    pub fn new(backend: Arc<dyn SurveyBackend>, config: &Config) -> Self {
        Self {
            backend,
            client_signature: config.client_signature.clone(),
        }
    }

    /// 提交一份答案
    ///
    /// # 参数
    /// - `uid`: 参与者 ID
    /// - `answers`: 渲染引擎给出的最终答案（这里取不可变快照）
    ///
    /// # 返回
    /// 负载每次新建，带客户端签名和发送时刻的 ISO-8601 时间戳；
    /// 非成功状态返回携带响应体文本（或默认文案）的错误
    pub async fn submit(&self, uid: &str, answers: &AnswerSet) -> Result<(), ApiError> {
        let payload = SubmissionPayload::new(uid, answers.clone(), &self.client_signature);

        debug!(
            "打包提交: uid={}, surveyVersion={}, submittedAt={}",
            payload.uid, payload.survey_version, payload.metadata.submitted_at
        );

        self.backend.submit(&payload).await
    }
}
