//! 查重守卫 - 业务能力层
//!
//! 同一个存在性查询用在两处，后果不同：
//! - 入口闸门：已存在 → 拒绝进入
//! - 提交失败后：再查一次，把"其实已经提交成功"从瞬时错误里区分出来
//!
//! 查询本身失败（网络错误）必须和"不存在"区分开，
//! 不确定状态绝不默认成 false。

use std::sync::Arc;
use tracing::{info, warn};

use crate::clients::SurveyBackend;
use crate::error::ApiError;

/// 提交失败后的二次判定结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureClass {
    /// 服务端已有记录，按"已完成"这一良性结果处理
    AlreadyCompleted,
    /// 记录不存在，原始提交错误按可重试错误展示
    Transient { message: String },
}

/// 查重守卫
#[derive(Clone)]
pub struct DuplicateGuard {
    backend: Arc<dyn SurveyBackend>,
}

impl DuplicateGuard {
    /// 创建新的查重守卫
    pub fn new(backend: Arc<dyn SurveyBackend>) -> Self {
        Self { backend }
    }

    /// 查询参与者 ID 是否已有提交记录
    ///
    /// 查询失败原样向上传播，调用方自行决定不确定状态的走向
    pub async fn check_exists(&self, uid: &str) -> Result<bool, ApiError> {
        self.backend.check_uid_exists(uid).await
    }

    /// 提交失败后的归类
    ///
    /// # 参数
    /// - `uid`: 本次提交的参与者 ID
    /// - `submit_error`: 原始提交错误
    ///
    /// # 返回
    /// 已有记录 → AlreadyCompleted；无记录 → 原始错误文案；
    /// 查询本身失败 → 无法判定，仍然展示原始错误文案（绝不展示查重错误）
    pub async fn classify_submission_failure(
        &self,
        uid: &str,
        submit_error: &ApiError,
    ) -> FailureClass {
        match self.backend.check_uid_exists(uid).await {
            Ok(true) => {
                info!("参与者 {} 已有提交记录，失败按已完成处理", uid);
                FailureClass::AlreadyCompleted
            }
            Ok(false) => FailureClass::Transient {
                message: submit_error.user_message(),
            },
            Err(check_error) => {
                // 不确定状态：既不能当已完成，也不能替换原始错误
                warn!(
                    "查重接口本身失败，无法判定参与者 {} 的提交状态: {}",
                    uid, check_error
                );
                FailureClass::Transient {
                    message: submit_error.user_message(),
                }
            }
        }
    }
}
