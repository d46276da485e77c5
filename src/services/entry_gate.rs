//! 入口闸门 - 业务能力层
//!
//! 参与者带着新输入的 ID 尝试开始问卷时的准入判定：
//! 查重通过才持久化并放行，已完成或无法判定都不放行。

use tracing::{info, warn};

use crate::error::AppResult;
use crate::services::duplicate_guard::DuplicateGuard;
use crate::services::identity_resolver::normalize_identity;
use crate::services::identity_store::IdentityStore;

/// 入口闸门判定
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EntryDecision {
    /// 输入为空，停留在入口页
    MissingInput,
    /// 已有提交记录，拒绝进入（不改动任何状态）
    AlreadyCompleted,
    /// 查重接口失败，无法判定，不放行也不持久化
    Indeterminate { message: String },
    /// 放行，ID 已持久化一次
    Admitted { uid: String },
}

/// 入口闸门
pub struct EntryGate {
    guard: DuplicateGuard,
    store: IdentityStore,
}

impl EntryGate {
    /// 创建新的入口闸门
    pub fn new(guard: DuplicateGuard, store: IdentityStore) -> Self {
        Self { guard, store }
    }

    /// 判定一次入口尝试
    ///
    /// # 参数
    /// - `raw_input`: 参与者在入口表单输入的原始文本
    ///
    /// # 返回
    /// 放行时 ID 已经持久化完毕；存储写入失败才向上传播
    pub async fn evaluate(&self, raw_input: &str) -> AppResult<EntryDecision> {
        let Some(uid) = normalize_identity(raw_input) else {
            return Ok(EntryDecision::MissingInput);
        };

        match self.guard.check_exists(&uid).await {
            Ok(true) => {
                info!("参与者 {} 已完成问卷，入口拒绝", uid);
                Ok(EntryDecision::AlreadyCompleted)
            }
            Ok(false) => {
                // 放行时持久化，正好一次
                self.store.save(&uid).await?;
                info!("✓ 参与者 {} 通过入口查重，已持久化", uid);
                Ok(EntryDecision::Admitted { uid })
            }
            Err(check_error) => {
                warn!("⚠️ 入口查重失败，无法判定: {}", check_error);
                Ok(EntryDecision::Indeterminate {
                    message: check_error.to_string(),
                })
            }
        }
    }
}
