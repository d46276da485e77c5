//! 会话上下文
//!
//! 封装"当前是哪位参与者在作答"这一信息，ID 在会话内不可变

use std::fmt::Display;

use crate::services::identity_resolver::IdentitySource;

/// 会话上下文
#[derive(Debug, Clone)]
pub struct SessionCtx {
    /// 参与者 ID（会话内不可变）
    pub uid: String,

    /// ID 的来源（仅用于日志显示）
    pub source: IdentitySource,
}

impl SessionCtx {
    /// 创建新的会话上下文
    pub fn new(uid: impl Into<String>, source: IdentitySource) -> Self {
        Self {
            uid: uid.into(),
            source,
        }
    }
}

impl Display for SessionCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[参与者 {} 来源#{}]", self.uid, self.source)
    }
}
