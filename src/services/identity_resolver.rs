//! 参与者 ID 解析 - 业务能力层
//!
//! 优先级：导航参数 > 本地持久化值；两者都没有时为空。
//! 解析本身没有副作用，新 ID 的持久化由入口闸门在放行时做一次。

use std::fmt;

/// 参与者 ID 的来源（仅用于日志显示）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    /// 导航参数携带（对应网页版的 ?uid=）
    Navigation,
    /// 本地持久化回退
    Persisted,
    /// 入口表单新输入
    EntryForm,
}

impl fmt::Display for IdentitySource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdentitySource::Navigation => write!(f, "导航参数"),
            IdentitySource::Persisted => write!(f, "本地持久化"),
            IdentitySource::EntryForm => write!(f, "入口表单"),
        }
    }
}

/// 解析出的参与者 ID
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedIdentity {
    /// 参与者 ID，已去除首尾空白
    pub uid: String,
    /// ID 来源
    pub source: IdentitySource,
}

/// 规整单个候选值：去首尾空白，空白串视为缺失
pub fn normalize_identity(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// 解析当前会话的参与者 ID
///
/// # 参数
/// - `navigation`: 导航参数携带的值
/// - `persisted`: 上次持久化的值
///
/// # 返回
/// 导航值优先；两者都缺失或为空白时返回 None
pub fn resolve_identity(
    navigation: Option<&str>,
    persisted: Option<&str>,
) -> Option<ResolvedIdentity> {
    if let Some(uid) = navigation.and_then(normalize_identity) {
        return Some(ResolvedIdentity {
            uid,
            source: IdentitySource::Navigation,
        });
    }

    persisted.and_then(normalize_identity).map(|uid| ResolvedIdentity {
        uid,
        source: IdentitySource::Persisted,
    })
}
