//! 错误类型定义
//!
//! 按来源分类：后端接口 / 问卷文档 / 本地存储
//!
//! 注意：重复提交、入口拒绝这类属于正常业务走向的情况不在这里，
//! 它们由 `EntryDecision` / `FlowOutcome` 表达。

use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 后端接口错误
    #[error("接口错误: {0}")]
    Api(#[from] ApiError),
    /// 问卷文档错误
    #[error("问卷错误: {0}")]
    Schema(#[from] SchemaError),
    /// 本地存储错误
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
}

/// 后端接口错误
#[derive(Debug, Error)]
pub enum ApiError {
    /// 网络请求失败（请求根本没有得到响应）
    #[error("请求失败 ({endpoint}): {source}")]
    RequestFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
    /// 接口返回非成功状态码
    ///
    /// `message` 是响应体文本；响应体为空时由调用方填入默认文案
    #[error("接口返回错误状态 ({endpoint}, HTTP {status}): {message}")]
    BadStatus {
        endpoint: String,
        status: u16,
        message: String,
    },
    /// 响应体 JSON 解析失败
    #[error("JSON 解析失败 ({endpoint}): {source}")]
    JsonParseFailed {
        endpoint: String,
        #[source]
        source: reqwest::Error,
    },
}

impl ApiError {
    /// 创建网络请求失败错误
    pub fn request_failed(endpoint: impl Into<String>, source: reqwest::Error) -> Self {
        ApiError::RequestFailed {
            endpoint: endpoint.into(),
            source,
        }
    }

    /// 创建错误状态码错误
    pub fn bad_status(endpoint: impl Into<String>, status: u16, message: impl Into<String>) -> Self {
        ApiError::BadStatus {
            endpoint: endpoint.into(),
            status,
            message: message.into(),
        }
    }

    /// 展示给参与者的失败文案
    ///
    /// 服务端返回的响应体文本优先，其余情况用错误自身的描述
    pub fn user_message(&self) -> String {
        match self {
            ApiError::BadStatus { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// 问卷文档错误
#[derive(Debug, Error)]
pub enum SchemaError {
    /// 问卷文档解析失败
    #[error("问卷文档解析失败: {source}")]
    DocumentParseFailed {
        #[source]
        source: serde_json::Error,
    },
    /// 插入的休息页与文档中已有页面重名
    ///
    /// 页名在文档内必须唯一，重名会破坏后续所有按名查找
    #[error("问卷中已存在同名页面: {name}")]
    DuplicatePageName { name: String },
}

/// 本地存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
