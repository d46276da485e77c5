//! 参与者 ID 存储 - 业务能力层
//!
//! 只负责"记住上次使用的参与者 ID"这一个键：
//! 入口放行时写一次，问卷路由缺少导航参数时读作回退。

use tokio::fs;
use tracing::debug;

use crate::config::Config;
use crate::error::StorageError;
use crate::services::identity_resolver::normalize_identity;

/// 参与者 ID 存储
#[derive(Clone)]
pub struct IdentityStore {
    file_path: String,
}

impl IdentityStore {
    /// 创建新的 ID 存储
    pub fn new(config: &Config) -> Self {
        Self {
            file_path: config.identity_file.clone(),
        }
    }

    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            file_path: path.into(),
        }
    }

    /// 持久化参与者 ID（入口放行时调用一次）
    pub async fn save(&self, uid: &str) -> Result<(), StorageError> {
        debug!("持久化参与者 ID: {}", uid);

        fs::write(&self.file_path, uid)
            .await
            .map_err(|e| StorageError::WriteFailed {
                path: self.file_path.clone(),
                source: e,
            })
    }

    /// 读取上次使用的参与者 ID
    ///
    /// 文件不存在返回 None，不算错误
    pub async fn load(&self) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(&self.file_path).await {
            Ok(content) => Ok(normalize_identity(&content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(StorageError::ReadFailed {
                path: self.file_path.clone(),
                source: e,
            }),
        }
    }
}
