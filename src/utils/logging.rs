/// 日志工具模块
///
/// 提供日志初始化和横幅输出的辅助函数
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::Config;

/// 初始化日志
///
/// 级别由 RUST_LOG 控制，默认 info
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 当前配置
pub fn log_startup(config: &Config) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - 问卷提交客户端");
    info!("📄 问卷地址: {}", config.survey_url);
    info!("🌐 后端地址: {}", config.api_base_url);
    info!("{}", "=".repeat(60));
}

/// 记录会话终态
///
/// # 参数
/// - `status`: 终态标签
/// - `message`: 展示给参与者的文案
pub fn log_terminal_state(status: &str, message: &str) {
    info!("\n{}", "─".repeat(60));
    info!("📊 会话结束: {}", status);
    info!("{}", message);
    info!("{}", "─".repeat(60));
}
