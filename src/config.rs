/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 问卷 JSON 文档地址
    pub survey_url: String,
    /// 后端 API 基础地址（提交 / 查重接口的公共前缀）
    pub api_base_url: String,
    /// 导航参数传入的参与者 ID（对应网页版的 ?uid=，可选）
    pub participant_id: Option<String>,
    /// 参与者 ID 的本地持久化文件
    pub identity_file: String,
    /// 分节休息页计划文件（TOML，可选，缺省用内置计划）
    pub break_plan_file: Option<String>,
    /// 提交时携带的客户端签名
    pub client_signature: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            survey_url: "http://localhost:8080/survey.json".to_string(),
            api_base_url: "http://localhost:8080".to_string(),
            participant_id: None,
            identity_file: "survey_uid.txt".to_string(),
            break_plan_file: None,
            client_signature: concat!("survey_submit/", env!("CARGO_PKG_VERSION"), " (reqwest)")
                .to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            survey_url: std::env::var("SURVEY_URL").unwrap_or(default.survey_url),
            api_base_url: std::env::var("API_BASE_URL").unwrap_or(default.api_base_url),
            participant_id: std::env::var("SURVEY_UID").ok().filter(|v| !v.trim().is_empty()),
            identity_file: std::env::var("IDENTITY_FILE").unwrap_or(default.identity_file),
            break_plan_file: std::env::var("BREAK_PLAN_FILE").ok().filter(|v| !v.trim().is_empty()),
            client_signature: std::env::var("CLIENT_SIGNATURE").unwrap_or(default.client_signature),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(default.verbose_logging),
        }
    }
}
