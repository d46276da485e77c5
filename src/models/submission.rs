//! 提交负载模型
//!
//! 每次提交尝试都重新构造一份负载，时间戳取构造当下，
//! 绝不跨重试复用旧负载。

use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};

use crate::models::schema::AnswerSet;

/// 问卷版本标记，随负载一起提交
pub const SURVEY_VERSION: &str = "v1";

/// 提交负载
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionPayload {
    /// 参与者 ID
    pub uid: String,
    /// 答案快照
    pub answers: AnswerSet,
    /// 问卷版本
    #[serde(rename = "surveyVersion")]
    pub survey_version: String,
    /// 提交元数据
    pub metadata: SubmissionMetadata,
}

/// 提交元数据
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmissionMetadata {
    /// 客户端签名
    #[serde(rename = "userAgent")]
    pub user_agent: String,
    /// 提交时间（ISO-8601，毫秒精度）
    #[serde(rename = "submittedAt")]
    pub submitted_at: String,
}

impl SubmissionPayload {
    /// 构造一份新负载，时间戳取当下
    pub fn new(uid: impl Into<String>, answers: AnswerSet, user_agent: impl Into<String>) -> Self {
        Self {
            uid: uid.into(),
            answers,
            survey_version: SURVEY_VERSION.to_string(),
            metadata: SubmissionMetadata {
                user_agent: user_agent.into(),
                submitted_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use serde_json::json;

    #[test]
    fn test_payload_carries_version_and_fresh_timestamp() {
        let before = Utc::now();

        let mut answers = AnswerSet::new();
        answers.insert("A1_Q1".to_string(), json!("yes"));
        let payload = SubmissionPayload::new("P9999", answers, "survey_submit/0.1 (reqwest)");

        assert_eq!(payload.survey_version, "v1");

        // 时间戳必须是合法的 ISO-8601，且不早于构造时刻
        let submitted_at: DateTime<Utc> =
            DateTime::parse_from_rfc3339(&payload.metadata.submitted_at)
                .unwrap()
                .with_timezone(&Utc);
        assert!(submitted_at.timestamp_millis() >= before.timestamp_millis());
    }

    #[test]
    fn test_payload_wire_field_names() {
        let payload = SubmissionPayload::new("P1234", AnswerSet::new(), "sig");
        let wire = serde_json::to_value(&payload).unwrap();

        assert_eq!(wire["uid"], "P1234");
        assert_eq!(wire["surveyVersion"], "v1");
        assert!(wire["metadata"]["userAgent"].is_string());
        assert!(wire["metadata"]["submittedAt"].is_string());
    }

    #[test]
    fn test_retried_payloads_are_distinct_objects() {
        // 重试必须重新打包，两次构造的时间戳相互独立
        let first = SubmissionPayload::new("P1", AnswerSet::new(), "sig");
        let second = SubmissionPayload::new("P1", AnswerSet::new(), "sig");

        let t1 = DateTime::parse_from_rfc3339(&first.metadata.submitted_at).unwrap();
        let t2 = DateTime::parse_from_rfc3339(&second.metadata.submitted_at).unwrap();
        assert!(t2 >= t1);
    }
}
