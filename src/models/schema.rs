//! 问卷文档模型
//!
//! 问卷由外部渲染引擎定义，这里只为流程需要的字段建模，
//! 其余字段通过 `#[serde(flatten)]` 原样保留，保证
//! 反序列化 → 变换 → 序列化 一轮之后不丢任何信息。

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// 参与者答案集合（题目名 → 答案值）
///
/// 渲染引擎在完成前独占持有，提交时取一份不可变快照
pub type AnswerSet = Map<String, Value>;

/// 问卷文档
///
/// 不变量：页名在文档内唯一
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyDocument {
    /// 有序页面序列
    #[serde(default)]
    pub pages: Vec<SurveyPage>,
    /// "下一页"按钮文案覆盖
    #[serde(rename = "pageNextText", default, skip_serializing_if = "Option::is_none")]
    pub page_next_text: Option<String>,
    /// "提交"按钮文案覆盖
    #[serde(rename = "completeText", default, skip_serializing_if = "Option::is_none")]
    pub complete_text: Option<String>,
    /// 其余全局字段原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 问卷页面
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SurveyPage {
    /// 页名（文档内唯一）
    pub name: String,
    /// 页标题
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    /// 有序元素序列
    #[serde(default)]
    pub elements: Vec<PageElement>,
    /// 其余页面字段原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// 页面元素
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageElement {
    /// 元素类型（"html" / "text" / "radiogroup" 等，由渲染引擎解释）
    #[serde(rename = "type")]
    pub kind: String,
    /// 元素名（即题目标识）
    pub name: String,
    /// 静态 HTML 内容（仅 kind == "html" 时有意义）
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub html: Option<String>,
    /// 题目描述
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// 其余元素字段原样保留
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl SurveyDocument {
    /// 按页名查找页面位置（线性扫描）
    pub fn page_position(&self, name: &str) -> Option<usize> {
        self.pages.iter().position(|p| p.name == name)
    }

    /// 文档中是否存在指定页名
    pub fn has_page(&self, name: &str) -> bool {
        self.page_position(name).is_some()
    }

    /// 全部页名，按文档顺序
    pub fn page_names(&self) -> Vec<&str> {
        self.pages.iter().map(|p| p.name.as_str()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_fields_round_trip() {
        // 文档级 / 页面级 / 元素级的未知字段都要原样保留
        let raw = serde_json::json!({
            "title": "My Survey",
            "showProgressBar": "top",
            "pageNextText": "Next subsection",
            "pages": [
                {
                    "name": "A1",
                    "title": "Section A",
                    "maxTimeToFinish": 120,
                    "elements": [
                        {
                            "type": "radiogroup",
                            "name": "A1_Q1",
                            "choices": ["yes", "no"],
                            "isRequired": true
                        }
                    ]
                }
            ]
        });

        let doc: SurveyDocument = serde_json::from_value(raw.clone()).unwrap();
        assert_eq!(doc.pages.len(), 1);
        assert_eq!(doc.page_next_text.as_deref(), Some("Next subsection"));

        let round_tripped = serde_json::to_value(&doc).unwrap();
        assert_eq!(round_tripped, raw);
    }

    #[test]
    fn test_absent_pages_is_empty() {
        let doc: SurveyDocument = serde_json::from_value(serde_json::json!({})).unwrap();
        assert!(doc.pages.is_empty());
    }

    #[test]
    fn test_page_position() {
        let doc: SurveyDocument = serde_json::from_value(serde_json::json!({
            "pages": [{ "name": "A1" }, { "name": "A2" }, { "name": "B1" }]
        }))
        .unwrap();

        assert_eq!(doc.page_position("A2"), Some(1));
        assert_eq!(doc.page_position("C1"), None);
        assert!(doc.has_page("B1"));
        assert_eq!(doc.page_names(), vec!["A1", "A2", "B1"]);
    }
}
