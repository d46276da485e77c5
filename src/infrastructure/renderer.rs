//! 渲染协作方边界 - 基础设施层
//!
//! 控件渲染、校验、翻页都是外部渲染引擎的事，这里只定义边界：
//! - `SurveyRenderer`：拿到变换后的文档，跑完整份问卷，交回答案快照
//! - `BreakRegistry`：休息页注册表（页名 → 激活控件），替代按 id 后缀扫描 DOM
//! - `PresentationMode`：当前页名 → 展示形态 的纯函数，替代全局 body class 切换

use async_trait::async_trait;
use regex::Regex;

use crate::models::{AnswerSet, BreakPlan, SurveyDocument};
use crate::services::schema_transformer::activation_control_id;

/// 导航按钮文案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationLabels {
    /// "下一页"按钮文案
    pub page_next_text: String,
    /// "提交"按钮文案
    pub complete_text: String,
}

impl NavigationLabels {
    /// 文档没有覆盖时的默认文案
    pub const DEFAULT_PAGE_NEXT: &'static str = "Next subsection";
    pub const DEFAULT_COMPLETE: &'static str = "Submit";

    /// 解析最终文案：文档内的覆盖优先，缺省退回默认值
    pub fn resolve(document: &SurveyDocument) -> Self {
        Self {
            page_next_text: document
                .page_next_text
                .clone()
                .unwrap_or_else(|| Self::DEFAULT_PAGE_NEXT.to_string()),
            complete_text: document
                .complete_text
                .clone()
                .unwrap_or_else(|| Self::DEFAULT_COMPLETE.to_string()),
        }
    }
}

/// 页面展示形态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PresentationMode {
    /// 普通内容页，渲染引擎自己的导航可见
    Normal,
    /// 休息页，隐藏引擎导航，只留激活控件
    Break,
}

/// 注册表里的单个休息页
#[derive(Debug, Clone)]
pub struct BreakEntry {
    /// 休息页页名
    pub page_name: String,
    /// 激活控件 ID（由页名按固定模式推导）
    pub control_id: String,
    /// 休息页正文（供非 HTML 渲染面使用）
    pub message: String,
}

/// 休息页注册表
///
/// 由已应用的休息页计划构建；渲染方通过它回答
/// "这个页是不是休息页"和"这个控件属于哪个休息页"
#[derive(Debug, Clone, Default)]
pub struct BreakRegistry {
    entries: Vec<BreakEntry>,
}

impl BreakRegistry {
    /// 从计划和变换后的文档构建注册表
    ///
    /// 锚点缺失而被跳过的插入点不会出现在文档里，也就不注册
    pub fn from_plan(plan: &BreakPlan, document: &SurveyDocument) -> Self {
        let entries = plan
            .points
            .iter()
            .filter(|point| document.has_page(&point.name))
            .map(|point| BreakEntry {
                page_name: point.name.clone(),
                control_id: activation_control_id(&point.name),
                message: point.message.clone(),
            })
            .collect();

        Self { entries }
    }

    /// 注册的休息页数量
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 指定页是否为休息页
    pub fn is_break_page(&self, page_name: &str) -> bool {
        self.entries.iter().any(|e| e.page_name == page_name)
    }

    /// 当前页名 → 展示形态（纯函数，渲染方在翻页时调用）
    pub fn presentation_mode(&self, page_name: &str) -> PresentationMode {
        if self.is_break_page(page_name) {
            PresentationMode::Break
        } else {
            PresentationMode::Normal
        }
    }

    /// 按页名取注册项
    pub fn entry(&self, page_name: &str) -> Option<&BreakEntry> {
        self.entries.iter().find(|e| e.page_name == page_name)
    }

    /// 激活控件 ID → 所属休息页页名
    ///
    /// 控件 ID 按 `-btn` 后缀模式推导，这里按同一模式反解
    pub fn page_for_control(&self, control_id: &str) -> Option<&str> {
        if let Ok(re) = Regex::new(r"^(.+)-btn$") {
            let base = re.captures(control_id)?.get(1)?.as_str();
            return self
                .entries
                .iter()
                .find(|e| e.page_name == base)
                .map(|e| e.page_name.as_str());
        }
        None
    }
}

/// 题目描述修饰：渲染到指定题目时替换其描述文本
///
/// 线上用它把一道题的描述换成带帮助链接的版本
#[derive(Debug, Clone)]
pub struct QuestionDecoration {
    /// 题目名
    pub question_name: String,
    /// 替换后的描述
    pub description: String,
}

/// 线上部署的默认修饰表
pub fn default_decorations() -> Vec<QuestionDecoration> {
    vec![QuestionDecoration {
        question_name: "A2_Q8".to_string(),
        description: "To know more about what you can do with “My Activity”, you may check: \
                      https://support.google.com/accounts/answer/7028918"
            .to_string(),
    }]
}

/// 外部渲染协作方
///
/// 实现方负责把参与者带完整份问卷；休息页必须展示激活控件并
/// 等待激活后才继续，题目修饰在对应题目挂载时生效
#[async_trait]
pub trait SurveyRenderer: Send {
    /// 呈现整份问卷直至完成
    ///
    /// # 返回
    /// 完成事件携带的最终答案快照
    async fn run(
        &mut self,
        document: &SurveyDocument,
        labels: &NavigationLabels,
        registry: &BreakRegistry,
        decorations: &[QuestionDecoration],
    ) -> anyhow::Result<AnswerSet>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::services::schema_transformer::apply_break_plan;

    fn doc(names: &[&str]) -> SurveyDocument {
        serde_json::from_value(serde_json::json!({
            "pages": names.iter().map(|n| serde_json::json!({ "name": n })).collect::<Vec<_>>()
        }))
        .unwrap()
    }

    #[test]
    fn test_registry_from_applied_plan() {
        let plan = BreakPlan::default();
        let transformed = apply_break_plan(&doc(&["A1", "A2", "B1", "B2"]), &plan).unwrap();

        let registry = BreakRegistry::from_plan(&plan, &transformed);

        assert_eq!(registry.len(), 2);
        assert!(registry.is_break_page("A_BREAK"));
        assert!(!registry.is_break_page("A2"));
        assert_eq!(registry.entry("B_BREAK").unwrap().control_id, "B_BREAK-btn");
    }

    #[test]
    fn test_skipped_insertion_points_are_not_registered() {
        // 文档里只有 A 段的锚点，B_BREAK 被静默跳过
        let plan = BreakPlan::default();
        let transformed = apply_break_plan(&doc(&["A1", "A2"]), &plan).unwrap();

        let registry = BreakRegistry::from_plan(&plan, &transformed);

        assert_eq!(registry.len(), 1);
        assert!(registry.is_break_page("A_BREAK"));
        assert!(!registry.is_break_page("B_BREAK"));
    }

    #[test]
    fn test_presentation_mode_is_pure_in_the_page_name() {
        let plan = BreakPlan::default();
        let transformed = apply_break_plan(&doc(&["A1", "A2", "B1", "B2"]), &plan).unwrap();
        let registry = BreakRegistry::from_plan(&plan, &transformed);

        assert_eq!(registry.presentation_mode("A_BREAK"), PresentationMode::Break);
        assert_eq!(registry.presentation_mode("A1"), PresentationMode::Normal);
        // 未知页名按普通页处理
        assert_eq!(registry.presentation_mode("ZZZ"), PresentationMode::Normal);
    }

    #[test]
    fn test_page_for_control_follows_the_suffix_pattern() {
        let plan = BreakPlan::default();
        let transformed = apply_break_plan(&doc(&["A1", "A2", "B1", "B2"]), &plan).unwrap();
        let registry = BreakRegistry::from_plan(&plan, &transformed);

        assert_eq!(registry.page_for_control("A_BREAK-btn"), Some("A_BREAK"));
        assert_eq!(registry.page_for_control("B_BREAK-btn"), Some("B_BREAK"));
        // 不符合模式或未注册的控件都解析不出页名
        assert_eq!(registry.page_for_control("A_BREAK"), None);
        assert_eq!(registry.page_for_control("C_BREAK-btn"), None);
    }

    #[test]
    fn test_labels_prefer_document_overrides() {
        let with_overrides: SurveyDocument = serde_json::from_value(serde_json::json!({
            "pages": [{ "name": "A1" }],
            "pageNextText": "Continue",
            "completeText": "Finish"
        }))
        .unwrap();

        let labels = NavigationLabels::resolve(&with_overrides);
        assert_eq!(labels.page_next_text, "Continue");
        assert_eq!(labels.complete_text, "Finish");

        let bare = doc(&["A1"]);
        let labels = NavigationLabels::resolve(&bare);
        assert_eq!(labels.page_next_text, NavigationLabels::DEFAULT_PAGE_NEXT);
        assert_eq!(labels.complete_text, NavigationLabels::DEFAULT_COMPLETE);
    }
}
