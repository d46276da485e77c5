//! 问卷变换 - 业务能力层
//!
//! 核心职责：在指定锚点页之后拼接合成的"分节休息页"
//!
//! 约定：
//! - 变换作用在入参的深拷贝上，原始文档保持不变（重新加载总是从干净基线开始）
//! - 页序列为空 → 原样返回（定义内的退化情况，不是错误）
//! - 找不到锚点页 → 静默跳过（与线上行为一致）
//! - 休息页与已有页面重名 → 报错（页名唯一性不可破坏）

use serde_json::Map;
use tracing::debug;

use crate::error::SchemaError;
use crate::models::{BreakPlan, PageElement, SurveyDocument, SurveyPage};

/// 从休息页页名推导激活控件 ID
///
/// 推导必须稳定可预测，后续接线步骤按这个模式定位控件
pub fn activation_control_id(break_name: &str) -> String {
    format!("{}-btn", break_name)
}

/// 在 `after` 页之后插入一个休息页，返回变换后的新文档
///
/// # 参数
/// - `document`: 原始问卷文档（不会被修改）
/// - `after`: 锚点页名
/// - `name`: 休息页页名
/// - `heading`: 休息页标题
/// - `message`: 休息页正文
///
/// # 返回
/// 返回变换后的文档；休息页与已有页面重名时返回错误
pub fn inject_break_page(
    document: &SurveyDocument,
    after: &str,
    name: &str,
    heading: &str,
    message: &str,
) -> Result<SurveyDocument, SchemaError> {
    // 深拷贝，原始文档保持干净基线
    let mut working = document.clone();

    if working.pages.is_empty() {
        debug!("页序列为空，跳过休息页 {}", name);
        return Ok(working);
    }

    let Some(anchor) = working.page_position(after) else {
        // 锚点缺失按非致命处理
        debug!("未找到锚点页 {}，跳过休息页 {}", after, name);
        return Ok(working);
    };

    if working.has_page(name) {
        return Err(SchemaError::DuplicatePageName {
            name: name.to_string(),
        });
    }

    // 顺序保持不变：只在锚点之后插入，后续页面整体后移一位
    working
        .pages
        .insert(anchor + 1, build_break_page(name, heading, message));

    debug!("已在 {} 之后插入休息页 {}", after, name);

    Ok(working)
}

/// 按计划顺序依次应用全部插入点
///
/// 每个锚点都在"前序插入已生效"的文档里解析
pub fn apply_break_plan(
    document: &SurveyDocument,
    plan: &BreakPlan,
) -> Result<SurveyDocument, SchemaError> {
    let mut working = document.clone();
    for point in &plan.points {
        working = inject_break_page(
            &working,
            &point.after,
            &point.name,
            &point.heading,
            &point.message,
        )?;
    }
    Ok(working)
}

/// 构造休息页
///
/// 正好一个静态 HTML 元素：标题 + 正文 + 激活按钮
fn build_break_page(name: &str, heading: &str, message: &str) -> SurveyPage {
    let html = format!(
        r#"
<div class="section-break">
  <h2 style="margin-top:0">{heading}</h2>
  <p style="margin:8px 0 20px">{message}</p>
  <button id="{control}" type="button" style="
    padding:12px 18px;
    border:0;border-radius:10px;
    font-weight:700;cursor:pointer;
  ">
    Ready for next section
  </button>
</div>
"#,
        heading = heading,
        message = message,
        control = activation_control_id(name),
    );

    SurveyPage {
        name: name.to_string(),
        title: Some(heading.to_string()),
        elements: vec![PageElement {
            kind: "html".to_string(),
            name: format!("{}_html", name),
            html: Some(html),
            description: None,
            extra: Map::new(),
        }],
        extra: Map::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::BreakPoint;

    /// 构造测试用文档
    fn doc(names: &[&str]) -> SurveyDocument {
        serde_json::from_value(serde_json::json!({
            "pages": names.iter().map(|n| serde_json::json!({ "name": n })).collect::<Vec<_>>()
        }))
        .unwrap()
    }

    #[test]
    fn test_inject_after_anchor_preserves_order() {
        let original = doc(&["A1", "A2", "B1", "B2"]);

        let result = inject_break_page(&original, "A2", "A_BREAK", "Done", "Rest now.").unwrap();

        // 休息页紧跟锚点，其余页面相对顺序不变
        assert_eq!(result.page_names(), vec!["A1", "A2", "A_BREAK", "B1", "B2"]);
    }

    #[test]
    fn test_injected_page_shape() {
        let original = doc(&["A1", "A2"]);

        let result =
            inject_break_page(&original, "A2", "A_BREAK", "Section A complete", "Take a breather.")
                .unwrap();

        let page = &result.pages[2];
        assert_eq!(page.name, "A_BREAK");
        assert_eq!(page.title.as_deref(), Some("Section A complete"));
        // 正好一个静态 HTML 元素
        assert_eq!(page.elements.len(), 1);
        let element = &page.elements[0];
        assert_eq!(element.kind, "html");
        assert_eq!(element.name, "A_BREAK_html");

        let html = element.html.as_deref().unwrap();
        assert!(html.contains("Section A complete"));
        assert!(html.contains("Take a breather."));
        // 激活控件 ID 按固定模式推导
        assert!(html.contains(r#"id="A_BREAK-btn""#));
    }

    #[test]
    fn test_missing_anchor_is_a_noop() {
        let original = doc(&["A1", "A2"]);

        let result = inject_break_page(&original, "C9", "C_BREAK", "H", "M").unwrap();

        assert_eq!(result, original);
    }

    #[test]
    fn test_empty_pages_is_a_noop() {
        let original: SurveyDocument = serde_json::from_value(serde_json::json!({})).unwrap();

        let result = inject_break_page(&original, "A2", "A_BREAK", "H", "M").unwrap();

        assert_eq!(result, original);
        assert!(result.pages.is_empty());
    }

    #[test]
    fn test_original_document_is_not_mutated() {
        let original = doc(&["A1", "A2", "B1"]);
        let baseline = original.clone();

        let _ = inject_break_page(&original, "A2", "A_BREAK", "H", "M").unwrap();

        // 变换只作用在深拷贝上
        assert_eq!(original, baseline);
    }

    #[test]
    fn test_duplicate_break_name_is_an_error() {
        let original = doc(&["A1", "A_BREAK", "A2"]);

        let result = inject_break_page(&original, "A2", "A_BREAK", "H", "M");

        assert!(matches!(
            result,
            Err(SchemaError::DuplicatePageName { ref name }) if name == "A_BREAK"
        ));
    }

    #[test]
    fn test_two_independent_anchors_in_either_order() {
        let original = doc(&["A1", "A2", "B1", "B2", "C1"]);
        let expected = vec!["A1", "A2", "A_BREAK", "B1", "B2", "B_BREAK", "C1"];

        // 先 A 后 B
        let forward = inject_break_page(&original, "A2", "A_BREAK", "HA", "MA").unwrap();
        let forward = inject_break_page(&forward, "B2", "B_BREAK", "HB", "MB").unwrap();
        assert_eq!(forward.page_names(), expected);

        // 先 B 后 A，结果一致
        let reverse = inject_break_page(&original, "B2", "B_BREAK", "HB", "MB").unwrap();
        let reverse = inject_break_page(&reverse, "A2", "A_BREAK", "HA", "MA").unwrap();
        assert_eq!(reverse.page_names(), expected);
    }

    #[test]
    fn test_apply_break_plan_sequentially() {
        let original = doc(&["A1", "A2", "B1", "B2", "C1"]);

        let result = apply_break_plan(&original, &BreakPlan::default()).unwrap();

        assert_eq!(
            result.page_names(),
            vec!["A1", "A2", "A_BREAK", "B1", "B2", "B_BREAK", "C1"]
        );
    }

    #[test]
    fn test_apply_break_plan_without_anchors_is_a_noop() {
        let original = doc(&["X1", "X2"]);

        let result = apply_break_plan(&original, &BreakPlan::default()).unwrap();

        assert_eq!(result, original);
    }

    #[test]
    fn test_later_point_can_anchor_on_injected_page() {
        // 后一个插入点的锚点解析发生在"前序插入已生效"的文档里
        let original = doc(&["A1", "A2"]);
        let plan = BreakPlan {
            points: vec![
                BreakPoint {
                    after: "A2".to_string(),
                    name: "A_BREAK".to_string(),
                    heading: "H".to_string(),
                    message: "M".to_string(),
                },
                BreakPoint {
                    after: "A_BREAK".to_string(),
                    name: "A_BREAK_2".to_string(),
                    heading: "H2".to_string(),
                    message: "M2".to_string(),
                },
            ],
        };

        let result = apply_break_plan(&original, &plan).unwrap();

        assert_eq!(result.page_names(), vec!["A1", "A2", "A_BREAK", "A_BREAK_2"]);
    }

    #[test]
    fn test_activation_control_id_derivation() {
        assert_eq!(activation_control_id("A_BREAK"), "A_BREAK-btn");
        assert_eq!(activation_control_id("B_BREAK"), "B_BREAK-btn");
    }
}
