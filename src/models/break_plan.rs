//! 分节休息页计划
//!
//! 描述"在哪些页之后插入哪些休息页"。默认计划复刻线上部署：
//! A2 之后插 A_BREAK，B2 之后插 B_BREAK。

use serde::{Deserialize, Serialize};

/// 单个休息页插入点
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakPoint {
    /// 锚点页名（休息页插在该页之后）
    pub after: String,
    /// 休息页页名
    pub name: String,
    /// 休息页标题
    pub heading: String,
    /// 休息页正文
    pub message: String,
}

/// 休息页计划，按声明顺序依次应用
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BreakPlan {
    #[serde(default)]
    pub points: Vec<BreakPoint>,
}

impl Default for BreakPlan {
    fn default() -> Self {
        Self {
            points: vec![
                BreakPoint {
                    after: "A2".to_string(),
                    name: "A_BREAK".to_string(),
                    heading: "Section A complete 🎉".to_string(),
                    message: "Take a breather! When you’re ready, click the button below to start Section B.".to_string(),
                },
                BreakPoint {
                    after: "B2".to_string(),
                    name: "B_BREAK".to_string(),
                    heading: "Section B complete 🙌".to_string(),
                    message: "Nice progress so far. Click below when you’re ready to begin Section C.".to_string(),
                },
            ],
        }
    }
}

impl BreakPlan {
    /// 按休息页页名查找插入点
    pub fn point_by_name(&self, name: &str) -> Option<&BreakPoint> {
        self.points.iter().find(|p| p.name == name)
    }
}
