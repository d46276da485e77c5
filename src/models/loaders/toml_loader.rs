use crate::models::break_plan::BreakPlan;
use anyhow::{Context, Result};
use std::path::Path;
use tokio::fs;

/// 从 TOML 文件加载分节休息页计划
pub async fn load_break_plan(path: &Path) -> Result<BreakPlan> {
    let content = fs::read_to_string(path)
        .await
        .with_context(|| format!("无法读取计划文件: {}", path.display()))?;

    let plan: BreakPlan = toml::from_str(&content)
        .with_context(|| format!("无法解析计划文件: {}", path.display()))?;

    tracing::info!("已加载休息页计划: {} 个插入点", plan.points.len());

    Ok(plan)
}

/// 加载休息页计划；未配置文件时退回内置默认计划
pub async fn load_break_plan_or_default(path: Option<&str>) -> Result<BreakPlan> {
    match path {
        Some(p) => load_break_plan(Path::new(p)).await,
        None => {
            tracing::debug!("未配置休息页计划文件，使用内置默认计划");
            Ok(BreakPlan::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[tokio::test]
    async fn test_load_break_plan_from_toml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"
[[points]]
after = "A2"
name = "A_BREAK"
heading = "Section A complete"
message = "Take a breather."

[[points]]
after = "B2"
name = "B_BREAK"
heading = "Section B complete"
message = "Almost there."
"#
        )
        .unwrap();

        let plan = load_break_plan(file.path()).await.unwrap();
        assert_eq!(plan.points.len(), 2);
        assert_eq!(plan.points[0].after, "A2");
        assert_eq!(plan.points[1].name, "B_BREAK");
    }

    #[tokio::test]
    async fn test_missing_file_is_an_error() {
        let result = load_break_plan(Path::new("no_such_plan.toml")).await;
        assert!(result.is_err());
    }

    #[tokio::test]
    async fn test_none_falls_back_to_default_plan() {
        let plan = load_break_plan_or_default(None).await.unwrap();
        assert_eq!(plan, BreakPlan::default());
        assert!(plan.point_by_name("A_BREAK").is_some());
    }
}
