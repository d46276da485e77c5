//! 控制台渲染器 - 基础设施层
//!
//! 让二进制能够端到端跑起来的最小协作方实现：逐页逐题走
//! stdin/stdout。真实部署里这一角色由网页端的渲染引擎承担，
//! 流程逻辑完全不在这里。

use std::io::Write;

use async_trait::async_trait;
use serde_json::Value;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};

use crate::infrastructure::renderer::{
    BreakRegistry, NavigationLabels, PresentationMode, QuestionDecoration, SurveyRenderer,
};
use crate::models::{AnswerSet, SurveyDocument};

/// 控制台渲染器
pub struct ConsoleRenderer {
    lines: Lines<BufReader<Stdin>>,
}

impl ConsoleRenderer {
    /// 创建新的控制台渲染器
    pub fn new() -> Self {
        Self {
            lines: BufReader::new(tokio::io::stdin()).lines(),
        }
    }

    async fn read_line(&mut self) -> anyhow::Result<String> {
        match self.lines.next_line().await? {
            Some(line) => Ok(line),
            None => anyhow::bail!("输入流已关闭"),
        }
    }
}

impl Default for ConsoleRenderer {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SurveyRenderer for ConsoleRenderer {
    async fn run(
        &mut self,
        document: &SurveyDocument,
        labels: &NavigationLabels,
        registry: &BreakRegistry,
        decorations: &[QuestionDecoration],
    ) -> anyhow::Result<AnswerSet> {
        let mut answers = AnswerSet::new();
        let total = document.pages.len();

        for (index, page) in document.pages.iter().enumerate() {
            let is_last = index + 1 == total;

            match registry.presentation_mode(&page.name) {
                PresentationMode::Break => {
                    // 休息页：只展示标题、正文和激活控件，等待激活后才继续
                    println!();
                    if let Some(title) = &page.title {
                        println!("== {} ==", title);
                    }
                    if let Some(entry) = registry.entry(&page.name) {
                        println!("{}", entry.message);
                    }
                    print!("[Ready for next section] (press Enter) ");
                    std::io::stdout().flush()?;
                    let _ = self.read_line().await?;
                }
                PresentationMode::Normal => {
                    println!();
                    println!("== {} ==", page.title.as_deref().unwrap_or(&page.name));

                    for element in &page.elements {
                        // 静态内容不收集答案
                        if element.kind == "html" {
                            continue;
                        }

                        // 修饰表优先于文档自带的描述
                        if let Some(decoration) =
                            decorations.iter().find(|d| d.question_name == element.name)
                        {
                            println!("{}", decoration.description);
                        } else if let Some(description) = &element.description {
                            println!("{}", description);
                        }

                        print!("{}> ", element.name);
                        std::io::stdout().flush()?;

                        let line = self.read_line().await?;
                        let trimmed = line.trim();
                        if !trimmed.is_empty() {
                            answers.insert(element.name.clone(), Value::String(trimmed.to_string()));
                        }
                    }

                    let label = if is_last {
                        &labels.complete_text
                    } else {
                        &labels.page_next_text
                    };
                    println!("[{}]", label);
                }
            }
        }

        Ok(answers)
    }
}
