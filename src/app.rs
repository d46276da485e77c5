//! 应用入口层
//!
//! 对应网页版的两个路由：入口页（输入 ID、查重、持久化）和
//! 问卷页（解析 ID、跑完整个流程、展示终态）。
//! 任何失败都回到可交互的终态提示，绝不让进程崩在参与者面前。

use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info, warn};

use crate::clients::{BackendClient, HttpSchemaSource, SchemaSource, SurveyBackend};
use crate::config::Config;
use crate::infrastructure::ConsoleRenderer;
use crate::models::load_break_plan_or_default;
use crate::services::{
    resolve_identity, DuplicateGuard, EntryDecision, EntryGate, IdentitySource, IdentityStore,
};
use crate::utils::logging;
use crate::workflow::{FlowOutcome, SessionCtx, SurveyFlow};

/// 入口判定后的去向
enum EntryOutcome {
    /// 进入问卷
    Proceed(SessionCtx),
    /// 入口拒绝（已完成），流程到此为止
    Refused,
}

/// 应用主结构
pub struct App {
    store: IdentityStore,
    gate: EntryGate,
    flow: SurveyFlow,
    participant_id: Option<String>,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        logging::log_startup(&config);

        let http = reqwest::Client::new();
        let backend: Arc<dyn SurveyBackend> = Arc::new(BackendClient::new(http.clone(), &config));
        let schema_source: Arc<dyn SchemaSource> = Arc::new(HttpSchemaSource::new(http, &config));

        // 休息页计划：配置了文件就用文件，否则用内置计划
        let break_plan = load_break_plan_or_default(config.break_plan_file.as_deref()).await?;

        let store = IdentityStore::new(&config);
        let gate = EntryGate::new(DuplicateGuard::new(backend.clone()), store.clone());
        let flow = SurveyFlow::new(schema_source, backend, &config, break_plan);

        Ok(Self {
            store,
            gate,
            flow,
            participant_id: config.participant_id,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<()> {
        let ctx = match self.resolve_session().await? {
            EntryOutcome::Proceed(ctx) => ctx,
            EntryOutcome::Refused => return Ok(()),
        };

        info!("{} 📋 进入问卷", ctx);

        let mut renderer = ConsoleRenderer::new();
        match self.flow.run(&ctx, &mut renderer).await {
            Ok(outcome) => {
                let status = match &outcome {
                    FlowOutcome::Submitted => "提交成功",
                    FlowOutcome::AlreadyCompleted => "已完成（重复提交）",
                    FlowOutcome::Failed { .. } => "提交失败",
                };
                logging::log_terminal_state(status, &outcome.participant_message());

                println!();
                println!("{}", outcome.participant_message());
                if let FlowOutcome::Failed { .. } = outcome {
                    // 不自动重试，对应网页版的手动 Retry 按钮
                    println!("Please run again to retry.");
                }
            }
            Err(e) => {
                // 文档加载等前置失败：展示错误并提示手动重试
                error!("❌ 问卷流程中断: {:#}", e);
                println!();
                println!("Error: {:#}", e);
                println!("Please run again to retry.");
            }
        }

        Ok(())
    }

    /// 解析会话身份；导航参数和持久化值都没有时回到入口页
    async fn resolve_session(&self) -> Result<EntryOutcome> {
        let persisted = self.store.load().await?;

        if let Some(resolved) =
            resolve_identity(self.participant_id.as_deref(), persisted.as_deref())
        {
            info!("✓ 参与者 ID 解析完成: {} (来源: {})", resolved.uid, resolved.source);
            return Ok(EntryOutcome::Proceed(SessionCtx::new(
                resolved.uid,
                resolved.source,
            )));
        }

        // 对应网页版缺少 uid 时跳回入口页
        warn!("⚠️ 未携带参与者 ID，回到入口页");
        self.landing_gate().await
    }

    /// 入口页：读取 ID，查重后决定放行或拒绝
    async fn landing_gate(&self) -> Result<EntryOutcome> {
        println!("Welcome to the Survey");
        println!("Please enter your PROLIFIC ID to begin.");

        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            print!("> ");
            std::io::stdout().flush()?;

            let Some(line) = lines.next_line().await? else {
                anyhow::bail!("输入流已关闭");
            };

            match self.gate.evaluate(&line).await? {
                EntryDecision::MissingInput => {
                    println!("Please enter your Unique ID.");
                }
                EntryDecision::AlreadyCompleted => {
                    println!(
                        "Our records show that you have already completed this survey. Thank you!"
                    );
                    return Ok(EntryOutcome::Refused);
                }
                EntryDecision::Indeterminate { .. } => {
                    // 无法判定时既不放行也不持久化，让参与者稍后再试
                    println!("We could not verify your ID right now. Please try again.");
                }
                EntryDecision::Admitted { uid } => {
                    println!("Your responses are saved anonymously under this prolific ID");
                    return Ok(EntryOutcome::Proceed(SessionCtx::new(
                        uid,
                        IdentitySource::EntryForm,
                    )));
                }
            }
        }
    }
}
