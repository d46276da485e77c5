//! 问卷流程 - 流程层
//!
//! 核心职责：定义"一次会话"的完整流程
//!
//! 流程顺序：
//! 1. 拉取问卷文档（不走缓存）
//! 2. 在深拷贝上注入分节休息页
//! 3. 交给渲染协作方跑完整份问卷
//! 4. 提交答案；失败后跑查重判定（兜底）

use std::sync::Arc;

use anyhow::Result;
use tracing::{info, warn};

use crate::clients::{SchemaSource, SurveyBackend};
use crate::config::Config;
use crate::infrastructure::renderer::{
    default_decorations, BreakRegistry, NavigationLabels, SurveyRenderer,
};
use crate::models::BreakPlan;
use crate::services::duplicate_guard::{DuplicateGuard, FailureClass};
use crate::services::schema_transformer::apply_break_plan;
use crate::services::submission::SubmissionCoordinator;
use crate::workflow::session_ctx::SessionCtx;

/// 问卷流程最终态
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FlowOutcome {
    /// 提交成功
    Submitted,
    /// 服务端已有记录，按已完成处理
    AlreadyCompleted,
    /// 提交失败（不自动重试，文案来自服务端或默认值）
    Failed { message: String },
}

impl FlowOutcome {
    /// 展示给参与者的终态文案
    pub fn participant_message(&self) -> String {
        match self {
            FlowOutcome::Submitted => "Thanks! Your response has been recorded.".to_string(),
            FlowOutcome::AlreadyCompleted => {
                "Our records show that you have already completed this survey. Thank you!"
                    .to_string()
            }
            FlowOutcome::Failed { message } => message.clone(),
        }
    }
}

/// 问卷流程
///
/// - 编排一次会话从拉取到终态的全过程
/// - 不持有渲染资源，渲染方由调用者注入
/// - 只依赖业务能力（services）和客户端抽象（clients）
pub struct SurveyFlow {
    schema_source: Arc<dyn SchemaSource>,
    coordinator: SubmissionCoordinator,
    guard: DuplicateGuard,
    break_plan: BreakPlan,
    verbose_logging: bool,
}

impl SurveyFlow {
    /// 创建新的问卷流程
    pub fn new(
        schema_source: Arc<dyn SchemaSource>,
        backend: Arc<dyn SurveyBackend>,
        config: &Config,
        break_plan: BreakPlan,
    ) -> Self {
        Self {
            schema_source,
            coordinator: SubmissionCoordinator::new(backend.clone(), config),
            guard: DuplicateGuard::new(backend),
            break_plan,
            verbose_logging: config.verbose_logging,
        }
    }

    /// 跑完一次会话
    ///
    /// 文档拉取失败向上传播（调用方展示可重试的错误）；
    /// 提交失败在这里就地归类，返回对应终态
    pub async fn run(
        &self,
        ctx: &SessionCtx,
        renderer: &mut dyn SurveyRenderer,
    ) -> Result<FlowOutcome> {
        // ========== 阶段 1: 拉取文档 ==========
        info!("{} 🔍 正在拉取问卷文档...", ctx);
        let baseline = self.schema_source.fetch_document().await?;

        // ========== 阶段 2: 注入休息页 ==========
        // 变换作用在深拷贝上，基线文档保持不变
        let working = apply_break_plan(&baseline, &self.break_plan)?;
        let registry = BreakRegistry::from_plan(&self.break_plan, &working);
        let labels = NavigationLabels::resolve(&working);
        let decorations = default_decorations();

        info!(
            "{} ✓ 问卷准备完成: {} 页（含 {} 个休息页）",
            ctx,
            working.pages.len(),
            registry.len()
        );

        // 详细日志（如果启用）
        if self.verbose_logging {
            info!("{} 页面顺序: {:?}", ctx, working.page_names());
        }

        // ========== 阶段 3: 渲染 ==========
        let answers = renderer.run(&working, &labels, &registry, &decorations).await?;

        info!("{} 📤 作答完成，正在提交 {} 条答案...", ctx, answers.len());

        // ========== 阶段 4: 提交 + 兜底判定 ==========
        match self.coordinator.submit(&ctx.uid, &answers).await {
            Ok(()) => {
                info!("{} ✓ 提交成功", ctx);
                Ok(FlowOutcome::Submitted)
            }
            Err(submit_error) => {
                warn!("{} ⚠️ 提交失败: {}", ctx, submit_error);

                // 提交必须先完整落定（成功或归类完毕）再展示终态
                match self
                    .guard
                    .classify_submission_failure(&ctx.uid, &submit_error)
                    .await
                {
                    FailureClass::AlreadyCompleted => Ok(FlowOutcome::AlreadyCompleted),
                    FailureClass::Transient { message } => Ok(FlowOutcome::Failed { message }),
                }
            }
        }
    }
}
