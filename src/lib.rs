//! # Survey Submit
//!
//! 问卷提交客户端：向参与者呈现外部定义的问卷，在分节处插入
//! "本节完成"休息页，完成后把答案提交到后端，并通过服务端
//! 查重保证同一参与者只提交一次。
//!
//! ## 架构设计
//!
//! 本系统采用四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 渲染协作方边界
//! - `SurveyRenderer` - 外部渲染引擎的能力抽象
//! - `BreakRegistry` - 休息页注册表（页名 → 激活控件）
//! - `ConsoleRenderer` - 让二进制跑起来的最小实现
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，每个能力只管一件事
//! - `schema_transformer` - 在锚点页后拼接休息页
//! - `identity_resolver` / `identity_store` - 参与者 ID 的解析与持久化
//! - `duplicate_guard` - 查重（入口闸门 + 提交失败兜底判定）
//! - `entry_gate` - 入口准入判定
//! - `submission` - 打包并提交答案
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次会话"的完整流程
//! - `SessionCtx` - 上下文封装（参与者 ID + 来源）
//! - `SurveyFlow` - 流程编排（拉取 → 变换 → 渲染 → 提交 → 兜底）
//!
//! ### ④ 入口层（App）
//! - `app` - 生命周期管理、入口页与问卷页两个路由、终态展示
//!
//! ## 模块结构

pub mod app;
pub mod clients;
pub mod config;
pub mod error;
pub mod infrastructure;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use clients::{BackendClient, HttpSchemaSource, SchemaSource, SurveyBackend};
pub use config::Config;
pub use error::{ApiError, AppError, AppResult, SchemaError, StorageError};
pub use infrastructure::{BreakRegistry, ConsoleRenderer, NavigationLabels, SurveyRenderer};
pub use models::{AnswerSet, BreakPlan, SubmissionPayload, SurveyDocument, SurveyPage};
pub use services::{
    apply_break_plan, inject_break_page, resolve_identity, DuplicateGuard, EntryGate,
    IdentityStore, SubmissionCoordinator,
};
pub use workflow::{FlowOutcome, SessionCtx, SurveyFlow};
