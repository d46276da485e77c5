pub mod session_ctx;
pub mod survey_flow;

pub use session_ctx::SessionCtx;
pub use survey_flow::{FlowOutcome, SurveyFlow};
