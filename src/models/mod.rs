pub mod break_plan;
pub mod loaders;
pub mod schema;
pub mod submission;

pub use break_plan::{BreakPlan, BreakPoint};
pub use loaders::{load_break_plan, load_break_plan_or_default};
pub use schema::{AnswerSet, PageElement, SurveyDocument, SurveyPage};
pub use submission::{SubmissionMetadata, SubmissionPayload, SURVEY_VERSION};
