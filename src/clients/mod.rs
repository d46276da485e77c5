pub mod backend;
pub mod schema_source;

pub use backend::{BackendClient, SurveyBackend, DEFAULT_SUBMISSION_ERROR};
pub use schema_source::{HttpSchemaSource, SchemaSource, DOCUMENT_LOAD_ERROR};
