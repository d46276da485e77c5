pub mod console_renderer;
pub mod renderer;

pub use console_renderer::ConsoleRenderer;
pub use renderer::{
    default_decorations, BreakEntry, BreakRegistry, NavigationLabels, PresentationMode,
    QuestionDecoration, SurveyRenderer,
};
