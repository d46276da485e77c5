pub mod toml_loader;

pub use toml_loader::{load_break_plan, load_break_plan_or_default};
