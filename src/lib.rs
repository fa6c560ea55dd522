// deno-scaffold - Deno + React project generator
// Core library functionality

pub mod cli;
pub mod models;
pub mod services;
pub mod utils;

// Re-export commonly used types
pub use models::plan::DirectoryPlan;
pub use models::project::ProjectSpec;
pub use models::template::{FileTemplate, FILE_TEMPLATES};
pub use services::directory_builder::DirectoryBuilder;
pub use services::file_emitter::FileEmitter;
pub use utils::error::{Result, ScaffoldError};
