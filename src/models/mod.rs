// Models module for data structures
pub mod plan;
pub mod project;
pub mod template;
