// Services module for the generation steps
pub mod directory_builder;
pub mod file_emitter;
