// Shared utilities: errors, validation, diagnostics
pub mod error;
pub mod logging;
pub mod validation;
