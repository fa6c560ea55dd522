// Project name validation

use regex::Regex;

use crate::utils::error::{Result, ScaffoldError};

/// Same ceiling npm applies to package names.
pub const MAX_PROJECT_NAME_LEN: usize = 214;

const PROJECT_NAME_PATTERN: &str = r"^[A-Za-z0-9_][A-Za-z0-9._-]*$";

fn project_name_pattern() -> Result<Regex> {
    Regex::new(PROJECT_NAME_PATTERN)
        .map_err(|e| ScaffoldError::Validation(format!("invalid project name pattern: {e}")))
}

/// Validate that `name` is a single, safe directory segment.
///
/// Rejects separators, whitespace, and leading `.` or `-`, which also rules
/// out `.` and `..`.
pub fn validate_project_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(ScaffoldError::Validation(
            "project name cannot be empty.\n\nProvide a name:\n  deno-scaffold --name my-app"
                .to_string(),
        ));
    }

    if name.len() > MAX_PROJECT_NAME_LEN {
        return Err(ScaffoldError::Validation(format!(
            "project name '{name}' is too long (max {MAX_PROJECT_NAME_LEN} characters)"
        )));
    }

    if name.contains('/') || name.contains('\\') {
        return Err(ScaffoldError::Validation(format!(
            "invalid project name '{name}' - cannot contain path separators.\n\nThe name becomes a single directory:\n  ✓ my-app\n  ✗ ../my-app\n  ✗ apps/my-app"
        )));
    }

    if !project_name_pattern()?.is_match(name) {
        return Err(ScaffoldError::Validation(format!(
            "invalid project name '{name}' - use letters, digits, '.', '-' or '_', not starting with '.' or '-'"
        )));
    }

    Ok(())
}
