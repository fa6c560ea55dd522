use std::path::{Path, PathBuf};

use crate::utils::error::Result;
use crate::utils::validation::validate_project_name;

/// Name used when `--name` is not given.
pub const DEFAULT_PROJECT_NAME: &str = "deno-react-app";

/// The project to generate: a validated name and the root directory it maps to.
///
/// Built once from CLI input and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSpec {
    name: String,
    root: PathBuf,
}

impl ProjectSpec {
    /// Project rooted at `name`, relative to the current working directory.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_project_name(&name)?;
        let root = PathBuf::from(&name);
        Ok(Self { name, root })
    }

    /// Project rooted at `base/name`.
    pub fn in_dir(base: impl AsRef<Path>, name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        validate_project_name(&name)?;
        let root = base.as_ref().join(&name);
        Ok(Self { name, root })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}
