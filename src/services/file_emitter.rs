use std::path::PathBuf;

use tokio::fs;
use tracing::debug;

use crate::models::project::ProjectSpec;
use crate::models::template::{FileTemplate, FILE_TEMPLATES};
use crate::utils::error::{Result, ScaffoldError};

/// Writes the project's template files into an existing directory skeleton.
#[derive(Debug, Clone, Copy)]
pub struct FileEmitter {
    templates: &'static [FileTemplate],
}

impl FileEmitter {
    /// Emitter for the standard project file set.
    pub const fn new() -> Self {
        Self {
            templates: &FILE_TEMPLATES,
        }
    }

    #[cfg(test)]
    const fn with_templates(templates: &'static [FileTemplate]) -> Self {
        Self { templates }
    }

    /// Write every template under the project root, in table order.
    ///
    /// Existing files are overwritten. Expects the directories to exist
    /// already. Stops at the first failed write and leaves earlier files in
    /// place. Returns the written paths.
    pub async fn write_files(&self, spec: &ProjectSpec) -> Result<Vec<PathBuf>> {
        let mut written = Vec::with_capacity(self.templates.len());

        for template in self.templates {
            let path = template.destination(spec.root());
            fs::write(&path, template.contents)
                .await
                .map_err(|source| ScaffoldError::WriteFile {
                    path: path.clone(),
                    source,
                })?;
            debug!(path = %path.display(), bytes = template.contents.len(), "wrote file");
            written.push(path);
        }

        Ok(written)
    }
}

impl Default for FileEmitter {
    fn default() -> Self {
        Self::new()
    }
}
