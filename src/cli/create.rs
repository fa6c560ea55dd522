use std::path::PathBuf;

use tracing::{debug, info};

use crate::models::project::ProjectSpec;
use crate::models::template::DEV_TASK_HINT;
use crate::services::directory_builder::DirectoryBuilder;
use crate::services::file_emitter::FileEmitter;
use crate::utils::error::Result;

/// Generate a new project in the current directory
#[derive(Debug)]
pub struct CreateCommand {
    pub name: String,
}

/// What a successful run put on disk.
#[derive(Debug)]
pub struct CreateSummary {
    pub spec: ProjectSpec,
    pub directories: Vec<PathBuf>,
    pub files: Vec<PathBuf>,
}

impl CreateCommand {
    /// Execute the create command
    pub async fn run(&self) -> Result<()> {
        let spec = ProjectSpec::new(self.name.as_str())?;

        println!("Creating project {}...", spec.name());
        generate(&spec).await?;

        println!("Project created successfully!");
        println!("Run the following commands to get started:");
        println!("cd {}", spec.name());
        println!("{DEV_TASK_HINT}");

        Ok(())
    }
}

/// Build the directory skeleton, then write the template files into it.
///
/// The first failure aborts; nothing already created is removed.
pub async fn generate(spec: &ProjectSpec) -> Result<CreateSummary> {
    let plan = DirectoryBuilder::new().ensure_directories(spec).await?;
    let files = FileEmitter::new().write_files(spec).await?;

    info!(project = spec.name(), files = files.len(), "project generated");
    debug!(root = %spec.root().display(), "generation complete");

    Ok(CreateSummary {
        spec: spec.clone(),
        directories: plan.directories().to_vec(),
        files,
    })
}
