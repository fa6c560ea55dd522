use std::path::{Path, PathBuf};

use crate::models::project::ProjectSpec;

/// Subdirectories created under the project root, in creation order.
pub const SUBDIRECTORIES: &[&str] = &["src"];

/// Ordered set of directories to create for a project: the root first, then
/// each subdirectory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectoryPlan {
    directories: Vec<PathBuf>,
}

impl DirectoryPlan {
    pub fn for_project(spec: &ProjectSpec) -> Self {
        let root = spec.root();
        let mut directories = Vec::with_capacity(SUBDIRECTORIES.len() + 1);
        directories.push(root.to_path_buf());
        directories.extend(SUBDIRECTORIES.iter().map(|dir| root.join(dir)));
        Self { directories }
    }

    pub fn directories(&self) -> &[PathBuf] {
        &self.directories
    }

    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.directories.iter().map(PathBuf::as_path)
    }
}
