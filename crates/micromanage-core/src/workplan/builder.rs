//! Builder for creating and configuring WorkPlan instances.

use std::path::{Path, PathBuf};

use super::WorkPlan;
use crate::{
    error::{Result, WorkplanError},
    storage::{SnapshotStore, DEFAULT_DATA_DIR, DEFAULT_FILE_NAME},
};

/// Builder for creating and configuring WorkPlan instances.
#[derive(Debug, Clone, Default)]
pub struct WorkPlanBuilder {
    data_dir: Option<PathBuf>,
    file_name: Option<String>,
}

impl WorkPlanBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the directory holding the snapshot file.
    ///
    /// If not specified, uses `.micromanage` relative to the working
    /// directory.
    pub fn with_data_dir<P: AsRef<Path>>(mut self, path: Option<P>) -> Self {
        if let Some(path) = path {
            self.data_dir = Some(path.as_ref().to_path_buf());
        }
        self
    }

    /// Sets the snapshot file name. Defaults to `workplan.json`.
    pub fn with_file_name<S: Into<String>>(mut self, name: Option<S>) -> Self {
        if let Some(name) = name {
            self.file_name = Some(name.into());
        }
        self
    }

    /// Builds and initializes the work plan.
    ///
    /// # Errors
    ///
    /// Returns `WorkplanError::InvalidInput` if the file name is empty or
    /// contains a path separator.
    pub fn build(self) -> Result<WorkPlan> {
        let data_dir = self
            .data_dir
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));
        let file_name = self
            .file_name
            .unwrap_or_else(|| DEFAULT_FILE_NAME.to_string());

        if file_name.trim().is_empty() {
            return Err(WorkplanError::invalid_input("file_name")
                .with_reason("File name must not be empty"));
        }
        if file_name.contains(['/', '\\']) {
            return Err(WorkplanError::invalid_input("file_name")
                .with_reason("File name must not contain a path separator; use the data directory instead"));
        }

        let mut workplan = WorkPlan::new(SnapshotStore::new(data_dir, file_name));
        workplan.initialize();
        Ok(workplan)
    }
}
