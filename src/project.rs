// src/project.rs
// Saved-project collaborator: a JSON document on disk holding the content
// packages the user chose to keep. Not part of the orchestration core.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::types::ContentGenerationResult;

/// A persisted content package plus the inputs that produced it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SavedProject {
    pub id: String,
    pub timestamp: DateTime<Utc>,
    pub idea: String,
    #[serde(rename = "contentType")]
    pub content_type: String,
    #[serde(flatten)]
    pub package: ContentGenerationResult,
}

pub struct ProjectStore {
    path: PathBuf,
}

impl ProjectStore {
    /// Open the store at its default location under the user data directory.
    pub fn open_default() -> Result<Self> {
        let dir = dirs::data_dir()
            .context("no user data directory available")?
            .join("tubelens");
        fs::create_dir_all(&dir)
            .with_context(|| format!("failed to create {}", dir.display()))?;
        Ok(Self { path: dir.join("projects.json") })
    }

    /// Open a store backed by an explicit file path (used in tests).
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// All saved projects, newest first. A missing file is an empty store.
    pub fn list(&self) -> Result<Vec<SavedProject>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = fs::read_to_string(&self.path)
            .with_context(|| format!("failed to read {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("corrupt project store at {}", self.path.display()))
    }

    pub fn save(
        &self,
        package: ContentGenerationResult,
        idea: &str,
        content_type: &str,
    ) -> Result<SavedProject> {
        let project = SavedProject {
            id: Uuid::new_v4().to_string(),
            timestamp: Utc::now(),
            idea: idea.to_string(),
            content_type: content_type.to_string(),
            package,
        };

        let mut projects = self.list()?;
        projects.insert(0, project.clone());
        self.write(&projects)?;

        Ok(project)
    }

    /// Remove a project by id. Returns whether anything was removed.
    pub fn delete(&self, id: &str) -> Result<bool> {
        let mut projects = self.list()?;
        let before = projects.len();
        projects.retain(|p| p.id != id);
        let removed = projects.len() != before;
        if removed {
            self.write(&projects)?;
        }
        Ok(removed)
    }

    /// Write the whole store to `dest` as pretty JSON; returns the count.
    pub fn export(&self, dest: &Path) -> Result<usize> {
        let projects = self.list()?;
        fs::write(dest, serde_json::to_string_pretty(&projects)?)
            .with_context(|| format!("failed to write {}", dest.display()))?;
        Ok(projects.len())
    }

    fn write(&self, projects: &[SavedProject]) -> Result<()> {
        fs::write(&self.path, serde_json::to_string_pretty(projects)?)
            .with_context(|| format!("failed to write {}", self.path.display()))?;
        Ok(())
    }
}
