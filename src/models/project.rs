//! Project tags and the project catalog.
//!
//! Projects group tasks for display: each has an id, a display name, and
//! a color. The catalog is an injected value, not a global — callers
//! (and tests) supply their own table.
//!
//! # Fallback
//! Every catalog contains a fallback entry with id `"other"`. Lookups
//! for ids not in the table resolve to it, so task → project resolution
//! never fails.

use serde::{Deserialize, Serialize};

/// Id of the guaranteed fallback entry.
pub const FALLBACK_PROJECT_ID: &str = "other";

/// A project tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier referenced by `Task::project`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Display color (CSS hex, e.g. `#3b82f6`).
    pub color: String,
}

impl Project {
    /// Creates a project tag.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
        }
    }

    fn fallback() -> Self {
        Self::new(FALLBACK_PROJECT_ID, "Other", "#6b7280")
    }
}

/// Ordered project table with a guaranteed fallback entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectCatalog {
    projects: Vec<Project>,
    fallback: Project,
}

impl Default for ProjectCatalog {
    fn default() -> Self {
        Self {
            projects: Vec::new(),
            fallback: Project::fallback(),
        }
    }
}

impl ProjectCatalog {
    /// Builds a catalog from a list of projects.
    ///
    /// An entry with the fallback id replaces the default fallback
    /// instead of being listed; later entries replace earlier ones with
    /// the same id.
    pub fn new(projects: Vec<Project>) -> Self {
        projects
            .into_iter()
            .fold(Self::default(), |catalog, p| catalog.with_project(p))
    }

    /// Adds or replaces a project.
    pub fn with_project(mut self, project: Project) -> Self {
        if project.id == FALLBACK_PROJECT_ID {
            self.fallback = project;
        } else if let Some(existing) = self.projects.iter_mut().find(|p| p.id == project.id) {
            *existing = project;
        } else {
            self.projects.push(project);
        }
        self
    }

    /// Looks up a project by id, resolving unknown ids to the fallback.
    pub fn get(&self, id: &str) -> &Project {
        self.projects
            .iter()
            .find(|p| p.id == id)
            .unwrap_or(&self.fallback)
    }

    /// Whether an id resolves without falling back.
    pub fn contains(&self, id: &str) -> bool {
        id == self.fallback.id || self.projects.iter().any(|p| p.id == id)
    }

    /// Resolves an id to a valid catalog id.
    pub fn resolve_id<'a>(&'a self, id: &'a str) -> &'a str {
        if self.contains(id) {
            id
        } else {
            &self.fallback.id
        }
    }

    /// Display name for an id (fallback name for unknown ids).
    pub fn display_name(&self, id: &str) -> &str {
        &self.get(id).name
    }

    /// Iterates over all entries in selector order, fallback last.
    pub fn iter(&self) -> impl Iterator<Item = &Project> {
        self.projects.iter().chain(std::iter::once(&self.fallback))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_catalog() -> ProjectCatalog {
        ProjectCatalog::new(vec![
            Project::new("research", "Research", "#3b82f6"),
            Project::new("teaching", "Teaching", "#ef4444"),
        ])
    }

    #[test]
    fn test_get_known_project() {
        let catalog = sample_catalog();
        let p = catalog.get("research");
        assert_eq!(p.name, "Research");
        assert_eq!(p.color, "#3b82f6");
    }

    #[test]
    fn test_unknown_id_resolves_to_fallback() {
        let catalog = sample_catalog();
        assert_eq!(catalog.get("nonexistent").id, FALLBACK_PROJECT_ID);
        assert_eq!(catalog.display_name("nonexistent"), "Other");
        assert_eq!(catalog.resolve_id("nonexistent"), FALLBACK_PROJECT_ID);
        assert_eq!(catalog.resolve_id("teaching"), "teaching");
    }

    #[test]
    fn test_contains() {
        let catalog = sample_catalog();
        assert!(catalog.contains("research"));
        assert!(catalog.contains(FALLBACK_PROJECT_ID));
        assert!(!catalog.contains("nonexistent"));
    }

    #[test]
    fn test_custom_fallback_entry() {
        let catalog = sample_catalog()
            .with_project(Project::new(FALLBACK_PROJECT_ID, "Misc", "#000000"));

        assert_eq!(catalog.get("anything").name, "Misc");
        // Custom fallback is not duplicated in the listing.
        assert_eq!(catalog.iter().filter(|p| p.id == FALLBACK_PROJECT_ID).count(), 1);
    }

    #[test]
    fn test_replaces_duplicate_id() {
        let catalog = sample_catalog()
            .with_project(Project::new("research", "Research v2", "#ffffff"));

        assert_eq!(catalog.get("research").name, "Research v2");
        assert_eq!(catalog.iter().filter(|p| p.id == "research").count(), 1);
    }

    #[test]
    fn test_iter_order_fallback_last() {
        let catalog = sample_catalog();
        let ids: Vec<&str> = catalog.iter().map(|p| p.id.as_str()).collect();
        assert_eq!(ids, vec!["research", "teaching", FALLBACK_PROJECT_ID]);
    }

    #[test]
    fn test_default_catalog_is_fallback_only() {
        let catalog = ProjectCatalog::default();
        assert_eq!(catalog.iter().count(), 1);
        assert_eq!(catalog.get("x").id, FALLBACK_PROJECT_ID);
    }
}
