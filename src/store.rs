//! In-memory stores backing the mock dashboard.
//!
//! Plain keyed collections over mock data. The only invariant is id
//! uniqueness; everything else is display state the pages edit freely.

use serde::{Deserialize, Serialize};

use crate::prng::Prng;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Free,
    Pro,
    Premium,
}

impl Tier {
    pub fn label(self) -> &'static str {
        match self {
            Tier::Free => "Free",
            Tier::Pro => "Pro",
            Tier::Premium => "Premium",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Inactive,
    Archived,
}

impl ProjectStatus {
    pub fn label(self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Inactive => "inactive",
            ProjectStatus::Archived => "archived",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub url: String,
    pub local_port: Option<String>,
    pub dev_name: String,
    pub api_key: String,
    pub tier: Tier,
    pub created_at: String,
    pub is_local: bool,
    pub status: ProjectStatus,
    pub last_active: String,
}

/// Caller-supplied fields for [`ProjectStore::add`]; id, API key and status
/// are filled in by the store.
#[derive(Debug, Clone)]
pub struct NewProject {
    pub name: String,
    pub url: String,
    pub local_port: Option<String>,
    pub dev_name: String,
    pub tier: Tier,
    pub is_local: bool,
}

pub struct ProjectStore {
    projects: Vec<Project>,
    selected: Option<String>,
    prng: Prng,
}

impl ProjectStore {
    pub fn new(seed: u64) -> Self {
        Self {
            projects: Vec::new(),
            selected: None,
            prng: Prng::new(seed),
        }
    }

    pub fn with_mock_data(seed: u64) -> Self {
        let mut store = Self::new(seed);
        store.projects = crate::mock::mock_projects();
        store
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn len(&self) -> usize {
        self.projects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.projects.is_empty()
    }

    pub fn get(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn add(&mut self, new: NewProject) -> Project {
        let id = self.fresh_id();
        let api_key = self.fresh_api_key();
        let project = Project {
            id,
            name: new.name,
            url: new.url,
            local_port: new.local_port,
            dev_name: new.dev_name,
            api_key,
            tier: new.tier,
            created_at: "just now".to_string(),
            is_local: new.is_local,
            status: ProjectStatus::Active,
            last_active: "just now".to_string(),
        };
        self.projects.push(project.clone());
        project
    }

    /// Applies `edit` to the project with `id`. Returns false if no such
    /// project exists.
    pub fn update(&mut self, id: &str, edit: impl FnOnce(&mut Project)) -> bool {
        match self.projects.iter_mut().find(|p| p.id == id) {
            Some(project) => {
                edit(project);
                true
            }
            None => false,
        }
    }

    /// Removes the project; a matching selection is cleared with it.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.projects.len();
        self.projects.retain(|p| p.id != id);
        if self.selected.as_deref() == Some(id) {
            self.selected = None;
        }
        self.projects.len() != before
    }

    pub fn regenerate_api_key(&mut self, id: &str) -> Option<String> {
        let api_key = self.fresh_api_key();
        let project = self.projects.iter_mut().find(|p| p.id == id)?;
        project.api_key = api_key.clone();
        Some(api_key)
    }

    pub fn select(&mut self, id: Option<&str>) {
        self.selected = id.map(str::to_string);
    }

    pub fn selected(&self) -> Option<&Project> {
        let id = self.selected.as_deref()?;
        self.get(id)
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.prng.token(12);
            if self.get(&id).is_none() {
                return id;
            }
        }
    }

    fn fresh_api_key(&mut self) -> String {
        format!("ck_{}", self.prng.token(26))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FeedbackKind {
    Bug,
    Design,
    Feature,
}

impl FeedbackKind {
    pub fn label(self) -> &'static str {
        match self {
            FeedbackKind::Bug => "bug",
            FeedbackKind::Design => "design",
            FeedbackKind::Feature => "feature",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FeedbackStatus {
    #[serde(rename = "new")]
    New,
    #[serde(rename = "in-progress")]
    InProgress,
    #[serde(rename = "resolved")]
    Resolved,
}

impl FeedbackStatus {
    pub const ALL: [FeedbackStatus; 3] = [
        FeedbackStatus::New,
        FeedbackStatus::InProgress,
        FeedbackStatus::Resolved,
    ];

    pub fn label(self) -> &'static str {
        match self {
            FeedbackStatus::New => "new",
            FeedbackStatus::InProgress => "in-progress",
            FeedbackStatus::Resolved => "resolved",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Feedback {
    pub id: String,
    pub project_id: String,
    pub kind: FeedbackKind,
    pub content: String,
    /// CSS selector of the element the widget was attached to.
    pub element: String,
    /// Page path the feedback was left on.
    pub path: String,
    pub reporter: String,
    pub timestamp: String,
    pub status: FeedbackStatus,
    pub priority: Priority,
    pub browser: String,
}

pub struct FeedbackStore {
    feedbacks: Vec<Feedback>,
}

impl FeedbackStore {
    pub fn new() -> Self {
        Self {
            feedbacks: Vec::new(),
        }
    }

    pub fn with_mock_data() -> Self {
        Self {
            feedbacks: crate::mock::mock_feedbacks(),
        }
    }

    pub fn all(&self) -> &[Feedback] {
        &self.feedbacks
    }

    pub fn get(&self, id: &str) -> Option<&Feedback> {
        self.feedbacks.iter().find(|f| f.id == id)
    }

    pub fn for_project(&self, project_id: &str) -> Vec<Feedback> {
        self.feedbacks
            .iter()
            .filter(|f| f.project_id == project_id)
            .cloned()
            .collect()
    }

    pub fn count_for(&self, project_id: &str) -> usize {
        self.feedbacks
            .iter()
            .filter(|f| f.project_id == project_id)
            .count()
    }

    pub fn count_with_status(&self, status: FeedbackStatus) -> usize {
        self.feedbacks.iter().filter(|f| f.status == status).count()
    }

    pub fn set_status(&mut self, id: &str, status: FeedbackStatus) -> bool {
        match self.feedbacks.iter_mut().find(|f| f.id == id) {
            Some(feedback) => {
                feedback.status = status;
                true
            }
            None => false,
        }
    }
}

impl Default for FeedbackStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_project(name: &str) -> NewProject {
        NewProject {
            name: name.to_string(),
            url: format!("https://{name}.example.com"),
            local_port: None,
            dev_name: "Alice".to_string(),
            tier: Tier::Pro,
            is_local: false,
        }
    }

    #[test]
    fn add_assigns_unique_ids_and_prefixed_keys() {
        let mut store = ProjectStore::new(1);
        let a = store.add(new_project("one"));
        let b = store.add(new_project("two"));

        assert_ne!(a.id, b.id);
        assert!(a.api_key.starts_with("ck_"));
        assert_eq!(a.status, ProjectStatus::Active);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn update_edits_in_place() {
        let mut store = ProjectStore::new(2);
        let p = store.add(new_project("site"));

        assert!(store.update(&p.id, |p| p.name = "renamed".to_string()));
        assert_eq!(store.get(&p.id).map(|p| p.name.as_str()), Some("renamed"));
        assert!(!store.update("missing", |_| {}));
    }

    #[test]
    fn delete_clears_matching_selection() {
        let mut store = ProjectStore::new(3);
        let p = store.add(new_project("doomed"));
        store.select(Some(&p.id));
        assert_eq!(store.selected().map(|p| p.id.clone()), Some(p.id.clone()));

        assert!(store.delete(&p.id));
        assert!(store.selected().is_none());
        assert!(!store.delete(&p.id));
    }

    #[test]
    fn regenerate_replaces_only_the_key() {
        let mut store = ProjectStore::new(4);
        let p = store.add(new_project("keys"));
        let old = p.api_key.clone();

        let fresh = store.regenerate_api_key(&p.id).expect("project exists");
        assert_ne!(fresh, old);
        assert!(fresh.starts_with("ck_"));
        assert_eq!(store.get(&p.id).map(|p| p.api_key.clone()), Some(fresh));
        assert!(store.regenerate_api_key("missing").is_none());
    }

    #[test]
    fn mock_data_seeds_the_stores() {
        let projects = ProjectStore::with_mock_data(5);
        let feedbacks = FeedbackStore::with_mock_data();

        assert!(!projects.is_empty());
        // Every mock feedback points at a mock project.
        for f in feedbacks.all() {
            assert!(
                projects.get(&f.project_id).is_some(),
                "feedback {} has dangling project id {}",
                f.id,
                f.project_id
            );
        }
    }

    #[test]
    fn feedback_filtering_and_status_updates() {
        let mut store = FeedbackStore::with_mock_data();
        let first = store.all().first().expect("mock data is non-empty").clone();

        let for_project = store.for_project(&first.project_id);
        assert!(for_project.iter().all(|f| f.project_id == first.project_id));
        assert_eq!(store.count_for(&first.project_id), for_project.len());

        assert!(store.set_status(&first.id, FeedbackStatus::Resolved));
        assert_eq!(
            store.get(&first.id).map(|f| f.status),
            Some(FeedbackStatus::Resolved)
        );
        assert!(!store.set_status("missing", FeedbackStatus::New));
    }
}
