//! Mock port implementations for testing
//!
//! Provides in-memory mocks for all core ports, enabling deterministic
//! service tests without database or network dependencies.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use chrono::Utc;
use folio_core::contact::ports::{ContactMessageRepository, ContactNotifier};
use folio_core::content::ports::ContentRepository;
use folio_core::diagnostics::ports::StatsRepository;
use folio_domain::{
    ContactMessage, ContactSubmission, Experience, PortfolioError, Profile, Project,
    ProjectFilter, Result as DomainResult, Skill,
};

/// In-memory mock for `ContentRepository`.
///
/// Stores fixed content rows and applies the same filter semantics a real
/// store adapter would.
#[derive(Default, Clone)]
pub struct MockContentRepository {
    profile: Option<Profile>,
    skills: Arc<Vec<Skill>>,
    projects: Arc<Vec<Project>>,
    experience: Arc<Vec<Experience>>,
}

impl MockContentRepository {
    /// Create an empty mock.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seed the singleton profile row.
    pub fn with_profile(mut self, profile: Profile) -> Self {
        self.profile = Some(profile);
        self
    }

    /// Seed skill rows (callers provide them pre-sorted).
    pub fn with_skills(mut self, skills: Vec<Skill>) -> Self {
        self.skills = Arc::new(skills);
        self
    }

    /// Seed project rows.
    pub fn with_projects(mut self, projects: Vec<Project>) -> Self {
        self.projects = Arc::new(projects);
        self
    }

    /// Seed experience rows.
    pub fn with_experience(mut self, experience: Vec<Experience>) -> Self {
        self.experience = Arc::new(experience);
        self
    }
}

#[async_trait]
impl ContentRepository for MockContentRepository {
    async fn get_profile(&self) -> DomainResult<Option<Profile>> {
        Ok(self.profile.clone())
    }

    async fn list_skills(&self) -> DomainResult<Vec<Skill>> {
        Ok((*self.skills).clone())
    }

    async fn list_projects(&self, filter: &ProjectFilter) -> DomainResult<Vec<Project>> {
        Ok(self
            .projects
            .iter()
            .filter(|p| filter.category.as_ref().map_or(true, |c| p.category.as_ref() == Some(c)))
            .filter(|p| filter.featured.map_or(true, |f| p.featured == f))
            .cloned()
            .collect())
    }

    async fn get_project(&self, id: i32) -> DomainResult<Option<Project>> {
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn list_experience(&self) -> DomainResult<Vec<Experience>> {
        Ok((*self.experience).clone())
    }
}

/// In-memory mock for `ContactMessageRepository`.
///
/// Records every insert so tests can assert exactly what would have been
/// persisted; can be switched into a failing mode.
#[derive(Default, Clone)]
pub struct MockContactMessageRepository {
    inserted: Arc<Mutex<Vec<ContactSubmission>>>,
    fail: bool,
}

impl MockContactMessageRepository {
    /// Create a mock that accepts inserts.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mock whose inserts fail like an unreachable store.
    pub fn failing() -> Self {
        Self { inserted: Arc::new(Mutex::new(Vec::new())), fail: true }
    }

    /// Submissions recorded so far, in insertion order.
    pub fn inserted(&self) -> Vec<ContactSubmission> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl ContactMessageRepository for MockContactMessageRepository {
    async fn insert(&self, submission: &ContactSubmission) -> DomainResult<ContactMessage> {
        if self.fail {
            return Err(PortfolioError::Database("insert failed: store unreachable".to_string()));
        }

        let mut inserted = self.inserted.lock().unwrap();
        inserted.push(submission.clone());

        Ok(ContactMessage {
            id: inserted.len() as i32,
            name: submission.name.clone(),
            email: submission.email.clone(),
            message: submission.message.clone(),
            created_at: Utc::now(),
        })
    }
}

/// Recording mock for `ContactNotifier`.
///
/// Reports a fixed delivery outcome and counts attempts.
#[derive(Clone)]
pub struct RecordingNotifier {
    outcome: bool,
    sent: Arc<Mutex<Vec<ContactSubmission>>>,
}

impl RecordingNotifier {
    /// A notifier whose sends succeed.
    pub fn delivering() -> Self {
        Self { outcome: true, sent: Arc::new(Mutex::new(Vec::new())) }
    }

    /// A notifier whose sends fail silently, like a down relay.
    pub fn failing() -> Self {
        Self { outcome: false, sent: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Number of delivery attempts made.
    pub fn attempts(&self) -> usize {
        self.sent.lock().unwrap().len()
    }
}

#[async_trait]
impl ContactNotifier for RecordingNotifier {
    async fn send(&self, submission: &ContactSubmission) -> bool {
        self.sent.lock().unwrap().push(submission.clone());
        self.outcome
    }

    fn transport_name(&self) -> &'static str {
        "mock"
    }
}

/// In-memory mock for `StatsRepository`.
#[derive(Default, Clone)]
pub struct MockStatsRepository {
    projects: i64,
    skills: i64,
    messages: i64,
    ping_fails: bool,
    counts_fail: bool,
}

impl MockStatsRepository {
    /// Create a mock reporting the given counts.
    pub fn new(projects: i64, skills: i64, messages: i64) -> Self {
        Self { projects, skills, messages, ..Self::default() }
    }

    /// Make the reachability probe fail.
    pub fn with_unreachable_store(mut self) -> Self {
        self.ping_fails = true;
        self
    }

    /// Make the count queries fail.
    pub fn with_failing_counts(mut self) -> Self {
        self.counts_fail = true;
        self
    }

    fn count(&self, value: i64) -> DomainResult<i64> {
        if self.counts_fail {
            return Err(PortfolioError::Database("count failed: store unreachable".to_string()));
        }
        Ok(value)
    }
}

#[async_trait]
impl StatsRepository for MockStatsRepository {
    async fn ping(&self) -> DomainResult<()> {
        if self.ping_fails {
            return Err(PortfolioError::Database("ping failed: store unreachable".to_string()));
        }
        Ok(())
    }

    async fn count_projects(&self) -> DomainResult<i64> {
        self.count(self.projects)
    }

    async fn count_skills(&self) -> DomainResult<i64> {
        self.count(self.skills)
    }

    async fn count_messages(&self) -> DomainResult<i64> {
        self.count(self.messages)
    }
}
