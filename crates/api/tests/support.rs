//! Shared fixtures for HTTP endpoint tests.
//!
//! Endpoints are exercised through `tower::ServiceExt::oneshot` against a
//! router whose ports are replaced with in-memory stubs.

// Each test binary compiles this file separately and uses a subset of it.
#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::{to_bytes, Body};
use axum::http::{HeaderMap, Request, StatusCode};
use axum::Router;
use chrono::Utc;
use folio_api::{router, AppContext};
use folio_core::{
    ContactMessageRepository, ContactNotifier, ContactService, ContentRepository, ContentService,
    DiagnosticsService, StatsRepository,
};
use folio_domain::{
    Config, ContactMessage, ContactSubmission, Experience, PortfolioError, Profile, Project,
    ProjectFilter, Result, Skill,
};
use serde_json::Value;
use tower::ServiceExt;

/// Content stub with canned rows; `fail` turns every call into a database error.
#[derive(Default)]
pub struct StubContent {
    pub profile: Option<Profile>,
    pub skills: Vec<Skill>,
    pub projects: Vec<Project>,
    pub experience: Vec<Experience>,
    pub fail: bool,
}

impl StubContent {
    fn guard(&self) -> Result<()> {
        if self.fail {
            return Err(PortfolioError::Database("connection refused".to_string()));
        }
        Ok(())
    }
}

#[async_trait]
impl ContentRepository for StubContent {
    async fn get_profile(&self) -> Result<Option<Profile>> {
        self.guard()?;
        Ok(self.profile.clone())
    }

    async fn list_skills(&self) -> Result<Vec<Skill>> {
        self.guard()?;
        Ok(self.skills.clone())
    }

    async fn list_projects(&self, filter: &ProjectFilter) -> Result<Vec<Project>> {
        self.guard()?;
        Ok(self
            .projects
            .iter()
            .filter(|p| {
                filter.category.as_ref().map_or(true, |c| p.category.as_deref() == Some(c.as_str()))
            })
            .filter(|p| filter.featured.map_or(true, |f| p.featured == f))
            .cloned()
            .collect())
    }

    async fn get_project(&self, id: i32) -> Result<Option<Project>> {
        self.guard()?;
        Ok(self.projects.iter().find(|p| p.id == id).cloned())
    }

    async fn list_experience(&self) -> Result<Vec<Experience>> {
        self.guard()?;
        Ok(self.experience.clone())
    }
}

/// Recording contact store; `fail` simulates an insert failure.
#[derive(Default)]
pub struct StubContactStore {
    pub inserted: Arc<Mutex<Vec<ContactSubmission>>>,
    pub fail: bool,
}

#[async_trait]
impl ContactMessageRepository for StubContactStore {
    async fn insert(&self, submission: &ContactSubmission) -> Result<ContactMessage> {
        if self.fail {
            return Err(PortfolioError::Database("insert failed".to_string()));
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

/// Notifier that records attempts and reports a fixed outcome.
pub struct StubNotifier {
    pub deliver: bool,
    pub attempts: Arc<Mutex<u32>>,
}

#[async_trait]
impl ContactNotifier for StubNotifier {
    async fn send(&self, _submission: &ContactSubmission) -> bool {
        *self.attempts.lock().unwrap() += 1;
        self.deliver
    }

    fn transport_name(&self) -> &'static str {
        "stub"
    }
}

/// Stats stub; `reachable = false` makes the ping fail.
pub struct StubStats {
    pub reachable: bool,
    pub projects: i64,
    pub skills: i64,
    pub messages: i64,
}

impl Default for StubStats {
    fn default() -> Self {
        Self { reachable: true, projects: 0, skills: 0, messages: 0 }
    }
}

#[async_trait]
impl StatsRepository for StubStats {
    async fn ping(&self) -> Result<()> {
        if self.reachable {
            Ok(())
        } else {
            Err(PortfolioError::Database("connection refused".to_string()))
        }
    }

    async fn count_projects(&self) -> Result<i64> {
        Ok(self.projects)
    }

    async fn count_skills(&self) -> Result<i64> {
        Ok(self.skills)
    }

    async fn count_messages(&self) -> Result<i64> {
        Ok(self.messages)
    }
}

/// Stubbed application parts; the default is an empty store with no notifier.
pub struct TestApp {
    pub content: StubContent,
    pub contact_store: StubContactStore,
    pub notifier: Option<StubNotifier>,
    pub stats: StubStats,
    pub email_configured: bool,
}

impl Default for TestApp {
    fn default() -> Self {
        Self {
            content: StubContent::default(),
            contact_store: StubContactStore::default(),
            notifier: None,
            stats: StubStats::default(),
            email_configured: false,
        }
    }
}

impl TestApp {
    /// Assemble a router over the stubbed ports.
    pub fn into_router(self) -> Router {
        let mut contact = ContactService::new(Arc::new(self.contact_store));
        if let Some(notifier) = self.notifier {
            contact = contact.with_notifier(Arc::new(notifier));
        }

        let ctx = AppContext {
            config: Config::default(),
            content: ContentService::new(Arc::new(self.content)),
            contact,
            diagnostics: DiagnosticsService::new(Arc::new(self.stats), self.email_configured),
        };

        router(Arc::new(ctx))
    }
}

/// Drive one request through the router and decode the JSON body.
///
/// Non-JSON bodies (empty preflight responses) decode as `Value::Null`.
pub async fn send(app: Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = app.oneshot(request).await.unwrap();
    let (parts, body) = response.into_parts();
    let bytes = to_bytes(body, usize::MAX).await.unwrap();
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (parts.status, parts.headers, json)
}

/// GET helper returning status and JSON body.
pub async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let (status, _, body) = send(app, request).await;
    (status, body)
}

/// POST helper sending a JSON payload.
pub async fn post_json(app: Router, uri: &str, payload: &Value) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(payload.to_string()))
        .unwrap();
    let (status, _, body) = send(app, request).await;
    (status, body)
}
