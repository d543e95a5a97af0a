//! Read-side content types: profile, skills, projects, experience
//!
//! All of these are backed by rows the store owns; the application never
//! mutates them.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/* -------------------------------------------------------------------------- */
/* Profile */
/* -------------------------------------------------------------------------- */

/// Site owner profile
///
/// The store holds at most one meaningful row; reads always take the first
/// row by id so concurrent edits outside the API stay deterministic.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: i32,
    pub name: String,
    pub title: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub location: Option<String>,
    pub github_url: Option<String>,
    pub linkedin_url: Option<String>,
    pub twitter_url: Option<String>,
    pub profile_image: Option<String>,
    pub resume_url: Option<String>,
}

/* -------------------------------------------------------------------------- */
/* Skills */
/* -------------------------------------------------------------------------- */

/// Single skill row as stored
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub id: i32,
    pub category: String,
    pub name: String,
    /// Self-assessed proficiency, 0-100
    pub proficiency: i32,
    pub icon: Option<String>,
    pub display_order: i32,
}

/// Skills collapsed by category for the frontend
///
/// Categories appear in first-seen row order; `items` keeps the per-category
/// row order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillGroup {
    pub category: String,
    pub items: Vec<String>,
}

/* -------------------------------------------------------------------------- */
/* Projects */
/* -------------------------------------------------------------------------- */

/// Portfolio project with its technology tags flattened in
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub id: i32,
    pub title: String,
    pub description: Option<String>,
    pub long_description: Option<String>,
    pub image_url: Option<String>,
    pub github_url: Option<String>,
    pub live_url: Option<String>,
    pub category: Option<String>,
    pub featured: bool,
    pub display_order: i32,
    pub created_at: DateTime<Utc>,
    /// Technology tags from the join table; empty when none are attached
    pub technologies: Vec<String>,
}

/// Optional list filters for the projects endpoint
///
/// Both filters combine with AND when present.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProjectFilter {
    /// Exact category match
    pub category: Option<String>,
    /// Featured flag match
    pub featured: Option<bool>,
}

/* -------------------------------------------------------------------------- */
/* Experience */
/* -------------------------------------------------------------------------- */

/// Work history entry
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Experience {
    pub id: i32,
    pub company: String,
    pub position: String,
    pub description: Option<String>,
    pub start_date: Option<NaiveDate>,
    /// None for ongoing roles
    pub end_date: Option<NaiveDate>,
    pub is_current: bool,
    pub location: Option<String>,
    pub company_url: Option<String>,
}
