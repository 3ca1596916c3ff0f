//! Document kinds, project inputs, and generated document records

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Closed set of document kinds the prompt builder can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum DocType {
    #[default]
    Prd,
    Brd,
    Mrd,
    Srs,
    UserStories,
    Roadmap,
    ArchDiagram,
    Personas,
    TestPlan,
    ReleaseNotes,
    ApiSpec,
    SprintPlan,
    AnalyticsReport,
}

impl DocType {
    /// All available document kinds
    pub const ALL: &'static [DocType] = &[
        DocType::Prd,
        DocType::Brd,
        DocType::Mrd,
        DocType::Srs,
        DocType::UserStories,
        DocType::Roadmap,
        DocType::ArchDiagram,
        DocType::Personas,
        DocType::TestPlan,
        DocType::ReleaseNotes,
        DocType::ApiSpec,
        DocType::SprintPlan,
        DocType::AnalyticsReport,
    ];

    /// Short key as used on the CLI
    pub const fn key(&self) -> &'static str {
        match self {
            Self::Prd => "prd",
            Self::Brd => "brd",
            Self::Mrd => "mrd",
            Self::Srs => "srs",
            Self::UserStories => "user-stories",
            Self::Roadmap => "roadmap",
            Self::ArchDiagram => "architecture",
            Self::Personas => "personas",
            Self::TestPlan => "test-plan",
            Self::ReleaseNotes => "release-notes",
            Self::ApiSpec => "api-spec",
            Self::SprintPlan => "sprint-plan",
            Self::AnalyticsReport => "analytics-report",
        }
    }

    /// Full document name as embedded in prompts and shown to users
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Prd => "Product Requirements Document",
            Self::Brd => "Business Requirement Document",
            Self::Mrd => "Market Requirements Document",
            Self::Srs => "Software Requirements Specification",
            Self::UserStories => "User Stories & Epics",
            Self::Roadmap => "Strategic Roadmap",
            Self::ArchDiagram => "System Architecture",
            Self::Personas => "User Personas",
            Self::TestPlan => "QA Test Plan",
            Self::ReleaseNotes => "Release Notes",
            Self::ApiSpec => "API Specification",
            Self::SprintPlan => "Sprint Plan",
            Self::AnalyticsReport => "Product Analytics Report",
        }
    }

    /// Get all document kind keys as strings
    pub fn all_keys() -> Vec<&'static str> {
        Self::ALL.iter().map(Self::key).collect()
    }
}

impl FromStr for DocType {
    type Err = DocTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lower = s.to_lowercase();
        Self::ALL
            .iter()
            .find(|d| d.key() == lower || d.display_name().to_lowercase() == lower)
            .copied()
            .ok_or_else(|| DocTypeError::Unknown(s.to_string()))
    }
}

impl fmt::Display for DocType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Document kind parse error
#[derive(Debug, thiserror::Error)]
pub enum DocTypeError {
    #[error("Unknown document type: {0}. Use 'prodmuse doc-types' to list supported kinds")]
    Unknown(String),
}

/// Free-text project context supplied by the user.
///
/// No required-field enforcement happens here; absent fields interpolate
/// into prompts as empty text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectInputs {
    #[serde(default)]
    pub project_name: String,
    #[serde(default)]
    pub feature_name: String,
    #[serde(default)]
    pub problem_statement: String,
    #[serde(default)]
    pub business_goal: String,
    #[serde(default)]
    pub user_segment: String,
    #[serde(default)]
    pub kpis: String,
    #[serde(default)]
    pub tech_constraints: String,
}

impl ProjectInputs {
    /// Overlay another set of inputs on top of this one.
    ///
    /// Non-empty fields from `overrides` win; empty fields keep the base
    /// value. Used to apply CLI flags over a template prefill.
    pub fn merged_with(&self, overrides: &Self) -> Self {
        fn pick(base: &str, over: &str) -> String {
            if over.is_empty() {
                base.to_string()
            } else {
                over.to_string()
            }
        }

        Self {
            project_name: pick(&self.project_name, &overrides.project_name),
            feature_name: pick(&self.feature_name, &overrides.feature_name),
            problem_statement: pick(&self.problem_statement, &overrides.problem_statement),
            business_goal: pick(&self.business_goal, &overrides.business_goal),
            user_segment: pick(&self.user_segment, &overrides.user_segment),
            kpis: pick(&self.kpis, &overrides.kpis),
            tech_constraints: pick(&self.tech_constraints, &overrides.tech_constraints),
        }
    }

    /// All fields paired with their prompt labels, in template order
    pub fn labeled_fields(&self) -> [(&'static str, &str); 7] {
        [
            ("Name", &self.project_name),
            ("Feature", &self.feature_name),
            ("Problem", &self.problem_statement),
            ("Goal", &self.business_goal),
            ("Users", &self.user_segment),
            ("KPIs", &self.kpis),
            ("Tech", &self.tech_constraints),
        ]
    }
}

/// A generated markdown document.
///
/// Immutable once produced, except for explicit content replacement via
/// [`GeneratedDocument::replace_content`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratedDocument {
    pub id: Uuid,
    pub doc_type: DocType,
    pub title: String,
    /// Markdown body
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub version: u32,
}

impl GeneratedDocument {
    /// Wrap freshly generated content into a document record.
    ///
    /// The title falls back feature name -> project name -> document kind.
    pub fn new(doc_type: DocType, inputs: &ProjectInputs, content: String) -> Self {
        let title = if !inputs.feature_name.is_empty() {
            inputs.feature_name.clone()
        } else if !inputs.project_name.is_empty() {
            inputs.project_name.clone()
        } else {
            doc_type.display_name().to_string()
        };

        Self {
            id: Uuid::new_v4(),
            doc_type,
            title,
            content,
            created_at: Utc::now(),
            version: 1,
        }
    }

    /// Replace the document body in place, bumping the version
    pub fn replace_content(&mut self, content: String) {
        self.content = content;
        self.version += 1;
    }
}
