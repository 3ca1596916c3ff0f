//! Agent personas and discussion transcript records

use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Labeled agent personas used as prompt-shaping tags and display labels.
///
/// No independent execution unit exists per agent; the enumeration is closed
/// so lookup tables over it are compiler-enforced exhaustive matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgentRole {
    #[serde(rename = "Product Manager Agent")]
    Pm,
    #[serde(rename = "Research Agent")]
    Researcher,
    #[serde(rename = "Writer Agent")]
    Writer,
    #[serde(rename = "Tech Agent")]
    Tech,
    #[serde(rename = "UX Agent")]
    Ux,
    #[serde(rename = "QA Agent")]
    Qa,
    #[serde(rename = "Release Agent")]
    Release,
    #[serde(rename = "Data Analyst Agent")]
    Analyst,
}

impl AgentRole {
    /// All agent personas
    pub const ALL: &'static [AgentRole] = &[
        AgentRole::Pm,
        AgentRole::Researcher,
        AgentRole::Writer,
        AgentRole::Tech,
        AgentRole::Ux,
        AgentRole::Qa,
        AgentRole::Release,
        AgentRole::Analyst,
    ];

    /// The four personas invited into control-room discussions
    pub const DISCUSSION_PANEL: &'static [AgentRole] = &[
        AgentRole::Pm,
        AgentRole::Ux,
        AgentRole::Tech,
        AgentRole::Qa,
    ];

    /// Full persona label as it appears in prompts and transcripts
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Pm => "Product Manager Agent",
            Self::Researcher => "Research Agent",
            Self::Writer => "Writer Agent",
            Self::Tech => "Tech Agent",
            Self::Ux => "UX Agent",
            Self::Qa => "QA Agent",
            Self::Release => "Release Agent",
            Self::Analyst => "Data Analyst Agent",
        }
    }

    /// First word of the label, used for avatars and chips
    pub const fn short_name(&self) -> &'static str {
        match self {
            Self::Pm => "Product",
            Self::Researcher => "Research",
            Self::Writer => "Writer",
            Self::Tech => "Tech",
            Self::Ux => "UX",
            Self::Qa => "QA",
            Self::Release => "Release",
            Self::Analyst => "Data",
        }
    }

    /// Terminal RGB color per persona.
    ///
    /// Exhaustive on purpose: adding a persona forces a color choice here.
    pub const fn color(&self) -> (u8, u8, u8) {
        match self {
            Self::Pm => (37, 99, 235),         // blue
            Self::Ux => (147, 51, 234),        // purple
            Self::Tech => (5, 150, 105),       // emerald
            Self::Qa => (219, 39, 119),        // pink
            Self::Release => (234, 88, 12),    // orange
            Self::Analyst => (8, 145, 178),    // cyan
            Self::Researcher => (79, 70, 229), // indigo
            Self::Writer => (71, 85, 105),     // slate
        }
    }

    /// Map a free-text persona label from the model onto the closed set.
    ///
    /// Model output is not guaranteed to repeat our labels verbatim, so the
    /// match is a conservative keyword scan; unrecognized labels land on the
    /// Product Manager persona.
    pub fn from_label(label: &str) -> Self {
        let lower = label.to_lowercase();
        if lower.contains("ux") || lower.contains("design") {
            Self::Ux
        } else if lower.contains("tech") || lower.contains("engineer") {
            Self::Tech
        } else if lower.contains("qa") || lower.contains("quality") || lower.contains("test") {
            Self::Qa
        } else if lower.contains("research") {
            Self::Researcher
        } else if lower.contains("writ") {
            Self::Writer
        } else if lower.contains("release") || lower.contains("deploy") {
            Self::Release
        } else if lower.contains("analyst") || lower.contains("data") {
            Self::Analyst
        } else {
            Self::Pm
        }
    }
}

impl fmt::Display for AgentRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// One turn of a multi-agent discussion, as returned to callers.
///
/// Ids and timestamps are assigned locally at coercion time; the remote
/// model supplies neither. Ordering is insertion order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentMessage {
    pub id: String,
    pub agent: AgentRole,
    pub message: String,
    pub timestamp: DateTime<Utc>,
}

/// Wire record for one discussion turn as produced by the model.
///
/// The schema of this struct is embedded in the discussion prompt so the
/// model knows the exact shape to emit.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct AgentTurnRecord {
    /// Persona label, e.g. "Product Manager Agent" or "UX Agent"
    pub agent: String,
    /// The agent's chat message
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_label_maps_known_personas() {
        assert_eq!(AgentRole::from_label("UX Agent"), AgentRole::Ux);
        assert_eq!(AgentRole::from_label("tech agent"), AgentRole::Tech);
        assert_eq!(AgentRole::from_label("QA"), AgentRole::Qa);
        assert_eq!(
            AgentRole::from_label("Data Analyst Agent"),
            AgentRole::Analyst
        );
        assert_eq!(
            AgentRole::from_label("Product Manager Agent"),
            AgentRole::Pm
        );
    }

    #[test]
    fn test_from_label_falls_back_to_pm() {
        assert_eq!(AgentRole::from_label("Mystery Persona"), AgentRole::Pm);
        assert_eq!(AgentRole::from_label(""), AgentRole::Pm);
    }

    #[test]
    fn test_serde_uses_display_labels() {
        let json = serde_json::to_string(&AgentRole::Ux).expect("serialize");
        assert_eq!(json, "\"UX Agent\"");
        let back: AgentRole = serde_json::from_str("\"Release Agent\"").expect("deserialize");
        assert_eq!(back, AgentRole::Release);
    }
}
