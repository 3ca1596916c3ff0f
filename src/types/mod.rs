//! Workspace data model
//!
//! This module consolidates the records the orchestration layer produces:
//! - Generated markdown documents
//! - Multi-agent discussion transcripts
//! - Sprint task lists

mod agent;
mod document;
mod sprint;

// Document types
pub use document::{DocType, DocTypeError, GeneratedDocument, ProjectInputs};

// Agent discussion types
pub use agent::{AgentMessage, AgentRole, AgentTurnRecord};

// Sprint planning types
pub use sprint::{SprintTask, SprintTaskRecord, TaskStatus, TaskType, total_points};
