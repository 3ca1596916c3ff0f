//! Prodmuse - AI-powered product management workspace
//!
//! This library turns user-supplied project context into markdown product
//! documents, simulated multi-agent discussion transcripts, and structured
//! sprint task lists by orchestrating calls to a hosted text-generation
//! endpoint.

// Allow certain clippy warnings that are stylistic preferences
#![allow(clippy::uninlined_format_args)] // Style preference
#![allow(clippy::format_push_string)] // Performance improvement but stylistic
#![allow(clippy::return_self_not_must_use)] // Builder pattern is clear enough
#![allow(clippy::items_after_statements)] // Locally-scoped use statements are fine

pub mod cli;
pub mod coercer;
pub mod commands;
pub mod common;
pub mod config;
pub mod gateway;
pub mod logger;
pub mod messages;
pub mod orchestrator;
pub mod prompts;
pub mod templates;
pub mod types;
pub mod ui;
pub mod workspace;

// Re-export important structs and functions for easier testing
pub use config::Config;
pub use orchestrator::{GenerationError, WorkspaceService};

// Re-exports from types module
pub use types::{
    AgentMessage, AgentRole, DocType, GeneratedDocument, ProjectInputs, SprintTask, TaskStatus,
    TaskType,
};
