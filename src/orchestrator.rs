//! The workspace orchestrator: sequences gateway calls and shapes results
//! for the UI-facing operations.
//!
//! Each operation is one linear call chain with a single network round trip.
//! All failures propagate explicitly; no operation falls back to silent
//! defaults.

use crate::coercer::{self, CoercionError};
use crate::config::Config;
use crate::gateway::{
    CompletionRequest, GatewayError, GeminiClient, GenerationOptions, ModelClient,
};
use crate::log_debug;
use crate::prompts;
use crate::types::{
    AgentMessage, AgentRole, AgentTurnRecord, DocType, GeneratedDocument, ProjectInputs,
    SprintTask, SprintTaskRecord,
};
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;

/// Sampling temperature for document generation
const DOCUMENT_TEMPERATURE: f32 = 0.7;

/// Failure surfaced to front-ends by every workspace operation
#[derive(Debug, thiserror::Error)]
pub enum GenerationError {
    /// Transport failure or empty response from the generation endpoint
    #[error("Failed to generate: {0}")]
    Upstream(#[from] GatewayError),
    /// The model answered, but not in the requested structure
    #[error("Model response was malformed: {0}")]
    Malformed(#[from] CoercionError),
}

/// Service exposing the workspace operations to front-ends.
///
/// Holds no shared mutable state; concurrent invocations are fully
/// independent and serialization is the caller's affair.
#[derive(Clone)]
pub struct WorkspaceService {
    config: Config,
    client: Arc<dyn ModelClient>,
}

impl WorkspaceService {
    /// Create a service over an explicit client (tests pass a stub here)
    pub fn new(config: Config, client: Arc<dyn ModelClient>) -> Self {
        Self { config, client }
    }

    /// Create a service backed by the configured Gemini endpoint
    pub fn from_config(config: Config) -> Result<Self, GatewayError> {
        let client = GeminiClient::from_config(&config)?;
        Ok(Self::new(config, Arc::new(client)))
    }

    /// Generate one markdown document from the given project context.
    pub async fn generate_document(
        &self,
        doc_type: DocType,
        inputs: &ProjectInputs,
    ) -> Result<GeneratedDocument, GenerationError> {
        log_debug!("Generating {} document", doc_type.key());

        let request = CompletionRequest::new(prompts::document_user_prompt(doc_type, inputs))
            .with_system(prompts::document_system_prompt(&self.config))
            .with_options(GenerationOptions::default().with_temperature(DOCUMENT_TEMPERATURE));

        let raw = self.client.complete(&request).await?;
        let content = coercer::coerce_text(&raw);

        Ok(GeneratedDocument::new(doc_type, inputs, content))
    }

    /// Refine existing document content per the caller's instruction.
    ///
    /// On failure the error propagates; the original content is never
    /// returned silently in its place.
    pub async fn refine_document(
        &self,
        current_content: &str,
        instruction: &str,
    ) -> Result<String, GenerationError> {
        log_debug!("Refining document ({} chars)", current_content.len());

        let request =
            CompletionRequest::new(prompts::refine_user_prompt(current_content, instruction))
                .with_system(prompts::document_system_prompt(&self.config));

        let raw = self.client.complete(&request).await?;
        Ok(coercer::coerce_text(&raw))
    }

    /// Generate a simulated multi-agent discussion about a topic.
    ///
    /// Ids and timestamps are assigned locally since the remote model
    /// supplies neither; ordering is the model's turn order.
    pub async fn generate_agent_discussion(
        &self,
        topic: &str,
    ) -> Result<Vec<AgentMessage>, GenerationError> {
        log_debug!("Generating agent discussion for topic: {}", topic);

        let request = CompletionRequest::new(prompts::discussion_user_prompt(topic))
            .with_options(GenerationOptions::json());

        let raw = self.client.complete(&request).await?;
        let turns: Vec<AgentTurnRecord> = coercer::coerce_json_array(&raw)?;

        let timestamp = Utc::now();
        let messages = turns
            .into_iter()
            .enumerate()
            .map(|(i, turn)| AgentMessage {
                id: i.to_string(),
                agent: AgentRole::from_label(&turn.agent),
                message: turn.message,
                timestamp,
            })
            .collect();

        Ok(messages)
    }

    /// Generate an agile sprint task list from free-text context.
    pub async fn generate_sprint_tasks(
        &self,
        context: &str,
    ) -> Result<Vec<SprintTask>, GenerationError> {
        log_debug!("Generating sprint tasks for context: {}", context);

        let request = CompletionRequest::new(prompts::sprint_tasks_user_prompt(context))
            .with_options(GenerationOptions::json());

        let raw = self.client.complete(&request).await?;
        let records: Vec<SprintTaskRecord> = coercer::coerce_json_array(&raw)?;

        Ok(assign_unique_ids(records))
    }
}

/// Uphold the batch-uniqueness invariant on task ids.
///
/// Ids from the model are kept when present and unused; missing, empty, or
/// duplicate ids are reassigned from the lowest free ordinal.
fn assign_unique_ids(records: Vec<SprintTaskRecord>) -> Vec<SprintTask> {
    let mut seen: HashSet<String> = HashSet::new();

    records
        .into_iter()
        .enumerate()
        .map(|(i, record)| {
            let id = match record.id {
                Some(id) if !id.is_empty() && !seen.contains(&id) => id,
                _ => {
                    let mut ordinal = i + 1;
                    loop {
                        let candidate = ordinal.to_string();
                        if !seen.contains(&candidate) {
                            break candidate;
                        }
                        ordinal += 1;
                    }
                }
            };
            seen.insert(id.clone());

            SprintTask {
                id,
                title: record.title,
                task_type: record.task_type,
                status: record.status,
                points: record.points,
                assignee: record.assignee,
            }
        })
        .collect()
}
