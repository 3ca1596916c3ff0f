//! Centralized test infrastructure shared by the integration tests.

#![allow(dead_code)]

use async_trait::async_trait;
use parking_lot::Mutex;
use prodmuse::Config;
use prodmuse::WorkspaceService;
use prodmuse::gateway::{CompletionRequest, GatewayError, ModelClient};
use prodmuse::types::ProjectInputs;
use std::sync::Arc;

/// Stub model client returning canned responses (or failures) in order.
///
/// Every request is recorded so tests can assert on the exact prompt and
/// generation options that reached the gateway.
pub struct StubClient {
    responses: Mutex<Vec<Result<String, GatewayError>>>,
    requests: Arc<Mutex<Vec<CompletionRequest>>>,
}

impl StubClient {
    pub fn new(responses: Vec<Result<String, GatewayError>>) -> Self {
        Self {
            responses: Mutex::new(responses),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// A client that answers every call with the same text
    pub fn with_response(text: &str) -> Self {
        Self::new(vec![Ok(text.to_string())])
    }

    /// A client whose single call fails with a transport-style error
    pub fn failing() -> Self {
        Self::new(vec![Err(GatewayError::EmptyResponse)])
    }

    /// Handle onto the recorded requests, usable after the client moves
    /// into the service
    pub fn request_log(&self) -> Arc<Mutex<Vec<CompletionRequest>>> {
        Arc::clone(&self.requests)
    }
}

#[async_trait]
impl ModelClient for StubClient {
    async fn complete(&self, request: &CompletionRequest) -> Result<String, GatewayError> {
        self.requests.lock().push(request.clone());

        let mut responses = self.responses.lock();
        if responses.is_empty() {
            return Err(GatewayError::EmptyResponse);
        }
        responses.remove(0)
    }
}

/// Build a workspace service over a stub client and default configuration
pub fn stub_service(client: StubClient) -> WorkspaceService {
    WorkspaceService::new(Config::default(), Arc::new(client))
}

/// Project inputs with every field populated
pub fn sample_inputs() -> ProjectInputs {
    ProjectInputs {
        project_name: "Atlas CRM".to_string(),
        feature_name: "Referral Engine".to_string(),
        problem_statement: "Growth has plateaued in the mid-market segment".to_string(),
        business_goal: "Increase qualified signups by 20%".to_string(),
        user_segment: "Mid-market sales teams".to_string(),
        kpis: "Referral conversion rate, CAC".to_string(),
        tech_constraints: "Rust backend, PostgreSQL, no third-party trackers".to_string(),
    }
}

/// A well-formed discussion script as the model would return it
pub fn discussion_json() -> &'static str {
    r#"[
        {"agent": "Product Manager Agent", "message": "Let's scope the referral flow first."},
        {"agent": "UX Agent", "message": "I'll sketch the invite journey."},
        {"agent": "Tech Agent", "message": "We need idempotent reward grants."},
        {"agent": "QA Agent", "message": "Edge case: self-referrals must be rejected."}
    ]"#
}
