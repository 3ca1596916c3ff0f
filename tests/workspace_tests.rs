use anyhow::Result;
use prodmuse::templates::get_template_library;
use prodmuse::types::{DocType, GeneratedDocument, ProjectInputs};
use prodmuse::workspace::{AppState, TemplateDraft, View};

// Use our centralized test infrastructure
#[path = "test_utils.rs"]
mod test_utils;
use test_utils::{StubClient, sample_inputs, stub_service};

fn sample_doc(title_source: &ProjectInputs) -> GeneratedDocument {
    GeneratedDocument::new(DocType::Prd, title_source, "# Body".to_string())
}

#[test]
fn test_open_document_prepends_recents_and_opens_editor() {
    let mut state = AppState::new();
    let first = sample_doc(&sample_inputs());
    let second = sample_doc(&ProjectInputs {
        feature_name: "Second Feature".to_string(),
        ..Default::default()
    });

    state.open_document(first.clone());
    state.open_document(second.clone());

    assert_eq!(state.current_view, View::Editor);
    assert_eq!(state.recent_docs.len(), 2);
    assert_eq!(state.recent_docs[0].id, second.id, "most recent first");
    assert_eq!(
        state.generated_doc.as_ref().map(|d| d.id),
        Some(second.id)
    );
}

#[test]
fn test_update_document_content_edits_in_place() {
    let mut state = AppState::new();

    assert!(
        !state.update_document_content("orphan edit".to_string()),
        "no document open"
    );

    state.open_document(sample_doc(&sample_inputs()));
    assert!(state.update_document_content("# Revised".to_string()));

    let doc = state.generated_doc.as_ref().expect("document open");
    assert_eq!(doc.content, "# Revised");
    assert_eq!(doc.version, 2);
}

#[test]
fn test_template_draft_survives_only_the_generator() {
    let mut state = AppState::new();
    let library = get_template_library();
    let template = library.get("saas-prd").expect("template exists");

    state.select_template(TemplateDraft {
        doc_type: template.doc_type,
        inputs: template.prefill.clone(),
    });
    assert_eq!(state.current_view, View::Generator);

    state.navigate(View::Generator);
    assert!(state.template_draft.is_some());

    state.navigate(View::Templates);
    assert!(state.template_draft.is_none());
    assert_eq!(state.current_view, View::Templates);
}

#[tokio::test]
async fn test_template_prefill_reaches_the_prompt() -> Result<()> {
    // End to end through the service: a template draft's inputs must land
    // verbatim in the outgoing prompt.
    let client = StubClient::with_response("# Doc");
    let log = client.request_log();
    let service = stub_service(client);

    let library = get_template_library();
    let template = library.get("saas-prd").expect("template exists");
    let inputs = template.prefill.merged_with(&ProjectInputs {
        feature_name: "SSO Support".to_string(),
        ..Default::default()
    });

    let doc = service.generate_document(template.doc_type, &inputs).await?;
    assert_eq!(doc.title, "SSO Support");

    let requests = log.lock();
    assert!(requests[0].prompt.contains("Enterprise Users"));
    assert!(requests[0].prompt.contains("SSO Support"));
    Ok(())
}
