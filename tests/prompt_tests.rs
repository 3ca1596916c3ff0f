use prodmuse::Config;
use prodmuse::prompts::{
    discussion_user_prompt, document_system_prompt, document_user_prompt, refine_user_prompt,
    sprint_tasks_user_prompt,
};
use prodmuse::types::{AgentRole, DocType};

// Use our centralized test infrastructure
#[path = "test_utils.rs"]
mod test_utils;
use test_utils::sample_inputs;

#[test]
fn test_document_prompt_embeds_every_field_verbatim() {
    let inputs = sample_inputs();
    let prompt = document_user_prompt(DocType::Prd, &inputs);

    // Guards against silent field drops during template changes
    assert!(prompt.contains(&inputs.project_name));
    assert!(prompt.contains(&inputs.feature_name));
    assert!(prompt.contains(&inputs.problem_statement));
    assert!(prompt.contains(&inputs.business_goal));
    assert!(prompt.contains(&inputs.user_segment));
    assert!(prompt.contains(&inputs.kpis));
    assert!(prompt.contains(&inputs.tech_constraints));
}

#[test]
fn test_document_prompt_names_the_document_kind() {
    let inputs = sample_inputs();

    let prompt = document_user_prompt(DocType::TestPlan, &inputs);
    assert!(prompt.contains("QA Test Plan"));

    let prompt = document_user_prompt(DocType::ReleaseNotes, &inputs);
    assert!(prompt.contains("Release Notes"));
}

#[test]
fn test_document_prompt_kind_specific_hints() {
    let inputs = sample_inputs();

    let prd = document_user_prompt(DocType::Prd, &inputs);
    assert!(prd.contains("Executive Summary"));

    let arch = document_user_prompt(DocType::ArchDiagram, &inputs);
    assert!(arch.contains("Mermaid sequence diagram"));

    let test_plan = document_user_prompt(DocType::TestPlan, &inputs);
    assert!(test_plan.contains("edge cases"));

    let api = document_user_prompt(DocType::ApiSpec, &inputs);
    assert!(api.contains("endpoints"));
}

#[test]
fn test_document_prompt_tolerates_empty_fields() {
    let inputs = prodmuse::ProjectInputs::default();
    let prompt = document_user_prompt(DocType::Prd, &inputs);

    // Absent fields interpolate as empty text; the skeleton stays intact
    assert!(prompt.contains("PROJECT CONTEXT"));
    assert!(prompt.contains("- Name: \n"));
}

#[test]
fn test_refine_prompt_embeds_content_and_instruction() {
    let prompt = refine_user_prompt("# Current Doc", "Shorten the summary");

    assert!(prompt.contains("# Current Doc"));
    assert!(prompt.contains("Shorten the summary"));
}

#[test]
fn test_system_prompt_includes_custom_instructions() {
    let mut config = Config::default();

    let base = document_system_prompt(&config);
    assert!(base.contains("OUTPUT RULES"));
    assert!(!base.contains("ADDITIONAL INSTRUCTIONS"));

    config.instructions = "Always mention the ticket number".to_string();
    let with_custom = document_system_prompt(&config);
    assert!(with_custom.contains("Always mention the ticket number"));

    // Per-invocation override wins over the persistent setting
    config.set_temp_instructions(Some("Use British spelling".to_string()));
    let with_override = document_system_prompt(&config);
    assert!(with_override.contains("Use British spelling"));
    assert!(!with_override.contains("Always mention the ticket number"));
}

#[test]
fn test_discussion_prompt_names_panel_and_topic() {
    let prompt = discussion_user_prompt("Plan a new referral system feature");

    assert!(prompt.contains("Plan a new referral system feature"));
    for role in AgentRole::DISCUSSION_PANEL {
        assert!(
            prompt.contains(role.display_name()),
            "panel persona missing: {role}"
        );
    }
    assert!(prompt.contains("strictly JSON"));
    // The wire-record schema travels inside the prompt
    assert!(prompt.contains("\"agent\""));
    assert!(prompt.contains("\"message\""));
}

#[test]
fn test_sprint_tasks_prompt_embeds_context_and_schema() {
    let prompt = sprint_tasks_user_prompt("Deliver core features for Q3 roadmap");

    assert!(prompt.contains("Deliver core features for Q3 roadmap"));
    assert!(prompt.contains("\"title\""));
    assert!(prompt.contains("\"type\""));
    assert!(prompt.contains("Todo"));
}
