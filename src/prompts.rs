//! Prompt construction for every workspace operation.
//!
//! Everything here is pure string templating: user-supplied fields are
//! embedded verbatim, absent fields interpolate as empty text, and no
//! validation happens at this layer.

use crate::config::Config;
use crate::types::{AgentRole, AgentTurnRecord, DocType, ProjectInputs, SprintTaskRecord};
use std::fmt::Write;

/// Shared system instruction attached to document generation and refinement.
const SYSTEM_INSTRUCTION: &str = "\
You are Prodmuse, an elite autonomous multi-agent product operating system.
You embody an entire product team working in perfect sync.

**AGENTS**:
1. **Product Manager (PM)**: Strategy, scope, priorities, success metrics.
2. **UX Agent**: User empathy, journeys, wireframes, visual design.
3. **Tech Agent**: Architecture, APIs, database, security, scalability.
4. **QA Agent**: Test plans, edge cases, regression risk, quality standards.
5. **Release Agent**: Deployment checklists, changelogs, release notes.
6. **Data Analyst**: KPIs, success tracking, growth metrics.

**OUTPUT RULES**:
- Always return valid Markdown.
- Use clear headings (#, ##, ###).
- Use tables for structured data.
- Use Mermaid.js code blocks (```mermaid) for diagrams (Sequence, ERD, Flowcharts).
- Tone: Enterprise, Precise, Professional.";

/// System prompt for document operations: the shared instruction plus any
/// custom instructions from the configuration.
pub fn document_system_prompt(config: &Config) -> String {
    let instructions = config.effective_instructions();
    if instructions.is_empty() {
        SYSTEM_INSTRUCTION.to_string()
    } else {
        format!("{SYSTEM_INSTRUCTION}\n\n**ADDITIONAL INSTRUCTIONS**:\n{instructions}")
    }
}

/// Kind-specific structural requirements appended to document prompts
const fn structural_hints(doc_type: DocType) -> &'static str {
    match doc_type {
        DocType::Prd | DocType::Brd | DocType::Mrd => {
            "Include an Executive Summary, Requirements, UX Flow, and Risks."
        }
        DocType::Srs => {
            "Separate functional and non-functional requirements; call out compliance constraints."
        }
        DocType::UserStories => {
            "Write user stories in 'As a / I want / So that' form, each with acceptance criteria."
        }
        DocType::Roadmap => "Lay the roadmap out quarter by quarter in a table, with priorities.",
        DocType::ArchDiagram => "Include a Mermaid sequence diagram and a component diagram.",
        DocType::Personas => "Cover demographics, goals, pain points, and preferred channels per persona.",
        DocType::TestPlan => "Include test scenarios (positive, negative, and edge cases).",
        DocType::ReleaseNotes => "Summarize changes for stakeholders.",
        DocType::ApiSpec => "Include endpoints, methods, and request/response examples.",
        DocType::SprintPlan => "List detailed user stories with acceptance criteria.",
        DocType::AnalyticsReport => {
            "Include a KPI table, observed trends, and concrete recommendations."
        }
    }
}

/// Build the user prompt for generating one document.
///
/// Every provided field is embedded verbatim under PROJECT CONTEXT.
pub fn document_user_prompt(doc_type: DocType, inputs: &ProjectInputs) -> String {
    let mut prompt = format!(
        "**TASK**: Generate a comprehensive **{}** for the project.\n\n**PROJECT CONTEXT**:\n",
        doc_type.display_name()
    );

    for (label, value) in inputs.labeled_fields() {
        writeln!(&mut prompt, "- {label}: {value}").expect("write to string should not fail");
    }

    write!(
        &mut prompt,
        "\n**SPECIFIC REQUIREMENTS**:\n{}\n\n**FORMAT**: Professional Markdown.",
        structural_hints(doc_type)
    )
    .expect("write to string should not fail");

    prompt
}

/// Build the refinement prompt embedding the current document and the
/// caller's instruction.
pub fn refine_user_prompt(current_content: &str, instruction: &str) -> String {
    format!(
        "**TASK**: Refine the document based on instruction.\n\
         **INSTRUCTION**: \"{instruction}\"\n\
         **CONTENT**: {current_content}"
    )
}

/// Build the prompt for a simulated multi-agent discussion.
///
/// Requests a strict-JSON chat script between the discussion panel personas
/// and embeds the wire-record schema so the model knows the exact shape.
pub fn discussion_user_prompt(topic: &str) -> String {
    let panel = AgentRole::DISCUSSION_PANEL
        .iter()
        .map(AgentRole::display_name)
        .collect::<Vec<_>>()
        .join(", ");

    let schema = schemars::schema_for!(AgentTurnRecord);
    let schema_str =
        serde_json::to_string_pretty(&schema).expect("schema serialization should not fail");

    format!(
        "Generate a realistic, short, collaborative team chat script between the \
         {panel} personas discussing: \"{topic}\".\n\n\
         Respond with a JSON array of objects matching this schema:\n{schema_str}\n\n\
         Keep it strictly JSON. No markdown code blocks."
    )
}

/// Build the prompt for generating an agile sprint task list.
pub fn sprint_tasks_user_prompt(context: &str) -> String {
    let schema = schemars::schema_for!(SprintTaskRecord);
    let schema_str =
        serde_json::to_string_pretty(&schema).expect("schema serialization should not fail");

    format!(
        "Based on this context: \"{context}\", generate a list of agile sprint \
         tasks/stories.\n\n\
         Respond with a JSON array of objects matching this schema:\n{schema_str}\n\n\
         Use \"Todo\" as the initial status. Keep it strictly JSON. \
         No markdown code blocks."
    )
}
