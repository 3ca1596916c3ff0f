use crate::common::CommonParams;
use crate::config::{API_KEY_ENV_VARS, Config};
use crate::log_debug;
use crate::messages;
use crate::orchestrator::WorkspaceService;
use crate::templates::get_template_library;
use crate::types::{AgentMessage, DocType, ProjectInputs, total_points};
use crate::ui;
use anyhow::{Context, Result, anyhow};
use colored::Colorize;
use std::fs;
use std::future::Future;
use std::path::Path;
use std::time::Duration;

/// Pause between printed agent turns, matching the workspace pacing.
/// Presentation-layer affordance only; the transcript is already complete.
const TYPING_DELAY: Duration = Duration::from_millis(1500);

/// Load configuration and apply per-invocation overrides
fn load_config(common: &CommonParams) -> Result<Config> {
    let mut config = Config::load()?;
    common.apply_to_config(&mut config);
    Ok(config)
}

/// Run a generation future behind a randomized waiting spinner
async fn with_spinner<F, T>(op: F) -> T
where
    F: Future<Output = T>,
{
    let waiting = messages::get_waiting_message();
    let (r, g, b) = waiting.color;
    let spinner = ui::create_spinner(&format!("{}", waiting.text.truecolor(r, g, b)));
    let result = op.await;
    spinner.finish_and_clear();
    result
}

/// Handle the generate command: one document from project context
pub async fn handle_generate(
    common: CommonParams,
    doc_type: DocType,
    template: Option<String>,
    overrides: ProjectInputs,
    output: Option<std::path::PathBuf>,
) -> Result<()> {
    let config = load_config(&common)?;

    // A template fixes the document kind and supplies baseline inputs;
    // explicit field flags override the prefill.
    let (doc_type, inputs) = match template {
        Some(key) => {
            let library = get_template_library();
            let template = library.get(&key).ok_or_else(|| {
                anyhow!("Unknown template: {key}. Run 'prodmuse templates' to list them")
            })?;
            (template.doc_type, template.prefill.merged_with(&overrides))
        }
        None => (doc_type, overrides),
    };

    let service = WorkspaceService::from_config(config)?;
    let doc = with_spinner(service.generate_document(doc_type, &inputs))
        .await
        .context("Failed to generate document")?;

    log_debug!(
        "Generated {} '{}' ({} chars)",
        doc.doc_type.key(),
        doc.title,
        doc.content.len()
    );

    match output {
        Some(path) => {
            fs::write(&path, &doc.content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            ui::print_success(&format!(
                "✓ {} \"{}\" saved to {}",
                doc.doc_type.display_name(),
                doc.title,
                path.display()
            ));
        }
        None => {
            ui::print_success(&format!(
                "✓ {} — {} (v{})",
                doc.doc_type.display_name(),
                doc.title,
                doc.version
            ));
            ui::print_newline();
            println!("{}", doc.content);
        }
    }

    Ok(())
}

/// Handle the refine command: rework an existing document per instruction
pub async fn handle_refine(
    common: CommonParams,
    file: &Path,
    instruction: &str,
    in_place: bool,
) -> Result<()> {
    let config = load_config(&common)?;

    let current_content =
        fs::read_to_string(file).with_context(|| format!("Failed to read {}", file.display()))?;

    let service = WorkspaceService::from_config(config)?;

    // On failure this propagates; the file is never rewritten with stale
    // or partial content.
    let refined = with_spinner(service.refine_document(&current_content, instruction))
        .await
        .context("Failed to refine document")?;

    if in_place {
        fs::write(file, &refined)
            .with_context(|| format!("Failed to write {}", file.display()))?;
        ui::print_success(&format!("✓ Refined {}", file.display()));
    } else {
        println!("{refined}");
    }

    Ok(())
}

/// Handle the discuss command: print a simulated agent panel transcript
pub async fn handle_discuss(common: CommonParams, topic: &str, instant: bool) -> Result<()> {
    let config = load_config(&common)?;
    let service = WorkspaceService::from_config(config)?;

    let transcript = with_spinner(service.generate_agent_discussion(topic))
        .await
        .context("Failed to generate agent discussion")?;

    ui::print_info(&format!("Agent panel on: {topic}"));
    ui::print_newline();

    for (i, message) in transcript.iter().enumerate() {
        if i > 0 && !instant && !ui::is_quiet_mode() {
            tokio::time::sleep(TYPING_DELAY).await;
        }
        print_agent_message(message);
    }

    Ok(())
}

fn print_agent_message(message: &AgentMessage) {
    let (r, g, b) = message.agent.color();
    println!(
        "{}",
        message
            .agent
            .display_name()
            .to_uppercase()
            .truecolor(r, g, b)
            .bold()
    );
    for line in textwrap::wrap(&message.message, 78) {
        println!("  {line}");
    }
    println!();
}

/// Handle the tasks command: print a generated sprint board
pub async fn handle_tasks(common: CommonParams, context: &str) -> Result<()> {
    let config = load_config(&common)?;
    let service = WorkspaceService::from_config(config)?;

    let tasks = with_spinner(service.generate_sprint_tasks(context))
        .await
        .context("Failed to generate sprint tasks")?;

    if tasks.is_empty() {
        ui::print_warning("The model returned no tasks for this context.");
        return Ok(());
    }

    println!(
        "{:<6} {:<7} {:<44} {:<12} {:>6}  {}",
        "ID".bold(),
        "TYPE".bold(),
        "TITLE".bold(),
        "STATUS".bold(),
        "POINTS".bold(),
        "ASSIGNEE".bold()
    );

    for task in &tasks {
        let points = task.points.map_or_else(|| "-".to_string(), |p| p.to_string());
        let assignee = task.assignee.as_deref().unwrap_or("-");
        println!(
            "{:<6} {:<7} {:<44} {:<12} {:>6}  {}",
            task.id,
            task.task_type.to_string(),
            task.title,
            task.status.to_string(),
            points,
            assignee
        );
    }

    ui::print_newline();
    ui::print_info(&format!(
        "{} tasks, {} total points",
        tasks.len(),
        total_points(&tasks)
    ));

    Ok(())
}

/// Handle the templates command: list the built-in template gallery
pub fn handle_templates() -> Result<()> {
    let library = get_template_library();

    ui::print_info("Built-in document templates:");
    ui::print_newline();

    for template in library.list() {
        println!(
            "{:<22} {} {}",
            template.key.green().bold(),
            template.title.bold(),
            format!("({})", template.doc_type.display_name()).dimmed()
        );
        println!("{:<22} {}", "", template.description.dimmed());
    }

    Ok(())
}

/// Handle the doc-types command: list every supported document kind
pub fn handle_doc_types() -> Result<()> {
    ui::print_info("Supported document kinds:");
    ui::print_newline();

    for doc_type in DocType::ALL {
        println!(
            "{:<18} {}",
            doc_type.key().green().bold(),
            doc_type.display_name()
        );
    }

    Ok(())
}

/// Handle the config command: inspect or update settings
pub fn handle_config(
    api_key: Option<String>,
    model: Option<String>,
    timeout: Option<u64>,
    instructions: Option<String>,
) -> Result<()> {
    let mut config = Config::load()?;

    let changes_requested =
        api_key.is_some() || model.is_some() || timeout.is_some() || instructions.is_some();

    if changes_requested {
        config.update(api_key, model, timeout, instructions);
        config.save()?;
        ui::print_success("✓ Configuration updated");
        return Ok(());
    }

    let key_status = API_KEY_ENV_VARS
        .iter()
        .find(|var| std::env::var(var).is_ok_and(|v| !v.is_empty()))
        .map_or_else(
            || {
                if config.gateway.api_key.is_empty() {
                    "not set".to_string()
                } else {
                    "configured in config file".to_string()
                }
            },
            |var| format!("set via {var}"),
        );

    println!("{}: {}", "Model".bold(), config.effective_model());
    println!(
        "{}: {} seconds",
        "Request timeout".bold(),
        config.gateway.request_timeout_secs
    );
    println!("{}: {}", "API key".bold(), key_status);
    println!(
        "{}: {}",
        "Instructions".bold(),
        if config.instructions.is_empty() {
            "(none)"
        } else {
            config.instructions.as_str()
        }
    );

    Ok(())
}
