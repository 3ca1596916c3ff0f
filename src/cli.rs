use crate::commands;
use crate::common::CommonParams;
use crate::types::{DocType, ProjectInputs};
use crate::ui;
use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand, crate_version};
use colored::Colorize;
use std::path::PathBuf;

const LOG_FILE: &str = "prodmuse-debug.log";

/// CLI structure defining the available commands and global arguments
#[derive(Parser)]
#[command(
    author,
    version = crate_version!(),
    about = "Prodmuse: AI-powered product management workspace",
    long_about = "Prodmuse turns project context into PRDs and other product documents, simulated agent discussions, and sprint task lists.",
    disable_version_flag = true,
    after_help = get_dynamic_help(),
    styles = get_styles(),
)]
pub struct Cli {
    /// Subcommands available for the CLI
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Log debug messages to a file
    #[arg(
        short = 'l',
        long = "log",
        global = true,
        help = "Log debug messages to a file"
    )]
    pub log: bool,

    /// Specify a custom log file path
    #[arg(
        long = "log-file",
        global = true,
        help = "Specify a custom log file path"
    )]
    pub log_file: Option<String>,

    /// Suppress non-essential output (spinners, waiting messages, etc.)
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress non-essential output"
    )]
    pub quiet: bool,

    /// Display the version
    #[arg(
        short = 'v',
        long = "version",
        global = true,
        help = "Display the version"
    )]
    pub version: bool,
}

/// Subcommands of the CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Generate a product document using AI
    #[command(
        about = "Generate a product document using AI",
        long_about = "Generate a markdown product document (PRD, API spec, test plan, ...) from the provided project context. Use --template to start from a built-in template; explicit field flags override the template prefill."
    )]
    Generate {
        #[command(flatten)]
        common: CommonParams,

        /// Document kind to generate
        #[arg(
            short = 't',
            long = "type",
            value_parser = doc_type_parser,
            default_value = "prd",
            help = "Document kind to generate (see 'prodmuse doc-types')"
        )]
        doc_type: DocType,

        /// Start from a built-in template
        #[arg(long, help = "Start from a built-in template (see 'prodmuse templates')")]
        template: Option<String>,

        /// Project name
        #[arg(long = "project", help = "Project name")]
        project_name: Option<String>,

        /// Feature name
        #[arg(long = "feature", help = "Feature name")]
        feature_name: Option<String>,

        /// Problem statement
        #[arg(long = "problem", help = "Problem statement")]
        problem_statement: Option<String>,

        /// Business goal
        #[arg(long = "goal", help = "Business goal")]
        business_goal: Option<String>,

        /// Target user segment
        #[arg(long = "users", help = "Target user segment")]
        user_segment: Option<String>,

        /// Success metrics / KPIs
        #[arg(long, help = "Success metrics / KPIs")]
        kpis: Option<String>,

        /// Technical constraints
        #[arg(long = "tech", help = "Technical constraints")]
        tech_constraints: Option<String>,

        /// Write the generated markdown to a file instead of stdout
        #[arg(short, long, help = "Write the generated markdown to a file")]
        output: Option<PathBuf>,
    },

    /// Refine an existing document with an instruction
    #[command(
        about = "Refine an existing markdown document using AI",
        long_about = "Send an existing markdown document through the model with a refinement instruction. On failure the command errors out; the original file is left untouched."
    )]
    Refine {
        #[command(flatten)]
        common: CommonParams,

        /// Path to the markdown document to refine
        #[arg(short, long, help = "Path to the markdown document to refine")]
        file: PathBuf,

        /// Refinement instruction
        #[arg(short, long, help = "Refinement instruction")]
        instruction: String,

        /// Write the refined content back to the input file
        #[arg(long, help = "Write the refined content back to the input file")]
        in_place: bool,
    },

    /// Convene the agent panel for a discussion on a topic
    #[command(
        about = "Simulate a multi-agent team discussion",
        long_about = "Ask the PM, UX, Tech, and QA agent personas to discuss a topic and print the resulting chat transcript."
    )]
    Discuss {
        #[command(flatten)]
        common: CommonParams,

        /// Discussion topic, e.g. "Plan a new referral system feature"
        topic: String,

        /// Print the transcript immediately, without the typing delay
        #[arg(long, help = "Print the transcript without the typing delay")]
        instant: bool,
    },

    /// Generate an agile sprint task list
    #[command(
        about = "Generate sprint tasks using AI",
        long_about = "Generate a list of agile sprint tasks/stories from free-text context and print them as a board-style table."
    )]
    Tasks {
        #[command(flatten)]
        common: CommonParams,

        /// Sprint context, e.g. "Deliver core features for Q3 roadmap"
        context: String,
    },

    /// List built-in document templates
    #[command(about = "List built-in document templates")]
    Templates,

    /// List supported document kinds
    #[command(about = "List supported document kinds")]
    DocTypes,

    /// Configure prodmuse settings
    #[command(about = "Configure prodmuse settings")]
    Config {
        /// Set the API key for the generation endpoint
        #[arg(long, help = "Set the API key for the generation endpoint")]
        api_key: Option<String>,

        /// Set the model identifier
        #[arg(long, help = "Set the model identifier")]
        model: Option<String>,

        /// Set the per-call timeout in seconds
        #[arg(long, help = "Set the per-call timeout in seconds")]
        timeout: Option<u64>,

        /// Set persistent custom instructions
        #[arg(long, help = "Set persistent custom instructions")]
        instructions: Option<String>,
    },
}

fn doc_type_parser(s: &str) -> Result<DocType, String> {
    s.parse::<DocType>().map_err(|e| e.to_string())
}

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Magenta.on_default().bold())
        .usage(AnsiColor::Cyan.on_default().bold())
        .literal(AnsiColor::Green.on_default().bold())
        .placeholder(AnsiColor::Yellow.on_default())
        .valid(AnsiColor::Blue.on_default().bold())
        .invalid(AnsiColor::Red.on_default().bold())
        .error(AnsiColor::Red.on_default().bold())
}

/// Parse the command-line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

/// Generate dynamic help including available document kinds
fn get_dynamic_help() -> String {
    let kinds = DocType::all_keys()
        .iter()
        .map(|k| format!("{}", k.bold()))
        .collect::<Vec<_>>()
        .join(" • ");

    format!("\nAvailable document kinds: {kinds}")
}

/// Main function to parse arguments and handle the command
pub async fn main() -> anyhow::Result<()> {
    let cli = parse_args();

    if cli.version {
        ui::print_version(crate_version!());
        return Ok(());
    }

    if cli.log {
        crate::logger::enable_logging();
        let log_file = cli.log_file.as_deref().unwrap_or(LOG_FILE);
        crate::logger::set_log_file(log_file)?;
        crate::trace_info!("Logging to {}", log_file);

        if std::env::var("PRODMUSE_VERBOSE").is_ok() {
            crate::logger::set_verbose_logging(true);
            crate::logger::set_log_to_stdout(true);
        }
    } else {
        crate::logger::disable_logging();
    }

    // Set quiet mode in the UI module
    if cli.quiet {
        crate::ui::set_quiet_mode(true);
    }

    if let Some(command) = cli.command {
        handle_command(command).await
    } else {
        // If no subcommand is provided, print the help
        let _ = Cli::parse_from(["prodmuse", "--help"]);
        Ok(())
    }
}

/// Dispatch a parsed command to its handler
pub async fn handle_command(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Generate {
            common,
            doc_type,
            template,
            project_name,
            feature_name,
            problem_statement,
            business_goal,
            user_segment,
            kpis,
            tech_constraints,
            output,
        } => {
            let overrides = ProjectInputs {
                project_name: project_name.unwrap_or_default(),
                feature_name: feature_name.unwrap_or_default(),
                problem_statement: problem_statement.unwrap_or_default(),
                business_goal: business_goal.unwrap_or_default(),
                user_segment: user_segment.unwrap_or_default(),
                kpis: kpis.unwrap_or_default(),
                tech_constraints: tech_constraints.unwrap_or_default(),
            };
            commands::handle_generate(common, doc_type, template, overrides, output).await
        }
        Commands::Refine {
            common,
            file,
            instruction,
            in_place,
        } => commands::handle_refine(common, &file, &instruction, in_place).await,
        Commands::Discuss {
            common,
            topic,
            instant,
        } => commands::handle_discuss(common, &topic, instant).await,
        Commands::Tasks { common, context } => commands::handle_tasks(common, &context).await,
        Commands::Templates => commands::handle_templates(),
        Commands::DocTypes => commands::handle_doc_types(),
        Commands::Config {
            api_key,
            model,
            timeout,
            instructions,
        } => commands::handle_config(api_key, model, timeout, instructions),
    }
}
