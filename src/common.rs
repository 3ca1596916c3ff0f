use crate::config::Config;
use clap::Args;

/// Parameters shared by every generation command
#[derive(Args, Clone, Default, Debug)]
pub struct CommonParams {
    /// Custom instructions for this operation
    #[arg(long, help = "Custom instructions for this operation")]
    pub instructions: Option<String>,

    /// Override the configured model for this operation
    #[arg(long, help = "Override the configured model for this operation")]
    pub model: Option<String>,
}

impl CommonParams {
    /// Apply per-invocation overrides to a loaded configuration
    pub fn apply_to_config(&self, config: &mut Config) {
        if let Some(instructions) = &self.instructions {
            config.set_temp_instructions(Some(instructions.clone()));
        }

        if let Some(model) = &self.model {
            config.gateway.model = model.clone();
        }
    }
}
