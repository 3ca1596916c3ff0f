use crate::gateway::DEFAULT_MODEL;
use crate::log_debug;

use anyhow::{Result, anyhow};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variables consulted for the API credential, in order.
/// A set variable always wins over the config file.
pub const API_KEY_ENV_VARS: &[&str] = &["GEMINI_API_KEY", "GOOGLE_API_KEY"];

/// Configuration structure for the Prodmuse application
#[derive(Deserialize, Serialize, Clone, Debug, Default)]
pub struct Config {
    /// Generation endpoint settings
    #[serde(default)]
    pub gateway: GatewayConfig,
    /// Custom instructions appended to the document system prompt
    #[serde(default)]
    pub instructions: String,
    #[serde(skip)]
    pub temp_instructions: Option<String>,
}

/// Generation endpoint configuration
#[derive(Deserialize, Serialize, Clone, Debug)]
pub struct GatewayConfig {
    /// API key for the generation endpoint; environment variables take
    /// precedence (never written back by `save` when sourced from env)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub api_key: String,
    /// Model identifier addressed by the gateway
    #[serde(default = "default_model")]
    pub model: String,
    /// Deadline for one gateway call, in seconds
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_request_timeout() -> u64 {
    30
}

impl Config {
    /// Load the configuration from the default file location
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;
        Self::load_from(&config_path)
    }

    /// Load the configuration from a specific file
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = if config_path.exists() {
            let config_content = fs::read_to_string(config_path)?;
            toml::from_str(&config_content)?
        } else {
            Self::default()
        };

        log_debug!("Configuration loaded: {:?}", config);
        Ok(config)
    }

    /// Save the configuration to the default file location
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;
        self.save_to(&config_path)
    }

    /// Save the configuration to a specific file
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        let config_content = toml::to_string_pretty(self)?;
        fs::write(config_path, config_content)?;
        log_debug!("Configuration saved to {}", config_path.display());
        Ok(())
    }

    /// Get the path to the configuration file
    fn get_config_path() -> Result<PathBuf> {
        let mut path =
            config_dir().ok_or_else(|| anyhow!("Unable to determine config directory"))?;
        path.push("prodmuse");
        fs::create_dir_all(&path)?;
        path.push("config.toml");
        Ok(path)
    }

    /// The API credential to use: environment first, then the config file
    pub fn effective_api_key(&self) -> String {
        for var in API_KEY_ENV_VARS {
            if let Ok(key) = std::env::var(var)
                && !key.is_empty()
            {
                return key;
            }
        }
        self.gateway.api_key.clone()
    }

    /// The model to address (configured or default)
    pub fn effective_model(&self) -> &str {
        if self.gateway.model.is_empty() {
            DEFAULT_MODEL
        } else {
            &self.gateway.model
        }
    }

    /// Effective custom instructions, preferring the per-invocation override
    pub fn effective_instructions(&self) -> String {
        self.temp_instructions
            .as_ref()
            .unwrap_or(&self.instructions)
            .trim()
            .to_string()
    }

    pub fn set_temp_instructions(&mut self, instructions: Option<String>) {
        self.temp_instructions = instructions;
    }

    /// Update the configuration with new values
    pub fn update(
        &mut self,
        api_key: Option<String>,
        model: Option<String>,
        request_timeout_secs: Option<u64>,
        instructions: Option<String>,
    ) {
        if let Some(key) = api_key {
            self.gateway.api_key = key;
        }
        if let Some(model) = model {
            self.gateway.model = model;
        }
        if let Some(timeout) = request_timeout_secs {
            self.gateway.request_timeout_secs = timeout;
        }
        if let Some(instr) = instructions {
            self.instructions = instr;
        }
        log_debug!("Configuration updated: {:?}", self);
    }
}
