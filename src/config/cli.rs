use crate::config::toml_config::TomlConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Serialize, Deserialize, Parser)]
#[command(name = "payroll-desk")]
#[command(about = "Console payroll desk: employee registry and salary calculations")]
pub struct CliConfig {
    /// Path to an optional TOML configuration file
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override the registry capacity
    #[arg(long)]
    pub capacity: Option<usize>,

    /// Override the number of login attempts before the session ends
    #[arg(long)]
    pub max_attempts: Option<u32>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit log lines as JSON")]
    pub log_json: bool,
}

impl CliConfig {
    /// Loads the config file (or the built-in defaults), applies command
    /// line overrides and validates the result.
    pub fn load(&self) -> Result<TomlConfig> {
        let mut config = match &self.config {
            Some(path) => TomlConfig::from_file(path)?,
            None => TomlConfig::default(),
        };

        if let Some(capacity) = self.capacity {
            tracing::info!("🔧 Registry capacity overridden to: {}", capacity);
            config.registry.capacity = capacity;
        }
        if let Some(max_attempts) = self.max_attempts {
            tracing::info!("🔧 Login attempts overridden to: {}", max_attempts);
            config.auth.max_attempts = max_attempts;
        }

        config.validate()?;
        Ok(config)
    }
}
