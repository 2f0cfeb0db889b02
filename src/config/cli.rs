use crate::utils::error::Result;
use crate::utils::validation::{validate_path, Validate};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "podium")]
#[command(about = "Evaluate and register a conference speaker")]
pub struct CliArgs {
    /// Path to the speaker profile (JSON)
    #[arg(long)]
    pub speaker: String,

    /// Rule policy file (TOML); built-in defaults apply when omitted
    #[arg(long)]
    pub policy: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliArgs {
    fn validate(&self) -> Result<()> {
        validate_path("speaker", &self.speaker)?;
        if let Some(policy) = &self.policy {
            validate_path("policy", policy)?;
        }
        Ok(())
    }
}
