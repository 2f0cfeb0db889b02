use crate::domain::ports::PolicyProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const PREFERRED_EMPLOYERS: [&str; 3] = ["Pluralsight", "Microsoft", "Google"];
pub const ANCIENT_EMAIL_DOMAINS: [&str; 3] = ["aol.com", "prodigy.com", "compuserve.com"];
pub const LEGACY_TECHNOLOGY_TERMS: [&str; 4] = ["Cobol", "Punch Cards", "Commodore", "VBScript"];

/// Rule lists consulted during speaker evaluation. Any subset can be
/// overridden from a TOML file; omitted lists keep their defaults.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RulePolicy {
    #[serde(default = "default_preferred_employers")]
    pub preferred_employers: Vec<String>,

    #[serde(default = "default_ancient_email_domains")]
    pub ancient_email_domains: Vec<String>,

    #[serde(default = "default_legacy_technology_terms")]
    pub legacy_technology_terms: Vec<String>,
}

fn default_preferred_employers() -> Vec<String> {
    PREFERRED_EMPLOYERS.iter().map(|s| s.to_string()).collect()
}

fn default_ancient_email_domains() -> Vec<String> {
    ANCIENT_EMAIL_DOMAINS.iter().map(|s| s.to_string()).collect()
}

fn default_legacy_technology_terms() -> Vec<String> {
    LEGACY_TECHNOLOGY_TERMS
        .iter()
        .map(|s| s.to_string())
        .collect()
}

impl Default for RulePolicy {
    fn default() -> Self {
        Self {
            preferred_employers: default_preferred_employers(),
            ancient_email_domains: default_ancient_email_domains(),
            legacy_technology_terms: default_legacy_technology_terms(),
        }
    }
}

impl RulePolicy {
    /// Load a policy from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse a policy from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed = substitute_env_vars(content);
        let policy = toml::from_str(&processed)?;
        Ok(policy)
    }
}

/// Replace `${VAR}` references from the environment; unresolved references
/// are left in place.
fn substitute_env_vars(content: &str) -> String {
    use regex::Regex;

    let re = Regex::new(r"\$\{([^}]+)\}").unwrap();
    re.replace_all(content, |caps: &regex::Captures| {
        let var_name = &caps[1];
        std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
    })
    .to_string()
}

impl PolicyProvider for RulePolicy {
    fn preferred_employers(&self) -> &[String] {
        &self.preferred_employers
    }

    fn ancient_email_domains(&self) -> &[String] {
        &self.ancient_email_domains
    }

    fn legacy_technology_terms(&self) -> &[String] {
        &self.legacy_technology_terms
    }
}

impl Validate for RulePolicy {
    fn validate(&self) -> Result<()> {
        for employer in &self.preferred_employers {
            validate_non_empty_string("preferred_employers", employer)?;
        }
        for domain in &self.ancient_email_domains {
            validate_non_empty_string("ancient_email_domains", domain)?;
        }
        for term in &self.legacy_technology_terms {
            validate_non_empty_string("legacy_technology_terms", term)?;
        }
        Ok(())
    }
}
