use crate::adapters::DEFAULT_WELCOME_TEMPLATE;
use crate::core::enrichment::{
    EnrichmentSettings, DEFAULT_ACCOUNT_NUMBER_PREFIX, DEFAULT_BRANCH_CODE,
};
use crate::utils::error::{OnboardingError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_pattern, validate_positive_number, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OnboardingConfig {
    pub enrichment: EnrichmentConfig,
    pub notification: NotificationConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EnrichmentConfig {
    pub branch_code: String,
    pub account_number_prefix: String,
    pub first_sequence: u64,
}

impl Default for EnrichmentConfig {
    fn default() -> Self {
        Self {
            branch_code: DEFAULT_BRANCH_CODE.to_string(),
            account_number_prefix: DEFAULT_ACCOUNT_NUMBER_PREFIX.to_string(),
            first_sequence: 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub welcome_template: String,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            welcome_template: DEFAULT_WELCOME_TEMPLATE.to_string(),
        }
    }
}

impl OnboardingConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(OnboardingError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| OnboardingError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR_NAME}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| OnboardingError::ConfigValidationError {
            field: "environment".to_string(),
            message: format!("substitution pattern failed to compile: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn enrichment_settings(&self) -> EnrichmentSettings {
        EnrichmentSettings {
            branch_code: self.enrichment.branch_code.clone(),
            account_number_prefix: self.enrichment.account_number_prefix.clone(),
            first_sequence: self.enrichment.first_sequence,
        }
    }

    pub fn welcome_template(&self) -> &str {
        &self.notification.welcome_template
    }
}

impl Validate for OnboardingConfig {
    fn validate(&self) -> Result<()> {
        validate_pattern(
            "enrichment.branch_code",
            &self.enrichment.branch_code,
            r"^[0-9]{1,6}$",
            "Branch code must be 1 to 6 digits",
        )?;
        validate_pattern(
            "enrichment.account_number_prefix",
            &self.enrichment.account_number_prefix,
            r"^[A-Z]{1,4}$",
            "Prefix must be 1 to 4 uppercase letters",
        )?;
        validate_positive_number(
            "enrichment.first_sequence",
            self.enrichment.first_sequence,
            1,
        )?;
        validate_non_empty_string(
            "notification.welcome_template",
            &self.notification.welcome_template,
        )?;
        Ok(())
    }
}
