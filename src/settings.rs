//! Ambient configuration for prompt-batch.
//!
//! Settings are read once at start-up (after an optional `.env` is loaded by
//! `main`) and passed by reference to the components that need them. Nothing
//! else in the crate reads the process environment.

use crate::error::{PromptError, Result};

/// Model identifier used for every inference call unless overridden.
pub const DEFAULT_MODEL_ID: &str = "anthropic.claude-3-sonnet-20240229-v1:0";

pub const REGION_VAR: &str = "AWS_REGION";
pub const BUCKET_BETA_VAR: &str = "S3_BUCKET_BETA";
pub const BUCKET_PROD_VAR: &str = "S3_BUCKET_PROD";
pub const DEPLOY_ENV_VAR: &str = "DEPLOY_ENV";
pub const MODEL_ID_VAR: &str = "BEDROCK_MODEL_ID";

/// Deployment environment; selects the bucket and the remote key prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DeployEnv {
    #[default]
    Beta,
    Prod,
}

impl DeployEnv {
    /// Parse a deployment environment. Input is trimmed and lowercased.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "beta" => Some(Self::Beta),
            "prod" => Some(Self::Prod),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeployEnv::Beta => "beta",
            DeployEnv::Prod => "prod",
        }
    }
}

impl std::fmt::Display for DeployEnv {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Process-wide settings sourced from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// AWS region for both the inference and storage clients.
    pub region: Option<String>,
    pub bucket_beta: Option<String>,
    pub bucket_prod: Option<String>,
    pub deploy_env: DeployEnv,
    pub model_id: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            region: None,
            bucket_beta: None,
            bucket_prod: None,
            deploy_env: DeployEnv::default(),
            model_id: DEFAULT_MODEL_ID.to_string(),
        }
    }
}

impl Settings {
    /// Read settings from the process environment.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build settings from an arbitrary variable lookup.
    ///
    /// Empty values count as unset, except for `DEPLOY_ENV` which must be
    /// exactly `beta` or `prod` (case-insensitive) whenever it is present.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let deploy_env = match lookup(DEPLOY_ENV_VAR) {
            None => DeployEnv::default(),
            Some(raw) => DeployEnv::parse(&raw).ok_or_else(|| {
                PromptError::ConfigurationError(format!(
                    "DEPLOY_ENV must be 'beta' or 'prod' (got '{}').",
                    raw.trim()
                ))
            })?,
        };

        Ok(Self {
            region: non_empty(REGION_VAR),
            bucket_beta: non_empty(BUCKET_BETA_VAR),
            bucket_prod: non_empty(BUCKET_PROD_VAR),
            deploy_env,
            model_id: non_empty(MODEL_ID_VAR).unwrap_or_else(|| DEFAULT_MODEL_ID.to_string()),
        })
    }

    /// Region required by the AWS clients.
    pub fn require_region(&self) -> Result<&str> {
        self.region.as_deref().ok_or_else(|| {
            PromptError::ConfigurationError(
                "AWS_REGION is not set. Export it or add it to .env before running in live mode."
                    .to_string(),
            )
        })
    }

    /// Bucket for the selected deployment environment.
    pub fn bucket(&self) -> Result<&str> {
        let (bucket, var) = match self.deploy_env {
            DeployEnv::Beta => (&self.bucket_beta, BUCKET_BETA_VAR),
            DeployEnv::Prod => (&self.bucket_prod, BUCKET_PROD_VAR),
        };

        bucket.as_deref().ok_or_else(|| {
            PromptError::ConfigurationError(format!(
                "{} is not set. Set S3_BUCKET_BETA and S3_BUCKET_PROD for uploads in {} mode.",
                var, self.deploy_env
            ))
        })
    }
}
