//! CLI argument parsing for prompt-batch.
//!
//! Uses clap derive macros for declarative argument definitions.
//! The batch driver itself lives in the `commands` module.

use clap::Parser;
use std::path::PathBuf;

/// Render prompt templates from JSON configs, optionally send them to Amazon
/// Bedrock, save the results under outputs/, and upload them to S3.
///
/// Ambient settings are read from the environment (or a `.env` file):
/// AWS_REGION, S3_BUCKET_BETA, S3_BUCKET_PROD, DEPLOY_ENV (beta|prod) and
/// the optional BEDROCK_MODEL_ID.
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "prompt-batch")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to a single config JSON, relative to the project root
    /// (example: prompts/welcome_prompt.json). If omitted, processes all
    /// configs in prompts/.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Do not call Bedrock or upload to S3. Save the rendered prompt into
    /// outputs/ instead.
    #[arg(long)]
    pub dry_run: bool,

    /// Project root containing prompts/, prompt_templates/ and outputs/
    /// (default: current directory).
    #[arg(long, value_name = "DIR")]
    pub root: Option<PathBuf>,
}

impl Cli {
    /// Parse command-line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn defaults_to_live_mode_over_all_configs() {
        let cli = Cli::try_parse_from(["prompt-batch"]).unwrap();
        assert!(!cli.dry_run);
        assert!(cli.config.is_none());
        assert!(cli.root.is_none());
    }

    #[test]
    fn parses_config_and_dry_run() {
        let cli = Cli::try_parse_from([
            "prompt-batch",
            "--config",
            "prompts/welcome_prompt.json",
            "--dry-run",
        ])
        .unwrap();
        assert!(cli.dry_run);
        assert_eq!(
            cli.config,
            Some(PathBuf::from("prompts/welcome_prompt.json"))
        );
    }

    #[test]
    fn parses_root_override() {
        let cli = Cli::try_parse_from(["prompt-batch", "--root", "/srv/course"]).unwrap();
        assert_eq!(cli.root, Some(PathBuf::from("/srv/course")));
    }

    #[test]
    fn rejects_unknown_flags() {
        assert!(Cli::try_parse_from(["prompt-batch", "--env", "prod"]).is_err());
    }
}
