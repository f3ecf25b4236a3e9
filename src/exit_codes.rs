//! Exit code constants for the prompt-batch CLI.
//!
//! - 0: Success
//! - 1: No prompt configs found (informative, not a crash)
//! - 2: Reserved for clap usage errors
//! - 3: Configuration failure (ambient settings missing or invalid)
//! - 4: Validation failure (config keys, unresolved placeholders)
//! - 5: Input failure (parse errors, missing templates, local I/O)
//! - 6: Upstream failure (inference or upload call)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// Nothing to process: no config files were found.
pub const NO_CONFIGS: i32 = 1;

/// Ambient configuration missing or invalid (region, buckets, DEPLOY_ENV).
pub const CONFIGURATION_FAILURE: i32 = 3;

/// Prompt config or template failed validation.
pub const VALIDATION_FAILURE: i32 = 4;

/// Malformed JSON, missing template, or local read/write failure.
pub const INPUT_FAILURE: i32 = 5;

/// The inference endpoint or object store returned an error.
pub const UPSTREAM_FAILURE: i32 = 6;
