//! Shared AWS session.
//!
//! The AWS SDK is async; this CLI is strictly sequential. A single
//! current-thread tokio runtime drives every SDK future to completion with
//! `block_on`, so each network call blocks exactly like local file I/O.

use crate::error::{PromptError, Result};
use crate::settings::Settings;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use std::future::Future;
use std::sync::Arc;
use tokio::runtime::Runtime;
use tracing::debug;

/// Loaded SDK configuration plus the runtime that drives SDK calls.
#[derive(Clone)]
pub struct AwsSession {
    runtime: Arc<Runtime>,
    config: SdkConfig,
}

impl AwsSession {
    /// Load AWS configuration for the configured region.
    ///
    /// Credentials come from the default provider chain.
    ///
    /// # Returns
    ///
    /// * `Err(PromptError::ConfigurationError)` - If `AWS_REGION` is unset
    pub fn connect(settings: &Settings) -> Result<Self> {
        let region = settings.require_region()?.to_string();

        let runtime = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .map_err(|e| {
                PromptError::ConfigurationError(format!("failed to start async runtime: {}", e))
            })?;

        debug!(region = %region, "loading AWS configuration");
        let config = runtime.block_on(
            aws_config::defaults(BehaviorVersion::latest())
                .region(Region::new(region))
                .load(),
        );

        Ok(Self {
            runtime: Arc::new(runtime),
            config,
        })
    }

    pub fn sdk_config(&self) -> &SdkConfig {
        &self.config
    }

    /// Run an SDK future to completion on the session runtime.
    pub fn block_on<F: Future>(&self, future: F) -> F::Output {
        self.runtime.block_on(future)
    }
}
