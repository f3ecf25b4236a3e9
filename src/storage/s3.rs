//! Amazon S3 implementation of [`ObjectStore`].

use super::ObjectStore;
use crate::aws::AwsSession;
use crate::error::{PromptError, Result};
use aws_sdk_s3::Client;
use aws_sdk_s3::primitives::ByteStream;
use std::path::Path;
use tracing::info;

pub struct S3Store {
    session: AwsSession,
    client: Client,
}

impl S3Store {
    pub fn new(session: &AwsSession) -> Self {
        Self {
            client: Client::new(session.sdk_config()),
            session: session.clone(),
        }
    }
}

impl ObjectStore for S3Store {
    fn put_file(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()> {
        let bytes = std::fs::read(local_path).map_err(|e| {
            PromptError::IoError(format!(
                "failed to read '{}' for upload: {}",
                local_path.display(),
                e
            ))
        })?;

        info!(bucket, key, bytes = bytes.len(), "uploading artifact");
        self.session
            .block_on(
                self.client
                    .put_object()
                    .bucket(bucket)
                    .key(key)
                    .body(ByteStream::from(bytes))
                    .send(),
            )
            .map_err(|e| PromptError::upstream("S3 PutObject", e))?;

        Ok(())
    }
}
