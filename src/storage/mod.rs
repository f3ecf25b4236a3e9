//! Object store upload for generated artifacts.
//!
//! Remote keys follow `<environment>/outputs/<output_file>`; the bucket is
//! chosen from [`Settings`](crate::settings::Settings) by deployment
//! environment.

mod s3;

pub use s3::S3Store;

use crate::error::Result;
use crate::settings::DeployEnv;
use std::path::Path;

/// Uploads local files to a bucket.
pub trait ObjectStore {
    /// Upload `local_path` to `bucket`/`key`, replacing any existing object.
    fn put_file(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()>;
}

/// Remote key for an artifact.
pub fn object_key(env: DeployEnv, output_file: &str) -> String {
    format!("{}/outputs/{}", env.as_str(), output_file)
}
