use crate::context::ProjectLayout;
use crate::error::{PromptError, Result};
use crate::inference::InferenceClient;
use crate::settings::{DeployEnv, Settings};
use crate::storage::ObjectStore;
use serde_json::Value;
use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// A temporary project root with the standard folder layout.
pub(crate) struct TempProject {
    _dir: TempDir,
    pub layout: ProjectLayout,
}

impl TempProject {
    pub(crate) fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let root = fs::canonicalize(dir.path()).unwrap();
        Self {
            _dir: dir,
            layout: ProjectLayout::from_root(root),
        }
    }

    pub(crate) fn write_config(&self, name: &str, config: &Value) -> PathBuf {
        fs::create_dir_all(&self.layout.prompts_dir).unwrap();
        let path = self.layout.prompts_dir.join(name);
        fs::write(&path, serde_json::to_string_pretty(config).unwrap()).unwrap();
        path
    }

    pub(crate) fn write_template(&self, name: &str, text: &str) {
        fs::create_dir_all(&self.layout.templates_dir).unwrap();
        fs::write(self.layout.templates_dir.join(name), text).unwrap();
    }

    pub(crate) fn read_output(&self, name: &str) -> String {
        fs::read_to_string(self.layout.outputs_dir.join(name)).unwrap()
    }

    pub(crate) fn output_exists(&self, name: &str) -> bool {
        self.layout.outputs_dir.join(name).exists()
    }
}

/// Settings with both buckets and a region configured.
pub(crate) fn test_settings(env: DeployEnv) -> Settings {
    Settings {
        region: Some("us-east-1".to_string()),
        bucket_beta: Some("course-outputs-beta".to_string()),
        bucket_prod: Some("course-outputs-prod".to_string()),
        deploy_env: env,
        ..Settings::default()
    }
}

/// Inference double that records every call and returns a canned reply.
pub(crate) struct RecordingInference {
    reply: std::result::Result<String, String>,
    pub calls: RefCell<Vec<(String, u32)>>,
}

impl RecordingInference {
    pub(crate) fn replying(text: &str) -> Self {
        Self {
            reply: Ok(text.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }

    pub(crate) fn failing(message: &str) -> Self {
        Self {
            reply: Err(message.to_string()),
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl InferenceClient for RecordingInference {
    fn generate(&self, prompt: &str, max_tokens: u32) -> Result<String> {
        self.calls
            .borrow_mut()
            .push((prompt.to_string(), max_tokens));
        match &self.reply {
            Ok(text) => Ok(text.clone()),
            Err(message) => Err(PromptError::upstream(
                "Bedrock InvokeModel",
                std::io::Error::other(message.clone()),
            )),
        }
    }
}

/// Object store double that records uploads along with the file content.
#[derive(Default)]
pub(crate) struct RecordingStore {
    pub uploads: RefCell<Vec<RecordedUpload>>,
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct RecordedUpload {
    pub local_path: PathBuf,
    pub bucket: String,
    pub key: String,
    pub content: String,
}

impl ObjectStore for RecordingStore {
    fn put_file(&self, local_path: &Path, bucket: &str, key: &str) -> Result<()> {
        self.uploads.borrow_mut().push(RecordedUpload {
            local_path: local_path.to_path_buf(),
            bucket: bucket.to_string(),
            key: key.to_string(),
            content: fs::read_to_string(local_path).unwrap(),
        });
        Ok(())
    }
}
