use shared_types::{AppError, DirectoryConfig, JobPosting};
use std::collections::HashSet;
use std::path::Path;

/// In-memory, read-only collection of job postings.
///
/// Built once from seed data; there is no update or delete. Restarting the
/// process resets it to the seed set.
#[derive(Debug, Clone, PartialEq)]
pub struct JobDirectory {
    postings: Vec<JobPosting>,
}

impl JobDirectory {
    /// Build a directory, rejecting duplicate ids.
    pub fn new(postings: Vec<JobPosting>) -> Result<Self, AppError> {
        let mut seen = HashSet::with_capacity(postings.len());
        for job in &postings {
            if !seen.insert(job.id.as_str()) {
                return Err(AppError::conflict(format!("Duplicate job id: {}", job.id)));
            }
        }
        Ok(Self { postings })
    }

    /// Directory holding the built-in seed postings.
    pub fn seeded() -> Self {
        Self {
            postings: crate::seed::postings(),
        }
    }

    /// Parse a JSON array of postings.
    pub fn from_json(json: &str) -> Result<Self, AppError> {
        let postings: Vec<JobPosting> = serde_json::from_str(json)
            .map_err(|e| AppError::bad_request(format!("Invalid seed data: {e}")))?;
        Self::new(postings)
    }

    /// Read and parse a JSON seed file.
    pub fn from_seed_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            AppError::internal(format!("Cannot read seed file {}: {e}", path.display()))
        })?;
        Self::from_json(&contents)
    }

    /// Build the directory described by `config`.
    ///
    /// A configured seed file that cannot be loaded is logged and replaced by
    /// the built-in seed.
    pub fn load(config: &DirectoryConfig) -> Self {
        let Some(path) = config.seed_file.as_deref() else {
            return Self::seeded();
        };
        match Self::from_seed_file(path) {
            Ok(dir) => {
                tracing::info!(path, postings = dir.len(), "loaded job seed file");
                dir
            }
            Err(e) => {
                tracing::warn!(path, error = %e, "falling back to built-in job seed");
                Self::seeded()
            }
        }
    }

    /// Every posting, in seed order.
    pub fn jobs(&self) -> &[JobPosting] {
        &self.postings
    }

    /// Exact-match lookup.
    pub fn job_by_id(&self, id: &str) -> Option<&JobPosting> {
        self.postings.iter().find(|job| job.id == id)
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }
}

/// Process-wide directory, built from `config.toml` on first use.
#[cfg(feature = "server")]
pub fn shared() -> std::sync::Arc<JobDirectory> {
    use std::sync::{Arc, OnceLock};

    static DIRECTORY: OnceLock<Arc<JobDirectory>> = OnceLock::new();
    DIRECTORY
        .get_or_init(|| Arc::new(JobDirectory::load(&crate::config::app_config().directory)))
        .clone()
}
