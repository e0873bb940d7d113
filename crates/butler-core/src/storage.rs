//! Local job-name cache
//!
//! A flat list of full job names written wholesale after `fetch-jobs` and
//! read wholesale for offline suggestions. There is no incremental update.

use std::fs;
use std::path::{
    Path,
    PathBuf,
};

use serde::{
    Deserialize,
    Serialize,
};

use crate::error::{
    Error,
    Result,
};

#[derive(Debug, Default, Serialize, Deserialize)]
struct CacheFile {
    #[serde(default)]
    jobs: Vec<String>,
}

/// File-backed cache of full job names.
pub struct JobCache {
    path: PathBuf,
}

impl JobCache {
    /// Cache stored under the given store root, at `data/jobs.json`.
    pub fn under_root(root: &Path) -> Self {
        Self {
            path: root.join("data").join("jobs.json"),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn save(&self, jobs: &[String]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| Error::Storage(format!("failed to create {}: {e}", parent.display())))?;
        }

        let payload = serde_json::to_string_pretty(&CacheFile {
            jobs: jobs.to_vec(),
        })?;
        fs::write(&self.path, payload)
            .map_err(|e| Error::Storage(format!("failed to write {}: {e}", self.path.display())))
    }

    /// A missing or unreadable cache reads as an empty list.
    pub fn load(&self) -> Vec<String> {
        let Ok(content) = fs::read_to_string(&self.path) else {
            return Vec::new();
        };
        serde_json::from_str::<CacheFile>(&content)
            .map(|cache| cache.jobs)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JobCache::under_root(dir.path());

        let jobs = vec![
            "test-job-1".to_string(),
            "backend/api-service".to_string(),
        ];
        cache.save(&jobs).unwrap();

        assert_eq!(cache.load(), jobs);
    }

    #[test]
    fn test_missing_cache_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JobCache::under_root(dir.path());

        assert!(cache.load().is_empty());
    }

    #[test]
    fn test_corrupt_cache_reads_empty() {
        let dir = tempfile::tempdir().unwrap();
        let cache = JobCache::under_root(dir.path());

        fs::create_dir_all(cache.path().parent().unwrap()).unwrap();
        fs::write(cache.path(), "not json").unwrap();

        assert!(cache.load().is_empty());
    }
}
