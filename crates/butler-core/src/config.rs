//! Server configuration profiles
//!
//! Profiles are JSON files under `~/.butler/configs/<name>.json`; the active
//! profile name lives in `~/.butler/current-config.txt`. When no stored
//! profile is active, the `JENKINS_URL` / `JENKINS_USER` / `JENKINS_TOKEN`
//! environment triple acts as a fallback.

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

/// Per-profile user preferences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub editor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_viewer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub download_logs_dir: Option<PathBuf>,
}

/// A named Jenkins server profile: base URL plus basic-auth credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ServerConfig {
    pub name: String,
    pub url: String,
    pub username: String,
    pub token: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub preferences: Preferences,
}

/// File-backed profile store.
pub struct ConfigStore {
    root: PathBuf,
}

impl ConfigStore {
    /// Store rooted at `~/.butler`.
    pub fn new() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| Error::Configuration("unable to resolve home directory".to_string()))?;
        Ok(Self::with_root(home.join(".butler")))
    }

    /// Store rooted at an explicit directory.
    pub fn with_root(root: PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn configs_dir(&self) -> PathBuf {
        self.root.join("configs")
    }

    fn current_file(&self) -> PathBuf {
        self.root.join("current-config.txt")
    }

    fn profile_path(&self, name: &str) -> PathBuf {
        self.configs_dir().join(format!("{name}.json"))
    }

    /// Names of every stored profile.
    pub fn list(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(self.configs_dir()) else {
            return Vec::new();
        };

        let mut names: Vec<String> = entries
            .filter_map(|entry| entry.ok())
            .filter_map(|entry| {
                let file_name = entry.file_name().to_string_lossy().into_owned();
                file_name.strip_suffix(".json").map(|name| name.to_string())
            })
            .collect();
        names.sort();
        names
    }

    pub fn save(&self, config: &ServerConfig) -> Result<()> {
        let dir = self.configs_dir();
        fs::create_dir_all(&dir)
            .map_err(|e| Error::Storage(format!("failed to create {}: {e}", dir.display())))?;

        let path = self.profile_path(&config.name);
        let payload = serde_json::to_string_pretty(config)?;
        fs::write(&path, payload)
            .map_err(|e| Error::Storage(format!("failed to write {}: {e}", path.display())))
    }

    pub fn load(&self, name: &str) -> Result<Option<ServerConfig>> {
        let path = self.profile_path(name);
        if !path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&path)
            .map_err(|e| Error::Storage(format!("failed to read {}: {e}", path.display())))?;
        Ok(Some(serde_json::from_str(&content)?))
    }

    /// Removes a profile, clearing the current pointer when it names the
    /// deleted profile. Returns false when the profile did not exist.
    pub fn delete(&self, name: &str) -> Result<bool> {
        let path = self.profile_path(name);
        if !path.exists() {
            return Ok(false);
        }

        fs::remove_file(&path)
            .map_err(|e| Error::Storage(format!("failed to delete {}: {e}", path.display())))?;

        if self.current().as_deref() == Some(name) {
            let _ = fs::remove_file(self.current_file());
        }

        Ok(true)
    }

    /// Name of the active profile, if one is set.
    pub fn current(&self) -> Option<String> {
        let content = fs::read_to_string(self.current_file()).ok()?;
        let name = content.trim();
        if name.is_empty() {
            None
        } else {
            Some(name.to_string())
        }
    }

    /// Marks a stored profile as active. Returns false when no profile of
    /// that name exists.
    pub fn set_current(&self, name: &str) -> Result<bool> {
        if self.load(name)?.is_none() {
            return Ok(false);
        }

        fs::create_dir_all(&self.root)
            .map_err(|e| Error::Storage(format!("failed to create {}: {e}", self.root.display())))?;
        let path = self.current_file();
        fs::write(&path, name)
            .map_err(|e| Error::Storage(format!("failed to write {}: {e}", path.display())))?;
        Ok(true)
    }

    /// Resolves the configuration commands run against: the active stored
    /// profile, else the environment fallback.
    ///
    /// Failing here is fatal — every network command aborts before its first
    /// request.
    pub fn active_config(&self) -> Result<ServerConfig> {
        if let Some(name) = self.current() {
            if let Some(config) = self.load(&name)? {
                return Ok(config);
            }
        }

        env_fallback(|key| std::env::var(key).ok()).ok_or_else(|| {
            Error::Configuration(
                "no profile selected and JENKINS_URL/JENKINS_USER/JENKINS_TOKEN are not set; \
                 run `butler config add` first"
                    .to_string(),
            )
        })
    }
}

fn env_fallback(get: impl Fn(&str) -> Option<String>) -> Option<ServerConfig> {
    let url = get("JENKINS_URL")?;
    let username = get("JENKINS_USER")?;
    let token = get("JENKINS_TOKEN")?;

    Some(ServerConfig {
        name: "env-fallback".to_string(),
        url,
        username,
        token,
        description: Some("configuration from environment variables".to_string()),
        preferences: Preferences::default(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_config(name: &str) -> ServerConfig {
        ServerConfig {
            name: name.to_string(),
            url: "https://jenkins.example.com".to_string(),
            username: "admin".to_string(),
            token: "api-token".to_string(),
            description: Some("test profile".to_string()),
            preferences: Preferences::default(),
        }
    }

    #[test]
    fn test_save_load_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_root(dir.path().to_path_buf());

        store.save(&sample_config("prod")).unwrap();
        let loaded = store.load("prod").unwrap().unwrap();

        assert_eq!(loaded, sample_config("prod"));
    }

    #[test]
    fn test_load_missing_profile_is_none() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_root(dir.path().to_path_buf());

        assert!(store.load("nope").unwrap().is_none());
    }

    #[test]
    fn test_list_is_sorted() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_root(dir.path().to_path_buf());

        store.save(&sample_config("staging")).unwrap();
        store.save(&sample_config("prod")).unwrap();

        assert_eq!(store.list(), vec!["prod".to_string(), "staging".to_string()]);
    }

    #[test]
    fn test_set_current_requires_existing_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_root(dir.path().to_path_buf());

        assert!(!store.set_current("ghost").unwrap());

        store.save(&sample_config("prod")).unwrap();
        assert!(store.set_current("prod").unwrap());
        assert_eq!(store.current().as_deref(), Some("prod"));
    }

    #[test]
    fn test_delete_clears_current_pointer() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_root(dir.path().to_path_buf());

        store.save(&sample_config("prod")).unwrap();
        store.set_current("prod").unwrap();

        assert!(store.delete("prod").unwrap());
        assert_eq!(store.current(), None);
        assert!(!store.delete("prod").unwrap());
    }

    #[test]
    fn test_active_config_prefers_stored_profile() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::with_root(dir.path().to_path_buf());

        store.save(&sample_config("prod")).unwrap();
        store.set_current("prod").unwrap();

        let active = store.active_config().unwrap();
        assert_eq!(active.name, "prod");
    }

    #[test]
    fn test_env_fallback_requires_full_triple() {
        let env = |key: &str| match key {
            "JENKINS_URL" => Some("https://ci.example.com".to_string()),
            "JENKINS_USER" => Some("bot".to_string()),
            "JENKINS_TOKEN" => Some("secret".to_string()),
            _ => None,
        };
        let config = env_fallback(env).unwrap();
        assert_eq!(config.name, "env-fallback");
        assert_eq!(config.url, "https://ci.example.com");

        let partial = |key: &str| match key {
            "JENKINS_URL" => Some("https://ci.example.com".to_string()),
            _ => None,
        };
        assert!(env_fallback(partial).is_none());
    }
}
