//! CLI command implementations
//!
//! One module per subcommand; each exports an `*Args` struct parsed by clap
//! and a `run` function. Network commands resolve the active profile and
//! build the shared client through [`session`] before their first request.

pub mod build;
pub mod config;
pub mod fetch_jobs;
pub mod job_info;
pub mod job_params;
pub mod last_build;
pub mod list_jobs;
pub mod logs;
pub mod search_jobs;
pub mod show_folders;

use butler_core::{
    ConfigStore,
    Result,
    ServerConfig,
};
use butler_jenkins::JenkinsClient;

pub(crate) struct Session {
    pub store: ConfigStore,
    pub config: ServerConfig,
    pub client: JenkinsClient,
}

/// Resolves configuration and constructs the one client this invocation
/// uses. Fails before any network call when no configuration is active.
pub(crate) fn session() -> Result<Session> {
    let store = ConfigStore::new()?;
    let config = store.active_config()?;
    let client = JenkinsClient::from_config(&config)?;
    Ok(Session {
        store,
        config,
        client,
    })
}
