//! Shared foundation for the butler CLI
//!
//! This crate holds everything the Jenkins adapter and the command surface
//! have in common:
//! - `error` - the error taxonomy and `Result` alias
//! - `types` - domain value types (tree items, parameter schemas)
//! - `config` - server profiles with environment fallback
//! - `storage` - the local job-name cache
//! - `logging` - tracing subscriber setup

pub mod config;
pub mod error;
pub mod logging;
pub mod storage;
pub mod types;

pub use config::{
    ConfigStore,
    Preferences,
    ServerConfig,
};
pub use error::{
    Error,
    Result,
};
pub use storage::JobCache;
pub use types::{
    ItemKind,
    JobParameter,
    JobTreeItem,
    ParameterSchema,
    TriggeredBuild,
};
