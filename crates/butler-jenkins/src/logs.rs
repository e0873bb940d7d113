//! Console-log retrieval and download

use std::io::Write;
use std::path::{
    Path,
    PathBuf,
};

use butler_core::error::{
    Error,
    Result,
};
use chrono::NaiveDate;

use crate::client::JenkinsClient;
use crate::path::sanitize_job_name;

/// Directory downloads land in when neither the CLI nor the profile
/// preferences name one.
pub fn default_log_dir() -> PathBuf {
    dirs::home_dir()
        .map(|home| home.join(".butler").join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// Deterministic download filename: sanitized job name, build number, date.
pub fn log_file_name(full_name: &str, build_number: i64, date: NaiveDate) -> String {
    format!(
        "{}_{}_{}.log",
        sanitize_job_name(full_name),
        build_number,
        date.format("%Y-%m-%d")
    )
}

/// Whether fetched console text counts as "no logs available". Not an
/// error; callers decide how to surface it.
pub fn is_empty_log(text: &str) -> bool {
    text.trim().is_empty()
}

/// Writes console text under `dir` as one atomic operation (temp file in
/// the target dir, then rename), creating the directory if absent. Returns
/// the final path.
pub fn save_console_text(
    dir: &Path, full_name: &str, build_number: i64, text: &str,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)
        .map_err(|e| Error::Storage(format!("failed to create {}: {e}", dir.display())))?;

    let target = dir.join(log_file_name(
        full_name,
        build_number,
        chrono::Utc::now().date_naive(),
    ));

    let mut tmp = tempfile::NamedTempFile::new_in(dir)
        .map_err(|e| Error::Storage(format!("failed to create temp file in {}: {e}", dir.display())))?;
    tmp.write_all(text.as_bytes())
        .map_err(|e| Error::Storage(format!("failed to write log: {e}")))?;
    tmp.persist(&target)
        .map_err(|e| Error::Storage(format!("failed to persist {}: {e}", target.display())))?;

    Ok(target)
}

/// Fetches a build's console text and writes it to disk. With no explicit
/// `output_dir` the file lands in [`default_log_dir`].
pub async fn download(
    client: &JenkinsClient, full_name: &str, build_number: i64, output_dir: Option<PathBuf>,
) -> Result<PathBuf> {
    let text = client.console_text(full_name, build_number).await?;
    let dir = output_dir.unwrap_or_else(default_log_dir);
    save_console_text(&dir, full_name, build_number, &text)
}
