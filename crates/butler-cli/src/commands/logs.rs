use std::path::PathBuf;

use butler_core::error::Error;
use butler_core::Result;
use butler_jenkins::logs;
use clap::Args;
use console::style;

use crate::commands::session;

#[derive(Args)]
pub struct LogsArgs {
    /// Job name, folders included (e.g. folder/subfolder/job)
    pub job: String,
    /// Build number, or "latest" for the most recent build
    pub build: String,
    /// Save the log to a file instead of printing it
    #[arg(long)]
    pub download: bool,
    /// Directory the downloaded log is written to
    #[arg(long)]
    pub output: Option<PathBuf>,
}

pub async fn run(args: &LogsArgs) -> Result<()> {
    let session = session()?;

    let build_number = resolve_build_number(&session, args).await?;

    println!(
        "Fetching logs of build #{} of {}",
        style(build_number).cyan(),
        style(&args.job).cyan()
    );
    let text = session.client.console_text(&args.job, build_number).await?;

    if logs::is_empty_log(&text) {
        println!(
            "{}",
            style(format!("No logs available for build #{build_number}.")).yellow()
        );
        return Ok(());
    }

    if args.download {
        let dir = args
            .output
            .clone()
            .or_else(|| session.config.preferences.download_logs_dir.clone())
            .unwrap_or_else(logs::default_log_dir);
        let path = logs::save_console_text(&dir, &args.job, build_number, &text)?;
        println!(
            "{} logs saved to {}",
            style("ok:").green().bold(),
            style(path.display()).bold()
        );
        return Ok(());
    }

    let separator = "=".repeat(60);
    println!("{separator}");
    println!("{text}");
    println!("{separator}");
    println!(
        "{}",
        style(format!("{} lines", text.lines().count())).dim()
    );

    Ok(())
}

/// The retriever only takes concrete numbers; "latest" resolves through the
/// job detail first.
async fn resolve_build_number(
    session: &crate::commands::Session, args: &LogsArgs,
) -> Result<i64> {
    if args.build.eq_ignore_ascii_case("latest") {
        let detail = session.client.job_detail(&args.job).await?;
        let last = detail.last_build.ok_or_else(|| Error::Resolution {
            full_name: args.job.clone(),
            message: "job has no build history".to_string(),
        })?;
        println!("Resolved latest build: #{}", style(last.number).green());
        return Ok(last.number);
    }

    args.build.parse().map_err(|_| Error::LogFetch {
        full_name: args.job.clone(),
        build: args.build.clone(),
        message: "build number must be a number or \"latest\"".to_string(),
    })
}
