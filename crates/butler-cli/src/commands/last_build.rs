use butler_core::error::Error;
use butler_core::Result;
use butler_jenkins::mapper;
use clap::Args;
use console::style;

use crate::commands::session;
use crate::output;

#[derive(Args)]
pub struct LastBuildArgs {
    /// Job name, folders included (e.g. folder/subfolder/job)
    pub job: String,
}

pub async fn run(args: &LastBuildArgs) -> Result<()> {
    let session = session()?;

    println!("Fetching last build of: {}", style(&args.job).cyan());
    let detail = session.client.job_detail(&args.job).await?;

    if !detail.buildable {
        return Err(Error::Resolution {
            full_name: args.job.clone(),
            message: "job is not buildable (it may be a folder or disabled)".to_string(),
        });
    }
    if detail.last_build.is_none() {
        return Err(Error::Resolution {
            full_name: args.job.clone(),
            message: "job has no build history".to_string(),
        });
    }

    let build = session.client.last_build(&args.job).await?;

    println!();
    println!(
        "{} {}",
        style("Job:").bold(),
        detail.full_name.as_deref().unwrap_or(&args.job)
    );
    println!("{} #{}", style("Build:").bold(), build.number);
    if let Some(url) = &build.url {
        println!("{} {url}", style("URL:").bold());
    }

    match build.result.as_deref() {
        Some(result) => {
            println!("{} {}", style("Result:").bold(), output::result_label(result));
        }
        None => println!("{} {}", style("Status:").bold(), style("in progress").cyan()),
    }

    if build.duration > 0 {
        println!(
            "{} {}",
            style("Duration:").bold(),
            output::format_duration_ms(build.duration)
        );
    }
    if build.timestamp > 0 {
        println!(
            "{} {}",
            style("Started:").bold(),
            output::format_timestamp_ms(build.timestamp)
        );
        if build.duration > 0 {
            println!(
                "{} {}",
                style("Finished:").bold(),
                output::format_timestamp_ms(build.timestamp + build.duration)
            );
        }
    }
    if build.result.is_none() && build.estimated_duration > 0 {
        println!(
            "{} ~{}",
            style("Estimated duration:").bold(),
            output::format_duration_ms(build.estimated_duration)
        );
    }

    let causes = mapper::build_causes(&build);
    if !causes.is_empty() {
        println!("{}", style("Triggered by:").bold());
        for cause in causes {
            println!("  - {}", mapper::describe_cause(cause));
        }
    }

    Ok(())
}
