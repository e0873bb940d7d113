use butler_core::Result;
use butler_jenkins::tree;
use clap::Args;
use console::style;

use crate::commands::session;
use crate::output;

#[derive(Args)]
pub struct JobInfoArgs {
    /// Job name, folders included (e.g. folder/subfolder/job)
    pub job: String,
}

pub async fn run(args: &JobInfoArgs) -> Result<()> {
    let session = session()?;

    println!("Fetching job info: {}", style(&args.job).cyan());
    let detail = session.client.job_detail(&args.job).await?;

    println!();
    println!("{} {}", style("Name:").bold(), detail.name);
    println!(
        "{} {}",
        style("Full name:").bold(),
        detail.full_name.as_deref().unwrap_or(&args.job)
    );
    println!("{} {}", style("URL:").bold(), detail.url);
    println!(
        "{} {}",
        style("Description:").bold(),
        detail
            .description
            .as_deref()
            .filter(|d| !d.is_empty())
            .unwrap_or("(none)")
    );

    match &detail.last_build {
        Some(build) => {
            println!("{} #{}", style("Last build:").bold(), build.number);
            if let Some(url) = &build.url {
                println!("{} {url}", style("Last build URL:").bold());
            }
        }
        None => println!("{} none", style("Last build:").bold()),
    }
    if let Some(build) = &detail.last_successful_build {
        println!("{} #{}", style("Last successful:").bold(), build.number);
    }
    if let Some(build) = &detail.last_failed_build {
        println!("{} #{}", style("Last failed:").bold(), build.number);
    }

    if tree::is_folder_class(&detail.class_name) {
        println!("{} container", style("Type:").bold());
        if !detail.jobs.is_empty() {
            println!("{} {}", style("Sub-items:").bold(), detail.jobs.len());
        }
    }

    if let Some(color) = &detail.color {
        let suffix = output::status_suffix(Some(color));
        if !suffix.is_empty() {
            println!("{}{}", style("Status:").bold(), suffix);
        }
    }
    println!(
        "{} {}",
        style("Buildable:").bold(),
        if detail.buildable {
            style("yes").green()
        } else {
            style("no").red()
        }
    );

    Ok(())
}
