use butler_core::Result;
use butler_jenkins::tree;
use clap::Args;
use console::style;

use crate::commands::session;
use crate::output;

#[derive(Args)]
pub struct ListJobsArgs {
    /// Hide folders, show buildable jobs only
    #[arg(long)]
    pub jobs_only: bool,
    /// Maximum folder depth to show
    #[arg(long)]
    pub max_level: Option<usize>,
}

pub async fn run(args: &ListJobsArgs) -> Result<()> {
    let session = session()?;

    println!("Fetching the Jenkins job tree...");
    let mut items = tree::walk(&session.client, String::new()).await;

    if let Some(max_level) = args.max_level {
        items = tree::up_to_level(items, max_level);
    }
    if args.jobs_only {
        items = tree::jobs_only(items);
    }

    if items.is_empty() {
        println!("{}", style("No jobs or folders found.").yellow());
        return Ok(());
    }

    println!();
    for item in &items {
        let name = if item.is_folder() {
            style(item.name.as_str()).blue().bold().to_string()
        } else {
            item.name.clone()
        };
        println!(
            "{}{name}{}",
            output::indent(item.level),
            output::status_suffix(item.color.as_deref())
        );
    }

    let jobs = items.iter().filter(|item| item.is_job()).count();
    println!("\n{} jobs", style(jobs).green());
    if !args.jobs_only {
        let folders = items.len() - jobs;
        println!("{} folders", style(folders).blue());
    }

    Ok(())
}
