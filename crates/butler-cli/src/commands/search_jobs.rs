use std::collections::BTreeMap;

use butler_core::Result;
use butler_jenkins::tree;
use clap::Args;
use console::style;

use crate::commands::session;
use crate::output;

// Past this many hits a per-folder summary helps more than the flat list.
const GROUPING_THRESHOLD: usize = 10;

#[derive(Args)]
pub struct SearchJobsArgs {
    /// Term matched case-insensitively against job names and full paths
    pub term: String,
}

pub async fn run(args: &SearchJobsArgs) -> Result<()> {
    let session = session()?;

    println!("Searching jobs matching: {}", style(&args.term).cyan());
    let matches = tree::search_jobs(&session.client, &args.term).await;

    if matches.is_empty() {
        println!(
            "{}",
            style(format!("No jobs matching \"{}\" found.", args.term)).yellow()
        );
        return Ok(());
    }

    println!("\n{} jobs found:", style(matches.len()).green());
    for job in &matches {
        println!(
            "{}{}{}",
            output::indent(job.level),
            job.name,
            output::status_suffix(job.color.as_deref())
        );
        if job.full_name != job.name {
            println!("{}  {}", output::indent(job.level), style(&job.full_name).dim());
        }
    }

    if matches.len() > GROUPING_THRESHOLD {
        let mut groups: BTreeMap<String, usize> = BTreeMap::new();
        for job in &matches {
            let parent = job
                .full_name
                .rsplit_once('/')
                .map(|(folder, _)| folder.to_string())
                .unwrap_or_default();
            *groups.entry(parent).or_default() += 1;
        }

        println!("\nBy folder:");
        for (folder, count) in groups {
            let label = if folder.is_empty() { "(root)" } else { folder.as_str() };
            println!("  {}: {}", style(label).blue(), style(count).green());
        }
    }

    Ok(())
}
