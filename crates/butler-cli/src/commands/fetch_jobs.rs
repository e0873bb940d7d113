use butler_core::{
    JobCache,
    Result,
};
use butler_jenkins::tree;
use clap::Args;
use console::style;

use crate::commands::session;

#[derive(Args)]
pub struct FetchJobsArgs {}

pub async fn run(_args: &FetchJobsArgs) -> Result<()> {
    let session = session()?;

    println!("Fetching all jobs (including folders)...");
    let jobs = tree::all_jobs(&session.client).await;
    let names: Vec<String> = jobs.into_iter().map(|job| job.full_name).collect();

    let cache = JobCache::under_root(session.store.root());
    cache.save(&names)?;

    println!(
        "{} jobs cached for later suggestions",
        style(names.len()).green()
    );

    if !names.is_empty() {
        println!("\nExamples:");
        for name in names.iter().take(5) {
            match name.rsplit_once('/') {
                Some((folder, job)) => {
                    println!("  {} / {}", style(folder).blue(), job);
                }
                None => println!("  {name}"),
            }
        }
        if names.len() > 5 {
            println!("  ... and {} more", names.len() - 5);
        }
    }

    Ok(())
}
