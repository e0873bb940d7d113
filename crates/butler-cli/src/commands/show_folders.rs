use std::collections::BTreeMap;

use butler_core::Result;
use butler_jenkins::tree;
use clap::Args;
use console::style;

use crate::commands::session;
use crate::output;

#[derive(Args)]
pub struct ShowFoldersArgs {
    /// Maximum folder depth to show
    #[arg(long, default_value_t = 3)]
    pub max_level: usize,
}

pub async fn run(args: &ShowFoldersArgs) -> Result<()> {
    let session = session()?;

    println!("Fetching the folder structure (up to {} levels)...", args.max_level);
    let items = tree::folder_structure(&session.client, args.max_level).await;
    let folders: Vec<_> = items.into_iter().filter(|item| item.is_folder()).collect();

    if folders.is_empty() {
        println!("{}", style("No folders found.").yellow());
        return Ok(());
    }

    println!();
    for folder in &folders {
        let indent = output::indent(folder.level);
        println!("{indent}{}", style(&folder.name).blue().bold());
        println!("{indent}  {}", style(&folder.full_name).dim());
    }

    println!("\n{} folders total", style(folders.len()).green());

    let mut per_level: BTreeMap<usize, usize> = BTreeMap::new();
    for folder in &folders {
        *per_level.entry(folder.level).or_default() += 1;
    }
    println!("Distribution by level:");
    for (level, count) in per_level {
        let label = if level == 0 {
            "root".to_string()
        } else {
            format!("level {level}")
        };
        println!("  {label}: {}", style(count).green());
    }

    Ok(())
}
