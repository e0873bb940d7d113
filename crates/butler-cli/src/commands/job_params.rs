use butler_core::Result;
use clap::Args;
use console::style;

use crate::commands::session;

#[derive(Args)]
pub struct JobParamsArgs {
    /// Job name, folders included (e.g. folder/subfolder/job)
    pub job: String,
}

pub async fn run(args: &JobParamsArgs) -> Result<()> {
    let session = session()?;

    println!("Fetching parameters of: {}", style(&args.job).cyan());
    let parameters = session.client.job_parameters(&args.job).await?;

    if parameters.is_empty() {
        println!("{}", style("This job declares no parameters.").yellow());
        return Ok(());
    }

    println!();
    for param in &parameters {
        println!(
            "{} {}",
            style(&param.name).blue().bold(),
            style(format!("({})", param.schema.kind_name())).dim()
        );
        if let Some(description) = &param.description {
            println!("  {}", style(description).dim());
        }
        if let Some(default) = param.schema.default_as_string() {
            println!("  {} {default}", style("default:").bold());
        }
        if let Some(choices) = param.schema.choices() {
            println!("  {} {}", style("choices:").bold(), choices.join(", "));
        }
        println!();
    }

    Ok(())
}
