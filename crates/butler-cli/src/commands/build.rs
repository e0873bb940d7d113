use butler_core::error::Error;
use butler_core::Result;
use butler_jenkins::mapper;
use clap::Args;
use console::style;

use crate::commands::session;
use crate::output;

#[derive(Args)]
pub struct BuildArgs {
    /// Job name, folders included (e.g. folder/subfolder/job)
    pub job: String,
    /// Parameter values as key=value,key2=value2
    #[arg(long)]
    pub params: Option<String>,
    /// Skip the confirmation prompt
    #[arg(long, short = 'y')]
    pub yes: bool,
}

pub async fn run(args: &BuildArgs) -> Result<()> {
    let session = session()?;

    println!("Preparing build of: {}", style(&args.job).cyan());
    let detail = session.client.job_detail(&args.job).await?;

    if !detail.buildable {
        return Err(Error::Resolution {
            full_name: args.job.clone(),
            message: "job is not buildable".to_string(),
        });
    }

    let job_url = detail.url.clone();
    let declared = mapper::parameters_from_detail(detail);
    let provided = args
        .params
        .as_deref()
        .map(parse_cli_params)
        .unwrap_or_default();
    let form = merge_parameters(&declared, provided);

    if declared.is_empty() {
        println!("{}", style("This job takes no parameters.").dim());
    } else {
        println!("\nParameters to submit:");
        for (key, value) in &form {
            println!("  {} = {value}", style(key).blue());
        }
    }

    if !args.yes && !output::confirm("\nTrigger this build?") {
        println!("{}", style("Build cancelled.").yellow());
        return Ok(());
    }

    let result = session.client.trigger_build(&args.job, &form).await?;

    println!("{} {}", style("ok:").green().bold(), result.message);
    if !result.queue_url.is_empty() {
        println!("Queue URL: {}", style(&result.queue_url).dim());
    }
    if !job_url.is_empty() {
        println!("Watch the build at: {job_url}");
    }

    Ok(())
}

/// Parses `key=value,key2=value2`. Values may themselves contain `=`;
/// `true`/`false` are normalized to lowercase so they form-encode the way
/// Jenkins boolean parameters expect.
fn parse_cli_params(raw: &str) -> Vec<(String, String)> {
    raw.split(',')
        .filter_map(|pair| {
            let (key, value) = pair.split_once('=')?;
            let key = key.trim();
            if key.is_empty() {
                return None;
            }

            let value = value.trim();
            let value = if value.eq_ignore_ascii_case("true") {
                "true".to_string()
            } else if value.eq_ignore_ascii_case("false") {
                "false".to_string()
            } else {
                value.to_string()
            };
            Some((key.to_string(), value))
        })
        .collect()
}

/// Declared parameters first, in server order, with CLI-provided values
/// winning over schema defaults; unknown extra pairs follow so server-side
/// validation can judge them.
fn merge_parameters(
    declared: &[butler_core::JobParameter], provided: Vec<(String, String)>,
) -> Vec<(String, String)> {
    let mut remaining = provided;
    let mut form = Vec::with_capacity(declared.len());

    for param in declared {
        let given = remaining
            .iter()
            .position(|(key, _)| key == &param.name)
            .map(|at| remaining.remove(at).1);

        if let Some(value) = given.or_else(|| param.schema.default_as_string()) {
            form.push((param.name.clone(), value));
        }
    }

    form.extend(remaining);
    form
}
