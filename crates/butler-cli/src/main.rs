mod commands;
mod output;

use clap::{
    Parser,
    Subcommand,
};

#[derive(Parser)]
#[command(name = "butler", version, about = "CLI client for Jenkins pipelines")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Fetch every job and cache the names for offline suggestions
    FetchJobs(commands::fetch_jobs::FetchJobsArgs),
    /// List the job tree
    ListJobs(commands::list_jobs::ListJobsArgs),
    /// Show the folder structure only
    ShowFolders(commands::show_folders::ShowFoldersArgs),
    /// Search jobs by name across the whole tree
    SearchJobs(commands::search_jobs::SearchJobsArgs),
    /// Show detailed information about a job
    JobInfo(commands::job_info::JobInfoArgs),
    /// Show the parameters a job declares
    JobParams(commands::job_params::JobParamsArgs),
    /// Show a job's most recent build
    LastBuild(commands::last_build::LastBuildArgs),
    /// Trigger a build, with parameters when the job declares them
    Build(commands::build::BuildArgs),
    /// Show or download a build's console logs
    Logs(commands::logs::LogsArgs),
    /// Manage server configuration profiles
    Config(commands::config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    rustls::crypto::ring::default_provider()
        .install_default()
        .expect("Failed to install rustls crypto provider");

    butler_core::logging::init();

    let cli = Cli::parse();
    if let Err(err) = run(cli).await {
        eprintln!("{} {err}", console::style("error:").red().bold());
        std::process::exit(1);
    }

    Ok(())
}

async fn run(cli: Cli) -> butler_core::Result<()> {
    match cli.command {
        Command::FetchJobs(args) => commands::fetch_jobs::run(&args).await,
        Command::ListJobs(args) => commands::list_jobs::run(&args).await,
        Command::ShowFolders(args) => commands::show_folders::run(&args).await,
        Command::SearchJobs(args) => commands::search_jobs::run(&args).await,
        Command::JobInfo(args) => commands::job_info::run(&args).await,
        Command::JobParams(args) => commands::job_params::run(&args).await,
        Command::LastBuild(args) => commands::last_build::run(&args).await,
        Command::Build(args) => commands::build::run(&args).await,
        Command::Logs(args) => commands::logs::run(&args).await,
        Command::Config(args) => commands::config::run(&args),
    }
}
