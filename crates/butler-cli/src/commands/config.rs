use butler_core::{
    ConfigStore,
    Preferences,
    Result,
    ServerConfig,
};
use clap::{
    Args,
    Subcommand,
};
use console::style;

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Store a server profile
    Add {
        #[arg(long)]
        name: String,
        /// Jenkins base URL (e.g. https://jenkins.example.com)
        #[arg(long)]
        url: String,
        #[arg(long)]
        username: String,
        /// Jenkins API token
        #[arg(long)]
        token: String,
        #[arg(long)]
        description: Option<String>,
        /// Make this the active profile right away
        #[arg(long = "use")]
        activate: bool,
    },
    /// List stored profiles
    List,
    /// Switch the active profile
    Use { name: String },
    /// Show the active profile
    Current,
    /// Delete a stored profile
    Delete { name: String },
}

pub fn run(args: &ConfigArgs) -> Result<()> {
    let store = ConfigStore::new()?;

    match &args.command {
        ConfigCommand::Add {
            name,
            url,
            username,
            token,
            description,
            activate,
        } => {
            let config = ServerConfig {
                name: name.clone(),
                url: url.trim_end_matches('/').to_string(),
                username: username.clone(),
                token: token.clone(),
                description: description.clone(),
                preferences: Preferences::default(),
            };
            store.save(&config)?;
            println!("{} profile \"{name}\" saved", style("ok:").green().bold());

            if *activate {
                store.set_current(name)?;
                println!("Profile \"{name}\" is now active.");
            }
        }
        ConfigCommand::List => {
            let names = store.list();
            if names.is_empty() {
                println!("{}", style("No profiles stored.").yellow());
                return Ok(());
            }

            let current = store.current();
            for name in names {
                if current.as_deref() == Some(name.as_str()) {
                    println!("* {} {}", name, style("(active)").green());
                } else {
                    println!("  {name}");
                }
            }
        }
        ConfigCommand::Use { name } => {
            if store.set_current(name)? {
                println!("{} profile \"{name}\" is now active", style("ok:").green().bold());
            } else {
                println!("{}", style(format!("No profile named \"{name}\".")).yellow());
            }
        }
        ConfigCommand::Current => match store.current() {
            Some(name) => {
                println!("Active profile: {}", style(&name).green());
                if let Some(config) = store.load(&name)? {
                    println!("URL: {}", config.url);
                    println!("User: {}", config.username);
                }
            }
            None => println!("{}", style("No active profile.").yellow()),
        },
        ConfigCommand::Delete { name } => {
            if store.delete(name)? {
                println!("{} profile \"{name}\" deleted", style("ok:").green().bold());
            } else {
                println!("{}", style(format!("No profile named \"{name}\".")).yellow());
            }
        }
    }

    Ok(())
}
