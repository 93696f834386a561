//! Journify CLI - inspect the local visitor identity and send events.

mod app;
mod props;

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use journify_config_and_utils::{init_logging, Config, Paths};

/// Journify command-line interface.
#[derive(Parser)]
#[command(name = "journify")]
#[command(about = "Send identify, track and page events to Journify")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (trace, debug, info, warn, error)
    #[arg(short, long, global = true)]
    log_level: Option<String>,

    /// Base directory for config and identity files. Defaults to ~/.journify
    #[arg(long, global = true)]
    base_dir: Option<PathBuf>,

    /// Write key (overrides config file and JOURNIFY_WRITE_KEY)
    #[arg(long, global = true)]
    write_key: Option<String>,

    /// Collection API origin (overrides config file and JOURNIFY_API_HOST)
    #[arg(long, global = true)]
    api_host: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the resolved visitor identity
    Whoami,
    /// Record who the visitor is and send an identify event
    Identify {
        /// User id to associate with this visitor
        #[arg(short, long)]
        user_id: Option<String>,
        /// Trait to merge, as key=value (repeatable)
        #[arg(short, long = "trait", value_parser = props::parse_pair)]
        traits: Vec<(String, serde_json::Value)>,
        /// Update local identity without sending
        #[arg(long)]
        offline: bool,
    },
    /// Send a track event
    Track {
        /// Event name
        event: String,
        /// Property as key=value (repeatable)
        #[arg(short, long = "prop", value_parser = props::parse_pair)]
        properties: Vec<(String, serde_json::Value)>,
    },
    /// Send a page event
    Page {
        /// Page name
        name: Option<String>,
        /// Property as key=value (repeatable)
        #[arg(short, long = "prop", value_parser = props::parse_pair)]
        properties: Vec<(String, serde_json::Value)>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let paths = match cli.base_dir {
        Some(base) => Paths::with_base_dir(base),
        None => Paths::new()?,
    };
    let mut config = Config::load(&paths)?;
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    if let Some(write_key) = cli.write_key {
        config.write_key = write_key;
    }
    if let Some(api_host) = cli.api_host {
        config.api_host = api_host;
    }

    init_logging(&config.log_level);

    let factory = app::identity_factory(&paths);

    match cli.command {
        Commands::Whoami => {
            let identity = factory.new_resolver();
            println!("{}", serde_json::to_string_pretty(&app::describe(&identity))?);
        }
        Commands::Identify {
            user_id,
            traits,
            offline,
        } => {
            let mut identity = factory.new_resolver();
            identity.identify(user_id.as_deref(), Some(props::into_map(traits)));
            if offline {
                println!("{}", serde_json::to_string_pretty(&app::describe(&identity))?);
            } else {
                let event = app::identify_event(&identity);
                app::deliver(&config, event).await?;
            }
        }
        Commands::Track { event, properties } => {
            let identity = factory.new_resolver();
            let event = app::track_event(&identity, event, props::into_map(properties));
            app::deliver(&config, event).await?;
        }
        Commands::Page { name, properties } => {
            let identity = factory.new_resolver();
            let event = app::page_event(&identity, name, props::into_map(properties));
            app::deliver(&config, event).await?;
        }
    }

    Ok(())
}
