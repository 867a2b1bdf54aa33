//! CLI entry point for portfolio

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "portfolio")]
#[command(version)]
#[command(about = "A personal portfolio site with a Markdown-backed blog", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the site server
    #[command(alias = "s")]
    Server {
        /// Port to listen on (defaults to the configured port)
        #[arg(short, long, env = "APP_PORT")]
        port: Option<u16>,

        /// IP address to bind to (defaults to the configured address)
        #[arg(short, long)]
        ip: Option<String>,
    },

    /// Create a new post
    New {
        /// Title of the new post
        title: String,

        /// Comma-separated tags
        #[arg(short, long, value_delimiter = ',')]
        tags: Vec<String>,
    },

    /// List site information
    List {
        /// Type of content to list (post, tag)
        #[arg(default_value = "post")]
        r#type: String,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Print the rendered HTML body of a post
    Render {
        /// Post identifier (file name without .md)
        id: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "portfolio=debug,info"
    } else {
        "portfolio=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = match cli.cwd {
        Some(dir) => dir,
        None => std::env::current_dir()?,
    };

    let portfolio = portfolio::Portfolio::new(&base_dir)?;

    match cli.command {
        Commands::Server { port, ip } => {
            let port = port.unwrap_or(portfolio.config.server.port);
            let ip = ip.unwrap_or_else(|| portfolio.config.server.ip.clone());
            tracing::info!("Starting server at http://{}:{}", ip, port);
            portfolio::server::start(&portfolio, &ip, port).await?;
        }

        Commands::New { title, tags } => {
            let path = portfolio.new_post(&title, &tags)?;
            println!("Created: {:?}", path);
        }

        Commands::List { r#type, json } => {
            portfolio::commands::list::run(&portfolio, &r#type, json)?;
        }

        Commands::Render { id } => {
            portfolio::commands::render::run(&portfolio, &id)?;
        }

        Commands::Version => {
            println!("portfolio version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
