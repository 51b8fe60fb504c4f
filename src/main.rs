//! CLI entry point for notion-blog

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use notion_blog::config::Credentials;

#[derive(Parser)]
#[command(name = "notion-blog")]
#[command(author = "Yuya Takei")]
#[command(version)]
#[command(about = "A personal blog rendered from a Notion database", long_about = None)]
struct Cli {
    /// Set the base directory (defaults to current directory)
    #[arg(short, long, global = true)]
    cwd: Option<PathBuf>,

    /// Enable debug output
    #[arg(short, long, global = true)]
    debug: bool,

    /// Notion integration token
    #[arg(long, global = true, env = "NOTION_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Notion database holding the pages
    #[arg(long, global = true, env = "NOTION_DATABASE_ID")]
    database_id: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the blog server
    #[command(alias = "s")]
    Server {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },

    /// List published pages or tags
    List {
        /// Type of content to list (page, tag)
        #[arg(default_value = "page")]
        r#type: String,
    },

    /// Print the rendered HTML body of one page
    Render {
        /// Slug of the page
        slug: String,
    },

    /// Display version information
    Version,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "notion_blog=debug,info"
    } else {
        "notion_blog=info"
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
    let credentials = Credentials::new(cli.api_key, cli.database_id);

    match cli.command {
        Commands::Server { port, ip } => {
            let blog = notion_blog::Blog::new(&base_dir, credentials)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            blog.serve(&ip, port).await?;
        }

        Commands::List { r#type } => {
            let blog = notion_blog::Blog::new(&base_dir, credentials)?;
            notion_blog::commands::list::run(&blog, &r#type).await?;
        }

        Commands::Render { slug } => {
            let blog = notion_blog::Blog::new(&base_dir, credentials)?;
            notion_blog::commands::render::run(&blog, &slug).await?;
        }

        Commands::Version => {
            println!("notion-blog version {}", env!("CARGO_PKG_VERSION"));
        }
    }

    Ok(())
}
