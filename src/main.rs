//! CLI entry point for mdpage

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "mdpage")]
#[command(version)]
#[command(
    about = "Markdown page loader, previewer and checker for static sites",
    long_about = None
)]
struct Cli {
    /// Set the site directory (defaults to current directory)
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
    /// Initialize a new site
    Init {
        /// Directory to initialize (defaults to current directory)
        #[arg(default_value = ".")]
        folder: PathBuf,
    },

    /// Render a page the way the browser loader would
    #[command(alias = "v")]
    View {
        /// Page to load: a page file name or a URL path (e.g. /news.html)
        page: String,

        /// Site root to fetch from: a directory or an http(s) base URL
        #[arg(short, long)]
        base: Option<String>,

        /// Viewport width used for the navbar layout
        #[arg(short, long, default_value = "1024")]
        width: u32,

        /// Disable syntax highlighting of code blocks
        #[arg(long)]
        no_highlight: bool,

        /// Write the fragment to a file instead of stdout
        #[arg(short, long)]
        out: Option<PathBuf>,
    },

    /// Fetch and render every mapped page
    Check,

    /// Start a local server for the site
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "4000")]
        port: u16,

        /// IP address to bind to
        #[arg(short, long, default_value = "localhost")]
        ip: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.debug {
        "mdpage=debug,info"
    } else {
        "mdpage=info"
    };

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Determine base directory
    let base_dir = cli.cwd.unwrap_or_else(|| std::env::current_dir().unwrap());

    match cli.command {
        Commands::Init { folder } => {
            let target_dir = if folder.is_absolute() {
                folder
            } else {
                base_dir.join(folder)
            };
            tracing::info!("Initializing site in {:?}", target_dir);
            mdpage::commands::init::init_site(&target_dir)?;
            println!("Initialized site in {:?}", target_dir);
        }

        Commands::View {
            page,
            base,
            width,
            no_highlight,
            out,
        } => {
            let site = mdpage::Site::new(&base_dir)?;
            let opts = mdpage::commands::view::ViewOptions {
                page: &page,
                base: base.as_deref(),
                width,
                highlight: !no_highlight,
            };
            let fragment = mdpage::commands::view::run(&site, &opts).await?;

            match out {
                Some(path) => {
                    std::fs::write(&path, fragment)?;
                    println!("Wrote {:?}", path);
                }
                None => print!("{}", fragment),
            }
        }

        Commands::Check => {
            let site = mdpage::Site::new(&base_dir)?;
            site.check().await?;
            println!("All pages loaded successfully!");
        }

        Commands::Serve { port, ip } => {
            let site = mdpage::Site::new(&base_dir)?;
            tracing::info!("Starting server at http://{}:{}", ip, port);
            mdpage::server::start(&site, &ip, port).await?;
        }
    }

    Ok(())
}
