use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use colored::Colorize;
use labboard::cli::serve::ServeOptions;
use labboard::Result;
use std::io;
use std::net::IpAddr;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "labboard")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Lab dashboard shared state store", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the HTTP state endpoint
    Serve {
        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Address to listen on (default: 127.0.0.1)
        #[arg(long)]
        bind: Option<IpAddr>,

        /// HTTP port (default: 8888)
        #[arg(short, long)]
        port: Option<u16>,

        /// Root directory of the document store (default: ~/.labboard)
        #[arg(long)]
        data_dir: Option<PathBuf>,

        /// Keep the document in memory only
        #[arg(long)]
        memory: bool,

        /// Path of the state endpoint (default: /api/dashboard-state)
        #[arg(long)]
        route: Option<String>,
    },

    /// Print the canonical dashboard document
    Show {
        /// Root directory of the document store (default: ~/.labboard)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Replace the dashboard document from a JSON file ("-" for stdin)
    Replace {
        /// JSON file to submit
        source: String,

        /// Root directory of the document store (default: ~/.labboard)
        #[arg(long)]
        data_dir: Option<PathBuf>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Commands::Completions { shell } = &cli.command {
        let mut cmd = Cli::command();
        generate(*shell, &mut cmd, "labboard", &mut io::stdout());
        return;
    }

    init_tracing();

    let runtime = match tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("{}", format!("Error: failed to create tokio runtime: {}", e).red());
            std::process::exit(1);
        }
    };

    if let Err(e) = runtime.block_on(run_async(cli)) {
        eprintln!("{}", format!("Error: {:#}", e).red());
        std::process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` overrides the default filter
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("labboard=info,tower_http=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

async fn run_async(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Serve {
            config,
            bind,
            port,
            data_dir,
            memory,
            route,
        } => {
            labboard::cli::serve::run(ServeOptions {
                config,
                bind,
                port,
                data_dir,
                memory,
                route,
            })
            .await?;
        }

        Commands::Show { data_dir } => {
            labboard::cli::show::run(data_dir).await?;
        }

        Commands::Replace { source, data_dir } => {
            labboard::cli::replace::run(&source, data_dir).await?;
        }

        Commands::Completions { .. } => {
            unreachable!("Completions are generated before runtime creation");
        }
    }

    Ok(())
}
