use anyhow::Result;
use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "alc")]
#[command(about = "Albion Online loot checker: reconcile Loot Logger exports against a Chest Log", long_about = None)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Reconcile loot logs against a chest log and write the leftovers
    Check {
        /// Confirmed Loot Logger export (.txt / .csv)
        #[arg(long)]
        confirmed: String,

        /// Unconfirmed Loot Logger export(s), merged after the confirmed one
        #[arg(long)]
        unconfirmed: Vec<String>,

        /// Chest Log export (.txt / .csv)
        #[arg(long)]
        chest: String,

        /// Output directory (overrides output.dir from config)
        #[arg(long = "out-dir")]
        out_dir: Option<String>,

        /// Layered config paths in merge order
        #[arg(long = "config")]
        config_paths: Vec<String>,
    },

    /// Print the ISO-8601 form of a chest log date ("MM/DD/YYYY HH:MM:SS")
    ConvertDate {
        date: String,
    },

    /// Compute layered config hash + print canonical JSON
    ConfigHash {
        /// Paths in merge order (base -> overrides)
        #[arg(required = true)]
        paths: Vec<String>,
    },
}

fn main() -> Result<()> {
    // Load .env.local if present (dev convenience, e.g. RUST_LOG).
    let _ = dotenvy::from_filename(".env.local");

    init_tracing();

    let cli = Cli::parse();

    match cli.cmd {
        Commands::Check {
            confirmed,
            unconfirmed,
            chest,
            out_dir,
            config_paths,
        } => commands::check::run_check(commands::check::CheckArgs {
            confirmed,
            unconfirmed,
            chest,
            out_dir,
            config_paths,
        })?,

        Commands::ConvertDate { date } => {
            println!("{}", alc_logs::to_iso8601(&date)?);
        }

        Commands::ConfigHash { paths } => {
            let refs: Vec<&str> = paths.iter().map(|s| s.as_str()).collect();
            let loaded = alc_config::load_layered_yaml(&refs)?;
            println!("config_hash={}", loaded.config_hash);
            println!("{}", loaded.canonical_json);
        }
    }

    Ok(())
}

fn init_tracing() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();
}
