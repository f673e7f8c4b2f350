//! Binary entrypoint for the Corner Store CLI.
//!
//! Commands:
//! - `init` - write a starter `config.toml`
//! - `inject [--globals <path>] [--dry-run]` - run the start-up hook against a host globals file
//! - `validate [--catalog <path>]` - check a buff catalog and print a JSON report
//!
//! See the library crate docs for module-level details: `cornerstore::`.
use anyhow::{anyhow, Result};
use clap::{Parser, Subcommand};
use log::{error, info};

use cornerstore::buffs::{BuffCatalog, BuffInjector, InjectReport};
use cornerstore::config::Config;
use cornerstore::host::GlobalsDocument;
use cornerstore::plugin::CornerStore;

#[derive(Parser)]
#[command(name = "cornerstore")]
#[command(about = "Custom stimulator buff injection for the WTT Corner Store plugin")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file path (can be used before or after subcommand)
    #[arg(short, long, default_value = "config.toml", global = true)]
    config: String,

    /// Verbose logging (-v, -vv for more; may appear before or after subcommand)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Write a default configuration file
    Init,
    /// Inject custom buffs into a host globals file
    Inject {
        /// Host globals JSON (overrides `host.globals_file`)
        #[arg(short, long)]
        globals: Option<String>,

        /// Run the hook but do not write the globals file back
        #[arg(long)]
        dry_run: bool,
    },
    /// Validate a custom buff catalog without touching any host data
    Validate {
        /// Catalog file (defaults to the plugin's own catalog)
        #[arg(long)]
        catalog: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let pre_config = match cli.command {
        Commands::Init => None,
        _ => Config::load(&cli.config).await.ok(),
    };
    init_logging(&pre_config, cli.verbose);

    match cli.command {
        Commands::Init => {
            info!("Initializing new configuration");
            Config::create_default(&cli.config).await?;
            info!("Configuration file created at {}", cli.config);
        }
        Commands::Inject { globals, dry_run } => {
            let config = match pre_config {
                Some(config) => config,
                None => Config::load(&cli.config).await?,
            };
            let globals_path = globals.unwrap_or_else(|| config.host.globals_file.clone());
            info!(
                "Starting {} v{}",
                env!("CARGO_PKG_NAME"),
                env!("CARGO_PKG_VERSION")
            );

            let mut document = GlobalsDocument::load(&globals_path)
                .map_err(|e| anyhow!("Failed to open host globals {}: {}", globals_path, e))?;

            let plugin = CornerStore::new(&config.plugin.mod_dir);
            let report = plugin.on_load(&mut document).await;

            match report {
                Some(_) if dry_run => info!("Dry run: {} left unchanged", globals_path),
                Some(_) => {
                    document.save(&globals_path).map_err(|e| {
                        anyhow!("Failed to write host globals {}: {}", globals_path, e)
                    })?;
                    info!("Host globals written to {}", globals_path);
                }
                None => info!("No custom buffs injected; {} left unchanged", globals_path),
            }
        }
        Commands::Validate { catalog } => {
            let path: std::path::PathBuf = match catalog {
                Some(path) => path.into(),
                None => {
                    let mod_dir = pre_config
                        .as_ref()
                        .map(|c| c.plugin.mod_dir.clone())
                        .unwrap_or_else(|| ".".to_string());
                    CornerStore::new(mod_dir).catalog_path()
                }
            };

            match BuffCatalog::load(&path) {
                Ok(catalog) => {
                    let report = BuffInjector::new().validate(&catalog);
                    println!("{}", report_json(&report));
                }
                Err(e) => {
                    error!("{}", e);
                    let payload = serde_json::json!({
                        "status": "error",
                        "catalog": path.display().to_string(),
                        "error": e.to_string(),
                    });
                    println!("{}", payload);
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}

fn report_json(report: &InjectReport) -> serde_json::Value {
    let rejected: Vec<_> = report
        .rejected
        .iter()
        .map(|r| {
            serde_json::json!({
                "group": r.group,
                "index": r.index,
                "reason": r.reason.to_string(),
            })
        })
        .collect();
    serde_json::json!({
        "status": if report.rejected.is_empty() { "ok" } else { "warnings" },
        "groups": report.groups,
        "accepted": report.accepted_entries,
        "rejected": rejected,
    })
}

fn init_logging(config: &Option<Config>, verbosity: u8) {
    use std::io::Write;
    let mut builder = env_logger::Builder::new();
    // CLI verbosity overrides the configured level
    let base_level = match verbosity {
        0 => config
            .as_ref()
            .map(|c| c.logging.level_filter())
            .unwrap_or(log::LevelFilter::Info),
        1 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };
    builder.filter_level(base_level);

    let log_file = config
        .as_ref()
        .and_then(|c| c.logging.file.as_ref())
        .and_then(|file| {
            std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(file)
                .ok()
        });

    if let Some(f) = log_file {
        let write_mutex = std::sync::Arc::new(std::sync::Mutex::new(f));
        // Mirror to the console only when someone is watching it
        let is_tty = atty::is(atty::Stream::Stdout);
        builder.format(move |fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            let line = format!("{} [{}] {}", ts, record.level(), record.args());
            if let Ok(mut guard) = write_mutex.lock() {
                let _ = writeln!(guard, "{}", line);
            }
            if is_tty {
                writeln!(fmt, "{}", line)
            } else {
                Ok(())
            }
        });
    } else {
        builder.format(|fmt, record| {
            let ts = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%SZ");
            writeln!(fmt, "{} [{}] {}", ts, record.level(), record.args())
        });
    }
    let _ = builder.try_init();
}
