// # arecctl
//
// Command-line tool for managing Infomaniak A records.
//
// Usage:
//
// ```bash
// arecctl <domain> <source> <target> <add|delete|update> [new_target]
// ```
//
// The API token comes from the `INFOMANIAK_API_TOKEN` environment variable.
// Confirmations go to stdout; logs and errors go to stderr. Exit code is 0
// on success and 1 on any usage error, missing credential, or operation
// failure.
//
// ## Example
//
// ```bash
// export INFOMANIAK_API_TOKEN=your_token
//
// arecctl example.com www 10.0.0.1 add
// arecctl example.com www 10.0.0.1 update 10.0.0.2
// arecctl example.com www 10.0.0.2 delete
// ```

use std::net::Ipv4Addr;
use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::{Parser, ValueEnum};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use arec_core::config::Config;
use arec_core::error::{Error, Result};
use arec_core::record::DEFAULT_TTL;
use arec_provider_infomaniak::InfomaniakClient;

/// Manage Infomaniak DNS A records from the command line.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None, name = "arecctl")]
struct Cli {
    /// Fully-qualified domain the record lives under (e.g. "www.example.com").
    domain: String,

    /// Subdomain relative to the zone apex; "" or "." means the apex itself.
    source: String,

    /// IPv4 address the record points to.
    target: Ipv4Addr,

    /// What to do with the record.
    #[arg(value_enum)]
    action: Action,

    /// New IPv4 address; required by the update action.
    new_target: Option<Ipv4Addr>,

    /// Record time-to-live in seconds.
    #[arg(long, default_value_t = DEFAULT_TTL)]
    ttl: u32,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
enum Action {
    /// Create the A record.
    Add,
    /// Delete the A record matching (source, target) exactly.
    Delete,
    /// Replace target with new_target (delete then add, not atomic).
    Update,
}

/// Perform the requested action, returning the confirmation line
async fn run(cli: &Cli, config: &Config) -> Result<String> {
    let client = InfomaniakClient::new(config)?;

    match cli.action {
        Action::Add => {
            client
                .add_a_record(&cli.domain, &cli.source, cli.target, cli.ttl)
                .await?;
            Ok(format!("A record added: {} -> {}", cli.source, cli.target))
        }
        Action::Delete => {
            client
                .delete_a_record(&cli.domain, &cli.source, cli.target)
                .await?;
            Ok(format!("A record deleted: {} -> {}", cli.source, cli.target))
        }
        Action::Update => {
            let new_target = cli.new_target.ok_or_else(|| {
                Error::usage("'update' action requires a new_target argument")
            })?;
            client
                .update_a_record(&cli.domain, &cli.source, cli.target, new_target, cli.ttl)
                .await?;
            Ok(format!(
                "A record updated: {} -> {} to {}",
                cli.source, cli.target, new_target
            ))
        }
    }
}

fn log_level(name: &str) -> Level {
    match name.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::WARN,
    }
}

fn main() -> ExitCode {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Load configuration from environment
    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Logs go to stderr so stdout carries only the confirmation line
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level(&config.log_level))
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Error: failed to set tracing subscriber: {e}");
        return ExitCode::FAILURE;
    }

    // One invocation, one sequential chain of requests
    let rt = match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime,
        Err(e) => {
            eprintln!("Error: failed to create runtime: {e}");
            return ExitCode::FAILURE;
        }
    };

    match rt.block_on(run(&cli, &config)) {
        Ok(confirmation) => {
            println!("{confirmation}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
