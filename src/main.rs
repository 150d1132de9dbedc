//! `testmux` command line.
//!
//! Serves a scenario file to clients that are not written in Rust, then
//! verifies the request order on Ctrl+C.

use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::{Arc, Mutex};

use clap::{Parser, Subcommand};
use tokio::net::TcpListener;

use testmux::config::{load_config, MuxConfig};
use testmux::http::server::lock;
use testmux::observability::logging;
use testmux::{MuxServer, Router, Shutdown, TracingReporter};

#[derive(Parser)]
#[command(name = "testmux")]
#[command(about = "Serve an ordered HTTP request script and verify it was followed", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve a scenario until Ctrl+C, then verify it
    Serve {
        /// Scenario file (TOML)
        scenario: PathBuf,

        /// Override the configured bind address
        #[arg(short, long)]
        bind: Option<String>,
    },
    /// Validate a scenario and list its routes
    Check {
        /// Scenario file (TOML)
        scenario: PathBuf,

        /// Print the routes as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { scenario, bind } => {
            let mut config = load_config(&scenario)?;
            if let Some(bind) = bind {
                config.listener.bind_address = bind;
            }
            serve(config).await
        }
        Commands::Check { scenario, json } => {
            let config = load_config(&scenario)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&config.routes)?);
            } else {
                for (i, route) in config.routes.iter().enumerate() {
                    println!("{:>3}  {} {} -> {}", i, route.method, route.path, route.status);
                }
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

async fn serve(config: MuxConfig) -> Result<ExitCode, Box<dyn std::error::Error>> {
    logging::init(&config.observability.log_filter);

    tracing::info!(
        bind_address = %config.listener.bind_address,
        routes = config.routes.len(),
        "Scenario loaded"
    );

    let router = Arc::new(Mutex::new(Router::from_config(&config.routes)));
    let listener = TcpListener::bind(&config.listener.bind_address).await?;
    tracing::info!(address = %listener.local_addr()?, "Listening for requests");

    let shutdown = Shutdown::new();
    let server = MuxServer::new(router.clone(), &config.listener);
    let handle = tokio::spawn(server.run(listener, shutdown.subscribe()));

    tokio::signal::ctrl_c().await?;
    shutdown.trigger();
    handle.await??;

    let mut reporter = TracingReporter::new();
    let ok = lock(&router).verify(&mut reporter);
    if ok {
        println!("OK: all routes visited in order");
        Ok(ExitCode::SUCCESS)
    } else {
        println!("FAILED: {} problem(s)", reporter.count());
        Ok(ExitCode::FAILURE)
    }
}
