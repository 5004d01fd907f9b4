//! Main entry point for the Pixela demo.

use anyhow::{Context, Result};
use clap::Parser;
use pixela_client::GraphTrackerClient;
use pixela_common::init_default_logging;
use pixela_config::ConfigLoader;
use pixela_demo::{run_demo, Args};
use tracing::{error, info};

fn main() -> Result<()> {
    let args = Args::parse();
    init_default_logging(args.log_level.as_str())?;

    info!("Starting Pixela demo");

    let config = ConfigLoader::from_env()
        .context("TOKEN and USER_NAME must be set in the environment")?;
    let client = GraphTrackerClient::new(config)?;

    let report = match run_demo(&client, &args.plan()) {
        Ok(report) => report,
        Err(e) => {
            error!("Demo failed: {}", e);
            return Err(e.into());
        }
    };

    match &report.graph {
        Some(created) => println!("graph:    {} ({created})", report.graph_id),
        None => println!("graph:    {} (already existed)", report.graph_id),
    }
    println!("recorded: {}", report.recorded);
    println!("updated:  {}", report.updated);
    println!("deleted:  {}", report.deleted);
    println!("view at:  {}", report.graph_page_url);
    Ok(())
}
