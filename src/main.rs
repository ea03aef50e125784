use clap::Parser;
use color_eyre::Result;
use env_logger::Env;
use log::{info, warn};
use std::path::PathBuf;

use platformgen::config::{PlatformConfig, DEFAULT_BANDWIDTH, DEFAULT_LATENCY};
use platformgen::generator::generate_platform_xml;

/// Platform topology generator for SimGrid network simulations
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of nodes to create
    #[arg(long = "num_nodes")]
    num_nodes: u32,

    /// Number of clients per node (accepted for launch-script
    /// compatibility; does not affect the topology)
    #[arg(long = "num_clients_per_node")]
    num_clients_per_node: u32,

    /// Output file name
    #[arg(long = "output_file")]
    output_file: PathBuf,

    /// The bandwidth of the platform
    #[arg(long, default_value = DEFAULT_BANDWIDTH)]
    bandwidth: String,

    /// The latency of the platform
    #[arg(long, default_value = DEFAULT_LATENCY)]
    latency: String,
}

fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Parse command-line arguments
    let args = Args::parse();

    // Initialize logging with default filter level of "info"
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    info!("Creating platform XML for {} nodes", args.num_nodes);
    info!("Output file: {:?}", args.output_file);

    warn!("--num_clients_per_node is accepted but does not affect the generated topology");

    let config = PlatformConfig {
        num_nodes: args.num_nodes,
        num_clients_per_node: args.num_clients_per_node,
        bandwidth: args.bandwidth,
        latency: args.latency,
    };

    generate_platform_xml(&config, &args.output_file)?;

    info!("Platform XML created at {:?}", args.output_file);
    Ok(())
}
