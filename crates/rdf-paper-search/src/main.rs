//! RDF Paper Search - Entry Point
//!
//! Serves the search UI and JSON API over HTTP.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use rdf_paper_search::config::{Config, http};
use rdf_paper_search::server::PaperSearchServer;
use rdf_paper_search::{SearchContext, SparqlClient};

#[derive(Parser, Debug)]
#[command(name = "rdf-paper-search")]
#[command(about = "Search UI and JSON API over a SPARQL knowledge graph of papers")]
#[command(version)]
struct Cli {
    /// SPARQL endpoint URL
    #[arg(long, env = "SPARQL_ENDPOINT")]
    endpoint: String,

    /// HTTP server port
    #[arg(long, default_value_t = http::DEFAULT_PORT, env = "PORT")]
    port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, default_value = "info", env = "RUST_LOG")]
    log_level: String,

    /// Output logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn init_tracing(log_level: &str, json: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));

    let subscriber = tracing_subscriber::registry().with(filter);

    if json {
        subscriber.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        subscriber.with(tracing_subscriber::fmt::layer().compact()).init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    init_tracing(&cli.log_level, cli.json_logs);

    let config = Config::new(cli.endpoint)?;
    let client = SparqlClient::new(&config)?;

    tracing::info!(
        version = env!("CARGO_PKG_VERSION"),
        endpoint = client.endpoint(),
        "Starting RDF paper search server"
    );

    let ctx = SearchContext::from_config(Arc::new(client), &config);

    PaperSearchServer::new(ctx).run_http(cli.port).await
}
