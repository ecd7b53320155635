mod args;

use anyhow::Result;
use args::Args;
use clap::Parser;
use log::info;
use std::time::Duration;
use tablecast::config::database::DatabaseConfig;
use tablecast::config::endpoint::EndpointConfig;
use tablecast::emitter::emitter::Emitter;
use tablecast::sink::rest::RestProxySink;
use tablecast::source::mysql::MySQLRowSource;

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let emitter_config = args.to_emitter_config();

    let database_config = DatabaseConfig::from_yaml_file(&args.database_config)?;
    let endpoint_config = EndpointConfig::from_yaml_file(&args.api_config)?;

    let request_timeout = Duration::from_secs(emitter_config.request_timeout_secs);
    let source = MySQLRowSource::connect(&database_config, request_timeout).await?;
    let sink = RestProxySink::new(&endpoint_config, request_timeout)?;

    info!(
        "sampling {} for {} iterations, publishing to {}",
        database_config.sanitized_url(),
        emitter_config.iterations,
        endpoint_config.invoke_url
    );

    let emitter = Emitter::new(emitter_config, endpoint_config.bindings(), source, sink);
    emitter.run().await?;

    info!("run complete");
    Ok(())
}
