use clap::Parser;
use tablecast::config::emitter::EmitterConfig;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    #[arg(long, default_value = "pinterest_data_rds.yaml")]
    pub database_config: String,

    #[arg(long, default_value = "API_invoke_url.yaml")]
    pub api_config: String,

    #[arg(long, default_value = "500")]
    pub iterations: u64,

    #[arg(long, default_value = "11000")]
    pub max_offset: u64,

    #[arg(long, default_value = "2")]
    pub sleep_max_secs: u64,

    #[arg(long, default_value = "5")]
    pub request_timeout_secs: u64,
}

impl Args {
    pub fn to_emitter_config(&self) -> EmitterConfig {
        EmitterConfig {
            iterations: self.iterations,
            max_offset: self.max_offset,
            sleep_max_secs: self.sleep_max_secs,
            request_timeout_secs: self.request_timeout_secs,
        }
    }
}
