// crates/service/src/main.rs
use clap::Parser;
use std::path::PathBuf;

use comment_ripper_service::server::{ServerConfig, start_server};

/// Comment ripper upload service
#[derive(Parser, Debug)]
#[command(name = "comment_ripper_service", version, about)]
struct Cli {
    /// Host address to bind to
    #[arg(short = 'H', long, default_value = "0.0.0.0", env = "HOST")]
    host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 5000, env = "PORT")]
    port: u16,

    /// Directory uploads are saved into
    #[arg(long, default_value = "/tmp/code", value_name = "DIR")]
    upload_dir: PathBuf,

    /// SQLite database recording uploaded filenames
    #[arg(long, default_value = "/tmp/code/files.db", value_name = "FILE")]
    database: PathBuf,

    /// Language configuration file
    #[arg(short = 'c', long, default_value = "config.json", value_name = "FILE")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = ServerConfig {
        host: cli.host,
        port: cli.port,
        upload_dir: cli.upload_dir,
        db_path: cli.database,
        config_path: cli.config,
    };

    start_server(config).await
}
