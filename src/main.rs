// Dev server entry point for the Cyber Range browser shooter
use clap::Parser;
use flexi_logger::Logger;
use std::path::PathBuf;

use cyber_range::servers::{WebConfig, WebServer};

#[derive(Parser, Debug)]
#[command(name = "cyber_range")]
struct Config {
    /// Port the dev server listens on
    #[arg(short = 'p', long, default_value_t = 8000)]
    port: u16,

    /// Address the dev server binds to
    #[arg(long, default_value = "0.0.0.0")]
    host: String,

    /// Directory static assets are served from
    #[arg(long, default_value = ".")]
    static_root: PathBuf,

    /// CSV file scores are appended to
    #[arg(long, default_value = "scores.csv")]
    score_file: PathBuf,

    /// Frontend origin the root path redirects to
    #[arg(long, default_value = "http://localhost:3000")]
    frontend_origin: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::parse();

    Logger::try_with_env_or_str("info")?
        .log_to_stdout()
        .format(flexi_logger::colored_default_format)
        .start()?;

    let web_config = WebConfig {
        port: config.port,
        host: config.host,
        static_root: config.static_root,
        score_file: config.score_file,
        redirect_target: config.frontend_origin,
    };

    WebServer::new(web_config).start().await?;
    Ok(())
}
