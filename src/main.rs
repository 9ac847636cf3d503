mod api;
mod app;
mod config;
mod error;
mod events;
mod screens;
mod state;
#[cfg(test)]
mod testing;
mod ui;
mod utils;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as Cli, Arg};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("post-tui")
        .version(crate_version!())
        .about("Compose and publish image posts from the terminal")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Directory holding config.yml")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("api-url")
                .long("api-url")
                .value_name("URL")
                .help("Base URL of the posts API, overriding the config file")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(api_url) = matches.value_of("api-url") {
        config.api_url = api_url.to_string();
    }

    App::start(config).await?;
    Ok(())
}
