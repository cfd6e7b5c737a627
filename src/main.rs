//! A terminal user interface for a remote todo list.
//!
//! Loads the configured user's todos from the remote service, lets the user
//! add a todo and filter the visible list by status, and surfaces transient
//! failure notices.

mod app;
mod config;
mod events;
mod state;
mod todos;
mod ui;

use anyhow::{anyhow, Result};
use app::App;
use clap::{App as CliApp, Arg};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = CliApp::new(env!("CARGO_PKG_NAME"))
        .version(env!("CARGO_PKG_VERSION"))
        .about(env!("CARGO_PKG_DESCRIPTION"))
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("user-id")
                .short("u")
                .long("user-id")
                .value_name("ID")
                .help("Sets the user identity and persists it to the configuration file")
                .takes_value(true),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;

    if let Some(value) = matches.value_of("user-id") {
        let user_id = value
            .parse::<u64>()
            .map_err(|_| anyhow!("Invalid user id '{}'", value))?;
        config.user_id = Some(user_id);
        config.save()?;
    }

    App::start(config).await
}
