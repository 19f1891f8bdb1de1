mod app;
mod backend;
mod config;
mod error;
mod events;
mod logger;
mod state;
mod ui;

use anyhow::Result;
use app::App;
use clap::{crate_version, App as Cli, Arg};
use config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let matches = Cli::new("exercise-tui")
        .version(crate_version!())
        .about("A terminal client for generating language exercises")
        .arg(
            Arg::with_name("config")
                .short("c")
                .long("config")
                .value_name("DIR")
                .help("Sets a custom configuration directory")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("base-url")
                .short("u")
                .long("base-url")
                .value_name("URL")
                .help("Overrides the exercise backend address")
                .takes_value(true),
        )
        .arg(
            Arg::with_name("lessons")
                .short("n")
                .long("lessons")
                .value_name("N")
                .help("Sets the initial number of lessons")
                .takes_value(true)
                .allow_hyphen_values(true),
        )
        .arg(
            Arg::with_name("print")
                .short("p")
                .long("print")
                .help("Generates once and prints the exercises instead of starting the UI"),
        )
        .get_matches();

    let mut config = Config::new();
    config.load(matches.value_of("config"))?;
    if let Some(base_url) = matches.value_of("base-url") {
        config.base_url = base_url.to_owned();
    }
    if let Some(lessons) = matches.value_of("lessons") {
        config.lessons = lessons.to_owned();
    }

    if matches.is_present("print") {
        let lessons = config.lessons.clone();
        if !App::print(config, &lessons).await? {
            std::process::exit(1);
        }
        return Ok(());
    }

    App::start(config).await
}
