use shortreel_player::app::{self, AppConfig};

use anyhow::Context;
use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("shortreel_player", LevelFilter::Debug)
        .init();
}

fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
        log::debug!("RUST_LOG not set, using default log filters");
    } else {
        env_logger::init();
    }

    let config = AppConfig::from_environment()
        .context("failed to prepare shortreel")?;

    app::application(config)
        .run()
        .map_err(|err| anyhow::anyhow!("shortreel exited with an error: {err}"))
}
