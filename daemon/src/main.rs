use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use landchain_common::{config::VERSION, registry::ParcelRegistry};
use landchain_daemon::{config::Config, rpc, storage::StateFile};
use log::info;

#[actix_web::main]
async fn main() -> Result<()> {
    let config = Config::parse();

    env_logger::Builder::from_default_env()
        .filter_level(config.log_level.into())
        .format_timestamp_millis()
        .init();

    info!("LandChain daemon v{}", VERSION);
    info!("Locale: {:?}", config.locale);

    let registry = match &config.state_file {
        Some(path) => {
            let file = StateFile::new(path);
            let parcel = file.load()?.unwrap_or_default();
            ParcelRegistry::from_parcel(parcel, config.locale).with_store(Arc::new(file))
        }
        None => ParcelRegistry::with_locale(config.locale),
    };

    rpc::run(&config, registry).await
}
