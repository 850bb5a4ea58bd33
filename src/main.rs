mod config;
mod descriptor;
mod discord;
mod git;
mod http;
mod logger;
mod message;
mod notifier;
mod prune;
mod version;
mod webhook;

use config::ProcessEnv;
use descriptor::FsLoader;
use http::Client;

#[tokio::main]
async fn main() {
    if let Err(err) = logger::init() {
        eprintln!("Cannot initialise logging: {:#}", err);
    }

    log::info!("Starting");
    if let Err(err) = notifier::run(&ProcessEnv, &FsLoader, Client::new, chrono::Utc::now()).await
    {
        log::error!("{:#}", err);
        std::process::exit(1);
    }
}
