#[macro_use]
extern crate lazy_static;
#[macro_use]
extern crate rocket;

use log::info;
use rocket::figment::{self, Figment};
use rocket::{Build, Rocket};

mod api;
mod config;
mod error;

fn build(figment: Figment) -> Result<Rocket<Build>, figment::Error> {
    let config: config::Config = figment.extract()?;
    info!(
        "Accepting expressions up to {} bytes",
        config.interpreter.max_input_len
    );

    Ok(rocket::custom(figment)
        .manage(config)
        .mount("/", api::routes()))
}

#[rocket::main]
async fn main() {
    env_logger::init();

    let rocket = build(config::figment()).expect("Failed to load config");
    let result = rocket.launch().await;

    assert!(result.is_ok());
}
