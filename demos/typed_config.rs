//! Read an INI document into strongly typed configuration structs.
//!
//! Run with: cargo run --example typed_config

use ini_roundtrip::{from_document, from_str};
use serde::Deserialize;
use std::error::Error;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "lowercase")]
enum Mode {
    Development,
    Production,
}

#[derive(Debug, Deserialize)]
struct Server {
    host: String,
    port: u16,
    mode: Mode,
    workers: Option<u32>,
}

#[derive(Debug, Deserialize)]
struct Features {
    search: bool,
    beta_banner: bool,
}

#[derive(Debug, Deserialize)]
struct Config {
    server: Server,
    features: Features,
}

fn main() -> Result<(), Box<dyn Error>> {
    let text = "\
[server]
host=0.0.0.0
port=8080
mode=production

[features]
search=true
beta_banner=false
";

    let result = from_str(text);
    let config: Config = from_document(&result.document)?;

    println!("{:#?}", config);
    println!("Listening on {}:{}", config.server.host, config.server.port);
    if config.features.search && !config.features.beta_banner {
        println!("Search enabled without the beta banner");
    }
    assert_eq!(config.server.port, 8080);
    assert!(matches!(config.server.mode, Mode::Production));
    assert!(config.server.workers.is_none());

    // The untyped document works with any serde format too
    println!("As JSON: {}", serde_json::to_string_pretty(&result.document)?);

    Ok(())
}
