//! Edit a configuration file on disk while keeping its layout and comments.
//!
//! Run with: cargo run --example edit_in_place

use ini_roundtrip::{load, store, FileStore, IniOptions, NoSection};
use std::error::Error;

const ORIGINAL: &str = "\
; Written by the installer
log_level=info

[Database]
; Primary connection
host=db.internal
port=5432
pool=10

[Cache]
ttl=300
";

fn main() -> Result<(), Box<dyn Error>> {
    let dir = std::env::temp_dir().join("ini_roundtrip_demo");
    std::fs::create_dir_all(&dir)?;
    std::fs::write(dir.join("app.ini"), ORIGINAL)?;

    // Top-level keys before any header are allowed in this file
    let options = IniOptions::new().with_no_section(NoSection::Implicit);
    let mut files = FileStore::with_root(&dir);

    let mut result = load(&files, "app.ini", &options)?;
    for warning in &result.warnings {
        println!("note: {}", warning);
    }

    result.document.set("Database", "port", 6432);
    result.document.remove("Database", "pool");
    result.document.set("Database", "sslmode", "require");
    result.document.remove_section("Cache");
    result.document.set("Metrics", "enabled", true);

    store(
        &mut files,
        "app.ini",
        &result.document,
        Some(&result.metadata),
        &options,
    )?;

    println!("Before:\n{}", ORIGINAL);
    println!("After:\n{}", std::fs::read_to_string(dir.join("app.ini"))?);

    Ok(())
}
