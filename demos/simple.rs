//! Parse INI text, inspect it, and save it back unchanged.
//!
//! Run with: cargo run --example simple

use ini_roundtrip::{from_str, Value};
use std::error::Error;

const SETTINGS: &str = "\
[Editor]
; Editor settings
font=Fira Code
font_size=13
word_wrap=false
";

fn main() -> Result<(), Box<dyn Error>> {
    let result = from_str(SETTINGS);

    for warning in &result.warnings {
        println!("warning: {}", warning);
    }

    for (name, section) in &result.document {
        println!("[{}]", name);
        for (key, value) in section {
            let kind = match value {
                Value::Number(_) => "number",
                Value::Bool(_) => "boolean",
                Value::String(_) => "string",
                Value::Custom(_) => "custom",
            };
            println!("  {} = {} ({})", key, value, kind);
        }
    }

    let saved = result.save()?;
    assert_eq!(saved, SETTINGS);
    println!("\n✓ Round-trip reproduced the input exactly");

    Ok(())
}
