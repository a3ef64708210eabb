//! API credential validation and interactive acquisition
//!
//! Credentials come from <https://my.telegram.org/apps>: a numeric API ID and
//! a 32-character hexadecimal API hash. Both are collected interactively and
//! live only for the duration of a single run.

use crate::console::prompt;
use crate::error::Result;

/// Telegram application credentials.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    pub api_id: i32,
    pub api_hash: String,
}

/// An API ID is a non-empty string of ASCII decimal digits that fits in
/// the `i32` grammers expects.
pub fn is_valid_api_id(input: &str) -> bool {
    !input.is_empty()
        && input.chars().all(|c| c.is_ascii_digit())
        && input.parse::<i32>().is_ok()
}

/// An API hash is exactly 32 hexadecimal characters, case-insensitive.
pub fn is_valid_api_hash(input: &str) -> bool {
    input.len() == 32 && input.chars().all(|c| c.is_ascii_hexdigit())
}

/// Prompt for both credentials, re-asking until each one validates.
///
/// The retry loops have no exit besides valid input; EOF on stdin surfaces
/// as an I/O error from `prompt`.
pub fn acquire_interactive() -> Result<ApiCredentials> {
    println!("📋 Creating a session requires Telegram API credentials:");
    println!("   1. Open https://my.telegram.org/apps");
    println!("   2. Create a new application");
    println!("   3. Copy the API ID and API Hash");
    println!();

    let api_id = loop {
        let input = prompt("🔑 Enter API ID: ")?;
        match input.parse::<i32>() {
            Ok(id) if is_valid_api_id(&input) => break id,
            _ => println!("❌ API ID must contain only digits!"),
        }
    };

    let api_hash = loop {
        let input = prompt("🔑 Enter API Hash: ")?;
        if is_valid_api_hash(&input) {
            break input.to_lowercase();
        }
        println!("❌ API Hash must be a 32-character hex string!");
    };

    Ok(ApiCredentials { api_id, api_hash })
}
