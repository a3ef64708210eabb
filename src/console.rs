//! Console prompt helpers
//!
//! All user dialog goes through these functions so the read/flush handling
//! lives in one place. Validation retry loops belong to the callers.

use std::io::{self, BufRead, Write};

use crate::error::Result;

/// Print a message and read one trimmed line from stdin.
///
/// Returns an `UnexpectedEof` I/O error when stdin is closed, so validation
/// loops cannot spin on a dead input stream.
pub fn prompt(message: &str) -> Result<String> {
    let mut stdout = io::stdout().lock();
    stdout.write_all(message.as_bytes())?;
    stdout.flush()?;

    let mut line = String::new();
    let read = io::stdin().lock().read_line(&mut line)?;
    if read == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "stdin closed").into());
    }
    Ok(line.trim().to_string())
}

/// Ask a yes/no question. An empty answer takes the default.
pub fn confirm(message: &str, default_yes: bool) -> Result<bool> {
    let suffix = if default_yes { " (Y/n): " } else { " (y/N): " };
    let answer = prompt(&format!("{}{}", message, suffix))?;
    Ok(parse_confirm(&answer, default_yes))
}

/// Interpret a yes/no answer. Anything that is not empty or an explicit
/// yes counts as no.
pub fn parse_confirm(answer: &str, default_yes: bool) -> bool {
    match answer.trim().to_lowercase().as_str() {
        "" => default_yes,
        "y" | "yes" => true,
        _ => false,
    }
}

/// `prompt` moved off the async executor, so a `tokio::select!` racing the
/// login flow against Ctrl-C stays responsive while waiting on stdin.
pub async fn prompt_async(message: String) -> Result<String> {
    tokio::task::spawn_blocking(move || prompt(&message))
        .await
        .map_err(|e| crate::error::Error::Unknown(format!("prompt task failed: {}", e)))?
}
