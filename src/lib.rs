//! Interactive Telegram Session Creator Library
//!
//! This library provides the pieces of the session creator CLI:
//! - API credential validation and interactive acquisition
//! - Session file naming, directory resolution and artifact cleanup
//! - grammers client construction over a SQLite-backed session
//! - The interactive create-session command

pub mod console;
pub mod credentials;
pub mod error;
pub mod session;
pub mod session_path;

// Re-export common types
pub use credentials::{is_valid_api_hash, is_valid_api_id, ApiCredentials};
pub use error::{Error, Result};
pub use session_path::{SessionPath, DEFAULT_SESSION_NAME};

// Commands module uses re-exported types, so it must be declared after the re-exports
pub mod commands;
