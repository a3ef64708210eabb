//! Command implementations
//!
//! The session creator has a single command: the interactive create flow.

pub mod create;

pub use create::{run as create_run, CreateArgs};
