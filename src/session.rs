//! Telegram client construction over a SQLite-backed session
//!
//! Provides:
//! - Session storage opening at a chosen path
//! - Client creation with the sender pool runner spawned in the background
//! - Guaranteed runner teardown when the client wrapper drops
//! - A startup preflight that proves the storage backend works

use std::env;
use std::fs;
use std::sync::Arc;

use grammers_client::client::updates::UpdatesLike;
use grammers_client::Client;
use grammers_mtsender::{SenderPool, SenderPoolHandle};
use grammers_session::storages::SqliteSession;
use tokio::sync::mpsc;

use crate::error::{Error, Result};
use crate::session_path::SessionPath;

/// Open (creating if needed) the SQLite session at the resolved path.
pub fn open_storage(path: &SessionPath) -> Result<Arc<SqliteSession>> {
    let session_file = path.session_file().display().to_string();
    let session = SqliteSession::open(&session_file)
        .map_err(|e| Error::StorageUnavailable(format!("Failed to open session: {}", e)))?;
    Ok(Arc::new(session))
}

/// Verify the session storage backend is operational before prompting the
/// user for anything. Opens a throwaway session in the OS temp directory and
/// removes it again.
pub fn storage_preflight() -> Result<()> {
    let probe = SessionPath::new(
        env::temp_dir(),
        &format!("session_creator_probe_{}", std::process::id()),
    );

    let probe_file = probe.session_file().display().to_string();
    let result = SqliteSession::open(&probe_file)
        .map(drop)
        .map_err(|e| Error::StorageUnavailable(e.to_string()));

    let [shm, wal] = probe.journal_files();
    for file in [probe.session_file(), shm, wal] {
        let _ = fs::remove_file(file);
    }

    result
}

/// Holder for SenderPool components and Client.
///
/// Dropping this aborts the background runner, so the connection is torn
/// down on every exit path, including errors and Ctrl-C.
pub struct TelegramClient {
    pub client: Client,
    pub handle: SenderPoolHandle,
    // Kept alive so the runner's update sends do not fail; never consumed
    _updates: mpsc::UnboundedReceiver<UpdatesLike>,
    runner: tokio::task::JoinHandle<()>,
}

impl TelegramClient {
    /// Create a client bound to the given session storage.
    pub async fn connect(session: Arc<SqliteSession>, api_id: i32) -> Result<Self> {
        let pool = SenderPool::new(session, api_id);

        // Create client from pool (needs a reference to the whole pool)
        let client = Client::new(&pool);

        let SenderPool {
            runner,
            updates,
            handle,
        } = pool;

        let runner = tokio::spawn(async move {
            runner.run().await;
        });

        Ok(Self {
            client,
            handle,
            _updates: updates,
            runner,
        })
    }
}

impl Drop for TelegramClient {
    fn drop(&mut self) {
        self.runner.abort();
    }
}

// Allow using TelegramClient as &Client
impl std::ops::Deref for TelegramClient {
    type Target = Client;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}
