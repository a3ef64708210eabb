//! Interactive session creation command
//!
//! Walks the user through credentials, file naming and the Telegram login,
//! and cleans up stray on-disk artifacts when the login does not complete.
//! Ctrl-C is caught at every phase: during the prompts it ends the run with
//! a goodbye message, during the login it counts as a failure and triggers
//! cleanup. Either way the process exits with status zero.

use std::fs;
use std::path::PathBuf;

use grammers_client::SignInError;
use tracing::info;

use crate::console::{confirm, prompt_async};
use crate::credentials::{self, ApiCredentials};
use crate::error::{Error, Result};
use crate::session::{open_storage, storage_preflight, TelegramClient};
use crate::session_path::{self, SessionPath};

/// Prompt answers that may be supplied up front on the command line.
#[derive(Debug, Default)]
pub struct CreateArgs {
    pub name: Option<String>,
    pub dir: Option<PathBuf>,
}

pub async fn run(args: CreateArgs) -> Result<()> {
    print_banner();

    // Fatal when this fails; the only non-zero exit path
    storage_preflight()?;
    println!("✅ Session storage backend is ready");
    println!();

    let creds = match with_interrupt(credentials::acquire_interactive).await {
        Err(Error::Interrupted) => return goodbye(),
        other => other?,
    };

    let CreateArgs { name, dir } = args;
    let path = match with_interrupt(move || session_path::resolve_interactive(name, dir)).await {
        Err(Error::Interrupted) => return goodbye(),
        other => other?,
    };

    if path.session_file().exists() {
        let file = path.session_file();
        let ask = move || {
            println!("⚠️  File {} already exists!", file.display());
            confirm("🔄 Overwrite?", false)
        };
        match with_interrupt(ask).await {
            Err(Error::Interrupted) => return goodbye(),
            Ok(true) => {}
            Ok(false) => {
                println!("❌ Operation cancelled");
                return Ok(());
            }
            Err(err) => return Err(err),
        }
    }

    let created = tokio::select! {
        result = create_session(&creds, &path) => result,
        _ = tokio::signal::ctrl_c() => Err(Error::Interrupted),
    };

    match created {
        Ok(()) => {
            println!("🎊 Session created and ready to use!");
        }
        Err(Error::Interrupted) => {
            println!("\n❌ Operation interrupted by user");
            path.cleanup_artifacts();
            println!("💥 Session was not created");
        }
        Err(err) => {
            println!("❌ Error: {}", err);
            path.cleanup_artifacts();
            println!("💥 Session was not created");
        }
    }

    Ok(())
}

/// Connect, drive the login handshake, report the authenticated identity and
/// the resulting file size. The client tears its connection down on drop,
/// whichever way this function exits.
async fn create_session(creds: &ApiCredentials, path: &SessionPath) -> Result<()> {
    println!();
    println!("🚀 Starting session creation...");
    println!("📱 Connecting to Telegram...");

    let storage = open_storage(path)?;
    let client = TelegramClient::connect(storage, creds.api_id).await?;

    println!("✅ Connection established!");
    println!("📲 Telegram will now authorize this login...");
    println!();

    let phone = loop {
        let input =
            prompt_async("📞 Enter your phone number (international format): ".into()).await?;
        if !input.is_empty() {
            break input;
        }
    };

    info!("requesting login code");
    let token = client
        .request_login_code(&phone, &creds.api_hash)
        .await
        .map_err(|e| Error::TelegramError(format!("Failed to request code: {}", e)))?;

    let code = prompt_async("🔐 Enter the code from Telegram: ".into()).await?;

    match client.sign_in(&token, &code).await {
        Ok(_) => {}
        Err(SignInError::PasswordRequired(password_token)) => {
            let hint = password_token
                .hint()
                .map(|h| format!(" (hint: {})", h))
                .unwrap_or_default();
            let message = format!("🔐 Enter your 2FA password{}: ", hint);
            let password = tokio::task::spawn_blocking(move || {
                rpassword::prompt_password(message)
            })
            .await
            .map_err(|e| Error::Unknown(format!("password prompt failed: {}", e)))??;

            client
                .check_password(password_token, password.trim())
                .await
                .map_err(|e| Error::TelegramError(format!("Failed to check password: {}", e)))?;
        }
        Err(e) => return Err(Error::TelegramError(format!("Failed to sign in: {}", e))),
    }

    let user = client.get_me().await?;

    println!();
    println!("🎉 Authorization successful!");
    println!("👤 User: {}", user.full_name());
    if let Some(username) = user.username() {
        println!("🔗 Username: @{}", username);
    }
    println!();

    // Drop the connection so the storage is flushed before the size report
    drop(client);

    let session_file = path.session_file();
    println!("💾 Session saved: {}", session_file.display());
    if let Ok(meta) = fs::metadata(&session_file) {
        println!("📊 Size: {} bytes", meta.len());
    }

    println!();
    println!("✨ Done! Point your own tools at this session:");
    println!("   SqliteSession::open({:?})", session_file);

    Ok(())
}

/// Run a blocking console phase off the executor while listening for Ctrl-C,
/// so an interrupt at any prompt is caught instead of killing the process.
/// Only one of these is pending at a time; phases run strictly in sequence.
async fn with_interrupt<T, F>(task: F) -> Result<T>
where
    F: FnOnce() -> Result<T> + Send + 'static,
    T: Send + 'static,
{
    tokio::select! {
        result = tokio::task::spawn_blocking(task) => {
            result.map_err(|e| Error::Unknown(format!("console task failed: {}", e)))?
        }
        _ = tokio::signal::ctrl_c() => Err(Error::Interrupted),
    }
}

fn goodbye() -> Result<()> {
    println!("\n👋 Goodbye!");
    Ok(())
}

fn print_banner() {
    println!();
    println!("🔐{}", "=".repeat(60));
    println!(
        "   TELEGRAM SESSION CREATOR v{}",
        env!("CARGO_PKG_VERSION")
    );
    println!("   Create Telegram sessions quickly and simply");
    println!("{}", "=".repeat(62));
    println!();
}
