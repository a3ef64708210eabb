//! Tests for the create command

use session_creator::commands::CreateArgs;
use session_creator::console::parse_confirm;
use session_creator::session_path::SessionPath;
use tempfile::tempdir;

#[test]
fn test_overwrite_declined_by_default() {
    // Overwrite confirmation defaults to "no"
    assert!(!parse_confirm("", false));
    assert!(!parse_confirm("n", false));
    assert!(!parse_confirm("whatever", false));
    assert!(parse_confirm("y", false));
}

#[test]
fn test_existing_session_is_detected() {
    let temp = tempdir().expect("tempdir");
    let path = SessionPath::new(temp.path(), "taken");

    assert!(!path.session_file().exists());
    std::fs::write(path.session_file(), b"existing").expect("write");
    assert!(path.session_file().exists());
}

#[test]
fn test_create_args_defaults_to_prompting() {
    let args = CreateArgs::default();
    assert!(args.name.is_none());
    assert!(args.dir.is_none());
}

#[tokio::test]
#[ignore] // Requires user interaction and a live Telegram connection
async fn test_create_run() {
    use session_creator::commands::create;

    let _ = create::run(CreateArgs::default()).await;
}
