use std::path::PathBuf;
use std::process::{Command, Output};

fn temp_dir(label: &str) -> PathBuf {
    std::env::temp_dir().join(format!("kettik-cli-{label}-{}", uuid::Uuid::new_v4()))
}

fn kettik(data_dir: &PathBuf, args: &[&str]) -> Output {
    // Get the path to the binary from Cargo
    let binary_path = env!("CARGO_BIN_EXE_kettik");

    Command::new(binary_path)
        .arg("--data-dir")
        .arg(data_dir)
        .args(args)
        .env_remove("KETTIK_API_BASE")
        .env_remove("KETTIK_DATA_DIR")
        .env("RUST_LOG", "error") // Reduce log output for test
        .output()
        .expect("Failed to start kettik binary")
}

fn describe(output: &Output) -> String {
    format!(
        "status: {}\nStdout: {}\nStderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr)
    )
}

#[test]
fn cli_mode_with_config_and_dry_run_works() {
    let data_dir = temp_dir("dry-run");
    let config_path = temp_dir("config").with_extension("yaml");
    std::fs::write(&config_path, "api_base: https://api.kettik.kg\nconnect_timeout_secs: 5\n")
        .unwrap();

    let output = kettik(
        &data_dir,
        &["--config", config_path.to_str().unwrap(), "--dry-run"],
    );

    assert!(output.status.success(), "{}", describe(&output));
    // dry-run must not create the session directory
    assert!(!data_dir.exists());

    std::fs::remove_file(config_path).unwrap();
}

#[test]
fn cli_mode_dry_run_rejects_bad_base_url() {
    let data_dir = temp_dir("bad-url");
    let output = kettik(&data_dir, &["--base-url", "not a url", "--dry-run"]);

    assert!(!output.status.success(), "{}", describe(&output));
    assert!(String::from_utf8_lossy(&output.stderr).contains("api_base"));
}

#[test]
fn cli_mode_status_without_session_leads_to_login() {
    let data_dir = temp_dir("status");
    let output = kettik(&data_dir, &["status"]);

    assert!(output.status.success(), "{}", describe(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("signed out"), "{}", describe(&output));
    assert!(stdout.contains("/auth/phone"), "{}", describe(&output));

    let _ = std::fs::remove_dir_all(data_dir);
}

#[test]
fn cli_mode_status_with_stored_session_reaches_dashboard() {
    let data_dir = temp_dir("signed-in");
    std::fs::create_dir_all(&data_dir).unwrap();
    std::fs::write(data_dir.join("session.json"), r#"{"access_token":"abc"}"#).unwrap();

    let output = kettik(&data_dir, &["status"]);

    assert!(output.status.success(), "{}", describe(&output));
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("signed in"), "{}", describe(&output));
    assert!(stdout.contains("/dashboard"), "{}", describe(&output));

    let logout = kettik(&data_dir, &["logout"]);
    assert!(logout.status.success(), "{}", describe(&logout));
    assert!(String::from_utf8_lossy(&logout.stdout).contains("Signed out"));

    let after = kettik(&data_dir, &["status"]);
    assert!(String::from_utf8_lossy(&after.stdout).contains("/auth/phone"));

    std::fs::remove_dir_all(data_dir).unwrap();
}

#[test]
fn cli_mode_protected_command_without_session_fails_locally() {
    let data_dir = temp_dir("no-token");
    // nothing listens here; the call must fail before any connection attempt
    let output = kettik(&data_dir, &["--base-url", "http://127.0.0.1:9", "balance"]);

    assert_eq!(output.status.code(), Some(1), "{}", describe(&output));
    assert!(
        String::from_utf8_lossy(&output.stderr).contains("NO_TOKEN: sign in first"),
        "{}",
        describe(&output)
    );

    let _ = std::fs::remove_dir_all(data_dir);
}
