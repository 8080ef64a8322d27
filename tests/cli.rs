use std::path::Path;
use std::process::{Command, Output};

const BIN: &str = env!("CARGO_BIN_EXE_deploy-vars");

/// Runs the binary in `dir` with no user config and a controlled token.
fn run_in(dir: &Path, args: &[&str], token: Option<&str>) -> Output {
    let mut cmd = Command::new(BIN);
    cmd.args(args)
        .current_dir(dir)
        .env("XDG_CONFIG_HOME", dir)
        .env("HOME", dir)
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    match token {
        Some(t) => cmd.env("GITHUB_TOKEN", t),
        None => cmd.env_remove("GITHUB_TOKEN"),
    };
    cmd.output().expect("failed to run deploy-vars")
}

fn run(args: &[&str], token: Option<&str>) -> Output {
    let dir = tempfile::tempdir().unwrap();
    run_in(dir.path(), args, token)
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_env_format_without_token_warns_first() {
    let output = run(&["show", "--format", "env", "--date", "20200615"], None);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines[0], "WARNING: Invalid GH-Token");
    assert!(lines.contains(&"BUILD_DATE=20200615"));
    assert!(lines.contains(&"BUILD_REPO=REDasm-Builds"));
    assert!(lines.contains(&"BUILD_REPO_URL=https://github.com/REDasmOrg/REDasm-Builds.git"));
    assert!(lines.contains(&"DATABASE_REPO_URL=https://github.com/REDasmOrg/REDasm-Database.git"));
}

#[test]
fn test_machine_formats_carry_real_token() {
    let output = run(&["show", "--format", "env"], Some("s3cret"));
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(!out.contains("WARNING"));
    assert!(out.contains("BUILD_REPO_URL=https://s3cret@github.com/REDasmOrg/REDasm-Builds.git"));
    assert!(!stderr(&output).contains("s3cret"));
}

#[test]
fn test_text_table_masks_token() {
    let output = run(&["show"], Some("s3cret"));
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(!out.contains("s3cret"));
    assert!(out.contains("https://***@github.com/REDasmOrg/REDasm-Builds.git"));

    let revealed = run(&["show", "--reveal-token"], Some("s3cret"));
    assert!(stdout(&revealed).contains("https://s3cret@github.com/"));
}

#[test]
fn test_checked_out_config_is_ignored() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join(".deploy-vars.json"),
        r#"{"project":{"host":"attacker.example","database_repo":"Evil"}}"#,
    )
    .unwrap();

    let output = run_in(dir.path(), &["show", "-f", "env"], Some("SECRET"));
    assert!(output.status.success());

    let out = stdout(&output);
    assert!(!out.contains("attacker.example"));
    assert!(out.contains("DATABASE_REPO_URL=https://github.com/REDasmOrg/REDasm-Database.git"));
    assert!(out.contains("BUILD_REPO_URL=https://SECRET@github.com/REDasmOrg/REDasm-Builds.git"));
}

#[test]
fn test_config_with_repository_keys_is_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"project":{"host":"attacker.example"}}"#).unwrap();

    let output = run_in(
        dir.path(),
        &["show", "--config", config.to_str().unwrap()],
        Some("SECRET"),
    );
    assert!(!output.status.success());
    assert!(!stdout(&output).contains("attacker.example"));
}

#[test]
fn test_config_sets_default_format() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("config.json");
    std::fs::write(&config, r#"{"output":{"format":"json"}}"#).unwrap();

    let output = run_in(
        dir.path(),
        &["show", "--config", config.to_str().unwrap()],
        Some("t"),
    );
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["BUILD_REPO_URL"], "https://t@github.com/REDasmOrg/REDasm-Builds.git");
}

#[test]
fn test_get_warns_on_stdout_without_token() {
    let output = run(&["get", "build_archive", "--date", "20200615"], None);
    assert!(output.status.success());

    let out = stdout(&output);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "WARNING: Invalid GH-Token");
    assert!(lines[1].starts_with("REDasm_"));
    assert!(lines[1].ends_with("_20200615.zip"));
}

#[test]
fn test_get_quiet_prints_only_the_value() {
    let output = run(&["get", "BUILD_ID", "--quiet"], None);
    assert!(output.status.success());

    let out = stdout(&output);
    assert_eq!(out.lines().count(), 1);
    assert!(out.starts_with("REDasm_"));
}

#[test]
fn test_get_build_repo_url_is_pushable() {
    let output = run(&["get", "BUILD_REPO_URL"], Some("s3cret"));
    assert!(output.status.success());
    assert_eq!(
        stdout(&output),
        "https://s3cret@github.com/REDasmOrg/REDasm-Builds.git\n"
    );
}

#[test]
fn test_env_format_refuses_token_with_line_break() {
    let output = run(&["show", "-f", "env"], Some("tok\nINJECTED=1"));
    assert!(!output.status.success());
    assert!(!stdout(&output).contains("INJECTED"));
    assert!(stderr(&output).contains("line break"));
}

#[test]
fn test_get_unknown_variable_fails() {
    let output = run(&["get", "NOT_A_VAR"], Some("t"));
    assert!(!output.status.success());
    assert!(stderr(&output).contains("NOT_A_VAR"));
}

#[test]
fn test_bad_date_fails() {
    let output = run(&["show", "--date", "2020-06-15"], Some("t"));
    assert!(!output.status.success());
    assert!(stderr(&output).contains("YYYYMMDD"));
}

#[test]
fn test_output_file_is_appended_with_real_url() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("github_env");
    std::fs::write(&target, "EXISTING=1\n").unwrap();
    let target_str = target.to_str().unwrap();

    let output = run(&["show", "-f", "env", "-o", target_str], Some("t"));
    assert!(output.status.success());
    assert!(stdout(&output).is_empty());

    let written = std::fs::read_to_string(&target).unwrap();
    assert!(written.starts_with("EXISTING=1\n"));
    assert!(written.contains("\nBUILD_ID=REDasm_"));
    assert!(written.contains("\nBUILD_REPO_URL=https://t@github.com/REDasmOrg/REDasm-Builds.git\n"));
}

#[test]
fn test_default_command_is_show() {
    let output = run(&[], Some("t"));
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("deploy-vars v"));
    assert!(out.contains("BUILD_ID"));
}
