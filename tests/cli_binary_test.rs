use pretty_assertions::assert_eq;
use std::process::Command;
use tempfile::TempDir;

fn run_in(dir: &std::path::Path) -> std::process::Output {
    Command::new(env!("CARGO_BIN_EXE_route-table-gen"))
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run route-table-gen")
}

#[test]
fn test_missing_routes_root_exits_with_diagnostic_on_stdout() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    let output = run_in(temp_dir.path());

    assert_eq!(output.status.code(), Some(1));
    let stdout = String::from_utf8_lossy(&output.stdout);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines,
        vec![
            "`src/routes` does not exist or is not a directory.",
            "This tool must be started from the project root.",
        ]
    );
    assert!(!temp_dir.path().join("src/routes.ts").exists());
    assert!(!temp_dir.path().join("src").exists());
}

#[test]
fn test_successful_run_is_silent() {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");
    let routes = temp_dir.path().join("src/routes/users");
    std::fs::create_dir_all(&routes).unwrap();
    std::fs::write(temp_dir.path().join("src/routes/index.ts"), "").unwrap();
    std::fs::write(routes.join("get.ts"), "").unwrap();

    let output = run_in(temp_dir.path());

    assert!(output.status.success());
    assert!(output.stdout.is_empty());
    assert!(output.stderr.is_empty());

    let generated = std::fs::read_to_string(temp_dir.path().join("src/routes.ts")).unwrap();
    assert!(generated.contains("import * as indexTs from './routes/index';"));
    assert!(generated.contains("\t'/users/get': usersGetTs,\n"));
}
