use super::*;
use predicates::prelude::*;

#[test]
fn help_runs_without_error() {
    Command::cargo_bin("mend")
        .expect("Failed to find mend binary")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("self-healing code auditor"))
        .stdout(predicate::str::contains("audit"))
        .stdout(predicate::str::contains("session"));
}

#[test]
fn init_runs_without_error() {
    let ctx = TestContext::new();
    let result = ctx.run_mend(&["init", "--yes"]);

    assert_success(&result);
    ctx.assert_file_exists("mend.toml");
    ctx.assert_file_exists("sample.py");
}

#[test]
fn init_scaffolds_a_loadable_config_and_demo_snippet() {
    let ctx = TestContext::new();
    let result = ctx.run_mend(&["init", "--yes"]);

    assert_success(&result);

    let config = ctx.load_mend_config();
    assert_eq!(
        config.project.source.as_deref(),
        Some(std::path::Path::new("sample.py"))
    );

    ctx.assert_file_contains("sample.py", "SQL Injection");
}

#[test]
fn show_help_runs_without_error() {
    let ctx = TestContext::new();
    let result = ctx.run_mend(&["show", "--help"]);

    assert_success(&result);
    assert_output_contains(&result, "session-result");
}
