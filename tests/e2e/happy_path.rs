use super::*;

const SCENARIO_A: &str = r#"{
    "final_status": "safe",
    "total_iterations": 0,
    "history": []
}"#;

const SCENARIO_B: &str = r#"{
    "final_status": "healed",
    "total_iterations": 1,
    "history": [
        {
            "iteration": 0,
            "code_snapshot": "query = \"SELECT * FROM users WHERE id = \" + user_id",
            "audit_report": {
                "is_safe": false,
                "summary": "",
                "vulnerabilities": [
                    {
                        "severity": "high",
                        "cwe_id": "CWE-89",
                        "description": "SQL injection",
                        "line_number": 1,
                        "suggested_fix_snippet": "use parameterized queries"
                    },
                    {
                        "severity": "low",
                        "cwe_id": "CWE-209",
                        "description": "verbose error messages",
                        "suggested_fix_snippet": "return a generic message"
                    }
                ]
            },
            "fix_applied": "patched"
        }
    ]
}"#;

const SCENARIO_C: &str = r#"{
    "final_status": "max_iterations_reached",
    "total_iterations": 3,
    "history": [
        {
            "iteration": 0,
            "code_snapshot": "v0",
            "audit_report": {"is_safe": false, "summary": "", "vulnerabilities": []}
        },
        {
            "iteration": 1,
            "code_snapshot": "v1",
            "audit_report": {"is_safe": false, "summary": "", "vulnerabilities": []}
        },
        {
            "iteration": 2,
            "code_snapshot": "v2",
            "audit_report": {"is_safe": false, "summary": "", "vulnerabilities": []}
        }
    ]
}"#;

const INJECTION_ATTEMPT: &str = r#"{
    "final_status": "safe",
    "total_iterations": 1,
    "history": [
        {
            "iteration": 0,
            "code_snapshot": "<img src=x onerror=alert(1)>",
            "audit_report": {"is_safe": true, "summary": "clean"}
        }
    ]
}"#;

#[test]
fn safe_empty_session_shows_secure_badge_and_zero_cards() {
    let ctx = TestContext::new();
    ctx.write_file("result.json", SCENARIO_A);

    let result = ctx.run_mend(&["show", "result.json"]);

    assert_success(&result);
    assert_output_contains(&result, "Code is Secure");
    assert_output_contains(&result, "0 iterations");
    assert!(
        !result.stdout.contains("Iteration 1"),
        "empty history must render zero cards:\n{}",
        result.stdout
    );
}

#[test]
fn healed_session_lists_findings_in_order_with_applied_fix() {
    let ctx = TestContext::new();
    ctx.write_file("result.json", SCENARIO_B);

    let result = ctx.run_mend(&["show", "result.json"]);

    assert_success(&result);
    assert_output_contains(&result, "Code Healed Successfully");
    assert_output_contains(&result, "1 iteration");
    assert_output_contains(&result, "Iteration 1");
    assert_output_contains(&result, "Detected Vulnerabilities (2)");
    assert_output_contains(&result, "Applied Fix");
    assert_output_contains(&result, "patched");

    let high = result.stdout.find("CWE-89").expect("first finding");
    let low = result.stdout.find("CWE-209").expect("second finding");
    assert!(high < low, "findings must keep input order");
}

#[test]
fn exhausted_session_shows_warning_badge_and_all_cards() {
    let ctx = TestContext::new();
    ctx.write_file("result.json", SCENARIO_C);

    let result = ctx.run_mend(&["show", "result.json"]);

    assert_success(&result);
    assert_output_contains(&result, "Max Iterations Reached");
    assert_output_contains(&result, "3 iterations");
    assert_output_contains(&result, "Iteration 1");
    assert_output_contains(&result, "Iteration 2");
    assert_output_contains(&result, "Iteration 3");
}

#[test]
fn rendering_the_same_result_twice_is_identical() {
    let ctx = TestContext::new();
    ctx.write_file("result.json", SCENARIO_B);

    let first = ctx.run_mend(&["show", "result.json"]);
    let second = ctx.run_mend(&["show", "result.json"]);

    assert_success(&first);
    assert_success(&second);
    assert_eq!(first.stdout, second.stdout);
}

#[test]
fn html_report_keeps_injected_markup_inert() {
    let ctx = TestContext::new();
    ctx.write_file("result.json", INJECTION_ATTEMPT);

    let result = ctx.run_mend(&["show", "result.json", "--html", "report.html"]);

    assert_success(&result);
    ctx.assert_file_exists("report.html");
    ctx.assert_file_contains("report.html", "&lt;img src=x onerror=alert(1)&gt;");
    ctx.assert_file_contains("report.html", "<details class=\"iteration-card\" open>");

    let report = ctx.read_file("report.html");
    assert!(
        !report.contains("<img src=x onerror=alert(1)>"),
        "untrusted markup must never reach the report unescaped"
    );
}

#[test]
fn html_report_mirrors_the_timeline_structure() {
    let ctx = TestContext::new();
    ctx.write_file("result.json", SCENARIO_B);

    let result = ctx.run_mend(&["show", "result.json", "--html", "out/report.html"]);

    assert_success(&result);
    ctx.assert_file_contains("out/report.html", "Code Healed Successfully");
    ctx.assert_file_contains("out/report.html", "Detected Vulnerabilities (2)");
    ctx.assert_file_contains("out/report.html", "severity-badge high");
    ctx.assert_file_contains("out/report.html", "Line 1");
    ctx.assert_file_contains("out/report.html", "Applied Fix");
}
