use assert_cmd::Command;
use serde_json::Value;

fn run_command(request: &str) -> Value {
    let output = Command::cargo_bin("annotate")
        .expect("binary")
        .arg("command")
        .arg("--json")
        .arg(request)
        .output()
        .expect("command run");
    assert!(output.status.success(), "stderr: {:?}", output.stderr);
    serde_json::from_slice(&output.stdout).expect("valid json")
}

#[test]
fn annotate_caret_returns_a_plan() {
    let request = r#"{"action":"annotate","payload":{"caret":{"line":3,"column":1,"line_text":"    const x = 1;"}}}"#;
    let response = run_command(request);
    assert_eq!(response["status"], "ok");
    let plan = &response["data"]["plan"];
    assert_eq!(plan["insert_at_line"], 3);
    assert_eq!(plan["text"], "    // Variable: x\n");
    assert_eq!(plan["caret_line"], 3);
    assert_eq!(plan["caret_column"], 19);
}

#[test]
fn annotate_selection_describes_the_block() {
    let request = r#"{"action":"annotate","payload":{"selection":{"start_line":2,"start_column":1,"text":"function a() {\nfunction b() {\nconst x = 1;"}}}"#;
    let response = run_command(request);
    assert_eq!(response["status"], "ok");
    assert_eq!(
        response["data"]["plan"]["text"],
        "// Code block with 2 functions\n"
    );
    assert_eq!(response["data"]["plan"]["insert_at_line"], 2);
}

#[test]
fn annotate_without_target_is_a_no_op() {
    let request = r#"{"action":"annotate","payload":{}}"#;
    let response = run_command(request);
    assert_eq!(response["status"], "ok");
    assert!(response["data"]["plan"].is_null());
}

#[test]
fn classify_reports_category_and_comment() {
    let request = r#"{"action":"classify","payload":{"text":"class Animal {"}}"#;
    let response = run_command(request);
    assert_eq!(response["status"], "ok");
    let classification = &response["data"]["classification"];
    assert_eq!(classification["category"], "TypeDeclaration");
    assert_eq!(classification["identifier"], "Animal");
    assert_eq!(response["data"]["comment"], "Class: Animal");
}

#[test]
fn classify_control_flow_carries_the_kind() {
    let request = r#"{"action":"classify","payload":{"text":"try {"}}"#;
    let response = run_command(request);
    let classification = &response["data"]["classification"];
    assert_eq!(classification["category"], "ControlFlow");
    assert_eq!(classification["control_flow"], "ErrorHandling");
    assert_eq!(response["data"]["comment"], "Error handling statement");
}

#[test]
fn request_is_read_from_stdin_when_not_inline() {
    let output = Command::cargo_bin("annotate")
        .expect("binary")
        .arg("command")
        .write_stdin(r#"{"action":"classify","payload":{"text":"import os"}}"#)
        .output()
        .expect("command run");
    assert!(output.status.success());
    let response: Value = serde_json::from_slice(&output.stdout).expect("valid json");
    assert_eq!(response["data"]["classification"]["category"], "ImportExport");
}

#[test]
fn invalid_json_yields_error_envelope() {
    let response = run_command("{not json");
    assert_eq!(response["status"], "error");
    assert_eq!(response["error"]["code"], "invalid_request");
}
