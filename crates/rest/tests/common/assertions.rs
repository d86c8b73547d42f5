//! HTTP response assertions for the `{"result", "message"}` envelope.

use axum_test::TestResponse;
use serde_json::Value;

/// Asserts that the response has the expected status code.
pub fn assert_status(response: &TestResponse, expected: u16) {
    let actual = response.status_code().as_u16();
    assert_eq!(
        actual,
        expected,
        "Expected status {}, got {}: {}",
        expected,
        actual,
        response.text()
    );
}

/// Asserts a 200 envelope with an empty message and returns its result.
pub fn assert_ok_result(response: &TestResponse) -> Value {
    assert_status(response, 200);
    let body: Value = response.json();
    assert_eq!(
        body.get("message"),
        Some(&Value::String(String::new())),
        "Expected an empty message in {}",
        body
    );
    body.get("result").cloned().unwrap_or(Value::Null)
}

/// Asserts an error envelope with the given status whose message contains
/// `contained`.
pub fn assert_error_message(response: &TestResponse, status: u16, contained: &str) {
    assert_status(response, status);
    let body: Value = response.json();
    assert_eq!(body.get("result"), Some(&Value::Null), "Expected null result");
    let message = body.get("message").and_then(Value::as_str).unwrap_or("");
    assert!(
        message.contains(contained),
        "Expected message containing {:?}, got {:?}",
        contained,
        message
    );
}
