use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{AUTH_PATH, TestApp};

#[tokio::test]
async fn login_returns_session_for_valid_code() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .and(body_json(json!({
            "version": 1,
            "componentName": "MA",
            "interface": {
                "interfaceName": "login",
                "para": { "code": "abc", "encrypt_data": "xyz" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "returnCode": 0,
            "returnMessage": "OK",
            "returnData": { "id": "u1", "skey": "s1", "user_info": { "nick": "A" } }
        })))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    let response = app
        .post_login(&[("Code", "abc"), ("Encrypt_Data", "xyz")])
        .await;

    assert_eq!(response.status().as_u16(), 200);
    assert_eq!(
        response
            .headers()
            .get("content-type")
            .and_then(|v| v.to_str().ok()),
        Some("application/json")
    );
    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(
        body,
        json!({ "sessionMagic": 1, "session": { "id": "u1", "skey": "s1" } })
    );
}

#[tokio::test]
async fn login_with_rejected_code_returns_error_envelope() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "returnCode": 40029,
            "returnMessage": "invalid code",
            "returnData": {}
        })))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    let response = app.post_login(&[("code", "stale")]).await;

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(
        body,
        json!({ "sessionMagic": 1, "error": "LOGIN_FAILED", "message": "#40029 - invalid code" })
    );
}

#[tokio::test]
async fn login_when_auth_server_fails_returns_login_failed() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(500))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    let response = app.post_login(&[]).await;

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["sessionMagic"], 1);
    assert_eq!(body["error"], "LOGIN_FAILED");
    assert_eq!(
        body["message"],
        "auth API request failed: network or server error"
    );
}

#[tokio::test]
async fn login_with_malformed_reply_returns_login_failed() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    let response = app.post_login(&[("code", "abc")]).await;

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["error"], "LOGIN_FAILED");
    assert_eq!(body["message"], "auth server returned malformed JSON");
}
