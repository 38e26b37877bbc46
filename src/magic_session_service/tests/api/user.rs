use serde_json::{Value, json};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::helpers::{AUTH_PATH, TestApp};

#[tokio::test]
async fn user_returns_user_info_for_valid_session() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .and(body_json(json!({
            "version": 1,
            "componentName": "MA",
            "interface": {
                "interfaceName": "check",
                "para": { "id": "u1", "skey": "s1" }
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "returnCode": 0,
            "returnMessage": "OK",
            "returnData": { "user_info": { "nick": "A" } }
        })))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    let response = app.get_user(&[("id", "u1"), ("skey", "s1")]).await;

    assert_eq!(response.status().as_u16(), 200);
    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body, json!({ "sessionMagic": 1, "userInfo": { "nick": "A" } }));
}

#[tokio::test]
async fn user_with_expired_session_returns_session_expired() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "returnCode": 60011,
            "returnMessage": "expired"
        })))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    let response = app.get_user(&[("id", "u1"), ("skey", "s1")]).await;

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(
        body,
        json!({ "sessionMagic": 1, "error": "SESSION_EXPIRED", "message": "expired" })
    );
}

#[tokio::test]
async fn user_when_auth_server_fails_returns_check_login_failed() {
    let app = TestApp::spawn().await;

    Mock::given(method("POST"))
        .and(path(AUTH_PATH))
        .respond_with(ResponseTemplate::new(503))
        .expect(1)
        .mount(&app.auth_server)
        .await;

    let response = app.get_user(&[("id", "u1"), ("skey", "s1")]).await;

    let body: Value = response.json().await.expect("Failed to parse body");
    assert_eq!(body["error"], "CHECK_LOGIN_FAILED");
    assert_eq!(
        body["message"],
        "auth API request failed: network or server error"
    );
}
