//! Tests for [`webhook_bot::HttpPlatformClient`] against a mockito server.
//!
//! Request path format is `/bot<token>/<method>`.

use mockito::Matcher;
use webhook_bot::{FormParams, HttpPlatformClient, PlatformClient, WebhookError};

const TEST_BOT_TOKEN: &str = "test_bot_token_12345";

fn send_message_params() -> FormParams {
    let mut params = FormParams::new();
    params.add("chat_id", "42");
    params.add("text", "I just do this.");
    params
}

/// **Test: form-encoded POST to sendMessage; 200 envelope decoded.**
#[tokio::test]
async fn test_submit_posts_form_to_method_path() {
    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{}/sendMessage", TEST_BOT_TOKEN).as_str())
        .match_header("content-type", "application/x-www-form-urlencoded")
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("chat_id".into(), "42".into()),
            Matcher::UrlEncoded("text".into(), "I just do this.".into()),
        ]))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(r#"{"ok":true,"result":{"message_id":1}}"#)
        .create_async()
        .await;

    let client = HttpPlatformClient::new(server.url(), TEST_BOT_TOKEN);
    let resp = client
        .submit("sendMessage", &send_message_params())
        .await
        .unwrap();

    mock.assert_async().await;
    assert!(resp.is_success());
    assert!(resp.envelope.unwrap().ok);
}

/// **Test: non-200 is returned as a response, not an error.**
#[tokio::test]
async fn test_submit_non_200_is_ok_response() {
    let mut server = mockito::Server::new_async().await;
    let _mock = server
        .mock("POST", format!("/bot{}/answerInlineQuery", TEST_BOT_TOKEN).as_str())
        .with_status(400)
        .with_body(r#"{"ok":false,"error_code":400,"description":"Bad Request: query is too old"}"#)
        .create_async()
        .await;

    let client = HttpPlatformClient::new(server.url(), TEST_BOT_TOKEN);
    let resp = client
        .submit("answerInlineQuery", &FormParams::new())
        .await
        .unwrap();

    assert_eq!(resp.status, 400);
    let env = resp.envelope.unwrap();
    assert_eq!(env.error_code, Some(400));
    assert_eq!(
        env.description.as_deref(),
        Some("Bad Request: query is too old")
    );
}

/// **Test: unreachable platform is a transport error.**
#[tokio::test]
async fn test_submit_unreachable_is_transport_error() {
    let client = HttpPlatformClient::new("http://127.0.0.1:1", TEST_BOT_TOKEN);
    let err = client
        .submit("sendMessage", &send_message_params())
        .await
        .unwrap_err();
    assert!(matches!(err, WebhookError::Transport(_)));
}

/// **Test: webhook router wired to the real HTTP client posts answerInlineQuery to the platform.**
#[tokio::test]
async fn test_router_delivers_inline_answer_over_http() {
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::ServiceExt as _;
    use webhook_bot::{build_app, BotConfig};

    let mut server = mockito::Server::new_async().await;
    let mock = server
        .mock("POST", format!("/bot{}/answerInlineQuery", TEST_BOT_TOKEN).as_str())
        .match_body(Matcher::AllOf(vec![
            Matcher::UrlEncoded("inline_query_id".into(), "q1".into()),
            Matcher::UrlEncoded("is_personal".into(), "true".into()),
            Matcher::UrlEncoded(
                "results".into(),
                r#"[{"type":"article","id":"q1","title":"Bob pizza","input_message_content":{"message_text":"Bob pizza","disable_web_page_preview":false}}]"#.into(),
            ),
        ]))
        .with_status(200)
        .with_body(r#"{"ok":true,"result":true}"#)
        .expect(1)
        .create_async()
        .await;

    let mut config = BotConfig::with_token(TEST_BOT_TOKEN.to_string());
    config.telegram_api_url = Some(server.url());
    let platform = Arc::new(HttpPlatformClient::new(config.api_url(), TEST_BOT_TOKEN));
    let app = build_app(&config, platform);

    let request = Request::builder()
        .method("POST")
        .uri(format!("/{}", TEST_BOT_TOKEN))
        .body(Body::from(
            r#"{"update_id":5,"inline_query":{"id":"q1","from":{"id":1,"first_name":"Bob","username":""},"query":"pizza"}}"#,
        ))
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    mock.assert_async().await;
}
