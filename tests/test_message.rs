use assert_cmd::Command;
use httpmock::prelude::*;

#[tokio::test]
async fn preset_message_posts_default_chat_id_and_renders_reply() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/test_bot")
                .header("content-type", "application/json")
                .json_body_partial(r#"{"chat_id":"123456789","message":"/start"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"status":"success","message":"Message processed successfully","response":{"text":"Welcome to the bot!","parse_mode":null,"has_reply_markup":false}}"#);
        })
        .await;

    Command::new(assert_cmd::cargo::cargo_bin!("hookctl"))
        .args(["--url", &server.base_url(), "--no-color", "test"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Message processed successfully"))
        .stdout(predicates::str::contains("Welcome to the bot!"));
    m.assert_async().await;
}

#[tokio::test]
async fn custom_message_and_chat_id_are_forwarded() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(POST)
                .path("/test_bot")
                .json_body_partial(r#"{"chat_id":"42","message":"ping"}"#);
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"status":"success","response":{"text":"pong"}}"#);
        })
        .await;

    Command::new(assert_cmd::cargo::cargo_bin!("hookctl"))
        .args([
            "--url",
            &server.base_url(),
            "--no-color",
            "test",
            "--chat-id",
            "42",
            "--custom",
            "ping",
        ])
        .assert()
        .success()
        .stdout(predicates::str::contains("pong"));
    m.assert_async().await;
}

#[tokio::test]
async fn response_without_text_is_dumped_as_json() {
    let server = MockServer::start_async().await;
    let _m = server
        .mock_async(|when, then| {
            when.method(POST).path("/test_bot");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"status":"success","response":{"parse_mode":"HTML","has_reply_markup":true}}"#);
        })
        .await;

    Command::new(assert_cmd::cargo::cargo_bin!("hookctl"))
        .args(["--url", &server.base_url(), "--no-color", "test"])
        .assert()
        .success()
        .stdout(predicates::str::contains("\"has_reply_markup\": true"));
}

#[tokio::test]
async fn missing_response_shows_placeholder() {
    let server = MockServer::start_async().await;
    let _m = server
        .mock_async(|when, then| {
            when.method(POST).path("/test_bot");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"status":"success"}"#);
        })
        .await;

    Command::new(assert_cmd::cargo::cargo_bin!("hookctl"))
        .args(["--url", &server.base_url(), "--no-color", "test"])
        .assert()
        .success()
        .stdout(predicates::str::contains("No response content"));
}

#[tokio::test]
async fn empty_custom_message_is_rejected_before_any_request() {
    let server = MockServer::start_async().await;
    let m = server
        .mock_async(|when, then| {
            when.method(POST).path("/test_bot");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"status":"success"}"#);
        })
        .await;

    Command::new(assert_cmd::cargo::cargo_bin!("hookctl"))
        .args([
            "--url",
            &server.base_url(),
            "--no-color",
            "test",
            "--custom",
            "   ",
        ])
        .assert()
        .success()
        .stderr(predicates::str::contains("Please enter a custom message"));
    m.assert_hits_async(0).await;
}

#[tokio::test]
async fn warning_status_takes_the_failure_path() {
    let server = MockServer::start_async().await;
    let _m = server
        .mock_async(|when, then| {
            when.method(POST).path("/test_bot");
            then.status(200)
                .header("content-type", "application/json")
                .body(r#"{"status":"warning","message":"Message processed but no response was generated"}"#);
        })
        .await;

    Command::new(assert_cmd::cargo::cargo_bin!("hookctl"))
        .args(["--url", &server.base_url(), "--no-color", "test"])
        .assert()
        .success()
        .stdout(predicates::str::contains(
            "Message processed but no response was generated",
        ));
}

#[tokio::test]
async fn failure_without_message_uses_unknown_error_fallback() {
    let server = MockServer::start_async().await;
    let _m = server
        .mock_async(|when, then| {
            when.method(POST).path("/test_bot");
            then.status(500)
                .header("content-type", "application/json")
                .body(r#"{"status":"error"}"#);
        })
        .await;

    Command::new(assert_cmd::cargo::cargo_bin!("hookctl"))
        .args(["--url", &server.base_url(), "--no-color", "test"])
        .assert()
        .success()
        .stdout(predicates::str::contains("Unknown error occurred"));
}
