//! Commands driven end to end against a mock API.

mod common;

use clap::Parser;
use common::mock_backend::{MockBackend, MockResponse};
use common::{test_config, tip_json};
use everytip::cli::{self, Cli};
use everytip::context::AppContext;
use everytip::ui::blocked_list::UNBLOCKED_TOAST;
use everytip::ui::home::FETCH_FAILED_TOAST;
use everytip::ui::login::{INVALID_CREDENTIALS_TOAST, LOGIN_SUCCEEDED_TOAST};
use everytip::ui::my_info::LOGGED_OUT_TOAST;
use everytip::ui::search::EMPTY_KEYWORD_TOAST;
use everytip::ui::user_profile::{ALREADY_BLOCKED_TOAST, BLOCKED_TOAST, SUBSCRIBED_TOAST};
use serde_json::json;

async fn run(ctx: &AppContext, args: &[&str], stdin: &str) -> (anyhow::Result<()>, String) {
    let cli = Cli::try_parse_from(std::iter::once("everytip").chain(args.iter().copied()))
        .expect("valid arguments");
    let mut input = stdin.as_bytes();
    let mut out = Vec::new();
    let result = cli::run(ctx, cli.command, &mut input, &mut out).await;
    (result, String::from_utf8(out).unwrap())
}

async fn context(backend: &MockBackend) -> AppContext {
    AppContext::new(test_config(&backend.base_url())).unwrap()
}

#[tokio::test]
async fn feed_sorts_and_hides_blocked_writers() {
    let backend = MockBackend::start().await;
    backend
        .route(
            "/tips",
            MockResponse::data(json!([
                tip_json(1, 10, "alice"),
                tip_json(2, 20, "bob"),
                tip_json(3, 30, "carol"),
            ])),
        )
        .await;
    let ctx = context(&backend).await;
    ctx.block_list().block(20).unwrap();

    let (result, out) = run(&ctx, &["feed", "--sort", "views"], "").await;
    result.unwrap();

    assert!(out.starts_with("Feed (Most viewed)"));
    let third = out.find("tip 3").unwrap();
    let first = out.find("tip 1").unwrap();
    assert!(third < first);
    assert!(!out.contains("tip 2"));

    let requests = backend.captured_requests().await;
    assert_eq!(requests[0].query.as_deref(), Some("sort=views"));
}

#[tokio::test]
async fn feed_failure_prints_toast() {
    let backend = MockBackend::start().await;
    backend
        .route("/tips", MockResponse::error(500, "SERVER", "boom"))
        .await;
    let ctx = context(&backend).await;

    let (result, out) = run(&ctx, &["feed"], "").await;
    result.unwrap();
    assert!(out.contains("(no tips)"));
    assert!(out.contains(FETCH_FAILED_TOAST));
}

#[tokio::test]
async fn feed_open_navigates_to_detail() {
    let backend = MockBackend::start().await;
    backend
        .route("/tips", MockResponse::data(json!([tip_json(8, 10, "alice")])))
        .await;
    let ctx = context(&backend).await;

    let (result, out) = run(&ctx, &["feed", "--open", "0"], "").await;
    result.unwrap();
    assert!(out.contains("-> TipDetail { tip_id: 8 }"));

    let (result, _) = run(&ctx, &["feed", "--open", "3"], "").await;
    assert!(result.is_err());
}

#[tokio::test]
async fn explore_filters_by_story() {
    let backend = MockBackend::start().await;
    backend
        .route(
            "/stories",
            MockResponse::data(json!([
                { "user_id": 10, "nick_name": "alice" },
                { "user_id": 20, "nick_name": "bob" },
            ])),
        )
        .await;
    backend
        .route(
            "/tips",
            MockResponse::data(json!([tip_json(1, 10, "alice"), tip_json(2, 20, "bob")])),
        )
        .await;
    let ctx = context(&backend).await;

    let (result, out) = run(&ctx, &["explore", "--story", "bob"], "").await;
    result.unwrap();

    assert!(out.contains("  All tips"));
    assert!(out.contains("  alice"));
    assert!(out.contains("* bob"));
    assert!(out.contains("tip 2"));
    assert!(!out.contains("tip 1"));
}

#[tokio::test]
async fn profile_subscribe_reports_toast() {
    let backend = MockBackend::start().await;
    backend
        .route(
            "/users/42",
            MockResponse::data(json!({
                "id": 42,
                "nick_name": "writer",
                "tip_count": 1,
                "subscriber_count": 3,
                "is_subscribed": false,
            })),
        )
        .await;
    backend
        .route("/users/42/tips", MockResponse::data(json!([tip_json(5, 42, "writer")])))
        .await;
    backend
        .route("/users/42/subscription", MockResponse::data(json!(null)))
        .await;
    let ctx = context(&backend).await;

    let (result, out) = run(&ctx, &["profile", "42", "--subscribe"], "").await;
    result.unwrap();

    assert!(out.contains("writer (#42)"));
    assert!(out.contains("tip 5"));
    assert!(out.contains(SUBSCRIBED_TOAST));

    let requests = backend.captured_requests().await;
    assert!(requests
        .iter()
        .any(|r| r.method == "POST" && r.path == "/users/42/subscription"));
}

#[tokio::test]
async fn login_me_logout_cycle() {
    let backend = MockBackend::start().await;
    backend
        .route(
            "/auth/sign-in",
            MockResponse::data(json!({
                "id": 3,
                "email": "me@everytip.co.kr",
                "nick_name": "tipster",
                "access_token": "acc",
                "refresh_token": "ref",
            })),
        )
        .await;
    backend
        .route(
            "/users/me",
            MockResponse::data(json!({
                "id": 3,
                "nick_name": "tipster",
                "email": "me@everytip.co.kr",
                "tip_count": 2,
            })),
        )
        .await;
    let ctx = context(&backend).await;

    let (result, out) = run(&ctx, &["login", "--email", "me@everytip.co.kr"], "secret\n").await;
    result.unwrap();
    assert!(out.contains(LOGIN_SUCCEEDED_TOAST));
    assert!(out.contains("-> MyInfo"));
    assert!(ctx.tokens().is_logged_in());

    let (result, out) = run(&ctx, &["me"], "").await;
    result.unwrap();
    assert!(out.contains("tipster <me@everytip.co.kr>"));
    assert!(out.contains("- Log out"));

    let requests = backend.captured_requests().await;
    let me = requests.iter().find(|r| r.path == "/users/me").unwrap();
    assert_eq!(me.header("authorization"), Some("Bearer acc"));

    let (result, out) = run(&ctx, &["logout"], "").await;
    result.unwrap();
    assert!(out.contains(LOGGED_OUT_TOAST));
    assert!(!ctx.tokens().is_logged_in());
}

#[tokio::test]
async fn rejected_login_fails_the_command() {
    let backend = MockBackend::start().await;
    backend
        .route("/auth/sign-in", MockResponse::error(401, "AUTH", "nope"))
        .await;
    let ctx = context(&backend).await;

    let (result, out) = run(&ctx, &["login", "--email", "me@everytip.co.kr"], "wrong\n").await;
    assert!(result.is_err());
    assert!(out.contains(INVALID_CREDENTIALS_TOAST));
    assert!(!ctx.tokens().is_logged_in());
}

#[tokio::test]
async fn empty_password_is_rejected_locally() {
    let backend = MockBackend::start().await;
    let ctx = context(&backend).await;

    let (result, _) = run(&ctx, &["login", "--email", "me@everytip.co.kr"], "\n").await;
    assert!(result.is_err());
    assert!(backend.captured_requests().await.is_empty());
}

#[tokio::test]
async fn search_records_recent_keywords() {
    let backend = MockBackend::start().await;
    backend
        .route("/tips/search", MockResponse::data(json!([tip_json(4, 10, "alice")])))
        .await;
    let ctx = context(&backend).await;

    let (result, out) = run(&ctx, &["search", "coffee"], "").await;
    result.unwrap();
    assert!(out.contains("tip 4"));

    let (result, out) = run(&ctx, &["search", "   "], "").await;
    result.unwrap();
    assert!(out.contains(EMPTY_KEYWORD_TOAST));
    assert_eq!(backend.captured_requests().await.len(), 1);

    let (result, out) = run(&ctx, &["recent"], "").await;
    result.unwrap();
    assert_eq!(out.trim(), "coffee");

    let (result, out) = run(&ctx, &["recent", "--clear"], "").await;
    result.unwrap();
    assert!(out.contains("(no recent searches)"));
}

#[tokio::test]
async fn empty_search_result_is_reported() {
    let backend = MockBackend::start().await;
    backend
        .route("/tips/search", MockResponse::data(json!([])))
        .await;
    let ctx = context(&backend).await;

    let (result, out) = run(&ctx, &["search", "nothing"], "").await;
    result.unwrap();
    assert!(out.contains("No tips found for 'nothing'"));
}

#[tokio::test]
async fn block_unblock_round_trip() {
    let backend = MockBackend::start().await;
    let ctx = context(&backend).await;

    let (_, out) = run(&ctx, &["block", "5"], "").await;
    assert!(out.contains(BLOCKED_TOAST));
    let (_, out) = run(&ctx, &["block", "5"], "").await;
    assert!(out.contains(ALREADY_BLOCKED_TOAST));

    let (_, out) = run(&ctx, &["blocked"], "").await;
    assert_eq!(out.trim(), "5");

    let (_, out) = run(&ctx, &["unblock", "5"], "").await;
    assert!(out.contains(UNBLOCKED_TOAST));
    let (_, out) = run(&ctx, &["blocked"], "").await;
    assert!(out.contains("(nobody is blocked)"));

    assert!(backend.captured_requests().await.is_empty());
}
