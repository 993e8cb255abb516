use std::sync::Arc;
use std::time::Duration;

use super::*;
use crate::testing::{ADMIN_TOKEN, FakeContent, FakeUpstream, MEMBER_TOKEN, Script};

const ABC_REPLY: &str = "Sure!\n```json\n{\"title\":\"A\",\"excerpt\":\"B\",\"content\":\"C\"}\n```";

fn build(content: FakeContent, upstream: FakeUpstream) -> (GenerationGateway, Arc<FakeUpstream>) {
    let upstream = Arc::new(upstream);
    let gateway = GenerationGateway::new(Arc::new(content), upstream.clone());
    (gateway, upstream)
}

fn body(topic: &str) -> Vec<u8> {
    serde_json::json!({ "topic": topic }).to_string().into_bytes()
}

#[tokio::test]
async fn test_missing_credential_is_rejected_before_upstream() {
    let (gateway, upstream) = build(FakeContent::new(), FakeUpstream::replying(ABC_REPLY));

    let err = gateway.handle(None, &body("Hooks")).await.unwrap_err();
    assert_eq!(err.status_code(), 401);
    assert_eq!(err.to_string(), "Unauthorized - No authorization header");

    let err = gateway.handle(Some("   "), &body("Hooks")).await.unwrap_err();
    assert_eq!(err.status_code(), 401);
    assert_eq!(upstream.calls(), 0);
}

#[tokio::test]
async fn test_unknown_credential_is_unauthorized() {
    let (gateway, upstream) = build(FakeContent::new(), FakeUpstream::replying(ABC_REPLY));

    let err = gateway
        .handle(Some("forged"), &body("Hooks"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Unauthorized - Invalid token");
    assert_eq!(upstream.calls(), 0);
}

#[tokio::test]
async fn test_non_admin_is_forbidden() {
    let (gateway, upstream) = build(FakeContent::new(), FakeUpstream::replying(ABC_REPLY));

    let err = gateway
        .handle(Some(MEMBER_TOKEN), &body("Hooks"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Forbidden));
    assert_eq!(err.status_code(), 403);
    assert_eq!(upstream.calls(), 0);
}

#[tokio::test]
async fn test_role_lookup_failure_is_forbidden() {
    let mut content = FakeContent::new();
    content.fail_role_lookup = true;
    let (gateway, upstream) = build(content, FakeUpstream::replying(ABC_REPLY));

    let err = gateway
        .handle(Some(ADMIN_TOKEN), &body("Hooks"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Forbidden));
    assert_eq!(upstream.calls(), 0);
}

#[tokio::test]
async fn test_auth_is_checked_before_body() {
    let (gateway, _) = build(FakeContent::new(), FakeUpstream::replying(ABC_REPLY));

    let err = gateway.handle(None, b"not json").await.unwrap_err();
    assert_eq!(err.status_code(), 401);
}

#[tokio::test]
async fn test_invalid_topic_is_rejected() {
    let (gateway, upstream) = build(FakeContent::new(), FakeUpstream::replying(ABC_REPLY));

    let long = "x".repeat(201);
    for topic in ["", "   ", long.as_str()] {
        let err = gateway
            .handle(Some(ADMIN_TOKEN), &body(topic))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), 400);
        assert!(matches!(err, GatewayError::InvalidArgument { field: "topic", .. }));
    }

    let err = gateway
        .handle(Some(ADMIN_TOKEN), br#"{"tone":"calm"}"#)
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::InvalidArgument { field: "topic", .. }));

    assert_eq!(upstream.calls(), 0);
}

#[tokio::test]
async fn test_topic_at_limit_is_accepted() {
    let (gateway, upstream) = build(FakeContent::new(), FakeUpstream::replying(ABC_REPLY));

    let topic = "é".repeat(200);
    gateway
        .handle(Some(ADMIN_TOKEN), &body(&topic))
        .await
        .unwrap();
    assert_eq!(upstream.calls(), 1);
}

#[tokio::test]
async fn test_malformed_body_names_body() {
    let (gateway, _) = build(FakeContent::new(), FakeUpstream::replying(ABC_REPLY));

    let raws: [&[u8]; 4] = [
        b"{not json",
        b"[1, 2]",
        br#"{"topic": 42}"#,
        br#"{"topic":"x","tone":7}"#,
    ];
    for raw in raws {
        let err = gateway.handle(Some(ADMIN_TOKEN), raw).await.unwrap_err();
        assert_eq!(err.status_code(), 400);
    }

    let err = gateway
        .handle(Some(ADMIN_TOKEN), b"{not json")
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::InvalidArgument { field: "body", .. }));
}

#[tokio::test]
async fn test_fenced_reply_yields_structured_post() {
    let (gateway, upstream) = build(FakeContent::new(), FakeUpstream::replying(ABC_REPLY));

    let generation = gateway
        .handle(
            Some(ADMIN_TOKEN),
            br#"{"topic":"React Server Components","tone":"casual"}"#,
        )
        .await
        .unwrap();

    assert!(!generation.degraded);
    assert_eq!(generation.post.title, "A");
    assert_eq!(generation.post.excerpt, "B");
    assert_eq!(generation.post.content, "C");
    assert_eq!(upstream.calls(), 1);

    let prompt = upstream.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.system.contains("with a casual tone"));
    assert!(prompt.user.contains("React Server Components"));
}

#[tokio::test]
async fn test_default_tone_is_professional() {
    let (gateway, upstream) = build(FakeContent::new(), FakeUpstream::replying(ABC_REPLY));

    gateway
        .handle(Some(ADMIN_TOKEN), br#"{"topic":"Hooks","tone":null}"#)
        .await
        .unwrap();

    let prompt = upstream.last_prompt.lock().unwrap().clone().unwrap();
    assert!(prompt.system.contains("with a professional tone"));
}

#[tokio::test]
async fn test_prose_reply_degrades() {
    let prose = "Caching is great. Here is why.";
    let (gateway, _) = build(FakeContent::new(), FakeUpstream::replying(prose));

    let generation = gateway
        .handle(Some(ADMIN_TOKEN), &body("Caching"))
        .await
        .unwrap();

    assert!(generation.degraded);
    assert_eq!(generation.post.title, "Caching");
    assert_eq!(generation.post.content, prose);
}

#[tokio::test]
async fn test_degraded_post_uses_trimmed_topic() {
    let (gateway, _) = build(FakeContent::new(), FakeUpstream::replying("plain prose"));

    let generation = gateway
        .handle(Some(ADMIN_TOKEN), &body("  Caching  "))
        .await
        .unwrap();

    assert!(generation.degraded);
    assert_eq!(generation.post.title, "Caching");
    assert_eq!(generation.post.excerpt, "Learn about Caching in web development");
}

#[tokio::test]
async fn test_upstream_failures_map_to_status_codes() {
    let cases = [
        (Script::RateLimited, 429),
        (Script::QuotaExhausted, 402),
        (Script::Status(500, "boom".to_string()), 500),
        (Script::Timeout, 500),
        (Script::MissingApiKey, 500),
    ];

    for (script, expected) in cases {
        let (gateway, _) = build(FakeContent::new(), FakeUpstream::new(script));
        let err = gateway
            .handle(Some(ADMIN_TOKEN), &body("Hooks"))
            .await
            .unwrap_err();
        assert_eq!(err.status_code(), expected, "{err}");
    }
}

#[tokio::test]
async fn test_upstream_error_messages() {
    let (gateway, _) = build(FakeContent::new(), FakeUpstream::new(Script::RateLimited));
    let err = gateway
        .handle(Some(ADMIN_TOKEN), &body("Hooks"))
        .await
        .unwrap_err();
    assert_eq!(err.to_string(), "Rate limit exceeded. Please try again later.");

    let (gateway, _) = build(
        FakeContent::new(),
        FakeUpstream::new(Script::Status(503, "unavailable".to_string())),
    );
    let err = gateway
        .handle(Some(ADMIN_TOKEN), &body("Hooks"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Upstream { status: Some(503), .. }));
    assert_eq!(err.to_string(), "AI gateway error: 503");
}

#[tokio::test]
async fn test_missing_api_key_is_misconfiguration() {
    let (gateway, upstream) = build(FakeContent::new(), FakeUpstream::new(Script::MissingApiKey));

    let err = gateway
        .handle(Some(ADMIN_TOKEN), &body("Hooks"))
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Misconfigured(_)));
    assert_eq!(upstream.calls(), 0);
}

#[tokio::test]
async fn test_cancellation_abandons_upstream_call() {
    let (gateway, upstream) = build(FakeContent::new(), FakeUpstream::new(Script::Hang));

    let err = gateway
        .handle_until(
            Some(ADMIN_TOKEN),
            &body("Hooks"),
            tokio::time::sleep(Duration::from_millis(50)),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, GatewayError::Cancelled));
    assert_eq!(upstream.calls(), 1);
}

#[tokio::test]
async fn test_blog_generator_port() {
    let (gateway, upstream) = build(FakeContent::new(), FakeUpstream::replying(ABC_REPLY));
    let generator: Arc<dyn BlogGenerator> = Arc::new(gateway);

    let generation = generator
        .generate(ADMIN_TOKEN, "Hooks", "friendly")
        .await
        .unwrap();
    assert_eq!(generation.post.title, "A");

    let err = generator
        .generate(MEMBER_TOKEN, "Hooks", "friendly")
        .await
        .unwrap_err();
    assert!(matches!(err, GatewayError::Forbidden));
    assert_eq!(upstream.calls(), 1);
}
