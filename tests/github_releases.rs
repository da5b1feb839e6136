//! Resolver tests against a mock GitHub API server

use mockito::Server;

use action_latest::config::ResolverConfig;
use action_latest::release::error::ResolveError;
use action_latest::release::github::GitHubReleaseSource;
use action_latest::release::resolver::ReleaseResolver;
use action_latest::release::retry::RetryPolicy;

fn resolver_for(server: &Server, token: Option<&str>) -> ReleaseResolver<GitHubReleaseSource> {
    let config = ResolverConfig::new(server.url(), token.map(str::to_string));
    let source = GitHubReleaseSource::new(&config).unwrap();
    ReleaseResolver::new(source, RetryPolicy::immediate(config.retry.max_attempts))
}

#[tokio::test]
async fn resolve_skips_newest_draft_release() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/repos/actions/checkout/releases")
        .match_header("authorization", "Bearer ghp_token")
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(
            r#"[
                {"tag_name": "v5.0.0", "draft": true, "prerelease": false},
                {"tag_name": "v4.2.2", "draft": false, "prerelease": false}
            ]"#,
        )
        .expect(1)
        .create_async()
        .await;

    let result = resolver_for(&server, Some("ghp_token"))
        .resolve("actions", "checkout")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result, Some("v4.2.2".to_string()));
}

#[tokio::test]
async fn resolve_returns_none_for_missing_repository() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/repos/nonexistent/repo/releases")
        .with_status(404)
        .with_body(r#"{"message": "Not Found"}"#)
        .expect(1)
        .create_async()
        .await;

    let result = resolver_for(&server, None)
        .resolve("nonexistent", "repo")
        .await
        .unwrap();

    mock.assert_async().await;
    assert_eq!(result, None);
}

#[tokio::test]
async fn resolve_stops_after_max_attempts_when_rate_limited() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/repos/actions/checkout/releases")
        .with_status(429)
        .with_header("retry-after", "1")
        .with_body(r#"{"message": "API rate limit exceeded"}"#)
        .expect(3)
        .create_async()
        .await;

    let result = resolver_for(&server, None)
        .resolve("actions", "checkout")
        .await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(ResolveError::RateLimited { attempts: 3 })
    ));
}

#[tokio::test]
async fn resolve_does_not_retry_server_errors() {
    let mut server = Server::new_async().await;

    let mock = server
        .mock("GET", "/repos/actions/checkout/releases")
        .with_status(500)
        .expect(1)
        .create_async()
        .await;

    let result = resolver_for(&server, None)
        .resolve("actions", "checkout")
        .await;

    mock.assert_async().await;
    assert!(matches!(
        result,
        Err(ResolveError::Api {
            status_code: 500,
            ..
        })
    ));
}
