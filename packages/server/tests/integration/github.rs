use std::time::Duration;

use serde_json::Value;

use crate::common::{TestApp, TestAppOptions, repo, routes};

fn page_of(len: usize, offset: usize) -> Vec<Value> {
    (0..len)
        .map(|i| repo(&format!("repo-{}", offset + i), false))
        .collect()
}

mod user_profile {
    use super::*;

    #[tokio::test]
    async fn returns_the_upstream_profile() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::GITHUB_USER).await;

        assert_eq!(res.status, 200, "Request failed: {}", res.text);
        assert_eq!(res.body["login"], "octocat");
        assert_eq!(res.body["public_repos"], 8);
    }

    #[tokio::test]
    async fn second_request_is_served_from_cache() {
        let app = TestApp::spawn().await;

        let first = app.get(routes::GITHUB_USER).await;
        let second = app.get(routes::GITHUB_USER).await;

        assert_eq!(first.status, 200);
        assert_eq!(second.status, 200);
        assert_eq!(second.text, first.text);
        assert_eq!(app.github.user_hits(), 1);
    }

    #[tokio::test]
    async fn expired_cache_entry_is_refetched() {
        let app = TestApp::spawn_with(TestAppOptions {
            cache_ttl: Duration::from_millis(50),
            ..Default::default()
        })
        .await;

        app.get(routes::GITHUB_USER).await;
        tokio::time::sleep(Duration::from_millis(80)).await;
        app.get(routes::GITHUB_USER).await;

        assert_eq!(app.github.user_hits(), 2);
    }

    #[tokio::test]
    async fn upstream_requests_carry_the_configured_token() {
        let app = TestApp::spawn().await;

        app.get(routes::GITHUB_USER).await;

        assert_eq!(app.github.last_auth().as_deref(), Some("Bearer test-token"));
    }

    #[tokio::test]
    async fn requests_without_a_token_omit_the_authorization_header() {
        let app = TestApp::spawn_with(TestAppOptions {
            github_token: "",
            ..Default::default()
        })
        .await;

        let res = app.get(routes::GITHUB_USER).await;

        // Unauthenticated requests still succeed, just without the header.
        assert_eq!(res.status, 200, "Request failed: {}", res.text);
        assert_eq!(app.github.user_hits(), 1);
        assert_eq!(app.github.last_auth(), None);
    }

    #[tokio::test]
    async fn unreachable_upstream_returns_fetch_error() {
        let app = TestApp::spawn_with(TestAppOptions {
            github_unreachable: true,
            ..Default::default()
        })
        .await;

        let res = app.get(routes::GITHUB_USER).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "UPSTREAM_FETCH_FAILED");
        assert_eq!(res.body["message"], "Failed to fetch GitHub user data");
    }
}

mod repositories {
    use super::*;

    #[tokio::test]
    async fn forks_are_excluded_and_order_is_preserved() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::GITHUB_REPOS).await;

        assert_eq!(res.status, 200, "Request failed: {}", res.text);
        let repos = res.body.as_array().expect("body should be an array");
        assert_eq!(repos.len(), 2);
        assert_eq!(repos[0]["name"], "alpha");
        assert_eq!(repos[1]["name"], "beta");
        assert!(repos.iter().all(|r| r["fork"] == false));
    }

    #[tokio::test]
    async fn upstream_fields_pass_through_untouched() {
        let app = TestApp::spawn().await;

        let res = app.get(routes::GITHUB_REPOS).await;

        let repos = res.body.as_array().expect("body should be an array");
        assert_eq!(repos[0]["html_url"], "https://github.com/octocat/alpha");
        assert_eq!(repos[0]["stargazers_count"], 3);
    }

    #[tokio::test]
    async fn second_request_is_served_from_cache() {
        let app = TestApp::spawn().await;

        app.get(routes::GITHUB_REPOS).await;
        app.get(routes::GITHUB_REPOS).await;

        assert_eq!(app.github.repo_hits(), 1);
    }

    #[tokio::test]
    async fn fetches_every_page_until_a_short_one() {
        let app = TestApp::spawn_with(TestAppOptions {
            repo_pages: vec![page_of(100, 0), page_of(100, 100), page_of(37, 200)],
            ..Default::default()
        })
        .await;

        let res = app.get(routes::GITHUB_REPOS).await;

        assert_eq!(res.status, 200, "Request failed: {}", res.text);
        let repos = res.body.as_array().expect("body should be an array");
        assert_eq!(repos.len(), 237);
        assert_eq!(repos[0]["name"], "repo-0");
        assert_eq!(repos[236]["name"], "repo-236");
        assert_eq!(app.github.repo_hits(), 3);
    }

    #[tokio::test]
    async fn exact_page_size_multiple_needs_one_extra_request() {
        let app = TestApp::spawn_with(TestAppOptions {
            repo_pages: vec![page_of(100, 0)],
            ..Default::default()
        })
        .await;

        let res = app.get(routes::GITHUB_REPOS).await;

        let repos = res.body.as_array().expect("body should be an array");
        assert_eq!(repos.len(), 100);
        assert_eq!(app.github.repo_hits(), 2);
    }

    #[tokio::test]
    async fn listing_past_the_page_cap_is_an_error_not_a_truncation() {
        // Every page full, so pagination never observes a terminating
        // short page within the twenty allowed requests.
        let app = TestApp::spawn_with(TestAppOptions {
            repo_pages: (0..20).map(|i| page_of(100, i * 100)).collect(),
            ..Default::default()
        })
        .await;

        let res = app.get(routes::GITHUB_REPOS).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "UPSTREAM_FETCH_FAILED");
        assert_eq!(app.github.repo_hits(), 20);
    }

    #[tokio::test]
    async fn unreachable_upstream_returns_fetch_error() {
        let app = TestApp::spawn_with(TestAppOptions {
            github_unreachable: true,
            ..Default::default()
        })
        .await;

        let res = app.get(routes::GITHUB_REPOS).await;

        assert_eq!(res.status, 500);
        assert_eq!(res.body["code"], "UPSTREAM_FETCH_FAILED");
        assert_eq!(res.body["message"], "Failed to fetch GitHub repositories");
    }
}

mod cache_isolation {
    use super::*;

    #[tokio::test]
    async fn profile_and_repository_caches_age_independently() {
        let app = TestApp::spawn_with(TestAppOptions {
            cache_ttl: Duration::from_millis(500),
            ..Default::default()
        })
        .await;

        app.get(routes::GITHUB_USER).await;
        tokio::time::sleep(Duration::from_millis(250)).await;
        app.get(routes::GITHUB_REPOS).await;

        // Past the profile's TTL but still well within the repository
        // listing's.
        tokio::time::sleep(Duration::from_millis(300)).await;
        app.get(routes::GITHUB_USER).await;
        app.get(routes::GITHUB_REPOS).await;

        assert_eq!(app.github.user_hits(), 2);
        assert_eq!(app.github.repo_hits(), 1);
    }
}
