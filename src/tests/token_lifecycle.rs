#[cfg(test)]
mod test {
    use httpmock::prelude::*;
    use serde_json::json;

    use crate::auth::credential::{expiry_from_now, Credential};
    use crate::auth::token_manager::TokenManager;
    use crate::helpers::time::now_i64;
    use crate::tests::common::test_settings;

    const TOKEN_PATH: &str = "/v1/security/oauth2/token";

    #[tokio::test]
    async fn cached_token_is_served_without_network_calls() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200)
                .json_body(json!({"access_token": "tok-1", "expires_in": 1800}));
        });

        let manager = TokenManager::new(&test_settings(&server.base_url()));
        assert_eq!(manager.get_token().await.as_deref(), Some("tok-1"));
        assert_eq!(manager.get_token().await.as_deref(), Some("tok-1"));
        assert_eq!(mock.calls(), 1);
    }

    #[tokio::test]
    async fn expired_credential_triggers_exactly_one_refresh() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST)
                .path(TOKEN_PATH)
                .body_includes("grant_type=client_credentials")
                .body_includes("client_id=test-client")
                .body_includes("client_secret=test-secret");
            then.status(200)
                .json_body(json!({"access_token": "tok-2", "expires_in": 1000}));
        });

        let manager = TokenManager::new(&test_settings(&server.base_url()));
        manager
            .set_cached(Credential::new("stale".to_owned(), now_i64() - 1))
            .await;

        let before = now_i64();
        assert_eq!(manager.get_token().await.as_deref(), Some("tok-2"));
        assert_eq!(mock.calls(), 1);

        // expiry = now + (expires_in - 300)
        let expires_at = manager.cached_expires_at().await.unwrap();
        assert!(expires_at >= before + 700 && expires_at <= now_i64() + 700 + 1);
    }

    #[tokio::test]
    async fn tiny_ttl_is_floored_at_sixty_seconds() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200)
                .json_body(json!({"access_token": "tok-3", "expires_in": 30}));
        });

        let manager = TokenManager::new(&test_settings(&server.base_url()));
        let before = now_i64();
        assert!(manager.get_token().await.is_some());
        let expires_at = manager.cached_expires_at().await.unwrap();
        assert!(expires_at >= before + 60 && expires_at <= now_i64() + 60 + 1);
    }

    #[tokio::test]
    async fn missing_expires_in_defaults_to_thirty_minutes() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200).json_body(json!({"access_token": "tok-4"}));
        });

        let manager = TokenManager::new(&test_settings(&server.base_url()));
        let before = now_i64();
        assert!(manager.get_token().await.is_some());
        let expires_at = manager.cached_expires_at().await.unwrap();
        // 1800 - 300
        assert!(expires_at >= before + 1500 && expires_at <= now_i64() + 1500 + 1);
    }

    #[tokio::test]
    async fn refresh_failure_returns_none_and_keeps_no_state() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(500).body("boom");
        });

        let manager = TokenManager::new(&test_settings(&server.base_url()));
        assert!(manager.get_token().await.is_none());
        assert!(manager.cached_expires_at().await.is_none());
        // one attempt per invocation, no internal retry
        assert_eq!(mock.calls(), 1);
        assert!(manager.get_token().await.is_none());
        assert_eq!(mock.calls(), 2);
    }

    #[tokio::test]
    async fn malformed_token_body_is_a_normal_miss() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(POST).path(TOKEN_PATH);
            then.status(200).body("not json");
        });

        let manager = TokenManager::new(&test_settings(&server.base_url()));
        assert!(manager.get_token().await.is_none());
        assert!(manager.cached_expires_at().await.is_none());
    }

    #[test]
    fn expiry_arithmetic_applies_margin_and_floor() {
        let now = now_i64();
        let buffered = expiry_from_now(1800);
        assert!(buffered - now >= 1500 && buffered - now <= 1501);
        let floored = expiry_from_now(100);
        assert!(floored - now >= 60 && floored - now <= 61);
        let zero = expiry_from_now(0);
        assert!(zero - now >= 60 && zero - now <= 61);
    }
}
