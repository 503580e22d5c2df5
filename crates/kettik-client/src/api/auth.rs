/*
[INPUT]:  Phone number and one-time code
[OUTPUT]: Verification status and a stored access token
[POS]:    Domain layer - unauthenticated sign-in endpoints
[UPDATE]: When the verification flow changes
*/

use tracing::info;

use crate::api::KettikApi;
use crate::http::{KettikError, RequestDescriptor, Result};
use crate::types::{
    AccessTokenResponse, CheckVerificationRequest, CreateVerificationRequest, VerificationResponse,
};

impl KettikApi {
    /// Ask the backend to send a one-time code
    ///
    /// POST /auth/bot/create-verification/
    #[tracing::instrument(skip_all)]
    pub async fn request_code(&self, phone_number: &str) -> Result<VerificationResponse> {
        let descriptor = RequestDescriptor::post("/auth/bot/create-verification/").json(
            &CreateVerificationRequest {
                phone_number: phone_number.to_string(),
            },
        )?;

        let response = self.guard().client().execute(&descriptor).await?;
        let verification = response.parse_or_default()?;
        info!("verification code requested");
        Ok(verification)
    }

    /// Exchange the code for an access token and store it
    ///
    /// POST /auth/bot/check/
    #[tracing::instrument(skip_all)]
    pub async fn verify_code(&self, phone_number: &str, code: &str) -> Result<AccessTokenResponse> {
        let descriptor = RequestDescriptor::post("/auth/bot/check/").json(&CheckVerificationRequest {
            phone_number: phone_number.to_string(),
            code: code.to_string(),
        })?;

        let response = self.guard().client().execute(&descriptor).await?;
        let token: AccessTokenResponse = response.parse()?;
        if token.access_token.trim().is_empty() {
            return Err(KettikError::InvalidResponse(
                "verification succeeded without an access_token".to_string(),
            ));
        }

        self.store().set(&token.access_token)?;
        info!("signed in");
        Ok(token)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use crate::api::KettikApi;
    use crate::auth::{MemoryTokenStore, TokenStore};
    use crate::http::{ClientConfig, KettikClient, KettikError};
    use wiremock::matchers::{body_json, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer, store: &MemoryTokenStore) -> KettikApi {
        let client = KettikClient::with_config(ClientConfig::default().with_base_url(server.uri()))
            .expect("client init");
        KettikApi::new(client, Arc::new(store.clone()))
    }

    #[tokio::test]
    async fn test_request_code_sends_phone() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/bot/create-verification/"))
            .and(body_json(serde_json::json!({"phone_number": "+996700000000"})))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "success": true,
                "message": "sent",
            })))
            .expect(1)
            .mount(&server)
            .await;

        let store = MemoryTokenStore::new();
        let response = api_for(&server, &store)
            .request_code("+996700000000")
            .await
            .unwrap();

        assert_eq!(response.success, Some(true));
        assert_eq!(response.message.as_deref(), Some("sent"));
        assert!(store.get().is_none());
    }

    #[tokio::test]
    async fn test_request_code_error_message() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/bot/create-verification/"))
            .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
                "error": "phone_number is required",
            })))
            .mount(&server)
            .await;

        let store = MemoryTokenStore::new();
        let err = api_for(&server, &store).request_code("").await.unwrap_err();
        assert_eq!(err.user_message(), "phone_number is required");
    }

    #[tokio::test]
    async fn test_verify_code_stores_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/bot/check/"))
            .and(body_json(serde_json::json!({
                "phone_number": "+996700000000",
                "code": "123456",
            })))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(serde_json::json!({"access_token": "abc"})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let store = MemoryTokenStore::with_token("old");
        let token = api_for(&server, &store)
            .verify_code("+996700000000", "123456")
            .await
            .unwrap();

        assert_eq!(token.access_token, "abc");
        assert_eq!(store.get().as_deref(), Some("abc"));
    }

    #[tokio::test]
    async fn test_verify_code_rejected_keeps_store() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/bot/check/"))
            .respond_with(
                ResponseTemplate::new(400).set_body_json(serde_json::json!({"detail": "wrong code"})),
            )
            .mount(&server)
            .await;

        let store = MemoryTokenStore::new();
        let err = api_for(&server, &store)
            .verify_code("+996700000000", "000000")
            .await
            .unwrap_err();

        assert_eq!(err.user_message(), "wrong code");
        assert!(store.get().is_none());
    }

    #[tokio::test]
    async fn test_verify_code_without_token_fails_closed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/auth/bot/check/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"ok": true})))
            .mount(&server)
            .await;

        let store = MemoryTokenStore::new();
        let err = api_for(&server, &store)
            .verify_code("+996700000000", "123456")
            .await
            .unwrap_err();

        assert!(matches!(err, KettikError::InvalidResponse(_)));
        assert!(store.get().is_none());
    }
}
