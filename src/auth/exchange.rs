use crate::{AuthError, TokenRequest, TokenResponse};
use secrecy::{ExposeSecret, SecretString};

pub const GRANT_TYPE_API_TOKEN: &str = "api_token";

/// `Authorization` header value for a bearer token
pub fn bearer_header(token: &SecretString) -> String {
    format!("Bearer {}", token.expose_secret())
}

impl super::TokenExchanger {
    /// Exchanges the API token for an access token.
    ///
    /// Returns `Ok(None)` when the endpoint answers 2xx without an
    /// `access_token` field. Non-2xx responses and transport failures are
    /// returned as errors without retrying.
    pub async fn exchange(
        &self,
        api_token: &SecretString,
    ) -> Result<Option<SecretString>, AuthError> {
        let request = TokenRequest {
            client_id: self.client_id.clone(),
            grant_type: GRANT_TYPE_API_TOKEN.to_string(),
            api_token: api_token.clone(),
        };

        tracing::info!("Exchanging API token at {}", self.auth_url);
        let response = self
            .client
            .post(&self.auth_url)
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!("Token endpoint response status: {}", status);

        if !status.is_success() {
            return Err(AuthError::TokenEndpointError {
                status: status.as_u16(),
                body,
            });
        }

        let token_data: TokenResponse = serde_json::from_str(&body)?;
        if token_data.access_token.is_none() {
            tracing::warn!("Token endpoint response has no access_token");
        }

        Ok(token_data.access_token.map(SecretString::new))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::TokenExchanger;
    use crate::config::PlatformConfig;
    use serde_json::json;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn exchanger_for(server: &MockServer) -> TokenExchanger {
        let config = PlatformConfig {
            auth_url: format!("{}/oauth2/token", server.uri()),
            ..Default::default()
        };
        TokenExchanger::new(&config).unwrap()
    }

    #[tokio::test]
    async fn test_exchange_returns_access_token() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .and(header("content-type", "application/json"))
            .and(body_json(json!({
                "client_id": "platform-api-user",
                "grant_type": "api_token",
                "api_token": "tok1"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "access_token": "abc",
                "token_type": "bearer",
                "expires_in": 900
            })))
            .expect(1)
            .mount(&server)
            .await;

        let token = exchanger_for(&server)
            .exchange(&SecretString::new("tok1".to_string()))
            .await
            .unwrap();

        assert_eq!(token.unwrap().expose_secret(), "abc");
    }

    #[tokio::test]
    async fn test_exchange_without_access_token_is_none() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "foo": "bar" })))
            .mount(&server)
            .await;

        let token = exchanger_for(&server)
            .exchange(&SecretString::new("tok1".to_string()))
            .await
            .unwrap();

        assert!(token.is_none());
    }

    #[tokio::test]
    async fn test_exchange_unauthorized_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/oauth2/token"))
            .respond_with(ResponseTemplate::new(401).set_body_string("invalid api token"))
            .expect(1)
            .mount(&server)
            .await;

        let err = exchanger_for(&server)
            .exchange(&SecretString::new("bad".to_string()))
            .await
            .unwrap_err();

        match err {
            AuthError::TokenEndpointError { status, body } => {
                assert_eq!(status, 401);
                assert_eq!(body, "invalid api token");
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_exchange_malformed_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
            .mount(&server)
            .await;

        let err = exchanger_for(&server)
            .exchange(&SecretString::new("tok1".to_string()))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::JsonError { .. }));
    }

    #[test]
    fn test_bearer_header() {
        let token = SecretString::new("abc".to_string());
        assert_eq!(bearer_header(&token), "Bearer abc");
    }
}
