use awc::error::SendRequestError;
use awc::http::StatusCode;
use serde::{Deserialize, Serialize};

// TODO change to the real cloud project number before pointing at a live service
pub const CLOUD_PROJECT_NUMBER: u64 = 0;

#[derive(Serialize)]
struct IntegrityTokenRequest<'a> {
    cloud_project_number: u64,
    nonce: &'a str,
}

#[derive(Deserialize)]
struct IntegrityTokenResponse {
    token: String,
}

#[derive(Debug, thiserror::Error)]
pub enum TokenError {
    #[error("error while parsing integrity service url")]
    UrlParse,
    #[error("error while sending token request")]
    RequestSend,
    #[error("integrity service answered with status {0}")]
    Status(StatusCode),
    #[error("error while decoding token response")]
    ResponseDecode,
}

/// Source of integrity tokens for the screen.
pub trait TokenProvider {
    /// Exchange a caller-supplied nonce for an attestation token.
    async fn request_token(&self, nonce: &str) -> Result<String, TokenError>;
}

/// The platform integrity service, reached over its token endpoint.
pub struct IntegrityService {
    client: awc::Client,
    token_url: String,
}

impl IntegrityService {
    pub fn new(token_url: String) -> Self {
        // the platform call carries no deadline of its own
        let client = awc::Client::builder().disable_timeout().finish();
        Self { client, token_url }
    }
}

impl TokenProvider for IntegrityService {
    async fn request_token(&self, nonce: &str) -> Result<String, TokenError> {
        let mut response = self
            .client
            .post(self.token_url.as_str())
            .send_json(&IntegrityTokenRequest {
                cloud_project_number: CLOUD_PROJECT_NUMBER,
                nonce,
            })
            .await
            .map_err(|e| match e {
                SendRequestError::Url(_) => TokenError::UrlParse,
                _ => TokenError::RequestSend,
            })?;

        if !response.status().is_success() {
            return Err(TokenError::Status(response.status()));
        }

        let body: IntegrityTokenResponse = response
            .json()
            .await
            .map_err(|_| TokenError::ResponseDecode)?;

        Ok(body.token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn request_wire_format() {
        let req = IntegrityTokenRequest {
            cloud_project_number: CLOUD_PROJECT_NUMBER,
            nonce: "txn-4711",
        };

        let v = serde_json::to_value(&req).unwrap();
        assert_eq!(
            v,
            json!({"cloud_project_number": 0, "nonce": "txn-4711"})
        );
    }

    #[test]
    fn response_wire_format() {
        let body = r#"{"token":"eyJhbGciOiJFUzI1NiJ9.e30.sig"}"#;

        let resp: IntegrityTokenResponse = serde_json::from_str(body).unwrap();
        assert_eq!(resp.token, "eyJhbGciOiJFUzI1NiJ9.e30.sig");
    }

    #[test]
    fn response_without_token_is_rejected() {
        let body = r#"{"status":"ok"}"#;

        assert!(serde_json::from_str::<IntegrityTokenResponse>(body).is_err());
    }

    #[test]
    fn error_display() {
        assert_eq!(
            TokenError::RequestSend.to_string(),
            "error while sending token request"
        );
        assert_eq!(
            TokenError::Status(StatusCode::SERVICE_UNAVAILABLE).to_string(),
            "integrity service answered with status 503 Service Unavailable"
        );
    }
}
