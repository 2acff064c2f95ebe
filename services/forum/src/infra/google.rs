//! Google OAuth 2.0 authorization-code flow over plain reqwest.
//!
//! Only the stable subject id (`sub`) leaves this module; email and profile
//! fields from Google are never stored.

use serde::Deserialize;
use url::Url;

use crate::domain::repository::IdentityProviderPort;
use crate::error::ForumError;

pub const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
pub const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
pub const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

#[derive(Clone)]
pub struct GoogleIdentityProvider {
    pub http: reqwest::Client,
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct UserInfo {
    sub: String,
}

impl GoogleIdentityProvider {
    pub fn new(client_id: String, client_secret: String, redirect_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            client_id,
            client_secret,
            redirect_url,
        }
    }

    async fn exchange_code(&self, code: &str) -> Result<String, ForumError> {
        let resp = self
            .http
            .post(GOOGLE_TOKEN_URL)
            .form(&[
                ("code", code),
                ("client_id", self.client_id.as_str()),
                ("client_secret", self.client_secret.as_str()),
                ("redirect_uri", self.redirect_url.as_str()),
                ("grant_type", "authorization_code"),
            ])
            .send()
            .await
            .map_err(|e| ForumError::Upstream(format!("token request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(ForumError::Upstream(format!(
                "token endpoint returned {}",
                resp.status()
            )));
        }

        let token: TokenResponse = resp
            .json()
            .await
            .map_err(|e| ForumError::Upstream(format!("invalid token response: {e}")))?;
        Ok(token.access_token)
    }

    async fn fetch_subject(&self, access_token: &str) -> Result<String, ForumError> {
        let resp = self
            .http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| ForumError::Upstream(format!("userinfo request failed: {e}")))?;

        if !resp.status().is_success() {
            return Err(ForumError::Upstream(format!(
                "userinfo endpoint returned {}",
                resp.status()
            )));
        }

        let info: UserInfo = resp
            .json()
            .await
            .map_err(|e| ForumError::Upstream(format!("invalid userinfo response: {e}")))?;
        if info.sub.is_empty() {
            return Err(ForumError::Upstream("userinfo carried no subject".into()));
        }
        Ok(info.sub)
    }
}

impl IdentityProviderPort for GoogleIdentityProvider {
    fn authorize_url(&self, state: &str) -> Result<String, ForumError> {
        let url = Url::parse_with_params(
            GOOGLE_AUTH_URL,
            &[
                ("client_id", self.client_id.as_str()),
                ("redirect_uri", self.redirect_url.as_str()),
                ("response_type", "code"),
                ("scope", "openid"),
                ("state", state),
            ],
        )
        .map_err(|e| ForumError::Internal(e.into()))?;
        Ok(url.into())
    }

    async fn resolve_subject(&self, code: &str) -> Result<String, ForumError> {
        let access_token = self.exchange_code(code).await?;
        self.fetch_subject(&access_token).await
    }
}
