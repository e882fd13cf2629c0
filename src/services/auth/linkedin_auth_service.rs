//! # LinkedIn OAuth 2.0 인증 서비스
//!
//! LinkedIn OpenID Connect 의 Authorization Code Flow 중 서버 측 단계를 담당합니다.
//!
//! ```text
//! ┌────────────┐          ┌──────────────┐              ┌──────────────┐
//! │  모바일 앱   │          │   릴레이       │              │   LinkedIn    │
//! └────────────┘          └──────────────┘              └──────────────┘
//!       │ GET /auth/linkedin     │                              │
//!       ├───────────────────────►│                              │
//!       │ 302 authorization URL  │                              │
//!       │◄───────────────────────┤                              │
//!       │ 사용자 로그인 및 동의 ──────────────────────────────────►│
//!       │ GET /auth/linkedin/callback?code=...                  │
//!       ├───────────────────────►│ POST /oauth/v2/accessToken   │
//!       │                        ├─────────────────────────────►│
//!       │                        │ GET /v2/userinfo (Bearer)    │
//!       │                        ├─────────────────────────────►│
//!       │ 302 <scheme>://auth?firebaseToken=...                 │
//!       │◄───────────────────────┤                              │
//! ```
//!
//! 두 업스트림 호출은 반드시 순서대로 실행되며, 재시도하지 않습니다.

use reqwest::{Client, Response};
use serde_json::Value;

use crate::config::LinkedInOAuthConfig;
use crate::domain::{
    CodeReceived, ExternalProfile, LinkedInTokenResponse, LinkedInUserInfo, ProfileReceived,
    TokenExchangeForm, TokenReceived,
};
use crate::errors::{RelayError, RelayResult};
use crate::utils::string_utils::mask_secret;

/// 에러 본문을 `details`로 넘길 때의 최대 길이
const MAX_DETAILS_CHARS: usize = 2048;

/// LinkedIn OAuth 클라이언트
///
/// 설정과 HTTP 클라이언트는 기동 시 주입되며 요청 간에 공유됩니다 (둘 다 읽기 전용).
pub struct LinkedInAuthService {
    config: LinkedInOAuthConfig,
    http: Client,
}

impl LinkedInAuthService {
    pub fn new(config: LinkedInOAuthConfig, http: Client) -> Self {
        Self { config, http }
    }

    pub fn config(&self) -> &LinkedInOAuthConfig {
        &self.config
    }

    /// LinkedIn 인증 페이지 URL을 생성합니다.
    ///
    /// 클라이언트 ID, 리다이렉트 URI, 스코프(`openid profile email`)가 모두 고정이므로
    /// 같은 설정에 대해 항상 같은 URL을 돌려줍니다.
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let url = service.authorization_url();
    /// // https://www.linkedin.com/oauth/v2/authorization?response_type=code&client_id=...
    /// ```
    pub fn authorization_url(&self) -> String {
        let params = [
            ("response_type", "code"),
            ("client_id", self.config.client_id.as_str()),
            ("redirect_uri", self.config.redirect_uri.as_str()),
            ("scope", LinkedInOAuthConfig::SCOPE),
        ];

        let query_string = params
            .iter()
            .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&");

        let separator = if self.config.auth_uri.contains('?') { '&' } else { '?' };
        format!("{}{}{}", self.config.auth_uri, separator, query_string)
    }

    /// 인증 코드를 액세스 토큰으로 교환합니다.
    ///
    /// # Errors
    ///
    /// 전송 실패, 타임아웃, 2xx 이외의 응답, 파싱 실패, `access_token` 누락은
    /// 모두 `RelayError::TokenExchangeFailed` 입니다.
    pub async fn exchange_code(&self, stage: CodeReceived) -> RelayResult<TokenReceived> {
        let form = TokenExchangeForm::authorization_code(
            &stage.code,
            &self.config.client_id,
            &self.config.client_secret,
            &self.config.redirect_uri,
        );

        let token_failed = |message: String, details: Option<Value>| {
            RelayError::TokenExchangeFailed { message, details }
        };

        let response = self
            .http
            .post(&self.config.token_uri)
            .form(&form)
            .send()
            .await
            .map_err(|e| token_failed(describe_transport_error("LinkedIn 토큰 요청", &e), None))?;

        let (status, body) = read_body(response)
            .await
            .map_err(|e| token_failed(describe_transport_error("LinkedIn 토큰 응답 수신", &e), None))?;

        if !status.is_success() {
            return Err(token_failed(
                format!("LinkedIn 토큰 교환 실패: HTTP {}", status),
                payload_of(&body),
            ));
        }

        let token = serde_json::from_str::<LinkedInTokenResponse>(&body).map_err(|e| {
            token_failed(format!("LinkedIn 토큰 응답 파싱 실패: {}", e), payload_of(&body))
        })?;

        let access_token = token
            .access_token
            .ok_or_else(|| token_failed("No access token received".to_string(), payload_of(&body)))?;

        log::info!(
            "✅ LinkedIn 액세스 토큰 수신: {} (expires_in: {:?}, scope: {:?})",
            mask_secret(&access_token),
            token.expires_in,
            token.scope
        );

        Ok(TokenReceived { access_token })
    }

    /// 액세스 토큰으로 LinkedIn 프로필을 조회합니다.
    ///
    /// 교환 단계에서 받은 토큰을 그대로 Bearer 자격 증명으로 사용합니다.
    ///
    /// # Errors
    ///
    /// 전송 실패, 타임아웃, 2xx 이외의 응답, 파싱 실패, `sub` 누락은
    /// 모두 `RelayError::ProfileFetchFailed` 입니다.
    pub async fn fetch_profile(&self, stage: TokenReceived) -> RelayResult<ProfileReceived> {
        let profile_failed = |message: String, details: Option<Value>| {
            RelayError::ProfileFetchFailed { message, details }
        };

        let response = self
            .http
            .get(&self.config.userinfo_uri)
            .bearer_auth(&stage.access_token)
            .send()
            .await
            .map_err(|e| profile_failed(describe_transport_error("LinkedIn 사용자 정보 요청", &e), None))?;

        let (status, body) = read_body(response)
            .await
            .map_err(|e| profile_failed(describe_transport_error("LinkedIn 사용자 정보 수신", &e), None))?;

        if !status.is_success() {
            return Err(profile_failed(
                format!("LinkedIn 사용자 정보 조회 실패: HTTP {}", status),
                payload_of(&body),
            ));
        }

        let user_info = serde_json::from_str::<LinkedInUserInfo>(&body).map_err(|e| {
            profile_failed(format!("LinkedIn 사용자 정보 파싱 실패: {}", e), payload_of(&body))
        })?;

        let profile = ExternalProfile::try_from(user_info)?;

        log::info!(
            "✅ LinkedIn 프로필 수신: sub={}, name={}",
            profile.subject_id,
            profile.display_name()
        );

        Ok(ProfileReceived { profile })
    }
}

async fn read_body(response: Response) -> Result<(reqwest::StatusCode, String), reqwest::Error> {
    let status = response.status();
    let body = response.text().await?;
    Ok((status, body))
}

fn describe_transport_error(action: &str, error: &reqwest::Error) -> String {
    if error.is_timeout() {
        format!("{} 시간 초과: {}", action, error)
    } else {
        format!("{} 실패: {}", action, error)
    }
}

/// 업스트림 응답 본문을 `details` 값으로 변환합니다.
///
/// JSON이면 그대로, 아니면 (잘린) 문자열로, 비어 있으면 None.
fn payload_of(body: &str) -> Option<Value> {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return None;
    }

    serde_json::from_str::<Value>(trimmed)
        .ok()
        .or_else(|| Some(Value::String(trimmed.chars().take(MAX_DETAILS_CHARS).collect())))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn service_with_auth_uri(auth_uri: &str) -> LinkedInAuthService {
        let config = LinkedInOAuthConfig {
            client_id: "86jqgl7o5plvlv".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "https://relay.example.com/auth/linkedin/callback".to_string(),
            auth_uri: auth_uri.to_string(),
            token_uri: "https://www.linkedin.com/oauth/v2/accessToken".to_string(),
            userinfo_uri: "https://api.linkedin.com/v2/userinfo".to_string(),
        };
        LinkedInAuthService::new(config, Client::new())
    }

    #[test]
    fn test_authorization_url() {
        let service = service_with_auth_uri("https://www.linkedin.com/oauth/v2/authorization");

        assert_eq!(
            service.authorization_url(),
            "https://www.linkedin.com/oauth/v2/authorization?response_type=code\
             &client_id=86jqgl7o5plvlv\
             &redirect_uri=https%3A%2F%2Frelay.example.com%2Fauth%2Flinkedin%2Fcallback\
             &scope=openid%20profile%20email"
        );
    }

    #[test]
    fn test_authorization_url_keeps_existing_query() {
        let service = service_with_auth_uri("https://sso.example.com/authorize?tenant=a");
        assert!(service
            .authorization_url()
            .starts_with("https://sso.example.com/authorize?tenant=a&response_type=code&"));
    }

    #[test]
    fn test_payload_of() {
        assert_eq!(payload_of(""), None);
        assert_eq!(payload_of("  \n"), None);
        assert_eq!(
            payload_of(r#"{"error":"invalid_request","error_description":"Unable to retrieve access token"}"#),
            Some(json!({ "error": "invalid_request", "error_description": "Unable to retrieve access token" }))
        );
        assert_eq!(payload_of("Bad Gateway"), Some(json!("Bad Gateway")));

        let long = "x".repeat(MAX_DETAILS_CHARS + 10);
        assert_eq!(
            payload_of(&long).and_then(|v| v.as_str().map(str::len)),
            Some(MAX_DETAILS_CHARS)
        );
    }
}
