//! # Authentication Configuration Module
//!
//! LinkedIn OAuth 클라이언트 정보와 앱 복귀용 URL 스킴 설정을 관리합니다.
//! 프로세스 시작 시 한 번만 읽어 [`AppState`](crate::core::AppState)에 보관하며,
//! 요청 처리 중에는 읽기 전용으로만 사용됩니다.
//!
//! ## 필수 환경 변수
//!
//! ```bash
//! export LINKEDIN_CLIENT_ID="86jqgl7o5plvlv"
//! export LINKEDIN_CLIENT_SECRET="your-linkedin-client-secret"
//! export LINKEDIN_REDIRECT_URI="https://relay.example.com/auth/linkedin/callback"
//! ```
//!
//! ## 선택 환경 변수
//!
//! ```bash
//! export LINKEDIN_AUTH_URI="https://www.linkedin.com/oauth/v2/authorization"
//! export LINKEDIN_TOKEN_URI="https://www.linkedin.com/oauth/v2/accessToken"
//! export LINKEDIN_USERINFO_URI="https://api.linkedin.com/v2/userinfo"
//! export APP_URL_SCHEME="fbla-learning-app"
//! ```

use std::fmt;

use validator::Validate;

use crate::errors::ConfigError;
use crate::utils::string_utils::mask_secret;

pub const DEFAULT_LINKEDIN_AUTH_URI: &str = "https://www.linkedin.com/oauth/v2/authorization";
pub const DEFAULT_LINKEDIN_TOKEN_URI: &str = "https://www.linkedin.com/oauth/v2/accessToken";
pub const DEFAULT_LINKEDIN_USERINFO_URI: &str = "https://api.linkedin.com/v2/userinfo";
pub const DEFAULT_APP_URL_SCHEME: &str = "fbla-learning-app";

/// 외부 로그인 프로바이더
///
/// Firebase uid 네임스페이스(`"<provider>:<sub>"`)와 `provider` 클레임 값으로 쓰입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthProvider {
    /// LinkedIn OpenID Connect
    LinkedIn,
}

impl AuthProvider {
    /// 소문자 문자열 표현을 반환합니다.
    ///
    /// ```rust,ignore
    /// assert_eq!(AuthProvider::LinkedIn.as_str(), "linkedin");
    /// ```
    pub fn as_str(&self) -> &'static str {
        match self {
            AuthProvider::LinkedIn => "linkedin",
        }
    }
}

impl fmt::Display for AuthProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// LinkedIn OAuth 2.0 (OpenID Connect) 클라이언트 설정
///
/// LinkedIn Developer Portal 에서 발급한 앱 정보와 엔드포인트를 보관합니다.
///
/// ## 보안 고려사항
///
/// - `client_secret`은 서버에만 존재하며 호출자가 전달할 수 없습니다
/// - `Debug` 출력에서 `client_secret`은 마스킹됩니다
/// - `redirect_uri`는 LinkedIn 앱에 등록된 값과 정확히 일치해야 합니다
#[derive(Clone, Validate)]
pub struct LinkedInOAuthConfig {
    #[validate(length(min = 1, message = "LINKEDIN_CLIENT_ID must not be empty"))]
    pub client_id: String,

    #[validate(length(min = 1, message = "LINKEDIN_CLIENT_SECRET must not be empty"))]
    pub client_secret: String,

    #[validate(url(message = "LINKEDIN_REDIRECT_URI must be an absolute URL"))]
    pub redirect_uri: String,

    #[validate(url(message = "LINKEDIN_AUTH_URI must be an absolute URL"))]
    pub auth_uri: String,

    #[validate(url(message = "LINKEDIN_TOKEN_URI must be an absolute URL"))]
    pub token_uri: String,

    #[validate(url(message = "LINKEDIN_USERINFO_URI must be an absolute URL"))]
    pub userinfo_uri: String,
}

impl LinkedInOAuthConfig {
    /// 인증 요청 시 고정으로 요청하는 스코프
    pub const SCOPE: &'static str = "openid profile email";

    /// 환경 변수 조회 함수로부터 설정을 읽고 검증합니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::MissingVar` - 필수 변수 누락
    /// * `ConfigError::Invalid` - URL 형식 등 검증 실패
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = Self {
            client_id: required(lookup, "LINKEDIN_CLIENT_ID")?,
            client_secret: required(lookup, "LINKEDIN_CLIENT_SECRET")?,
            redirect_uri: required(lookup, "LINKEDIN_REDIRECT_URI")?,
            auth_uri: lookup("LINKEDIN_AUTH_URI")
                .unwrap_or_else(|| DEFAULT_LINKEDIN_AUTH_URI.to_string()),
            token_uri: lookup("LINKEDIN_TOKEN_URI")
                .unwrap_or_else(|| DEFAULT_LINKEDIN_TOKEN_URI.to_string()),
            userinfo_uri: lookup("LINKEDIN_USERINFO_URI")
                .unwrap_or_else(|| DEFAULT_LINKEDIN_USERINFO_URI.to_string()),
        };

        config
            .validate()
            .map_err(|e| ConfigError::Invalid(e.to_string()))?;

        Ok(config)
    }
}

impl fmt::Debug for LinkedInOAuthConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LinkedInOAuthConfig")
            .field("client_id", &self.client_id)
            .field("client_secret", &mask_secret(&self.client_secret))
            .field("redirect_uri", &self.redirect_uri)
            .field("auth_uri", &self.auth_uri)
            .field("token_uri", &self.token_uri)
            .field("userinfo_uri", &self.userinfo_uri)
            .finish()
    }
}

/// 모바일 앱 복귀 설정
///
/// 토큰 발급 후 `<scheme>://auth?firebaseToken=<token>` 으로 리다이렉트합니다.
#[derive(Debug, Clone)]
pub struct AppLinkConfig {
    pub url_scheme: String,
}

impl AppLinkConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url_scheme = lookup("APP_URL_SCHEME")
            .unwrap_or_else(|| DEFAULT_APP_URL_SCHEME.to_string());

        // RFC 3986: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." )
        let mut chars = url_scheme.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'));
        if !valid {
            return Err(ConfigError::InvalidValue {
                key: "APP_URL_SCHEME",
                reason: format!("'{}' is not a valid URL scheme", url_scheme),
            });
        }

        Ok(Self { url_scheme })
    }

    /// 발급된 Firebase 토큰을 담은 앱 복귀 URL을 만듭니다.
    pub fn auth_redirect(&self, firebase_token: &str) -> String {
        format!(
            "{}://auth?firebaseToken={}",
            self.url_scheme,
            urlencoding::encode(firebase_token)
        )
    }
}

/// 필수 환경 변수를 읽습니다. 빈 값은 누락으로 취급합니다.
pub(crate) fn required<F>(lookup: &F, key: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingVar(key))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    fn linkedin_vars() -> Vec<(&'static str, &'static str)> {
        vec![
            ("LINKEDIN_CLIENT_ID", "client-123"),
            ("LINKEDIN_CLIENT_SECRET", "super-secret-value"),
            ("LINKEDIN_REDIRECT_URI", "https://relay.example.com/auth/linkedin/callback"),
        ]
    }

    #[test]
    fn test_linkedin_config_defaults() {
        let config = LinkedInOAuthConfig::from_lookup(&lookup_from(&linkedin_vars())).unwrap();

        assert_eq!(config.client_id, "client-123");
        assert_eq!(config.auth_uri, DEFAULT_LINKEDIN_AUTH_URI);
        assert_eq!(config.token_uri, DEFAULT_LINKEDIN_TOKEN_URI);
        assert_eq!(config.userinfo_uri, DEFAULT_LINKEDIN_USERINFO_URI);
    }

    #[test]
    fn test_linkedin_config_requires_secret() {
        let vars: Vec<_> = linkedin_vars()
            .into_iter()
            .filter(|(k, _)| *k != "LINKEDIN_CLIENT_SECRET")
            .collect();

        let err = LinkedInOAuthConfig::from_lookup(&lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar("LINKEDIN_CLIENT_SECRET")));
    }

    #[test]
    fn test_linkedin_config_rejects_relative_redirect() {
        let mut vars = linkedin_vars();
        vars.push(("LINKEDIN_REDIRECT_URI", "/auth/linkedin/callback"));
        vars.remove(2);

        let err = LinkedInOAuthConfig::from_lookup(&lookup_from(&vars)).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn test_debug_masks_client_secret() {
        let config = LinkedInOAuthConfig::from_lookup(&lookup_from(&linkedin_vars())).unwrap();
        let printed = format!("{:?}", config);

        assert!(!printed.contains("super-secret-value"));
        assert!(printed.contains("supe…(18)"));
    }

    #[test]
    fn test_app_link_redirect() {
        let config = AppLinkConfig::from_lookup(&lookup_from(&[])).unwrap();
        assert_eq!(config.url_scheme, DEFAULT_APP_URL_SCHEME);
        assert_eq!(
            config.auth_redirect("aaa.bbb.ccc"),
            "fbla-learning-app://auth?firebaseToken=aaa.bbb.ccc"
        );
    }

    #[test]
    fn test_app_link_rejects_invalid_scheme() {
        for scheme in ["", "1app", "my app", "app://"] {
            let result = AppLinkConfig::from_lookup(&lookup_from(&[("APP_URL_SCHEME", scheme)]));
            assert!(result.is_err(), "scheme '{}' should be rejected", scheme);
        }
    }

    #[test]
    fn test_auth_provider_as_str() {
        assert_eq!(AuthProvider::LinkedIn.as_str(), "linkedin");
        assert_eq!(AuthProvider::LinkedIn.to_string(), "linkedin");
        assert_eq!(serde_json::to_string(&AuthProvider::LinkedIn).unwrap(), "\"linkedin\"");
    }
}
