//! 요청 DTO
//!
//! LinkedIn이 리다이렉트로 전달하는 콜백 쿼리와,
//! 릴레이가 토큰 엔드포인트로 보내는 폼 본문을 매핑합니다.
use serde::{Deserialize, Serialize};

use crate::utils::string_utils::deserialize_optional_string;

/// OAuth 콜백 쿼리 파라미터
///
/// `code`가 비어 있거나 공백뿐이면 없는 것으로 취급합니다.
/// 사용자가 동의를 거부하면 LinkedIn은 `code` 대신 `error`를 보냅니다.
#[derive(Debug, Default, Deserialize)]
pub struct LinkedInCallbackQuery {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub code: Option<String>,

    /// 에러가 있을 경우 (예: `user_cancelled_login`)
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub error_description: Option<String>,
}

impl LinkedInCallbackQuery {
    /// 프로바이더 에러를 `"error: description"` 형태로 합칩니다.
    pub fn provider_error(&self) -> Option<String> {
        match (&self.error, &self.error_description) {
            (Some(error), Some(description)) => Some(format!("{}: {}", error, description)),
            (Some(error), None) => Some(error.clone()),
            (None, Some(description)) => Some(description.clone()),
            (None, None) => None,
        }
    }
}

/// 토큰 교환 요청 폼 (`application/x-www-form-urlencoded`)
#[derive(Debug, Serialize)]
pub struct TokenExchangeForm<'a> {
    pub grant_type: &'static str,
    pub code: &'a str,
    pub client_id: &'a str,
    pub client_secret: &'a str,
    pub redirect_uri: &'a str,
}

impl<'a> TokenExchangeForm<'a> {
    pub fn authorization_code(
        code: &'a str,
        client_id: &'a str,
        client_secret: &'a str,
        redirect_uri: &'a str,
    ) -> Self {
        Self {
            grant_type: "authorization_code",
            code,
            client_id,
            client_secret,
            redirect_uri,
        }
    }
}
