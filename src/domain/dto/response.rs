//! 응답 DTO
//!
//! LinkedIn 토큰 엔드포인트 응답과, 클라이언트에게 돌려주는 에러 본문입니다.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::utils::string_utils::deserialize_optional_string;

/// LinkedIn OAuth 2.0 토큰 교환 응답
///
/// `access_token`이 없거나 비어 있으면 교환 실패로 처리하기 위해 Option으로 받습니다.
#[derive(Debug, Deserialize)]
pub struct LinkedInTokenResponse {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub access_token: Option<String>,
    /// 만료 시간 (초 단위)
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// JSON 에러 응답 본문
///
/// ```json
/// { "error": "Authorization code missing" }
/// { "error": "LinkedIn Authentication Failed", "details": { "error": "invalid_request" } }
/// ```
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}
