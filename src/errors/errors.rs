//! 릴레이 전역에서 사용하는 에러 시스템
//!
//! 콜백 처리 중 발생하는 요청 단위 에러(`RelayError`)와
//! 프로세스 시작 시점의 설정 에러(`ConfigError`)를 구분합니다.
//! `RelayError`는 `actix_web::ResponseError`를 구현하여 핸들러 경계에서
//! 자동으로 JSON 에러 응답으로 변환됩니다.
//!
//! ## 응답 형식
//!
//! ```json
//! { "error": "LinkedIn Authentication Failed", "details": { "error": "invalid_grant" } }
//! ```

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde_json::Value;
use thiserror::Error;

use crate::domain::dto::response::ErrorResponse;

/// 인증 코드 누락 시 응답 본문의 `error` 라벨
pub const MISSING_CODE_LABEL: &str = "Authorization code missing";

/// 업스트림 실패 시 응답 본문의 `error` 라벨
pub const AUTH_FAILED_LABEL: &str = "LinkedIn Authentication Failed";

/// 콜백 요청 처리 중 발생하는 에러
///
/// 모든 변형은 요청 하나에만 영향을 주며 프로세스를 중단시키지 않습니다.
#[derive(Error, Debug)]
pub enum RelayError {
    /// 콜백에 인증 코드가 없음 (400 Bad Request)
    ///
    /// 프로바이더가 `error` 파라미터로 돌려보낸 경우 그 내용을 함께 보관합니다.
    #[error("Authorization code missing")]
    MissingCode { provider_error: Option<String> },

    /// 토큰 엔드포인트 호출 실패 또는 access_token 누락 (500)
    #[error("LinkedIn token exchange failed: {message}")]
    TokenExchangeFailed {
        message: String,
        details: Option<Value>,
    },

    /// 프로필(userinfo) 엔드포인트 호출 실패 (500)
    #[error("LinkedIn profile fetch failed: {message}")]
    ProfileFetchFailed {
        message: String,
        details: Option<Value>,
    },

    /// Firebase 커스텀 토큰 서명 실패 (500)
    #[error("Firebase custom token minting failed: {0}")]
    TokenMintFailed(String),
}

impl RelayError {
    /// 클라이언트에 전달할 `details` 값을 반환합니다.
    ///
    /// 업스트림 페이로드가 있으면 그대로, 없으면 에러 메시지를 사용합니다.
    pub fn details(&self) -> Option<Value> {
        match self {
            RelayError::MissingCode { provider_error } => {
                provider_error.clone().map(Value::String)
            }
            RelayError::TokenExchangeFailed { message, details }
            | RelayError::ProfileFetchFailed { message, details } => Some(
                details
                    .clone()
                    .unwrap_or_else(|| Value::String(message.clone())),
            ),
            RelayError::TokenMintFailed(message) => Some(Value::String(message.clone())),
        }
    }

    fn label(&self) -> &'static str {
        match self {
            RelayError::MissingCode { .. } => MISSING_CODE_LABEL,
            _ => AUTH_FAILED_LABEL,
        }
    }
}

impl ResponseError for RelayError {
    fn status_code(&self) -> StatusCode {
        match self {
            RelayError::MissingCode { .. } => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// 각 에러를 상태 코드와 JSON 본문으로 변환합니다.
    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.label().to_string(),
            details: self.details(),
        })
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type RelayResult<T> = Result<T, RelayError>;

/// 프로세스 시작 시점의 설정/자격 증명 에러
///
/// 요청 처리 중에는 발생하지 않으며, 발생하면 서버가 기동되지 않습니다.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(&'static str),

    #[error("Invalid value for {key}: {reason}")]
    InvalidValue { key: &'static str, reason: String },

    #[error("Invalid configuration: {0}")]
    Invalid(String),

    #[error("Failed to read credential file '{path}': {source}")]
    CredentialRead {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed credential file '{path}': {source}")]
    CredentialParse {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Invalid service account credentials: {0}")]
    InvalidCredentials(String),

    #[error("Invalid signing key: {0}")]
    SigningKey(#[from] jsonwebtoken::errors::Error),

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[from] reqwest::Error),
}
