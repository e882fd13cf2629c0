//! Authentication HTTP Handlers
//!
//! LinkedIn 로그인 시작과 콜백 처리를 담당하는 핸들러 함수들입니다.
//!
//! # Endpoints
//!
//! - `GET /auth/linkedin` - LinkedIn 인증 페이지로 302 리다이렉트
//! - `GET /auth/linkedin/callback?code={code}` - 코드 교환 후 앱 URL 스킴으로 302 리다이렉트
use actix_web::http::header;
use actix_web::{get, web, HttpResponse};

use crate::core::AppState;
use crate::domain::LinkedInCallbackQuery;
use crate::errors::RelayError;
use crate::utils::string_utils::mask_secret;

/// LinkedIn 로그인 시작 핸들러
///
/// 고정된 클라이언트 ID, 리다이렉트 URI, 스코프로 만든 인증 URL로 보냅니다.
///
/// # Endpoint
/// `GET /auth/linkedin`
#[get("/linkedin")]
pub async fn linkedin_login(state: web::Data<AppState>) -> HttpResponse {
    let auth_url = state.linkedin.authorization_url();

    log::info!("🔵 LinkedIn client_id: {}", state.linkedin.config().client_id);
    log::info!("🔵 LinkedIn 인증 URL로 리다이렉트: {}", auth_url);

    HttpResponse::Found()
        .insert_header((header::LOCATION, auth_url))
        .finish()
}

/// LinkedIn OAuth 콜백 처리 핸들러
///
/// 인증 코드를 액세스 토큰으로 교환하고, 프로필을 조회한 뒤 Firebase 커스텀 토큰을 발급하여
/// 앱의 URL 스킴으로 돌려보냅니다. 실패 시 `RelayError`가 JSON 에러 응답으로 변환됩니다.
///
/// # Endpoint
/// `GET /auth/linkedin/callback?code={code}`
#[get("/linkedin/callback")]
pub async fn linkedin_callback(
    state: web::Data<AppState>,
    query: web::Query<LinkedInCallbackQuery>,
) -> Result<HttpResponse, RelayError> {
    let query = query.into_inner();

    let Some(code) = query.code.clone() else {
        let provider_error = query.provider_error();
        match &provider_error {
            Some(reason) => log::warn!("❌ LinkedIn 콜백에 인증 코드 없음 (프로바이더 에러: {})", reason),
            None => log::error!("❌ Authorization code missing."),
        }
        return Err(RelayError::MissingCode { provider_error });
    };

    log::info!("✅ LinkedIn 인증 코드 수신: {}", mask_secret(&code));

    let minted = state
        .login_pipeline()
        .run(code)
        .await
        .inspect_err(|e| log::error!("❌ LinkedIn Auth Error: {} (details: {:?})", e, e.details()))?;

    log::info!(
        "✅ 앱으로 리다이렉트: uid={}, token={}",
        minted.identity.uid,
        mask_secret(&minted.firebase_token)
    );

    Ok(HttpResponse::Found()
        .insert_header((header::LOCATION, state.app_link.auth_redirect(&minted.firebase_token)))
        .finish())
}
