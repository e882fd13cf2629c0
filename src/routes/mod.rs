//! API 라우트 설정 모듈
//!
//! LinkedIn 인증 라우트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! | Method | Path | 설명 |
//! |--------|------|------|
//! | GET | `/auth/linkedin` | LinkedIn 인증 페이지로 리다이렉트 |
//! | GET | `/auth/linkedin/callback` | 코드 교환 후 앱으로 리다이렉트 |
//! | GET | `/health` | 헬스체크 |
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(state))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{error, web, HttpResponse};
use serde_json::json;

use crate::core::AppState;
use crate::errors::RelayError;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// 쿼리 파싱 실패도 JSON 에러 본문(400)으로 응답하도록 `QueryConfig`를 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_auth_routes(cfg);
}

/// 인증 관련 라우트를 설정합니다
///
/// ```bash
/// # 로그인 시작 (브라우저에서 열기)
/// curl -i http://localhost:8294/auth/linkedin
///
/// # 콜백 (LinkedIn 이 호출)
/// curl -i "http://localhost:8294/auth/linkedin/callback?code=AQT..."
/// ```
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/auth")
            .service(handlers::auth::linkedin_login)
            .service(handlers::auth::linkedin_callback),
    );
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default().error_handler(|err, _req| {
        log::warn!("❌ 콜백 쿼리 파싱 실패: {}", err);
        let reason = err.to_string();
        error::InternalError::from_response(
            err,
            actix_web::ResponseError::error_response(&RelayError::MissingCode {
                provider_error: Some(reason),
            }),
        )
        .into()
    })
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 업스트림을 호출하지 않으며, 로드된 플랫폼 프로젝트 ID를 함께 보여줍니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "linkedin_auth_relay",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00",
///   "firebase_project": "voxigo"
/// }
/// ```
#[actix_web::get("/health")]
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "firebase_project": state.platform.project_id,
    }))
}
