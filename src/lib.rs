//! LinkedIn → Firebase 인증 릴레이
//!
//! 모바일 앱의 LinkedIn 로그인을 중계하는 상태 없는 HTTP 서비스입니다.
//! LinkedIn 인증 코드를 액세스 토큰으로 교환하고, 프로필을 조회한 뒤
//! Firebase 커스텀 토큰을 발급하여 앱의 URL 스킴으로 돌려보냅니다.
//!
//! # Features
//!
//! - **OAuth 2.0 / OIDC**: LinkedIn Authorization Code Flow (서버 측 단계)
//! - **Firebase 커스텀 토큰**: 서비스 계정 키로 RS256 서명, uid `linkedin:<sub>`
//! - **상태 없음**: 아무것도 저장하지 않으며 요청마다 독립적으로 처리
//! - **명시적 DI**: 기동 시 구성한 `AppState`를 `web::Data`로 주입
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← /auth/linkedin, /auth/linkedin/callback, /health
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 쿼리 추출, 302 리다이렉트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 코드 교환 → 프로필 조회 → 토큰 서명
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ LinkedIn APIs   │ ← accessToken, userinfo
//! └─────────────────┘
//! ```

pub mod config;
pub mod core;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod routes;
pub mod services;
pub mod utils;
