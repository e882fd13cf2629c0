//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 처리하는 핸들러 함수들입니다. 핸들러는 `web::Data<AppState>`로
//! 공유 서비스를 받아 서비스 계층에 위임하고, 에러는 `RelayError`로 돌려줍니다.
//!
//! ```text
//! Client (모바일 앱 / 브라우저)
//!        │
//! Handlers (이 모듈)        ← 쿼리 추출, 리다이렉트 응답
//!        │
//! Services                  ← LinkedIn 호출, 토큰 서명
//! ```

pub mod auth;
