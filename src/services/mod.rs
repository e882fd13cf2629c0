//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 서비스 인스턴스는 기동 시 [`AppState`](crate::core::AppState)에서 한 번 만들어지고
//! `web::Data`를 통해 핸들러로 주입됩니다.

pub mod auth;
