//! # Data Transfer Objects (DTO) Module
//!
//! API 경계에서 오가는 데이터 구조입니다.
//!
//! - [`request`] - 콜백 쿼리, 토큰 교환 폼 (릴레이 → LinkedIn)
//! - [`response`] - LinkedIn 토큰 응답, 클라이언트용 에러 본문

pub mod request;
pub mod response;
