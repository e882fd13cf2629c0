//! # Domain Layer Module
//!
//! 릴레이가 주고받는 데이터 구조를 정의합니다. 모든 값은 요청 하나의 수명 동안만
//! 존재하며 어디에도 저장되지 않습니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! domain/
//! ├── dto/       - HTTP 경계 (콜백 쿼리, LinkedIn 토큰 응답, 에러 본문)
//! └── models/    - 외부 프로필, Firebase 커스텀 토큰 클레임, 로그인 단계
//! ```

pub mod dto;
pub mod models;

pub use dto::request::*;
pub use dto::response::*;
pub use models::*;
