//! 공통 유틸리티 함수 모듈
//!
//! 문자열 정리와 로그 마스킹 기능을 제공합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 정리, serde 헬퍼, 비밀값 마스킹

pub mod string_utils;
