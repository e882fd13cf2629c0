//! 에러 타입 모듈
//!
//! 요청 단위의 [`RelayError`](errors::RelayError)와 기동 시점의
//! [`ConfigError`](errors::ConfigError)를 제공합니다.

pub mod errors;

pub use errors::*;
