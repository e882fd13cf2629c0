//! # Domain Models Module
//!
//! 외부 시스템과 주고받는 값 객체들입니다. 모두 불변이며 요청 단위로 만들어지고 버려집니다.
//!
//! - [`linkedin_profile`] - LinkedIn `userinfo` 응답과 기본값이 적용된 프로필
//! - [`federated_token`] - Firebase 커스텀 토큰 uid/클레임/JWT 페이로드
//! - [`login_flow`] - 콜백 처리 파이프라인의 단계 타입

pub mod federated_token;
pub mod linkedin_profile;
pub mod login_flow;

pub use federated_token::*;
pub use linkedin_profile::*;
pub use login_flow::*;
