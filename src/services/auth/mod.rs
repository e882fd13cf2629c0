//! 인증 서비스 모듈
//!
//! LinkedIn OAuth 코드 교환과 Firebase 커스텀 토큰 발급을 담당합니다.
//!
//! # Features
//!
//! - LinkedIn 인증 URL 생성, 코드 교환, `userinfo` 조회
//! - 서비스 계정 키로 RS256 커스텀 토큰 서명
//! - 두 단계를 순서대로 묶는 로그인 파이프라인
//!
//! # Security
//!
//! - `client_secret`과 서명 키는 서버 설정에서만 읽습니다
//! - 액세스 토큰과 발급 토큰은 로그에 마스킹되어 남습니다
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::LinkedInLoginPipeline;
//!
//! let pipeline = LinkedInLoginPipeline::new(&state.linkedin, &state.firebase);
//! let minted = pipeline.run(code).await?;
//! ```

pub mod firebase_token_service;
pub mod linkedin_auth_service;
pub mod login_pipeline;

pub use firebase_token_service::*;
pub use linkedin_auth_service::*;
pub use login_pipeline::*;
