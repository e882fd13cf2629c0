//! # Configuration Module
//!
//! 릴레이의 설정 관리를 담당하는 모듈입니다.
//! 모든 설정은 프로세스 시작 시 한 번 읽혀 검증되며, 이후에는 읽기 전용입니다.
//! 잘못된 설정은 요청 처리 중이 아니라 기동 시점에 실패합니다.
//!
//! ## 모듈 구성
//!
//! - [`auth_config`] - LinkedIn OAuth 클라이언트, 앱 URL 스킴
//! - [`data_config`] - 서버 바인딩, 타임아웃, Rate Limiting, 자격 증명 경로
//! - [`credentials`] - Firebase 서비스 계정 JSON 로딩
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::config::{FirebaseCredentials, RelayConfig};
//!
//! let config = RelayConfig::from_env()?;
//! let credentials = FirebaseCredentials::load(&config.credentials)?;
//! ```
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 필수
//! export LINKEDIN_CLIENT_ID="your-client-id"
//! export LINKEDIN_CLIENT_SECRET="your-client-secret"
//! export LINKEDIN_REDIRECT_URI="https://relay.example.com/auth/linkedin/callback"
//!
//! # 선택
//! export PORT="8294"
//! export APP_URL_SCHEME="fbla-learning-app"
//! export FIREBASE_PLATFORM_CREDENTIALS="./secrets/serviceAccountFunctions.json"
//! export FIREBASE_AUTH_CREDENTIALS="./secrets/serviceAccountAuth.json"
//! export UPSTREAM_TIMEOUT_SECS="10"
//! ```

pub mod auth_config;
pub mod credentials;
pub mod data_config;

pub use auth_config::*;
pub use credentials::*;
pub use data_config::*;
