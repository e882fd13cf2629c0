//! 애플리케이션 상태 (의존성 컨테이너)
//!
//! 기동 시 한 번 구성되어 `web::Data<AppState>`로 모든 워커에 공유됩니다.
//! 내부 값은 전부 읽기 전용이며 요청 간에 변경되지 않습니다.

use reqwest::Client;

use crate::config::{AppLinkConfig, FirebaseCredentials, RelayConfig, ServiceAccountCredentials};
use crate::errors::ConfigError;
use crate::services::auth::{FirebaseTokenService, LinkedInAuthService, LinkedInLoginPipeline};

/// 릴레이 공유 상태
pub struct AppState {
    /// LinkedIn OAuth 클라이언트
    pub linkedin: LinkedInAuthService,
    /// 토큰 서명 전용 계정으로 만든 커스텀 토큰 발급기
    pub firebase: FirebaseTokenService,
    /// 앱 복귀 URL 설정
    pub app_link: AppLinkConfig,
    /// 플랫폼 관리용 서비스 계정
    pub platform: ServiceAccountCredentials,
}

impl AppState {
    /// 설정과 자격 증명으로 상태를 구성합니다.
    ///
    /// 업스트림 호출용 HTTP 클라이언트는 여기서 타임아웃과 함께 한 번만 만들어집니다.
    ///
    /// # Errors
    ///
    /// * `ConfigError::HttpClient` - HTTP 클라이언트 생성 실패
    /// * `ConfigError::SigningKey` - 서명 키 파싱 실패
    pub fn build(config: &RelayConfig, credentials: FirebaseCredentials) -> Result<Self, ConfigError> {
        let http = Client::builder()
            .timeout(config.server.upstream_timeout)
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()?;

        let firebase = FirebaseTokenService::from_credentials(&credentials.auth)?;

        Ok(Self {
            linkedin: LinkedInAuthService::new(config.linkedin.clone(), http),
            firebase,
            app_link: config.app_link.clone(),
            platform: credentials.platform,
        })
    }

    /// 요청 하나를 위한 로그인 파이프라인
    pub fn login_pipeline(&self) -> LinkedInLoginPipeline<'_> {
        LinkedInLoginPipeline::new(&self.linkedin, &self.firebase)
    }
}
