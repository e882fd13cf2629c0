//! LinkedIn 로그인 파이프라인
//!
//! 콜백 하나를 처리하는 순차 단계들을 묶습니다.
//! 단계 사이의 실패는 `?`로 즉시 전파되고, 재시도는 없습니다.

use crate::domain::{CodeReceived, TokenMinted};
use crate::errors::RelayResult;
use crate::services::auth::{FirebaseTokenService, LinkedInAuthService};

/// 요청 하나 동안만 사는 파이프라인. 공유 서비스에 대한 참조만 가집니다.
pub struct LinkedInLoginPipeline<'a> {
    linkedin: &'a LinkedInAuthService,
    firebase: &'a FirebaseTokenService,
}

impl<'a> LinkedInLoginPipeline<'a> {
    pub fn new(linkedin: &'a LinkedInAuthService, firebase: &'a FirebaseTokenService) -> Self {
        Self { linkedin, firebase }
    }

    /// 인증 코드로부터 Firebase 커스텀 토큰까지 진행합니다.
    ///
    /// `CodeReceived → TokenReceived → ProfileReceived → TokenMinted`
    pub async fn run(&self, code: String) -> RelayResult<TokenMinted> {
        // 1. 인증 코드 → 액세스 토큰
        log::info!("🔵 인증 코드를 액세스 토큰으로 교환합니다...");
        let token = self.linkedin.exchange_code(CodeReceived { code }).await?;

        // 2. 액세스 토큰 → 프로필
        log::info!("🔵 LinkedIn 프로필 조회 중...");
        let profile = self.linkedin.fetch_profile(token).await?;

        // 3. 프로필 → Firebase 커스텀 토큰
        log::info!("🔵 토큰 서명 서비스 계정으로 Firebase 토큰 생성 중...");
        self.firebase.mint(profile)
    }
}
