//! 로그인 파이프라인 단계
//!
//! 콜백 처리는 아래 순서로만 진행되며, 각 단계는 이전 단계의 값을 소비해야
//! 만들 수 있습니다. 실패하면 그 자리에서 `RelayError`로 끝납니다.
//!
//! ```text
//! CodeReceived ──exchange──► TokenReceived ──userinfo──► ProfileReceived ──sign──► TokenMinted
//! ```

use std::fmt;

use crate::domain::models::federated_token::FederatedIdentity;
use crate::domain::models::linkedin_profile::ExternalProfile;
use crate::utils::string_utils::mask_secret;

/// 콜백에서 인증 코드를 받은 상태
#[derive(Debug, Clone)]
pub struct CodeReceived {
    pub code: String,
}

/// 액세스 토큰을 받은 상태. 토큰은 프로필 조회 한 번에만 쓰입니다.
#[derive(Clone)]
pub struct TokenReceived {
    pub access_token: String,
}

impl fmt::Debug for TokenReceived {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenReceived")
            .field("access_token", &mask_secret(&self.access_token))
            .finish()
    }
}

/// 프로필을 받은 상태
#[derive(Debug, Clone)]
pub struct ProfileReceived {
    pub profile: ExternalProfile,
}

/// Firebase 커스텀 토큰이 발급된 최종 상태
#[derive(Clone)]
pub struct TokenMinted {
    pub identity: FederatedIdentity,
    pub firebase_token: String,
}

impl fmt::Debug for TokenMinted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenMinted")
            .field("identity", &self.identity)
            .field("firebase_token", &mask_secret(&self.firebase_token))
            .finish()
    }
}
