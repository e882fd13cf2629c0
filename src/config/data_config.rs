//! 서버 및 자격 증명 경로 설정 모듈
//!
//! 바인딩 주소, 업스트림 타임아웃, Rate Limiting, Firebase 서비스 계정 파일 경로와
//! 이들을 묶은 [`RelayConfig`]를 관리합니다.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::config::auth_config::{AppLinkConfig, LinkedInOAuthConfig};
use crate::errors::ConfigError;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8294;
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_RATE_LIMIT_PER_SECOND: u64 = 10;
pub const DEFAULT_RATE_LIMIT_BURST_SIZE: u32 = 20;
pub const DEFAULT_PLATFORM_CREDENTIALS: &str = "./secrets/serviceAccountFunctions.json";
pub const DEFAULT_AUTH_CREDENTIALS: &str = "./secrets/serviceAccountAuth.json";

/// 서버 바인딩 및 런타임 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// 바인딩 호스트. 기본값: "0.0.0.0"
    pub host: String,
    /// 바인딩 포트. 기본값: 8294
    pub port: u16,
    /// 업스트림 HTTP 호출 하나당 타임아웃. 기본값: 10초
    pub upstream_timeout: Duration,
    /// IP당 초당 허용 요청 수
    pub rate_limit_per_second: u64,
    /// 버스트 허용량
    pub rate_limit_burst_size: u32,
}

impl ServerConfig {
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let timeout_secs = parse_or(lookup, "UPSTREAM_TIMEOUT_SECS", DEFAULT_UPSTREAM_TIMEOUT_SECS)?;
        if timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "UPSTREAM_TIMEOUT_SECS",
                reason: "must be greater than zero".to_string(),
            });
        }

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parse_or(lookup, "PORT", DEFAULT_PORT)?,
            upstream_timeout: Duration::from_secs(timeout_secs),
            rate_limit_per_second: parse_or(lookup, "RATE_LIMIT_PER_SECOND", DEFAULT_RATE_LIMIT_PER_SECOND)?,
            rate_limit_burst_size: parse_or(lookup, "RATE_LIMIT_BURST_SIZE", DEFAULT_RATE_LIMIT_BURST_SIZE)?,
        })
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Firebase 서비스 계정 JSON 파일 경로
///
/// 두 계정은 용도가 분리되어 있습니다.
/// - `platform`: 호스팅 플랫폼(Functions) 관리 작업용
/// - `auth`: 커스텀 토큰 서명 전용
#[derive(Debug, Clone)]
pub struct CredentialPaths {
    pub platform: PathBuf,
    pub auth: PathBuf,
}

impl CredentialPaths {
    pub fn from_lookup<F>(lookup: &F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        Self {
            platform: lookup("FIREBASE_PLATFORM_CREDENTIALS")
                .unwrap_or_else(|| DEFAULT_PLATFORM_CREDENTIALS.to_string())
                .into(),
            auth: lookup("FIREBASE_AUTH_CREDENTIALS")
                .unwrap_or_else(|| DEFAULT_AUTH_CREDENTIALS.to_string())
                .into(),
        }
    }
}

/// 릴레이 전체 설정
///
/// `main`에서 한 번 만들어진 뒤 [`AppState`](crate::core::AppState) 구성에만 사용됩니다.
///
/// # Examples
///
/// ```rust,ignore
/// let config = RelayConfig::from_env()?;
/// println!("listening on {}", config.server.bind_address());
/// ```
#[derive(Debug, Clone)]
pub struct RelayConfig {
    pub linkedin: LinkedInOAuthConfig,
    pub app_link: AppLinkConfig,
    pub server: ServerConfig,
    pub credentials: CredentialPaths,
}

impl RelayConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    /// 임의의 조회 함수로부터 설정을 읽습니다. 테스트에서 환경 변수를 건드리지 않기 위해 사용합니다.
    pub fn from_lookup<F>(lookup: &F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        Ok(Self {
            linkedin: LinkedInOAuthConfig::from_lookup(lookup)?,
            app_link: AppLinkConfig::from_lookup(lookup)?,
            server: ServerConfig::from_lookup(lookup)?,
            credentials: CredentialPaths::from_lookup(lookup),
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw.trim().parse().map_err(|e: T::Err| ConfigError::InvalidValue {
            key,
            reason: format!("'{}': {}", raw, e),
        }),
    }
}
