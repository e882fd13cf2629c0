//! LinkedIn 인증 릴레이 메인 애플리케이션
//!
//! 설정과 Firebase 서비스 계정을 로드하고 Actix-web 기반 HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::{middleware, web, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};
use linkedin_auth_relay::config::{FirebaseCredentials, RelayConfig, ServerConfig};
use linkedin_auth_relay::core::AppState;
use linkedin_auth_relay::errors::ConfigError;
use linkedin_auth_relay::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // 환경 설정 및 로깅 초기화
    let profile_env = load_env_file();
    init_logging();

    info!("🚀 LinkedIn 인증 릴레이 시작중... ({})", profile_env);

    let (config, state) = match initialize_state() {
        Ok(loaded) => loaded,
        Err(e) => {
            error!("❌ 초기화 실패: {}", e);
            return Err(std::io::Error::other(e));
        }
    };

    info!("✅ 설정 및 자격 증명 로드 완료");

    start_http_server(&config.server, web::Data::new(state)).await
}

/// 설정을 읽고 두 개의 서비스 계정을 로드하여 `AppState`를 구성합니다.
///
/// 이후 요청 처리 중에는 설정을 다시 읽지 않습니다.
fn initialize_state() -> Result<(RelayConfig, AppState), ConfigError> {
    let config = RelayConfig::from_env()?;
    info!("🔧 LinkedIn 설정: {:?}", config.linkedin);

    let credentials = FirebaseCredentials::load(&config.credentials)?;
    let state = AppState::build(&config, credentials)?;

    Ok((config, state))
}

/// HTTP 서버를 구성하고 실행합니다
///
/// CORS, Rate Limiting, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 포트 바인딩 실패, Rate Limit 설정 오류 또는 서버 실행 오류
async fn start_http_server(server: &ServerConfig, state: web::Data<AppState>) -> std::io::Result<()> {
    let bind_address = server.bind_address();

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(server.rate_limit_per_second)
        .burst_size(server.rate_limit_burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        server.rate_limit_per_second, server.rate_limit_burst_size
    );
    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 로그인 시작: http://{}/auth/linkedin", bind_address);

    HttpServer::new(move || {
        App::new()
            .app_data(state.clone())
            // Rate Limiting 미들웨어
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_all_routes)
    })
    .bind(bind_address)?
    .run()
    .await
}

/// 환경별 설정 파일을 로드합니다
///
/// 로거 초기화 전에 실행되므로, 결과는 문자열로 돌려주고 기동 로그에 남깁니다.
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
fn load_env_file() -> String {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    let loaded = if filename == ".env" {
        dotenv().is_ok()
    } else {
        dotenv::from_filename(filename).is_ok()
    };

    if loaded {
        format!("profile={}, {} 로드됨", profile, filename)
    } else {
        format!("profile={}, {} 없음 (프로세스 환경 변수 사용)", profile, filename)
    }
}

/// 로깅 시스템을 초기화합니다
///
/// * `RUST_LOG` - 로깅 레벨 설정 (기본값: "info,actix_web=info")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=info"));
}

/// CORS 설정을 구성합니다
///
/// 브라우저 기반 로그인 시작을 위해 모든 오리진의 GET 요청을 허용합니다.
fn configure_cors() -> Cors {
    Cors::default()
        .allow_any_origin()
        .allowed_methods(vec!["GET", "OPTIONS"])
        .allow_any_header()
        .max_age(3600)
}
