//! # Core Module
//!
//! 전역 싱글톤 대신, 기동 시 명시적으로 구성되는 [`AppState`]를 제공합니다.
//!
//! ```rust,ignore
//! let config = RelayConfig::from_env()?;
//! let credentials = FirebaseCredentials::load(&config.credentials)?;
//! let state = web::Data::new(AppState::build(&config, credentials)?);
//!
//! HttpServer::new(move || App::new().app_data(state.clone()).configure(configure_all_routes))
//! ```

pub mod app_state;

pub use app_state::AppState;
