//! # Core Module
//!
//! 애플리케이션의 수명과 함께하는 핵심 구성 요소를 제공합니다.
//!
//! ## 모듈 구성
//!
//! ### [`state`] - 공유 애플리케이션 상태
//! - **AppState**: 부트스트랩 시 한 번 구성되는 서비스 컨테이너
//! - **명시적 주입**: 전역 싱글톤 대신 `web::Data<AppState>`로 핸들러에 전달
//! - **연결 공유**: 모든 서비스가 하나의 MongoDB 연결 풀을 재사용
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::core::state::AppState;
//!
//! let state = web::Data::new(AppState::new(database).await?);
//!
//! HttpServer::new(move || {
//!     App::new()
//!         .app_data(state.clone())
//!         .configure(configure_all_routes)
//! })
//! ```

pub mod state;

pub use state::AppState;
