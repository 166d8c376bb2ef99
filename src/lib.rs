//! 강의 카탈로그 서비스 백엔드
//!
//! Rust 기반의 온라인 강의 카탈로그 REST 백엔드입니다.
//! JWT 토큰 기반 인증과 강의 → 챕터 → 서브토픽 → 퀴즈로 이어지는
//! 중첩 콘텐츠 관리를 제공합니다.
//!
//! # Features
//!
//! - **사용자 관리**: 가입, 로그인, 프로필/비밀번호 수정
//! - **JWT 인증**: Bearer 헤더와 httpOnly 쿠키를 모두 지원하는 상태 없는 인증
//! - **강의 카탈로그**: 애그리거트 단위로 저장되는 중첩 콘텐츠 트리 CRUD
//! - **동시성 제어**: 버전 검사 기반의 낙관적 잠금으로 형제 노드 수정 보호
//! - **MongoDB**: 강의/사용자 데이터 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/api/v1)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청/응답 처리, 공통 응답 봉투
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직, 불변식, 동시성 제어
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소 (문서 단위 애그리거트)
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use course_service_backend::core::state::AppState;
//! use course_service_backend::db::Database;
//!
//! // 서비스 그래프 구성 후 핸들러에 주입
//! let database = Arc::new(Database::new().await?);
//! let state = web::Data::new(AppState::new(database).await?);
//!
//! // 핸들러에서 사용
//! let user = state.user_service.signup(request).await?;
//! let token = state.token_service.generate_token(&user)?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod errors;
pub mod middlewares;
