//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 횡단 관심사(Cross-cutting concerns)를
//! 처리하는 미들웨어들을 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - JWT 토큰 기반 인증 검증 (Bearer 헤더 → `token` 쿠키 순서)
//! - 검증된 사용자 정보를 request extension에 저장
//! - 선택적/강제 인증 모드 지원
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::web;
//! use crate::middlewares::AuthMiddleware;
//!
//! cfg.service(
//!     web::scope("/user")
//!         .wrap(AuthMiddleware::required())
//!         .service(handlers::users::current_user),
//! );
//! ```

pub mod auth_middleware;
mod auth_inner;

// 미들웨어 재export
pub use auth_middleware::AuthMiddleware;
