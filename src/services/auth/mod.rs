//! 인증 및 보안 서비스 모듈
//!
//! JWT 기반 토큰 인증을 담당하는 서비스를 제공합니다.
//!
//! # Features
//!
//! - JWT 액세스 토큰 생성 및 검증
//! - Authorization 헤더에서 Bearer 토큰 추출
//! - 토큰 만료 시간 관리
//!
//! # Security
//!
//! - HMAC-SHA256 토큰 서명
//! - 만료/변조 토큰 거부
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::TokenService;
//!
//! let token_service = TokenService::new();
//! let token = token_service.generate_token(&user)?;
//! let claims = token_service.verify_token(&token)?;
//! ```

pub mod token_service;

pub use token_service::*;
