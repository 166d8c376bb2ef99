//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 핸들러와 리포지토리 사이에서 도메인 규칙을 구현합니다. 서비스는
//! 애플리케이션 기동 시 한 번 생성되어 `AppState`를 통해 공유됩니다.
//!
//! # Features
//!
//! - 사용자 생명주기 관리 (가입, 로그인, 프로필/비밀번호 수정)
//! - JWT 토큰 기반 인증 시스템
//! - 강의 카탈로그 관리 (강의/챕터/서브토픽/퀴즈)
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, users::UserService};
//!
//! let user_service = UserService::new(user_repo);
//! let token_service = TokenService::new();
//! ```

pub mod auth;
pub mod courses;
pub mod users;
