//! 사용자 관리 서비스 모듈
//!
//! 사용자 생명주기와 관련된 비즈니스 로직을 담당하는 서비스를 제공합니다.
//! 가입, 로그인 검증, 프로필 관리 등의 핵심 기능을 구현합니다.
//!
//! # Features
//!
//! - 사용자 가입 및 검증
//! - 비밀번호 해싱 및 로그인 검증
//! - 프로필 및 비밀번호 수정
//!
//! # Security
//!
//! - bcrypt 비밀번호 해싱
//! - 이메일 중복 방지
//! - 입력값 검증
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(user_repo);
//! let user = user_service.signup(request).await?;
//! ```

pub mod user_service;
