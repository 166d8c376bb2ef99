//! Users Entity Module
//!
//! 사용자 도메인의 핵심 엔티티들을 정의하는 모듈입니다.
//! 이메일/패스워드 기반 로컬 인증 계정을 표현하는 User 엔티티를 포함합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::user::User;
//!
//! let user = User::new_local(
//!     "Jane".to_string(),
//!     "user@example.com".to_string(),
//!     hashed_password,
//!     "student".to_string(),
//! );
//! ```

pub mod user;
