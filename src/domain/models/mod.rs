//! # Domain Models Module
//!
//! 영속 엔티티와 구별되는 도메인 값 객체들을 정의합니다.
//! 식별자보다 값 자체가 중요한 객체들로, 주로 인증 파이프라인에서 사용됩니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/    ← 인증된 요청 컨텍스트 (AuthenticatedUser)
//! └── token/   ← JWT 클레임 구조체 (TokenClaims)
//! ```

pub mod auth;
pub mod token;
