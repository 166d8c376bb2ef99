//! # 사용자 DTO 모듈
//!
//! 사용자 도메인의 요청/응답 DTO를 정의합니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! users/
//! ├── request/    ← 회원가입, 로그인, 비밀번호 변경, 프로필 갱신 요청
//! └── response/   ← 비밀번호를 제외한 사용자 응답
//! ```

pub mod request;
pub mod response;

// Re-exports for convenience
pub use request::*;
pub use response::*;
