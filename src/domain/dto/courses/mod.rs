//! # 강의 DTO 모듈
//!
//! 강의 카탈로그 도메인의 요청/응답 DTO를 정의합니다.
//!
//! ## 모듈 구성
//!
//! ```text
//! courses/
//! ├── request/    ← 강의 생성/수정, 챕터/서브토픽 생성/수정 요청
//! └── response/   ← hex 문자열 ID로 변환된 강의 트리 응답
//! ```

pub mod request;
pub mod response;

pub use request::*;
pub use response::*;
