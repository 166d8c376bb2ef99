//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층에 위임하고, 결과를 공통 응답 봉투
//! `{"success": bool, "message": String, "data": ...}`로 변환하는
//! 핸들러 함수들을 제공합니다.
//!
//! ## 모듈 구성
//!
//! - [`users`] - 회원가입/로그인/로그아웃, 내 정보, 비밀번호/프로필 변경
//! - [`courses`] - 강의/챕터/서브토픽/퀴즈 CRUD
//!
//! ## 에러 처리
//!
//! 모든 핸들러는 `Result<HttpResponse, AppError>`를 반환하며, 에러는
//! [`AppError`](crate::errors::errors::AppError)의 `ResponseError` 구현을
//! 통해 상태 코드와 실패 봉투로 자동 변환됩니다.

pub mod courses;
pub mod users;
