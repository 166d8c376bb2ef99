//! # 사용자 관련 요청 DTO 모듈
//!
//! 이 모듈은 사용자 도메인과 관련된 HTTP 요청 데이터 전송 객체(DTO)들을 정의합니다.
//! 클라이언트로부터 받은 JSON 데이터를 구조화된 Rust 타입으로 변환합니다.
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (serde)
//! 2. **존재 검증**: 필수 필드 누락은 서비스 계층에서 하나의 공통 메시지로 처리
//! 3. **형식 검증**: 이메일 형식 등은 존재 검증 이후 서비스 계층에서 수행
//!
//! 필수 필드를 `Option`으로 받는 이유: 누락 시 역직렬화 오류(기술적 메시지)가
//! 아니라 API 계약에 맞는 검증 오류 응답을 돌려주기 위해서입니다.

pub mod auth_request;

pub use auth_request::{ChangePasswordRequest, LoginRequest, SignupRequest, UpdateProfileRequest};
