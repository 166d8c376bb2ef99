//! 공통 유틸리티 함수 모듈
//!
//! 애플리케이션 전체에서 사용되는 공통 유틸리티 함수들을 제공합니다.
//! 문자열 처리, 터미널 출력 등의 기능을 포함합니다.
//!
//! # Modules
//!
//! - [`string_utils`] - 문자열 검증, 정리, 변환 유틸리티
//! - [`display_terminal`] - 터미널 출력 포맷팅 함수들
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::utils::string_utils::has_text;
//! use crate::utils::display_terminal::print_boxed_title;
//!
//! // 필수 필드 확인
//! if !has_text(&request.name) {
//!     return Err(AppError::ValidationError("Please provide all the required fields".to_string()));
//! }
//!
//! // 터미널 출력
//! print_boxed_title("System Initialized");
//! ```

pub mod display_terminal;
pub mod string_utils;
