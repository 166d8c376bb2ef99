//! 강의 카탈로그 서비스 모듈
//!
//! 강의 애그리거트(강의 → 챕터 → 서브토픽 → 퀴즈)에 대한
//! 비즈니스 로직을 담당하는 서비스를 제공합니다.
//!
//! # Features
//!
//! - 강의 생성/조회/수정/삭제
//! - 챕터/서브토픽/퀴즈 중첩 CRUD
//! - 언어 목록 정규화와 노드 ID 부여
//! - 버전 검사 기반 동시성 제어
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::courses::CourseService;
//!
//! let course_service = CourseService::new(course_repo);
//! let course = course_service.create_course(request).await?;
//! ```

pub mod course_service;

pub use course_service::CourseService;
