//! Courses Entity Module
//!
//! 강의 카탈로그 도메인의 애그리게잇을 정의하는 모듈입니다.
//! Course 루트 아래에 Chapter, SubTopic, Quiz 계층이 중첩되며
//! 전체가 하나의 MongoDB 문서로 저장됩니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::courses::course::{Chapter, Course};
//!
//! let mut course = Course::new(
//!     "Rust Backend".to_string(),
//!     "Build production services".to_string(),
//! );
//! course.push_chapter(Chapter::new("Getting started".to_string(), Vec::new(), None));
//! ```

pub mod course;
