//! 강의 관련 응답 DTO 모듈

pub mod course_response;

pub use course_response::{ChapterResponse, CourseResponse, SubTopicResponse};
