//! 강의 관련 요청 DTO 모듈

pub mod course_request;
pub mod content_request;

pub use course_request::{CreateCourseRequest, UpdateCourseRequest};
pub use content_request::{
    ChapterRequest, SubTopicRequest, UpdateChapterRequest, UpdateSubTopicRequest,
};
