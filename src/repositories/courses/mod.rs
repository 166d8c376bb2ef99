//! 코스 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! [`CourseRepository`](course_repo::CourseRepository)를 통해 코스 애그리거트의
//! 조회와 버전 검사 기반 영속화를 제공합니다.

pub mod course_repo;
