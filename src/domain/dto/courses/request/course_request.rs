//! 강의 요청 DTO
//!
//! 강의 생성/수정 요청의 본문을 매핑합니다.
//!
//! 수정 요청은 전체 교체(full-field replace) 의미론을 따릅니다. 선택적
//! 필드는 생략 시 기본값으로 덮어쓰므로 유지하려면 다시 보내야 합니다.
//! 예외: 제목/설명은 생략 시 기존 값을 유지하고, 콘텐츠 트리는 전달된
//! 경우에만 교체됩니다.

use serde::Deserialize;

use crate::domain::dto::courses::request::content_request::ChapterRequest;
use crate::domain::entities::courses::course::{LanguageEntry, SalaryRange};
use crate::utils::string_utils::deserialize_optional_string;

/// 강의 생성 요청 구조체
///
/// `courseTitle`과 `courseDescription`만 필수이며 존재 검증은 서비스
/// 계층에서 수행합니다. 나머지 필드는 전부 선택적입니다.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCourseRequest {
    pub course_title: Option<String>,

    // 선택적 문자열 필드는 공백을 정리하고 빈 값은 None으로 둡니다.
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub course_subtitle: Option<String>,

    pub course_description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub course_image: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub course_duration: Option<String>,
    pub course_outcome: Option<Vec<String>>,
    pub course_benefits: Option<Vec<String>>,
    pub course_requirements: Option<Vec<String>>,
    /// 문자열과 `{"type": ...}` 객체가 섞인 목록을 허용합니다
    pub course_languages: Option<Vec<LanguageEntry>>,
    pub salary_range: Option<SalaryRange>,
    pub course_price: Option<f64>,
    pub course_content: Option<Vec<ChapterRequest>>,
}

/// 강의 수정 요청 구조체
///
/// 수정 가능한 필드 집합 전체를 새 값으로 덮어씁니다. 제목과 설명은
/// 생략 시 기존 값이 유지되고, `courseContent`는 전달된 경우에만
/// 교체됩니다.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCourseRequest {
    pub course_title: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub course_subtitle: Option<String>,

    pub course_description: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub course_image: Option<String>,

    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub course_duration: Option<String>,

    pub course_outcome: Option<Vec<String>>,
    pub course_benefits: Option<Vec<String>>,
    pub course_requirements: Option<Vec<String>>,
    pub course_languages: Option<Vec<LanguageEntry>>,
    pub salary_range: Option<SalaryRange>,
    pub course_price: Option<f64>,
    pub course_content: Option<Vec<ChapterRequest>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_accepts_mixed_language_entries() {
        let request: CreateCourseRequest = serde_json::from_str(
            r#"{
                "courseTitle": "Rust Backend",
                "courseDescription": "Build services",
                "courseLanguages": [{"type": "JS"}, "Go"]
            }"#,
        )
        .unwrap();

        assert_eq!(request.course_title.as_deref(), Some("Rust Backend"));
        assert_eq!(request.course_languages.map(|l| l.len()), Some(2));
    }

    #[test]
    fn test_update_request_covers_the_mutable_set() {
        let request: UpdateCourseRequest = serde_json::from_str(
            r#"{
                "courseTitle": "New title",
                "courseDescription": "New description",
                "courseLanguages": [{"type": "Rust"}],
                "coursePrice": 99.0
            }"#,
        )
        .unwrap();

        assert_eq!(request.course_title.as_deref(), Some("New title"));
        assert_eq!(
            request.course_description.as_deref(),
            Some("New description")
        );
        assert_eq!(request.course_languages.map(|l| l.len()), Some(1));
        assert_eq!(request.course_price, Some(99.0));
        assert!(request.course_content.is_none());
    }

    #[test]
    fn test_blank_optional_strings_become_none() {
        let request: CreateCourseRequest = serde_json::from_str(
            r#"{
                "courseTitle": "Rust Backend",
                "courseDescription": "Build services",
                "courseImage": "   ",
                "courseDuration": "  6 weeks  "
            }"#,
        )
        .unwrap();

        assert_eq!(request.course_image, None);
        assert_eq!(request.course_duration.as_deref(), Some("6 weeks"));
    }
}
