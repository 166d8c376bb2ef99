use mongodb::bson::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::entities::courses::course::{Chapter, Course, Quiz, SalaryRange, SubTopic};

/// 서브토픽 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubTopicResponse {
    pub id: String,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl From<SubTopic> for SubTopicResponse {
    fn from(sub_topic: SubTopic) -> Self {
        let SubTopic { id, name, content } = sub_topic;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            content,
        }
    }
}

/// 챕터 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterResponse {
    pub id: String,
    pub name: String,
    pub sub_topics: Vec<SubTopicResponse>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
}

impl From<Chapter> for ChapterResponse {
    fn from(chapter: Chapter) -> Self {
        let Chapter {
            id,
            name,
            sub_topics,
            quiz,
        } = chapter;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            sub_topics: sub_topics.into_iter().map(SubTopicResponse::from).collect(),
            quiz,
        }
    }
}

/// 강의 응답 DTO
///
/// ObjectId를 hex 문자열로 변환하며, 내부 동시성 제어용 version 필드는
/// 노출하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CourseResponse {
    pub id: String,
    pub course_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_subtitle: Option<String>,
    pub course_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_duration: Option<String>,
    pub course_outcome: Vec<String>,
    pub course_benefits: Vec<String>,
    pub course_requirements: Vec<String>,
    pub course_languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_price: Option<f64>,
    pub course_content: Vec<ChapterResponse>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        let Course {
            id,
            course_title,
            course_subtitle,
            course_description,
            course_image,
            course_duration,
            course_outcome,
            course_benefits,
            course_requirements,
            course_languages,
            salary_range,
            course_price,
            course_content,
            created_at,
            updated_at,
            ..
        } = course;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            course_title,
            course_subtitle,
            course_description,
            course_image,
            course_duration,
            course_outcome,
            course_benefits,
            course_requirements,
            course_languages,
            salary_range,
            course_price,
            course_content: course_content.into_iter().map(ChapterResponse::from).collect(),
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_course_response_hides_version_and_maps_ids() {
        let mut course = Course::new("Rust".to_string(), "Backend".to_string());
        course.id = Some(ObjectId::new());
        course.version = 7;
        course.push_chapter(Chapter::new(
            "Intro".to_string(),
            vec![SubTopic::new("Setup".to_string(), Some("text".to_string()))],
            None,
        ));

        let response = CourseResponse::from(course.clone());
        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("version").is_none());
        assert_eq!(value["id"], course.id.unwrap().to_hex());
        assert_eq!(
            value["courseContent"][0]["subTopics"][0]["name"],
            "Setup"
        );
        assert!(value["courseContent"][0]["id"].is_string());
    }
}
