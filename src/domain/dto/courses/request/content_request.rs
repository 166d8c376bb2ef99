//! 강의 콘텐츠(챕터/서브토픽) 요청 DTO
//!
//! 중첩 노드의 식별자는 서버가 부여하지만, 클라이언트가 조회 결과를 그대로
//! 되돌려 보내는 전체-교체 흐름을 위해 기존 ID(`id` 또는 `_id`)를 받아
//! 보존합니다. ID가 없는 항목은 새 노드로 취급해 새 ID를 부여합니다.

use mongodb::bson::oid::ObjectId;
use serde::Deserialize;

use crate::domain::entities::courses::course::{Chapter, Quiz, SubTopic};
use crate::errors::errors::AppError;

/// 서브토픽 요청 구조체
#[derive(Debug, Deserialize)]
pub struct SubTopicRequest {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    pub content: Option<String>,
}

/// 챕터 요청 구조체 (생성 및 강의 콘텐츠 전체 교체에 사용)
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChapterRequest {
    #[serde(alias = "_id")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub sub_topics: Vec<SubTopicRequest>,
    pub quiz: Option<Quiz>,
}

/// 챕터 수정 요청 구조체
///
/// 이름, 서브토픽 목록, 퀴즈를 통째로 교체합니다.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateChapterRequest {
    pub name: String,
    #[serde(default)]
    pub sub_topics: Vec<SubTopicRequest>,
    pub quiz: Option<Quiz>,
}

/// 서브토픽 수정 요청 구조체
#[derive(Debug, Deserialize)]
pub struct UpdateSubTopicRequest {
    pub name: String,
    pub content: Option<String>,
}

fn parse_optional_id(raw: Option<String>) -> Result<ObjectId, AppError> {
    match raw {
        Some(value) => ObjectId::parse_str(&value)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string())),
        None => Ok(ObjectId::new()),
    }
}

impl TryFrom<SubTopicRequest> for SubTopic {
    type Error = AppError;

    fn try_from(request: SubTopicRequest) -> Result<Self, Self::Error> {
        Ok(SubTopic {
            id: Some(parse_optional_id(request.id)?),
            name: request.name,
            content: request.content,
        })
    }
}

impl TryFrom<ChapterRequest> for Chapter {
    type Error = AppError;

    fn try_from(request: ChapterRequest) -> Result<Self, Self::Error> {
        let sub_topics = request
            .sub_topics
            .into_iter()
            .map(SubTopic::try_from)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Chapter {
            id: Some(parse_optional_id(request.id)?),
            name: request.name,
            sub_topics,
            quiz: request.quiz,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_chapter_gets_fresh_id() {
        let request: ChapterRequest =
            serde_json::from_str(r#"{"name": "Intro", "subTopics": [{"name": "Setup"}]}"#)
                .unwrap();

        let chapter = Chapter::try_from(request).unwrap();
        assert!(chapter.id.is_some());
        assert_eq!(chapter.sub_topics.len(), 1);
        assert!(chapter.sub_topics[0].id.is_some());
    }

    #[test]
    fn test_existing_id_is_preserved() {
        let oid = ObjectId::new();
        let request: ChapterRequest =
            serde_json::from_str(&format!(r#"{{"_id": "{}", "name": "Intro"}}"#, oid.to_hex()))
                .unwrap();

        let chapter = Chapter::try_from(request).unwrap();
        assert_eq!(chapter.id, Some(oid));
    }

    #[test]
    fn test_plain_id_alias_is_accepted() {
        let oid = ObjectId::new();
        let request: SubTopicRequest =
            serde_json::from_str(&format!(r#"{{"id": "{}", "name": "Setup"}}"#, oid.to_hex()))
                .unwrap();

        let topic = SubTopic::try_from(request).unwrap();
        assert_eq!(topic.id, Some(oid));
    }

    #[test]
    fn test_malformed_id_is_rejected() {
        let request: ChapterRequest =
            serde_json::from_str(r#"{"_id": "not-an-oid", "name": "Intro"}"#).unwrap();

        let result = Chapter::try_from(request);
        assert!(matches!(result, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_quiz_passes_through() {
        let request: ChapterRequest = serde_json::from_str(
            r#"{
                "name": "Intro",
                "quiz": {
                    "name": "Checkpoint",
                    "questions": [
                        {"question": "2+2?", "options": [{"option": "4", "isCorrect": true}]}
                    ]
                }
            }"#,
        )
        .unwrap();

        let chapter = Chapter::try_from(request).unwrap();
        let quiz = chapter.quiz.unwrap();
        assert_eq!(quiz.name.as_deref(), Some("Checkpoint"));
        assert!(quiz.questions[0].options[0].is_correct);
    }
}
