//! Course Aggregate Implementation
//!
//! 강의 카탈로그의 핵심 도메인 엔티티입니다.
//! Course는 애그리게잇 루트이며 Chapter → SubTopic → Quiz 계층 전체가
//! 하나의 MongoDB 문서로 저장됩니다. 중첩 노드의 모든 변경은
//! 문서 전체를 읽고 수정한 뒤 다시 저장하는 방식으로 이루어집니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 강의 수료 후 예상 연봉 범위
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SalaryRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

/// 퀴즈 문항의 선택지
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizOption {
    pub option: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// 퀴즈 문항 (질문 + 선택지 목록)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub question: String,
    #[serde(default)]
    pub options: Vec<QuizOption>,
}

/// 챕터에 부속된 퀴즈
///
/// 퀴즈는 독립적인 식별자를 갖지 않습니다. 소유 챕터의 ID로 접근하며
/// 생성/수정은 항상 통째로 교체, 삭제는 필드 제거로 처리됩니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Quiz {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default)]
    pub questions: Vec<QuizQuestion>,
}

/// 챕터 하위의 학습 토픽
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubTopic {
    /// 저장 시점에 서버가 부여하는 식별자
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<String>,
}

impl SubTopic {
    /// 새 서브토픽 생성. ID는 즉시 부여됩니다.
    pub fn new(name: String, content: Option<String>) -> Self {
        Self {
            id: Some(ObjectId::new()),
            name,
            content,
        }
    }
}

/// 강의의 챕터
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Chapter {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub name: String,
    #[serde(default)]
    pub sub_topics: Vec<SubTopic>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quiz: Option<Quiz>,
}

impl Chapter {
    /// 새 챕터 생성. 챕터와 포함된 서브토픽 모두 새 ID를 부여받습니다.
    pub fn new(name: String, sub_topics: Vec<SubTopic>, quiz: Option<Quiz>) -> Self {
        Self {
            id: Some(ObjectId::new()),
            name,
            sub_topics,
            quiz,
        }
    }

    /// ID로 서브토픽 조회
    pub fn find_sub_topic(&self, sub_topic_id: &ObjectId) -> Option<&SubTopic> {
        self.sub_topics
            .iter()
            .find(|topic| topic.id.as_ref() == Some(sub_topic_id))
    }

    /// ID로 서브토픽 조회 (가변 참조)
    pub fn find_sub_topic_mut(&mut self, sub_topic_id: &ObjectId) -> Option<&mut SubTopic> {
        self.sub_topics
            .iter_mut()
            .find(|topic| topic.id.as_ref() == Some(sub_topic_id))
    }

    /// 서브토픽을 목록 끝에 추가
    pub fn push_sub_topic(&mut self, sub_topic: SubTopic) {
        self.sub_topics.push(sub_topic);
    }

    /// 서브토픽 제거. 나머지 항목의 순서는 유지됩니다.
    pub fn remove_sub_topic(&mut self, sub_topic_id: &ObjectId) -> bool {
        let before = self.sub_topics.len();
        self.sub_topics
            .retain(|topic| topic.id.as_ref() != Some(sub_topic_id));
        self.sub_topics.len() < before
    }
}

/// 강의 애그리게잇 루트
///
/// 저장 문서의 필드명은 camelCase, 중첩 노드의 식별자는 `_id`를 사용합니다.
/// `version`은 낙관적 동시성 제어용 카운터로, 저장할 때마다 1씩 증가합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    pub course_title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_subtitle: Option<String>,
    pub course_description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_image: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_duration: Option<String>,
    #[serde(default)]
    pub course_outcome: Vec<String>,
    #[serde(default)]
    pub course_benefits: Vec<String>,
    #[serde(default)]
    pub course_requirements: Vec<String>,
    /// 항상 정규화된 문자열 목록으로 저장됩니다. [`normalize_languages`] 참고.
    #[serde(default)]
    pub course_languages: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salary_range: Option<SalaryRange>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub course_price: Option<f64>,
    /// 챕터 목록. 생성 순서가 곧 노출 순서입니다.
    #[serde(default)]
    pub course_content: Vec<Chapter>,
    /// 낙관적 동시성 제어 카운터
    #[serde(default)]
    pub version: i64,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl Course {
    /// 필수 필드만으로 새 강의 생성. 나머지 필드는 기본값으로 시작합니다.
    pub fn new(course_title: String, course_description: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            course_title,
            course_subtitle: None,
            course_description,
            course_image: None,
            course_duration: None,
            course_outcome: Vec::new(),
            course_benefits: Vec::new(),
            course_requirements: Vec::new(),
            course_languages: Vec::new(),
            salary_range: None,
            course_price: None,
            course_content: Vec::new(),
            version: 0,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 수정 시간 갱신
    pub fn touch(&mut self) {
        self.updated_at = DateTime::now();
    }

    /// ID로 챕터 조회
    pub fn find_chapter(&self, chapter_id: &ObjectId) -> Option<&Chapter> {
        self.course_content
            .iter()
            .find(|chapter| chapter.id.as_ref() == Some(chapter_id))
    }

    /// ID로 챕터 조회 (가변 참조)
    pub fn find_chapter_mut(&mut self, chapter_id: &ObjectId) -> Option<&mut Chapter> {
        self.course_content
            .iter_mut()
            .find(|chapter| chapter.id.as_ref() == Some(chapter_id))
    }

    /// 챕터를 목록 끝에 추가
    pub fn push_chapter(&mut self, chapter: Chapter) {
        self.course_content.push(chapter);
    }

    /// 챕터 제거. 나머지 챕터의 순서는 유지됩니다.
    pub fn remove_chapter(&mut self, chapter_id: &ObjectId) -> bool {
        let before = self.course_content.len();
        self.course_content
            .retain(|chapter| chapter.id.as_ref() != Some(chapter_id));
        self.course_content.len() < before
    }

    /// ID로 서브토픽 조회 (모든 챕터 탐색)
    pub fn find_sub_topic(&self, sub_topic_id: &ObjectId) -> Option<&SubTopic> {
        self.course_content
            .iter()
            .find_map(|chapter| chapter.find_sub_topic(sub_topic_id))
    }

    /// 서브토픽을 소유한 챕터 조회 (가변 참조)
    pub fn find_owning_chapter_mut(&mut self, sub_topic_id: &ObjectId) -> Option<&mut Chapter> {
        self.course_content
            .iter_mut()
            .find(|chapter| chapter.find_sub_topic(sub_topic_id).is_some())
    }
}

/// 강의 언어 입력 항목
///
/// 클라이언트는 `"JS"` 같은 문자열과 `{"type": "JS"}` 같은 객체를
/// 섞어서 보낼 수 있습니다. 저장 전에 항상 문자열로 정규화합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LanguageEntry {
    Name(String),
    Tagged {
        #[serde(rename = "type")]
        language_type: String,
    },
}

/// 언어 목록 정규화
///
/// 객체 항목은 `type` 값으로 축약하고 문자열 항목은 그대로 통과시킵니다.
/// 입력 순서를 유지하며, 이미 정규화된 목록에 적용해도 결과가 변하지 않습니다.
pub fn normalize_languages(entries: Vec<LanguageEntry>) -> Vec<String> {
    entries
        .into_iter()
        .map(|entry| match entry {
            LanguageEntry::Name(name) => name,
            LanguageEntry::Tagged { language_type } => language_type,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> Course {
        Course::new("Rust Backend".to_string(), "Build services".to_string())
    }

    #[test]
    fn test_normalize_languages_mixed_entries() {
        let entries = vec![
            LanguageEntry::Tagged {
                language_type: "JS".to_string(),
            },
            LanguageEntry::Name("Go".to_string()),
            LanguageEntry::Tagged {
                language_type: "Rust".to_string(),
            },
        ];

        assert_eq!(normalize_languages(entries), vec!["JS", "Go", "Rust"]);
    }

    #[test]
    fn test_normalize_languages_is_idempotent() {
        let entries = vec![
            LanguageEntry::Tagged {
                language_type: "JS".to_string(),
            },
            LanguageEntry::Name("Go".to_string()),
        ];

        let once = normalize_languages(entries);
        let twice = normalize_languages(once.iter().cloned().map(LanguageEntry::Name).collect());

        assert_eq!(once, twice);
    }

    #[test]
    fn test_language_entry_deserializes_both_shapes() {
        let entries: Vec<LanguageEntry> =
            serde_json::from_str(r#"[{"type": "JS"}, "Go"]"#).unwrap();

        assert_eq!(normalize_languages(entries), vec!["JS", "Go"]);
    }

    #[test]
    fn test_push_chapter_preserves_order() {
        let mut course = sample_course();
        course.push_chapter(Chapter::new("One".to_string(), Vec::new(), None));
        course.push_chapter(Chapter::new("Two".to_string(), Vec::new(), None));
        course.push_chapter(Chapter::new("Three".to_string(), Vec::new(), None));

        let names: Vec<&str> = course
            .course_content
            .iter()
            .map(|chapter| chapter.name.as_str())
            .collect();
        assert_eq!(names, vec!["One", "Two", "Three"]);
    }

    #[test]
    fn test_new_chapters_get_distinct_ids() {
        let first = Chapter::new("One".to_string(), Vec::new(), None);
        let second = Chapter::new("Two".to_string(), Vec::new(), None);

        assert!(first.id.is_some());
        assert_ne!(first.id, second.id);
    }

    #[test]
    fn test_remove_middle_sub_topic_keeps_order() {
        let mut chapter = Chapter::new("One".to_string(), Vec::new(), None);
        chapter.push_sub_topic(SubTopic::new("a".to_string(), None));
        chapter.push_sub_topic(SubTopic::new("b".to_string(), None));
        chapter.push_sub_topic(SubTopic::new("c".to_string(), None));

        let middle_id = chapter.sub_topics[1].id.unwrap();
        assert!(chapter.remove_sub_topic(&middle_id));

        let names: Vec<&str> = chapter
            .sub_topics
            .iter()
            .map(|topic| topic.name.as_str())
            .collect();
        assert_eq!(names, vec!["a", "c"]);
    }

    #[test]
    fn test_remove_missing_sub_topic_returns_false() {
        let mut chapter = Chapter::new("One".to_string(), Vec::new(), None);
        chapter.push_sub_topic(SubTopic::new("a".to_string(), None));

        assert!(!chapter.remove_sub_topic(&ObjectId::new()));
        assert_eq!(chapter.sub_topics.len(), 1);
    }

    #[test]
    fn test_find_missing_chapter_returns_none() {
        let course = sample_course();
        assert!(course.find_chapter(&ObjectId::new()).is_none());
    }

    #[test]
    fn test_find_owning_chapter_of_sub_topic() {
        let mut course = sample_course();
        let mut chapter = Chapter::new("One".to_string(), Vec::new(), None);
        chapter.push_sub_topic(SubTopic::new("a".to_string(), None));
        let topic_id = chapter.sub_topics[0].id.unwrap();
        course.push_chapter(chapter);
        course.push_chapter(Chapter::new("Two".to_string(), Vec::new(), None));

        let owner = course.find_owning_chapter_mut(&topic_id).unwrap();
        assert_eq!(owner.name, "One");
    }

    #[test]
    fn test_quiz_replace_and_clear() {
        let mut chapter = Chapter::new("One".to_string(), Vec::new(), None);
        assert!(chapter.quiz.is_none());

        chapter.quiz = Some(Quiz {
            name: Some("Checkpoint".to_string()),
            questions: vec![QuizQuestion {
                question: "2 + 2 = ?".to_string(),
                options: vec![
                    QuizOption {
                        option: "4".to_string(),
                        is_correct: true,
                    },
                    QuizOption {
                        option: "5".to_string(),
                        is_correct: false,
                    },
                ],
            }],
        });
        assert_eq!(chapter.quiz.as_ref().unwrap().questions.len(), 1);

        chapter.quiz = None;
        assert!(chapter.quiz.is_none());
    }

    #[test]
    fn test_course_serializes_with_camel_case_keys() {
        let mut course = sample_course();
        course.course_languages = vec!["JS".to_string()];
        course.push_chapter(Chapter::new("One".to_string(), Vec::new(), None));

        let value = serde_json::to_value(&course).unwrap();
        assert!(value.get("courseTitle").is_some());
        assert!(value.get("courseLanguages").is_some());
        assert!(value.get("courseContent").is_some());
        assert!(value.get("createdAt").is_some());
        assert!(value["courseContent"][0].get("_id").is_some());
        assert!(value["courseContent"][0].get("subTopics").is_some());
    }

    #[test]
    fn test_quiz_option_uses_is_correct_rename() {
        let option: QuizOption =
            serde_json::from_str(r#"{"option": "4", "isCorrect": true}"#).unwrap();
        assert!(option.is_correct);

        let defaulted: QuizOption = serde_json::from_str(r#"{"option": "5"}"#).unwrap();
        assert!(!defaulted.is_correct);
    }
}
