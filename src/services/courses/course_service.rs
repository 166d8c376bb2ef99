//! # 강의 카탈로그 서비스 구현
//!
//! 강의 애그리거트(강의 → 챕터 → 서브토픽 → 퀴즈)에 대한 비즈니스 로직을
//! 구현합니다. 중첩 노드의 모든 변경은 루트 문서를 읽어 메모리에서 수정한 뒤
//! 문서 전체를 다시 저장하는 방식으로 처리됩니다.
//!
//! ## 동시성 제어
//!
//! 문서의 `version` 카운터를 조건으로 거는 교체 연산을 사용합니다.
//! 저장 시점에 다른 요청이 먼저 문서를 수정했다면 교체가 실패하고,
//! 서비스는 문서를 다시 읽어 변경을 재적용합니다. 재시도가 소진되면
//! `ConflictError`를 반환합니다. 동시에 들어온 두 "챕터 추가" 요청은
//! 이 방식으로 어느 한쪽도 유실되지 않습니다.

use crate::domain::dto::courses::request::{
    ChapterRequest, CreateCourseRequest, SubTopicRequest, UpdateChapterRequest,
    UpdateCourseRequest, UpdateSubTopicRequest,
};
use crate::domain::entities::courses::course::{
    Chapter, Course, Quiz, SubTopic, normalize_languages,
};
use crate::errors::errors::{AppError, AppResult};
use crate::repositories::courses::course_repo::CourseRepository;
use crate::utils::string_utils::{clean_optional_string, has_text};
use mongodb::bson::oid::ObjectId;
use std::sync::Arc;

/// 버전 충돌 시 재시도 한도
const MAX_PERSIST_ATTEMPTS: usize = 5;

/// 루트 문서를 찾는 방법
///
/// 챕터/서브토픽 ID는 전역적으로 유일하므로 내장 노드 ID만으로
/// 소유 문서를 특정할 수 있습니다.
enum CourseLookup<'a> {
    ById(&'a str),
    ByChapterId(&'a str),
    BySubTopicId(&'a str),
}

/// 강의 카탈로그 비즈니스 로직 서비스
///
/// ## 주요 책임 (Responsibilities)
///
/// 1. **강의 관리**: 생성, 목록/단건 조회, 수정, 삭제
/// 2. **콘텐츠 관리**: 챕터/서브토픽/퀴즈의 추가, 조회, 교체, 제거
/// 3. **불변식 유지**: 언어 목록 정규화, 노드 ID 부여, 순서 보존
/// 4. **동시성 제어**: 버전 검사 기반 재시도 루프
pub struct CourseService {
    /// 강의 데이터 액세스 리포지토리
    course_repo: Arc<CourseRepository>,
}

impl CourseService {
    /// 새 서비스 인스턴스를 생성합니다.
    pub fn new(course_repo: Arc<CourseRepository>) -> Self {
        Self { course_repo }
    }

    // ------------------------------------------------------------------
    // 강의
    // ------------------------------------------------------------------

    /// 새 강의 생성
    ///
    /// 제목과 설명은 필수이며, 언어 목록은 저장 전에 정규화됩니다(문자열과
    /// `{"type": ...}` 객체 혼용 입력 → 문자열 목록). 콘텐츠 트리가 함께
    /// 전달되면 각 노드에 새 ID를 부여해 저장합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Course)` - 저장된 강의 (ID 포함, version 0)
    /// * `Err(AppError::ValidationError)` - 제목 또는 설명 누락
    pub async fn create_course(&self, request: CreateCourseRequest) -> AppResult<Course> {
        if !has_text(&request.course_title) || !has_text(&request.course_description) {
            return Err(AppError::ValidationError(
                "Course title and description are required".to_string(),
            ));
        }

        let mut course = Course::new(
            clean_optional_string(request.course_title).unwrap_or_default(),
            clean_optional_string(request.course_description).unwrap_or_default(),
        );

        course.course_subtitle = request.course_subtitle;
        course.course_image = request.course_image;
        course.course_duration = request.course_duration;
        course.course_outcome = request.course_outcome.unwrap_or_default();
        course.course_benefits = request.course_benefits.unwrap_or_default();
        course.course_requirements = request.course_requirements.unwrap_or_default();
        course.course_languages = normalize_languages(request.course_languages.unwrap_or_default());
        course.salary_range = request.salary_range;
        course.course_price = request.course_price;
        course.course_content = convert_chapters(request.course_content.unwrap_or_default())?;

        let id = self.course_repo.insert(&course).await?;
        course.id = Some(id);

        log::info!("📚 강의 생성: {}", course.course_title);
        Ok(course)
    }

    /// 전체 강의 목록 조회
    pub async fn get_all_courses(&self) -> AppResult<Vec<Course>> {
        self.course_repo.find_all().await
    }

    /// ID로 강의 조회
    pub async fn get_course(&self, course_id: &str) -> AppResult<Course> {
        self.load(&CourseLookup::ById(course_id), "Course not found")
            .await
    }

    /// 강의 수정
    ///
    /// 수정 가능한 필드 집합을 요청 값으로 덮어씁니다. 제목/설명은 생략 시
    /// 기존 값을 유지하고, 콘텐츠 트리는 전달된 경우에만 교체됩니다.
    pub async fn update_course(
        &self,
        course_id: &str,
        request: UpdateCourseRequest,
    ) -> AppResult<Course> {
        let (request, content) = split_update_content(request)?;

        self.mutate(
            CourseLookup::ById(course_id),
            "Course not found",
            move |course| {
                apply_course_update(course, &request, &content);
                Ok(())
            },
        )
        .await
    }

    /// 강의 삭제
    pub async fn delete_course(&self, course_id: &str) -> AppResult<()> {
        let deleted = self.course_repo.delete(course_id).await?;

        if !deleted {
            return Err(AppError::NotFound("Course not found".to_string()));
        }

        log::info!("🗑️ 강의 삭제: {}", course_id);
        Ok(())
    }

    // ------------------------------------------------------------------
    // 챕터
    // ------------------------------------------------------------------

    /// 챕터 생성
    ///
    /// 챕터와 함께 전달된 서브토픽 모두 서버가 새 ID를 부여하며,
    /// 강의 콘텐츠 목록의 끝에 추가됩니다.
    pub async fn create_chapter(
        &self,
        course_id: &str,
        request: ChapterRequest,
    ) -> AppResult<Course> {
        // 생성 경로에서는 클라이언트가 보낸 ID를 신뢰하지 않습니다
        let sub_topics = request
            .sub_topics
            .into_iter()
            .map(|topic| SubTopic::new(topic.name, topic.content))
            .collect();
        let chapter = Chapter::new(request.name, sub_topics, request.quiz);

        self.mutate(
            CourseLookup::ById(course_id),
            "Course not found",
            move |course| {
                course.push_chapter(chapter.clone());
                Ok(())
            },
        )
        .await
    }

    /// 챕터 단건 조회
    pub async fn get_chapter(&self, chapter_id: &str) -> AppResult<Chapter> {
        let chapter_oid = parse_node_id(chapter_id)?;
        let course = self
            .load(&CourseLookup::ByChapterId(chapter_id), "Chapter not found")
            .await?;

        course
            .find_chapter(&chapter_oid)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))
    }

    /// 챕터 수정 (이름/서브토픽/퀴즈 전체 교체)
    ///
    /// 기존 ID를 가진 서브토픽 항목은 ID가 보존되고, ID가 없는 항목은
    /// 새 노드로 취급되어 새 ID를 받습니다.
    pub async fn update_chapter(
        &self,
        chapter_id: &str,
        request: UpdateChapterRequest,
    ) -> AppResult<Course> {
        let chapter_oid = parse_node_id(chapter_id)?;
        let sub_topics = request
            .sub_topics
            .into_iter()
            .map(SubTopic::try_from)
            .collect::<Result<Vec<_>, _>>()?;
        let name = request.name;
        let quiz = request.quiz;

        self.mutate(
            CourseLookup::ByChapterId(chapter_id),
            "Chapter not found",
            move |course| {
                let chapter = course
                    .find_chapter_mut(&chapter_oid)
                    .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))?;

                chapter.name = name.clone();
                chapter.sub_topics = sub_topics.clone();
                chapter.quiz = quiz.clone();
                Ok(())
            },
        )
        .await
    }

    /// 챕터 삭제. 나머지 챕터의 순서는 유지됩니다.
    pub async fn delete_chapter(&self, chapter_id: &str) -> AppResult<Course> {
        let chapter_oid = parse_node_id(chapter_id)?;

        self.mutate(
            CourseLookup::ByChapterId(chapter_id),
            "Chapter not found",
            move |course| {
                if !course.remove_chapter(&chapter_oid) {
                    return Err(AppError::NotFound("Chapter not found".to_string()));
                }
                Ok(())
            },
        )
        .await
    }

    // ------------------------------------------------------------------
    // 서브토픽
    // ------------------------------------------------------------------

    /// 서브토픽 생성. 소유 챕터의 목록 끝에 추가됩니다.
    pub async fn create_sub_topic(
        &self,
        chapter_id: &str,
        request: SubTopicRequest,
    ) -> AppResult<Course> {
        let chapter_oid = parse_node_id(chapter_id)?;
        let sub_topic = SubTopic::new(request.name, request.content);

        self.mutate(
            CourseLookup::ByChapterId(chapter_id),
            "Chapter not found",
            move |course| {
                let chapter = course
                    .find_chapter_mut(&chapter_oid)
                    .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))?;

                chapter.push_sub_topic(sub_topic.clone());
                Ok(())
            },
        )
        .await
    }

    /// 서브토픽 단건 조회
    pub async fn get_sub_topic(&self, sub_topic_id: &str) -> AppResult<SubTopic> {
        let sub_topic_oid = parse_node_id(sub_topic_id)?;
        let course = self
            .load(
                &CourseLookup::BySubTopicId(sub_topic_id),
                "Subtopic not found",
            )
            .await?;

        course
            .find_sub_topic(&sub_topic_oid)
            .cloned()
            .ok_or_else(|| AppError::NotFound("Subtopic not found".to_string()))
    }

    /// 서브토픽 수정 (이름/본문 교체)
    pub async fn update_sub_topic(
        &self,
        sub_topic_id: &str,
        request: UpdateSubTopicRequest,
    ) -> AppResult<Course> {
        let sub_topic_oid = parse_node_id(sub_topic_id)?;
        let name = request.name;
        let content = request.content;

        self.mutate(
            CourseLookup::BySubTopicId(sub_topic_id),
            "Subtopic not found",
            move |course| {
                let chapter = course
                    .find_owning_chapter_mut(&sub_topic_oid)
                    .ok_or_else(|| AppError::NotFound("Subtopic not found".to_string()))?;
                let sub_topic = chapter
                    .find_sub_topic_mut(&sub_topic_oid)
                    .ok_or_else(|| AppError::NotFound("Subtopic not found".to_string()))?;

                sub_topic.name = name.clone();
                sub_topic.content = content.clone();
                Ok(())
            },
        )
        .await
    }

    /// 서브토픽 삭제. 소유 챕터 내 나머지 항목의 순서는 유지됩니다.
    pub async fn delete_sub_topic(&self, sub_topic_id: &str) -> AppResult<Course> {
        let sub_topic_oid = parse_node_id(sub_topic_id)?;

        self.mutate(
            CourseLookup::BySubTopicId(sub_topic_id),
            "Subtopic not found",
            move |course| {
                let chapter = course
                    .find_owning_chapter_mut(&sub_topic_oid)
                    .ok_or_else(|| AppError::NotFound("Subtopic not found".to_string()))?;

                if !chapter.remove_sub_topic(&sub_topic_oid) {
                    return Err(AppError::NotFound("Subtopic not found".to_string()));
                }
                Ok(())
            },
        )
        .await
    }

    // ------------------------------------------------------------------
    // 퀴즈 (식별자는 소유 챕터의 ID)
    // ------------------------------------------------------------------

    /// 퀴즈 생성. 챕터의 퀴즈를 통째로 설정합니다.
    pub async fn create_quiz(&self, chapter_id: &str, quiz: Quiz) -> AppResult<Course> {
        self.replace_quiz(chapter_id, Some(quiz)).await
    }

    /// 퀴즈 조회. 챕터에 퀴즈가 없으면 `None`을 반환합니다.
    pub async fn get_quiz(&self, chapter_id: &str) -> AppResult<Option<Quiz>> {
        let chapter_oid = parse_node_id(chapter_id)?;
        let course = self
            .load(&CourseLookup::ByChapterId(chapter_id), "Chapter not found")
            .await?;

        let chapter = course
            .find_chapter(&chapter_oid)
            .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))?;

        Ok(chapter.quiz.clone())
    }

    /// 퀴즈 수정. 챕터의 퀴즈를 통째로 교체합니다.
    pub async fn update_quiz(&self, chapter_id: &str, quiz: Quiz) -> AppResult<Course> {
        self.replace_quiz(chapter_id, Some(quiz)).await
    }

    /// 퀴즈 삭제. 챕터에서 퀴즈 필드를 제거합니다.
    pub async fn delete_quiz(&self, chapter_id: &str) -> AppResult<Course> {
        self.replace_quiz(chapter_id, None).await
    }

    /// 소유 챕터의 퀴즈를 설정하거나 제거합니다.
    async fn replace_quiz(
        &self,
        chapter_id: &str,
        quiz: Option<Quiz>,
    ) -> AppResult<Course> {
        let chapter_oid = parse_node_id(chapter_id)?;

        self.mutate(
            CourseLookup::ByChapterId(chapter_id),
            "Chapter not found",
            move |course| {
                let chapter = course
                    .find_chapter_mut(&chapter_oid)
                    .ok_or_else(|| AppError::NotFound("Chapter not found".to_string()))?;

                chapter.quiz = quiz.clone();
                Ok(())
            },
        )
        .await
    }

    // ------------------------------------------------------------------
    // 내부 구현
    // ------------------------------------------------------------------

    /// 조회 방법에 따라 루트 문서를 읽습니다.
    async fn load(
        &self,
        lookup: &CourseLookup<'_>,
        missing_message: &str,
    ) -> AppResult<Course> {
        let found = match lookup {
            CourseLookup::ById(id) => self.course_repo.find_by_id(id).await?,
            CourseLookup::ByChapterId(id) => self.course_repo.find_by_chapter_id(id).await?,
            CourseLookup::BySubTopicId(id) => self.course_repo.find_by_sub_topic_id(id).await?,
        };

        found.ok_or_else(|| AppError::NotFound(missing_message.to_string()))
    }

    /// 읽기 → 수정 → 버전 검사 저장 루프
    ///
    /// 저장 시점에 버전이 달라져 있으면 문서를 다시 읽어 변경을 재적용합니다.
    /// 매 저장마다 `updatedAt`이 갱신되고 `version`이 1 증가합니다.
    async fn mutate<F>(
        &self,
        lookup: CourseLookup<'_>,
        missing_message: &str,
        mut apply: F,
    ) -> AppResult<Course>
    where
        F: FnMut(&mut Course) -> AppResult<()>,
    {
        for attempt in 1..=MAX_PERSIST_ATTEMPTS {
            let mut course = self.load(&lookup, missing_message).await?;
            apply(&mut course)?;

            course.touch();
            let previous_version = course.version;
            course.version += 1;

            if self
                .course_repo
                .replace_versioned(&course, previous_version)
                .await?
            {
                return Ok(course);
            }

            log::warn!(
                "⚠️ 강의 저장 버전 충돌, 재시도 {}/{}",
                attempt,
                MAX_PERSIST_ATTEMPTS
            );
        }

        Err(AppError::ConflictError(
            "The course was modified concurrently, please retry".to_string(),
        ))
    }
}

/// 노드 ID 문자열을 ObjectId로 변환합니다.
fn parse_node_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id).map_err(|_| AppError::ValidationError("Invalid id format".to_string()))
}

/// 챕터 요청 목록을 엔티티로 변환합니다. 기존 ID는 보존됩니다.
fn convert_chapters(requests: Vec<ChapterRequest>) -> AppResult<Vec<Chapter>> {
    requests.into_iter().map(Chapter::try_from).collect()
}

/// 수정 요청에서 콘텐츠 트리를 분리해 미리 변환합니다.
///
/// 변환을 재시도 루프 밖에서 한 번만 수행하기 위한 분리입니다.
fn split_update_content(
    mut request: UpdateCourseRequest,
) -> AppResult<(UpdateCourseRequest, Option<Vec<Chapter>>)> {
    let content = request
        .course_content
        .take()
        .map(convert_chapters)
        .transpose()?;

    Ok((request, content))
}

/// 수정 요청을 강의에 적용합니다.
///
/// 제목/설명은 값이 있을 때만 교체하고, 나머지 수정 가능 필드는 요청 값으로
/// 덮어씁니다(생략된 선택 필드는 비워짐). 콘텐츠 트리는 `Some`일 때만
/// 교체됩니다. 언어 목록은 적용 시점에 정규화됩니다.
fn apply_course_update(
    course: &mut Course,
    request: &UpdateCourseRequest,
    content: &Option<Vec<Chapter>>,
) {
    if let Some(title) = clean_optional_string(request.course_title.clone()) {
        course.course_title = title;
    }
    if let Some(description) = clean_optional_string(request.course_description.clone()) {
        course.course_description = description;
    }

    course.course_subtitle = request.course_subtitle.clone();
    course.course_image = request.course_image.clone();
    course.course_duration = request.course_duration.clone();
    course.course_outcome = request.course_outcome.clone().unwrap_or_default();
    course.course_benefits = request.course_benefits.clone().unwrap_or_default();
    course.course_requirements = request.course_requirements.clone().unwrap_or_default();
    course.course_languages =
        normalize_languages(request.course_languages.clone().unwrap_or_default());
    course.salary_range = request.salary_range.clone();
    course.course_price = request.course_price;

    if let Some(chapters) = content {
        course.course_content = chapters.clone();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_course() -> Course {
        let mut course = Course::new("Rust Backend".to_string(), "Build services".to_string());
        course.course_subtitle = Some("From zero".to_string());
        course.course_languages = vec!["JS".to_string()];
        course.course_price = Some(49.0);
        course.course_content = vec![Chapter::new("Intro".to_string(), Vec::new(), None)];
        course
    }

    fn update_request(json: &str) -> UpdateCourseRequest {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_update_overwrites_optional_fields() {
        let mut course = sample_course();
        let request = update_request(r#"{"courseTitle": "New title"}"#);

        apply_course_update(&mut course, &request, &None);

        assert_eq!(course.course_title, "New title");
        // 생략된 선택 필드는 비워진다
        assert_eq!(course.course_subtitle, None);
        assert_eq!(course.course_price, None);
        assert!(course.course_languages.is_empty());
    }

    #[test]
    fn test_update_keeps_title_and_description_when_omitted() {
        let mut course = sample_course();
        let request = update_request(r#"{"coursePrice": 99.0}"#);

        apply_course_update(&mut course, &request, &None);

        assert_eq!(course.course_title, "Rust Backend");
        assert_eq!(course.course_description, "Build services");
        assert_eq!(course.course_price, Some(99.0));
    }

    #[test]
    fn test_update_preserves_content_when_not_supplied() {
        let mut course = sample_course();
        let request = update_request(r#"{"courseTitle": "New title"}"#);

        apply_course_update(&mut course, &request, &None);

        assert_eq!(course.course_content.len(), 1);
        assert_eq!(course.course_content[0].name, "Intro");
    }

    #[test]
    fn test_update_replaces_content_when_supplied() {
        let mut course = sample_course();
        let request = update_request(r#"{}"#);
        let content = Some(vec![
            Chapter::new("One".to_string(), Vec::new(), None),
            Chapter::new("Two".to_string(), Vec::new(), None),
        ]);

        apply_course_update(&mut course, &request, &content);

        assert_eq!(course.course_content.len(), 2);
        assert_eq!(course.course_content[1].name, "Two");
    }

    #[test]
    fn test_update_normalizes_languages() {
        let mut course = sample_course();
        let request =
            update_request(r#"{"courseLanguages": [{"type": "Rust"}, "Go", {"type": "JS"}]}"#);

        apply_course_update(&mut course, &request, &None);

        assert_eq!(course.course_languages, vec!["Rust", "Go", "JS"]);
    }

    #[test]
    fn test_split_update_content_converts_once() {
        let request = update_request(
            r#"{"courseContent": [{"name": "Intro", "subTopics": [{"name": "Setup"}]}]}"#,
        );

        let (request, content) = split_update_content(request).unwrap();

        assert!(request.course_content.is_none());
        let chapters = content.unwrap();
        assert_eq!(chapters.len(), 1);
        assert!(chapters[0].id.is_some());
        assert!(chapters[0].sub_topics[0].id.is_some());
    }

    #[test]
    fn test_split_update_content_rejects_malformed_ids() {
        let request =
            update_request(r#"{"courseContent": [{"_id": "nope", "name": "Intro"}]}"#);

        assert!(matches!(
            split_update_content(request),
            Err(AppError::ValidationError(_))
        ));
    }
}
