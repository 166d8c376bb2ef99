//! # 코스 리포지토리 구현
//!
//! 코스 애그리거트의 데이터 액세스 계층입니다. 코스 문서는 챕터/서브토픽/퀴즈를
//! 내장한 단일 문서로 저장되며, 모든 수정은 문서 전체 교체로 수행됩니다.

use crate::{db::Database, domain::entities::courses::course::Course, errors::errors::AppError};
use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{doc, oid::ObjectId},
};
use std::sync::Arc;

/// 코스 데이터 액세스 리포지토리
///
/// `courses` 컬렉션에 대한 조회와 버전 검사 기반의 전체 문서 교체를 제공합니다.
///
/// ## 동시성 제어
///
/// 문서에는 `version` 필드가 포함되며, [`replace_versioned`](Self::replace_versioned)는
/// 읽었던 버전이 그대로인 경우에만 교체를 수행합니다. 교체에 실패하면 호출자가
/// 문서를 다시 읽어 재시도합니다.
pub struct CourseRepository {
    db: Arc<Database>,
}

impl CourseRepository {
    /// 새 리포지토리 인스턴스를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// `courses` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<Course> {
        self.db.get_database().collection::<Course>("courses")
    }

    /// 새 코스 문서를 저장하고 할당된 ObjectId를 반환합니다.
    pub async fn insert(&self, course: &Course) -> Result<ObjectId, AppError> {
        let result = self
            .collection()
            .insert_one(course)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("Inserted course has no ObjectId".to_string())
        })
    }

    /// 모든 코스 문서를 조회합니다.
    pub async fn find_all(&self) -> Result<Vec<Course>, AppError> {
        let mut cursor = self
            .collection()
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let mut courses = Vec::new();
        while let Some(course) = cursor
            .try_next()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?
        {
            courses.push(course);
        }

        Ok(courses)
    }

    /// ID로 코스 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(Course))` - 코스를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 코스가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> Result<Option<Course>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 특정 챕터를 포함하는 코스를 조회합니다.
    ///
    /// 챕터 ID는 전역적으로 유일하므로 소유 코스는 최대 1개입니다.
    pub async fn find_by_chapter_id(&self, chapter_id: &str) -> Result<Option<Course>, AppError> {
        let object_id = ObjectId::parse_str(chapter_id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        self.collection()
            .find_one(doc! { "courseContent._id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 특정 서브토픽을 포함하는 코스를 조회합니다.
    pub async fn find_by_sub_topic_id(
        &self,
        sub_topic_id: &str,
    ) -> Result<Option<Course>, AppError> {
        let object_id = ObjectId::parse_str(sub_topic_id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        self.collection()
            .find_one(doc! { "courseContent.subTopics._id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 버전 검사와 함께 코스 문서 전체를 교체합니다.
    ///
    /// `expected_version`이 저장된 문서의 버전과 일치하는 경우에만 교체하며,
    /// 그 사이 다른 요청이 문서를 수정했다면 `false`를 반환합니다.
    ///
    /// # 인자
    ///
    /// * `course` - 저장할 문서 (증가된 버전 포함)
    /// * `expected_version` - 문서를 읽었을 때의 버전
    pub async fn replace_versioned(
        &self,
        course: &Course,
        expected_version: i64,
    ) -> Result<bool, AppError> {
        let course_id = course.id.ok_or_else(|| {
            AppError::InternalError("Cannot replace a course without an id".to_string())
        })?;

        let result = self
            .collection()
            .replace_one(
                doc! { "_id": course_id, "version": expected_version },
                course,
            )
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.matched_count == 1)
    }

    /// 코스 문서를 삭제합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 코스가 삭제됨
    /// * `Ok(false)` - 해당 ID의 코스가 존재하지 않음
    pub async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        let result = self
            .collection()
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
