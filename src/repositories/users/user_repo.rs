//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층을 담당하는 리포지토리입니다.
//! MongoDB를 주 저장소로 사용합니다.
//!
//! ## 특징
//!
//! - **생성자 주입**: `Arc<Database>`를 받아 상태로 보관
//! - **데이터 무결성**: 유니크 제약 조건 및 인덱스 관리

use crate::{db::Database, domain::entities::users::user::User, errors::errors::AppError};
use mongodb::{
    Collection, IndexModel,
    bson::{doc, oid::ObjectId},
    options::IndexOptions,
};
use std::sync::Arc;

/// 사용자 데이터 액세스 리포지토리
///
/// 사용자 엔티티의 CRUD 연산을 담당하며, `users` 컬렉션에 대한
/// 모든 MongoDB 연산을 캡슐화합니다.
///
/// ## 에러 처리
///
/// 모든 메서드는 `Result<T, AppError>` 타입을 반환하며,
/// 다음과 같은 에러 상황을 처리합니다:
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **ValidationError**: 잘못된 ObjectId 형식 등 입력값 검증 오류
/// - **ConflictError**: 이메일 중복 등 비즈니스 규칙 위반
pub struct UserRepository {
    /// MongoDB 데이터베이스 연결
    db: Arc<Database>,
}

impl UserRepository {
    /// 새 리포지토리 인스턴스를 생성합니다.
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// `users` 컬렉션 핸들을 반환합니다.
    fn collection(&self) -> Collection<User> {
        self.db.get_database().collection::<User>("users")
    }

    /// 이메일 주소로 사용자 조회
    ///
    /// # 인자
    ///
    /// * `email` - 조회할 사용자의 이메일 주소
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 이메일의 사용자가 없는 경우
    /// * `Err(AppError)` - 데이터베이스 오류
    pub async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 사용자 조회
    ///
    /// # 인자
    ///
    /// * `id` - MongoDB ObjectId의 16진수 문자열 표현
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 사용자를 찾은 경우
    /// * `Ok(None)` - 해당 ID의 사용자가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    pub async fn find_by_id(&self, id: &str) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        self.collection()
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 사용자 생성
    ///
    /// 이메일 중복 여부를 사전에 검증한 뒤 저장합니다.
    ///
    /// # 인자
    ///
    /// * `user` - 생성할 사용자 정보 (ID는 자동 할당됨)
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 (ID 포함)
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    ///
    /// # 비즈니스 규칙
    ///
    /// 1. **이메일 유니크성**: 동일한 이메일로 두 번째 계정 생성 불가
    /// 2. **ID 자동 할당**: MongoDB가 자동으로 ObjectId 생성
    pub async fn create(&self, mut user: User) -> Result<User, AppError> {
        // 중복 확인
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "Email already registered".to_string(),
            ));
        }

        let result = self
            .collection()
            .insert_one(&user)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        user.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("Inserted user has no ObjectId".to_string())
        })?);

        Ok(user)
    }

    /// 사용자 정보 업데이트
    ///
    /// 기존 사용자의 정보를 부분적으로 업데이트하고 최신 문서를 반환합니다.
    ///
    /// # 인자
    ///
    /// * `id` - 업데이트할 사용자의 ID (ObjectId 문자열)
    /// * `update_doc` - 업데이트할 필드들을 포함한 MongoDB Document
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(User))` - 업데이트된 사용자 정보
    /// * `Ok(None)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    /// * `Err(AppError::DatabaseError)` - 데이터베이스 오류
    ///
    /// # 업데이트 연산
    ///
    /// - **MongoDB `$set` 연산자 사용**: 지정된 필드만 변경
    /// - **원자적 연산**: find_one_and_update로 조회와 업데이트를 동시에
    /// - **최신 데이터 반환**: ReturnDocument::After 옵션 사용
    pub async fn update(
        &self,
        id: &str,
        update_doc: mongodb::bson::Document,
    ) -> Result<Option<User>, AppError> {
        let object_id = ObjectId::parse_str(id)
            .map_err(|_| AppError::ValidationError("Invalid id format".to_string()))?;

        let options = mongodb::options::FindOneAndUpdateOptions::builder()
            .return_document(mongodb::options::ReturnDocument::After)
            .build();

        self.collection()
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 사용자 컬렉션에 필요한 인덱스를 생성합니다.
    /// 애플리케이션 초기화 시점에 한 번 실행하여 쿼리 성능을 최적화합니다.
    ///
    /// # 생성되는 인덱스
    ///
    /// 1. **이메일 유니크 인덱스** - 중복 이메일 방지 및 로그인 조회 최적화
    /// 2. **생성일 인덱스** - 최근 사용자 조회 및 정렬 최적화
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_desc".to_string())
                    .build(),
            )
            .build();

        self.collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
