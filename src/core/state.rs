//! 애플리케이션 공유 상태
//!
//! 부트스트랩 시점에 한 번 구성되어 모든 요청 핸들러와 미들웨어가
//! `web::Data<AppState>`로 공유하는 서비스 묶음입니다. 저장소 연결은
//! 프로세스 전역에서 하나만 유지되며, 서비스들은 `Arc`로 감싸진
//! 리포지토리를 통해 같은 연결 풀을 재사용합니다.

use std::sync::Arc;

use crate::db::Database;
use crate::errors::errors::AppError;
use crate::repositories::courses::course_repo::CourseRepository;
use crate::repositories::users::user_repo::UserRepository;
use crate::services::auth::TokenService;
use crate::services::courses::CourseService;
use crate::services::users::user_service::UserService;

/// 핸들러에 주입되는 서비스 컨테이너
///
/// 앰비언트 전역 상태 대신 명시적 주입을 사용합니다. `main`에서 한 번
/// 생성된 뒤 `HttpServer` 팩토리 클로저로 복제되어 모든 워커가 같은
/// 서비스 인스턴스를 공유합니다.
pub struct AppState {
    /// 사용자 계정 서비스
    pub user_service: Arc<UserService>,
    /// JWT 토큰 서비스
    pub token_service: Arc<TokenService>,
    /// 강의 카탈로그 서비스
    pub course_service: Arc<CourseService>,
}

impl AppState {
    /// 데이터베이스 연결로부터 전체 서비스 그래프를 구성합니다.
    ///
    /// 이메일 유니크 인덱스 등 컬렉션 수준의 제약도 이 시점에 보장됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::DatabaseError` - 인덱스 생성 실패
    pub async fn new(database: Arc<Database>) -> Result<Self, AppError> {
        let user_repo = Arc::new(UserRepository::new(database.clone()));
        let course_repo = Arc::new(CourseRepository::new(database));

        user_repo.create_indexes().await?;

        Ok(Self {
            user_service: Arc::new(UserService::new(user_repo)),
            token_service: Arc::new(TokenService::new()),
            course_service: Arc::new(CourseService::new(course_repo)),
        })
    }
}
