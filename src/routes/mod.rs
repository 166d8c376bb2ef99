//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 사용자/인증 라우트, 강의 카탈로그 라우트, 헬스체크 엔드포인트를 포함합니다.
//!
//! # Features
//!
//! - 사용자 계정/인증 API 엔드포인트
//! - 강의/챕터/서브토픽/퀴즈 CRUD API 엔드포인트
//! - 보호 라우트에 대한 JWT 인증 미들웨어 적용
//! - 헬스체크와 공통 404 응답
//!
//! # Auth Middleware Usage
//!
//! 인증이 필요한 라우트만 별도 스코프로 묶어 미들웨어를 적용합니다:
//!
//! ```rust,ignore
//! cfg.service(
//!     web::scope("/api/v1")
//!         .service(handlers::users::login)            // 인증 불필요
//!         .service(
//!             web::scope("/user")
//!                 .wrap(AuthMiddleware::required())   // 인증 필요
//!                 .service(handlers::users::current_user),
//!         ),
//! );
//! ```

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use actix_web::{HttpResponse, web};
use serde_json::json;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
/// 어떤 라우트에도 해당하지 않는 요청은 공통 404 응답을 받습니다.
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
///
/// # Examples
///
/// ```rust,ignore
/// use actix_web::{web, App};
///
/// let app = App::new().configure(configure_all_routes);
/// ```
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // /api/v1 아래의 모든 기능 라우트
    cfg.service(
        web::scope("/api/v1")
            .configure(configure_user_routes)
            .configure(configure_course_routes),
    );

    // 매칭되지 않은 모든 경로에 대한 공통 404
    cfg.default_service(web::route().to(route_not_found));
}

/// 사용자/인증 관련 라우트를 설정합니다
///
/// # Route Groups
///
/// ## Public 라우트 (인증 불필요)
/// - `POST /api/v1/signup` - 계정 생성 + 토큰 발급
/// - `POST /api/v1/login` - 자격증명 검증 + 토큰 발급
/// - `GET /api/v1/logout` - 토큰 쿠키 만료
///
/// ## Protected 라우트 (유효한 토큰 필요)
/// - `GET /api/v1/user` - 현재 사용자 프로필
/// - `POST /api/v1/user/update` - 프로필 갱신
/// - `POST /api/v1/password/update` - 비밀번호 변경 + 토큰 재발급
fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    // Public routes
    cfg.service(handlers::users::signup)
        .service(handlers::users::login)
        .service(handlers::users::logout);

    // Protected routes
    cfg.service(
        web::scope("/user")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::current_user)
            .service(handlers::users::update_profile),
    );
    cfg.service(
        web::scope("/password")
            .wrap(AuthMiddleware::required())
            .service(handlers::users::update_password),
    );
}

/// 강의 카탈로그 라우트를 설정합니다
///
/// 강의 조회/수정은 공개 API이며 인증을 요구하지 않습니다.
///
/// # Available Routes
///
/// ## 강의
/// - `POST /api/v1/create-course` - 강의 생성
/// - `GET /api/v1/courses` - 전체 강의 목록
/// - `GET/PUT/DELETE /api/v1/courses/{courseId}` - 강의 조회/수정/삭제
///
/// ## 챕터
/// - `POST /api/v1/course/{courseId}/create-chapter` - 챕터 추가
/// - `GET/PUT/DELETE /api/v1/chapter/{chapterId}` - 챕터 조회/수정/삭제
///
/// ## 서브토픽
/// - `POST /api/v1/chapter/{chapterId}/create-subtopic` - 서브토픽 추가
/// - `GET/PUT/DELETE /api/v1/subtopic/{subTopicId}` - 서브토픽 조회/수정/삭제
///
/// ## 퀴즈
/// - `POST /api/v1/chapter/{chapterId}/create-quiz` - 퀴즈 설정
/// - `GET/PUT/DELETE /api/v1/quiz/{quizId}` - 퀴즈 조회/교체/제거
fn configure_course_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(handlers::courses::create_course)
        .service(handlers::courses::list_courses)
        .service(handlers::courses::get_course)
        .service(handlers::courses::update_course)
        .service(handlers::courses::delete_course)
        .service(handlers::courses::create_chapter)
        .service(handlers::courses::get_chapter)
        .service(handlers::courses::update_chapter)
        .service(handlers::courses::delete_chapter)
        .service(handlers::courses::create_sub_topic)
        .service(handlers::courses::get_sub_topic)
        .service(handlers::courses::update_sub_topic)
        .service(handlers::courses::delete_sub_topic)
        .service(handlers::courses::create_quiz)
        .service(handlers::courses::get_quiz)
        .service(handlers::courses::update_quiz)
        .service(handlers::courses::delete_quiz);
}

/// 공통 404 핸들러
async fn route_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(json!({
        "success": false,
        "message": "Route not found"
    }))
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// # Returns
///
/// * `HttpResponse` - 서비스 상태 정보를 포함한 JSON 응답
///   - `status`: 서비스 상태 ("healthy")
///   - `service`: 서비스 이름
///   - `version`: 현재 버전
///   - `timestamp`: 응답 시각
///
/// # Examples
///
/// ```bash
/// curl http://localhost:8080/health
/// ```
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "course_service_backend",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "features": {
            "database": "MongoDB",
            "auth": "JWT (Bearer + httpOnly cookie)"
        }
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_route_not_found_envelope() {
        let response = route_not_found().await;
        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], false);
        assert_eq!(value["message"], "Route not found");
    }
}
