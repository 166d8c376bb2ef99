//! # 강의 카탈로그 HTTP 핸들러
//!
//! 강의 애그리거트와 내장 노드(챕터/서브토픽/퀴즈)에 대한 CRUD
//! 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 |
//! |--------|------|------|
//! | `POST` | `/api/v1/create-course` | 강의 생성 |
//! | `GET` | `/api/v1/courses` | 전체 강의 목록 |
//! | `GET/PUT/DELETE` | `/api/v1/courses/{courseId}` | 강의 조회/수정/삭제 |
//! | `POST` | `/api/v1/course/{courseId}/create-chapter` | 챕터 추가 |
//! | `GET/PUT/DELETE` | `/api/v1/chapter/{chapterId}` | 챕터 조회/수정/삭제 |
//! | `POST` | `/api/v1/chapter/{chapterId}/create-subtopic` | 서브토픽 추가 |
//! | `GET/PUT/DELETE` | `/api/v1/subtopic/{subTopicId}` | 서브토픽 조회/수정/삭제 |
//! | `POST` | `/api/v1/chapter/{chapterId}/create-quiz` | 퀴즈 설정 |
//! | `GET/PUT/DELETE` | `/api/v1/quiz/{quizId}` | 퀴즈 조회/교체/제거 |
//!
//! 챕터/서브토픽 ID는 전역적으로 유일한 ObjectId이므로 경로에 강의 ID가
//! 없어도 소유 문서를 특정할 수 있습니다. 퀴즈는 독립 식별자가 없으며
//! `{quizId}`는 소유 챕터의 ID입니다.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, delete, get, post, put, web};
use serde_json::json;

use crate::core::state::AppState;
use crate::domain::dto::courses::request::{
    ChapterRequest, CreateCourseRequest, SubTopicRequest, UpdateChapterRequest,
    UpdateCourseRequest, UpdateSubTopicRequest,
};
use crate::domain::dto::courses::response::{ChapterResponse, CourseResponse, SubTopicResponse};
use crate::domain::entities::courses::course::{Course, Quiz};
use crate::errors::errors::AppError;

/// 강의 전체를 담는 성공 응답을 구성합니다.
///
/// 내장 노드 생성은 201, 나머지 변이는 200으로 응답합니다.
fn course_response(status: StatusCode, message: &str, course: Course) -> HttpResponse {
    HttpResponse::build(status).json(json!({
        "success": true,
        "message": message,
        "data": CourseResponse::from(course)
    }))
}

// ----------------------------------------------------------------------
// 강의
// ----------------------------------------------------------------------

/// 강의 생성 핸들러
///
/// # Endpoint
/// `POST /api/v1/create-course`
///
/// # 응답
///
/// * `201 Created` - 저장된 강의
/// * `400 Bad Request` - 제목 또는 설명 누락
#[post("/create-course")]
pub async fn create_course(
    state: web::Data<AppState>,
    payload: web::Json<CreateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .create_course(payload.into_inner())
        .await?;

    Ok(HttpResponse::Created().json(json!({
        "success": true,
        "message": "Course created successfully",
        "data": CourseResponse::from(course)
    })))
}

/// 강의 목록 핸들러. 페이지네이션 없이 전체를 반환합니다.
///
/// # Endpoint
/// `GET /api/v1/courses`
#[get("/courses")]
pub async fn list_courses(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let courses = state.course_service.get_all_courses().await?;
    let courses: Vec<CourseResponse> = courses.into_iter().map(CourseResponse::from).collect();

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Courses fetched successfully",
        "data": courses
    })))
}

/// 강의 단건 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/courses/{courseId}`
#[get("/courses/{course_id}")]
pub async fn get_course(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.get_course(&course_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": CourseResponse::from(course)
    })))
}

/// 강의 수정 핸들러
///
/// 수정 가능한 필드 전체를 요청 값으로 덮어씁니다. 생략된 선택 필드는
/// 비워지므로 유지할 필드는 다시 보내야 합니다.
///
/// # Endpoint
/// `PUT /api/v1/courses/{courseId}`
#[put("/courses/{course_id}")]
pub async fn update_course(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    payload: web::Json<UpdateCourseRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .update_course(&course_id, payload.into_inner())
        .await?;

    Ok(course_response(StatusCode::OK, "Course updated successfully", course))
}

/// 강의 삭제 핸들러. 내장된 콘텐츠 트리 전체가 함께 제거됩니다.
///
/// # Endpoint
/// `DELETE /api/v1/courses/{courseId}`
#[delete("/courses/{course_id}")]
pub async fn delete_course(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    state.course_service.delete_course(&course_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Course deleted successfully"
    })))
}

// ----------------------------------------------------------------------
// 챕터
// ----------------------------------------------------------------------

/// 챕터 생성 핸들러. 강의 콘텐츠 목록 끝에 추가됩니다.
///
/// # Endpoint
/// `POST /api/v1/course/{courseId}/create-chapter`
#[post("/course/{course_id}/create-chapter")]
pub async fn create_chapter(
    state: web::Data<AppState>,
    course_id: web::Path<String>,
    payload: web::Json<ChapterRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .create_chapter(&course_id, payload.into_inner())
        .await?;

    Ok(course_response(StatusCode::CREATED, "Chapter created successfully", course))
}

/// 챕터 단건 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/chapter/{chapterId}`
#[get("/chapter/{chapter_id}")]
pub async fn get_chapter(
    state: web::Data<AppState>,
    chapter_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let chapter = state.course_service.get_chapter(&chapter_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Chapter fetched successfully",
        "data": ChapterResponse::from(chapter)
    })))
}

/// 챕터 수정 핸들러. 이름/서브토픽/퀴즈를 통째로 교체합니다.
///
/// # Endpoint
/// `PUT /api/v1/chapter/{chapterId}`
#[put("/chapter/{chapter_id}")]
pub async fn update_chapter(
    state: web::Data<AppState>,
    chapter_id: web::Path<String>,
    payload: web::Json<UpdateChapterRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .update_chapter(&chapter_id, payload.into_inner())
        .await?;

    Ok(course_response(StatusCode::OK, "Chapter updated successfully", course))
}

/// 챕터 삭제 핸들러. 나머지 챕터의 순서는 유지됩니다.
///
/// # Endpoint
/// `DELETE /api/v1/chapter/{chapterId}`
#[delete("/chapter/{chapter_id}")]
pub async fn delete_chapter(
    state: web::Data<AppState>,
    chapter_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.delete_chapter(&chapter_id).await?;

    Ok(course_response(StatusCode::OK, "Chapter deleted successfully", course))
}

// ----------------------------------------------------------------------
// 서브토픽
// ----------------------------------------------------------------------

/// 서브토픽 생성 핸들러. 소유 챕터의 목록 끝에 추가됩니다.
///
/// # Endpoint
/// `POST /api/v1/chapter/{chapterId}/create-subtopic`
#[post("/chapter/{chapter_id}/create-subtopic")]
pub async fn create_sub_topic(
    state: web::Data<AppState>,
    chapter_id: web::Path<String>,
    payload: web::Json<SubTopicRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .create_sub_topic(&chapter_id, payload.into_inner())
        .await?;

    Ok(course_response(StatusCode::CREATED, "Subtopic created successfully", course))
}

/// 서브토픽 단건 조회 핸들러
///
/// # Endpoint
/// `GET /api/v1/subtopic/{subTopicId}`
#[get("/subtopic/{sub_topic_id}")]
pub async fn get_sub_topic(
    state: web::Data<AppState>,
    sub_topic_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let sub_topic = state.course_service.get_sub_topic(&sub_topic_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Subtopic fetched successfully",
        "data": SubTopicResponse::from(sub_topic)
    })))
}

/// 서브토픽 수정 핸들러
///
/// # Endpoint
/// `PUT /api/v1/subtopic/{subTopicId}`
#[put("/subtopic/{sub_topic_id}")]
pub async fn update_sub_topic(
    state: web::Data<AppState>,
    sub_topic_id: web::Path<String>,
    payload: web::Json<UpdateSubTopicRequest>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .update_sub_topic(&sub_topic_id, payload.into_inner())
        .await?;

    Ok(course_response(StatusCode::OK, "Subtopic updated successfully", course))
}

/// 서브토픽 삭제 핸들러
///
/// # Endpoint
/// `DELETE /api/v1/subtopic/{subTopicId}`
#[delete("/subtopic/{sub_topic_id}")]
pub async fn delete_sub_topic(
    state: web::Data<AppState>,
    sub_topic_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.delete_sub_topic(&sub_topic_id).await?;

    Ok(course_response(StatusCode::OK, "Subtopic deleted successfully", course))
}

// ----------------------------------------------------------------------
// 퀴즈 (경로의 {quizId}는 소유 챕터의 ID)
// ----------------------------------------------------------------------

/// 퀴즈 생성 핸들러. 챕터의 퀴즈를 통째로 설정하며, 이미 퀴즈가 있으면
/// 덮어씁니다.
///
/// # Endpoint
/// `POST /api/v1/chapter/{chapterId}/create-quiz`
#[post("/chapter/{chapter_id}/create-quiz")]
pub async fn create_quiz(
    state: web::Data<AppState>,
    chapter_id: web::Path<String>,
    payload: web::Json<Quiz>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .create_quiz(&chapter_id, payload.into_inner())
        .await?;

    Ok(course_response(StatusCode::CREATED, "Quiz created successfully", course))
}

/// 퀴즈 조회 핸들러. 챕터에 퀴즈가 없으면 `data`는 `null`입니다.
///
/// # Endpoint
/// `GET /api/v1/quiz/{quizId}`
#[get("/quiz/{quiz_id}")]
pub async fn get_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let quiz = state.course_service.get_quiz(&quiz_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "message": "Quiz fetched successfully",
        "data": quiz
    })))
}

/// 퀴즈 교체 핸들러. 생성과 동일하게 통째로 교체합니다.
///
/// # Endpoint
/// `PUT /api/v1/quiz/{quizId}`
#[put("/quiz/{quiz_id}")]
pub async fn update_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
    payload: web::Json<Quiz>,
) -> Result<HttpResponse, AppError> {
    let course = state
        .course_service
        .update_quiz(&quiz_id, payload.into_inner())
        .await?;

    Ok(course_response(StatusCode::OK, "Quiz updated successfully", course))
}

/// 퀴즈 삭제 핸들러. 챕터의 퀴즈 필드를 비웁니다.
///
/// # Endpoint
/// `DELETE /api/v1/quiz/{quizId}`
#[delete("/quiz/{quiz_id}")]
pub async fn delete_quiz(
    state: web::Data<AppState>,
    quiz_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    let course = state.course_service.delete_quiz(&quiz_id).await?;

    Ok(course_response(StatusCode::OK, "Quiz deleted successfully", course))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    fn sample_course() -> Course {
        Course::new(
            "Rust Backend".to_string(),
            "Aggregate-backed course".to_string(),
        )
    }

    #[actix_web::test]
    async fn test_nested_create_responses_are_201() {
        let response = course_response(
            StatusCode::CREATED,
            "Chapter created successfully",
            sample_course(),
        );
        assert_eq!(response.status(), StatusCode::CREATED);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["message"], "Chapter created successfully");
        assert_eq!(value["data"]["courseTitle"], "Rust Backend");
    }

    #[actix_web::test]
    async fn test_mutation_responses_are_200() {
        let response = course_response(
            StatusCode::OK,
            "Chapter updated successfully",
            sample_course(),
        );
        assert_eq!(response.status(), StatusCode::OK);

        let body = to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["message"], "Chapter updated successfully");
    }
}
