//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! 백엔드 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다.
//!
//! 모든 에러 응답은 `{"success": false, "message": "..."}` 형태의 JSON으로
//! 변환되며, message에는 각 에러의 페이로드가 그대로 전달됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use crate::errors::AppError;
//!
//! async fn create_course(data: CreateCourseRequest) -> Result<Course, AppError> {
//!     if data.course_title.is_none() {
//!         return Err(AppError::ValidationError(
//!             "Course title and description are required".to_string(),
//!         ));
//!     }
//!
//!     let course = course_repo.create(data).await
//!         .map_err(|e| AppError::DatabaseError(e.to_string()))?;
//!
//!     Ok(course)
//! }
//! ```

use thiserror::Error;

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("{0}")]
    DatabaseError(String),

    /// 입력값 검증 에러 (400 Bad Request)
    #[error("{0}")]
    ValidationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("{0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("{0}")]
    ConflictError(String),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("{0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 각 에러 타입을 적절한 HTTP 상태 코드와 JSON 응답으로 변환합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        actix_web::HttpResponse::build(self.status_code()).json(serde_json::json!({
            "success": false,
            "message": self.to_string()
        }))
    }

    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError(
            "Course title and description are required".to_string(),
        );
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("Course not found".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("Email already registered".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("Please login to get access".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_error_message_passes_through() {
        let error = AppError::NotFound("Chapter not found".to_string());

        assert_eq!(error.to_string(), "Chapter not found");
    }

}
