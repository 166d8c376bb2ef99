//! # 사용자/인증 HTTP 핸들러
//!
//! 회원가입, 로그인, 로그아웃, 내 정보 조회, 비밀번호 변경, 프로필 갱신
//! 엔드포인트를 처리합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 인증 | 설명 |
//! |--------|------|------|------|
//! | `POST` | `/api/v1/signup` | 불필요 | 계정 생성 + 토큰 발급 |
//! | `POST` | `/api/v1/login` | 불필요 | 자격증명 검증 + 토큰 발급 |
//! | `GET` | `/api/v1/logout` | 불필요 | 토큰 쿠키 즉시 만료 |
//! | `GET` | `/api/v1/user` | 필요 | 현재 사용자 프로필 |
//! | `POST` | `/api/v1/password/update` | 필요 | 비밀번호 변경 + 토큰 재발급 |
//! | `POST` | `/api/v1/user/update` | 필요 | 프로필 갱신 |
//!
//! ## 토큰 전달
//!
//! 발급된 토큰은 응답 본문(`token` 필드)과 httpOnly `token` 쿠키 양쪽으로
//! 전달됩니다. 이후 요청은 Bearer 헤더 또는 쿠키 중 어느 쪽이든 사용할 수
//! 있습니다.

use actix_web::cookie::{Cookie, SameSite, time::Duration};
use actix_web::{HttpResponse, get, post, web};
use serde_json::json;

use crate::config::JwtConfig;
use crate::core::state::AppState;
use crate::domain::dto::users::request::{
    ChangePasswordRequest, LoginRequest, SignupRequest, UpdateProfileRequest,
};
use crate::domain::dto::users::response::UserResponse;
use crate::domain::entities::users::user::User;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 발급된 토큰을 담는 httpOnly 쿠키를 생성합니다.
fn token_cookie(token: String) -> Cookie<'static> {
    Cookie::build("token", token)
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::hours(JwtConfig::expiration_hours()))
        .finish()
}

/// 클라이언트의 토큰 쿠키를 즉시 만료시키는 쿠키를 생성합니다.
fn expired_token_cookie() -> Cookie<'static> {
    Cookie::build("token", "")
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .max_age(Duration::seconds(0))
        .finish()
}

/// 사용자 엔티티와 토큰으로 자격증명 응답을 구성합니다.
///
/// 토큰은 쿠키와 응답 본문 양쪽에 실리며, 본문은
/// `{success, token, user}` 평탄 구조입니다.
fn credential_response(
    status: actix_web::http::StatusCode,
    user: User,
    token: String,
) -> HttpResponse {
    HttpResponse::build(status)
        .cookie(token_cookie(token.clone()))
        .json(json!({
            "success": true,
            "token": token,
            "user": UserResponse::from(user),
        }))
}

/// 회원가입 핸들러
///
/// 계정을 생성하고 즉시 로그인 상태로 만듭니다.
///
/// # Endpoint
/// `POST /api/v1/signup`
///
/// # 응답
///
/// * `201 Created` - 생성된 사용자와 토큰
/// * `400 Bad Request` - 필수 필드 누락 또는 이메일 형식 오류
/// * `409 Conflict` - 이미 등록된 이메일
#[post("/signup")]
pub async fn signup(
    state: web::Data<AppState>,
    payload: web::Json<SignupRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.signup(payload.into_inner()).await?;
    let token = state.token_service.generate_token(&user)?;

    log::info!("🙌 회원가입 성공: {}", user.email);

    Ok(credential_response(
        actix_web::http::StatusCode::CREATED,
        user,
        token,
    ))
}

/// 로그인 핸들러
///
/// 이메일/비밀번호를 검증하고 토큰을 발급합니다. 어느 쪽이 틀렸는지는
/// 응답에서 구분하지 않습니다.
///
/// # Endpoint
/// `POST /api/v1/login`
#[post("/login")]
pub async fn login(
    state: web::Data<AppState>,
    payload: web::Json<LoginRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.verify_login(payload.into_inner()).await?;
    let token = state.token_service.generate_token(&user)?;

    log::info!("🔑 로그인 성공: {}", user.email);

    Ok(credential_response(
        actix_web::http::StatusCode::OK,
        user,
        token,
    ))
}

/// 로그아웃 핸들러
///
/// 토큰 쿠키를 즉시 만료시킵니다. 토큰 자체는 상태가 없으므로 서버 쪽
/// 무효화는 없으며, 항상 성공합니다.
///
/// # Endpoint
/// `GET /api/v1/logout`
#[get("/logout")]
pub async fn logout() -> HttpResponse {
    HttpResponse::Ok()
        .cookie(expired_token_cookie())
        .json(json!({
            "success": true,
            "message": "Logged out successfully"
        }))
}

/// 현재 사용자 조회 핸들러
///
/// 미들웨어가 검증한 토큰의 주체를 조회합니다.
///
/// # Endpoint
/// `GET /api/v1/user`
#[get("")]
pub async fn current_user(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
) -> Result<HttpResponse, AppError> {
    let user = state.user_service.get_user_by_id(&auth.user_id).await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "data": user
    })))
}

/// 비밀번호 변경 핸들러
///
/// 기존 비밀번호 검증 후 새 비밀번호로 교체하고 토큰을 재발급합니다.
///
/// # Endpoint
/// `POST /api/v1/password/update`
///
/// # 응답
///
/// * `200 OK` - 새 토큰
/// * `401 Unauthorized` - 기존 비밀번호 불일치
#[post("/update")]
pub async fn update_password(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    payload: web::Json<ChangePasswordRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .user_service
        .change_password(&auth.user_id, payload.into_inner())
        .await?;
    let token = state.token_service.generate_token(&user)?;

    log::info!("🔒 비밀번호 변경: {}", user.email);

    Ok(credential_response(
        actix_web::http::StatusCode::OK,
        user,
        token,
    ))
}

/// 프로필 갱신 핸들러
///
/// 이름, 이메일, 휴대전화 정보를 갱신합니다.
///
/// # Endpoint
/// `POST /api/v1/user/update`
#[post("/update")]
pub async fn update_profile(
    state: web::Data<AppState>,
    auth: AuthenticatedUser,
    payload: web::Json<UpdateProfileRequest>,
) -> Result<HttpResponse, AppError> {
    let user = state
        .user_service
        .update_profile(&auth.user_id, payload.into_inner())
        .await?;

    Ok(HttpResponse::Ok().json(json!({
        "success": true,
        "user": user
    })))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_cookie_is_http_only() {
        let cookie = token_cookie("abc.def.ghi".to_string());

        assert_eq!(cookie.name(), "token");
        assert_eq!(cookie.value(), "abc.def.ghi");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
    }

    #[test]
    fn test_expired_cookie_has_zero_max_age() {
        let cookie = expired_token_cookie();

        assert_eq!(cookie.max_age(), Some(Duration::seconds(0)));
        assert_eq!(cookie.value(), "");
    }

    #[actix_web::test]
    async fn test_credential_envelope_is_flat() {
        let user = User::new_local(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "student".to_string(),
        );
        let response = credential_response(
            actix_web::http::StatusCode::CREATED,
            user,
            "abc.def.ghi".to_string(),
        );
        assert_eq!(response.status(), actix_web::http::StatusCode::CREATED);

        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["success"], true);
        assert_eq!(value["token"], "abc.def.ghi");
        assert_eq!(value["user"]["email"], "jane@example.com");
        assert!(value.get("data").is_none());
        assert!(value["user"].get("password").is_none());
    }
}
