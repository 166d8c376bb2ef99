//! JWT 인증 미들웨어
//!
//! ActixWeb 요청 파이프라인에서 JWT 토큰을 검증하고 사용자 정보를 추출합니다.
//!
//! 토큰은 두 가지 경로로 전달될 수 있습니다:
//!
//! 1. `Authorization: Bearer <token>` 헤더 (우선)
//! 2. `token` httpOnly 쿠키 (헤더가 없을 때의 대안)
//!
//! 검증에 성공하면 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)가
//! 요청 extensions에 삽입되어 보호된 핸들러가 추출자로 꺼내 쓸 수 있습니다.
//! 검증 실패는 fail-closed로 처리되어 401 응답으로 즉시 종료됩니다.

use std::future::{Ready, ready};
use std::rc::Rc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::AuthMiddlewareService;

/// JWT 인증 미들웨어
///
/// 보호할 스코프에 `.wrap(AuthMiddleware::required())` 형태로 적용합니다.
pub struct AuthMiddleware;

impl AuthMiddleware {
    /// 필수 인증 미들웨어 생성
    pub fn required() -> Self {
        Self
    }
}

/// ActixWeb Transform trait 구현
impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService {
            service: Rc::new(service),
        }))
    }
}
