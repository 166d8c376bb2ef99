//! AuthMiddleware 인증 로직의 핵심적인 기능
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::web::Data;
use actix_web::{Error, HttpMessage, HttpResponse};
use futures_util::future::LocalBoxFuture;

use crate::core::state::AppState;
use crate::domain::models::auth::AuthenticatedUser;
use crate::errors::errors::AppError;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthMiddlewareService<S> {
    pub service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();

        Box::pin(async move {
            match authenticate_request(&req) {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);
                }
                Err(err) => {
                    log::warn!("인증 실패: {}", err);
                    let response = HttpResponse::Unauthorized().json(serde_json::json!({
                        "success": false,
                        "message": "Please login to get access"
                    }));
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    return Ok(res);
                }
            }

            // 다음 서비스로 요청 전달
            let res = service.call(req).await?;
            Ok(res.map_into_left_body())
        })
    }
}

/// 요청에서 JWT 토큰을 추출하고 검증
///
/// Authorization 헤더의 Bearer 토큰을 우선 사용하고, 헤더가 없으면
/// `token` 쿠키를 확인합니다. 어느 경로든 검증 실패는 에러로 처리됩니다.
fn authenticate_request(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let state = req.app_data::<Data<AppState>>().ok_or_else(|| {
        AppError::InternalError("Application state is not configured".to_string())
    })?;

    let token = extract_token(req)?;
    let claims = state.token_service.verify_token(&token)?;

    Ok(AuthenticatedUser::new(claims.id))
}

/// Bearer 헤더 또는 `token` 쿠키에서 토큰 문자열을 얻습니다.
fn extract_token(req: &ServiceRequest) -> Result<String, AppError> {
    if let Some(header) = req.headers().get("Authorization") {
        let header = header.to_str().map_err(|_| {
            AppError::AuthenticationError("Invalid authorization header format".to_string())
        })?;

        if !header.starts_with("Bearer ") {
            return Err(AppError::AuthenticationError(
                "Invalid authorization header format".to_string(),
            ));
        }

        return Ok(header[7..].to_string());
    }

    req.cookie("token")
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| AppError::AuthenticationError("Please login to get access".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::test::TestRequest;

    #[test]
    fn test_extract_token_prefers_bearer_header() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Bearer abc.def.ghi"))
            .cookie(actix_web::cookie::Cookie::new("token", "cookie-token"))
            .to_srv_request();

        assert_eq!(extract_token(&req).unwrap(), "abc.def.ghi");
    }

    #[test]
    fn test_extract_token_falls_back_to_cookie() {
        let req = TestRequest::default()
            .cookie(actix_web::cookie::Cookie::new("token", "cookie-token"))
            .to_srv_request();

        assert_eq!(extract_token(&req).unwrap(), "cookie-token");
    }

    #[test]
    fn test_extract_token_rejects_non_bearer_header() {
        let req = TestRequest::default()
            .insert_header(("Authorization", "Basic dXNlcjpwYXNz"))
            .to_srv_request();

        assert!(matches!(
            extract_token(&req),
            Err(AppError::AuthenticationError(_))
        ));
    }

    #[test]
    fn test_extract_token_without_credentials_fails() {
        let req = TestRequest::default().to_srv_request();

        let err = extract_token(&req).unwrap_err();
        assert_eq!(err.to_string(), "Please login to get access");
    }
}
