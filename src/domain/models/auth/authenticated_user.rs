use std::future::{ready, Ready};

use actix_web::{Error, FromRequest, HttpMessage, HttpRequest};
use serde::{Deserialize, Serialize};

/// JWT 토큰에서 추출된 사용자 정보
///
/// 인증 미들웨어가 토큰 검증 후 요청 extensions에 삽입하며,
/// 보호된 핸들러는 이 추출자를 통해 요청 주체를 얻습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthenticatedUser {
    /// 사용자 고유 ID (hex 문자열)
    pub user_id: String,
}

impl AuthenticatedUser {
    pub fn new(user_id: String) -> Self {
        Self { user_id }
    }
}

/// ActixWeb FromRequest trait 구현
impl FromRequest for AuthenticatedUser {
    type Error = Error;
    type Future = Ready<actix_web::Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut actix_web::dev::Payload) -> Self::Future {
        match req.extensions().get::<AuthenticatedUser>() {
            Some(user) => ready(Ok(user.clone())),
            None => ready(Err(actix_web::error::ErrorUnauthorized(
                serde_json::json!({
                    "success": false,
                    "message": "Please login to get access"
                })
                .to_string(),
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_keeps_user_id() {
        let user = AuthenticatedUser::new("64f0c2a9aa1d2b3c4d5e6f70".to_string());
        assert_eq!(user.user_id, "64f0c2a9aa1d2b3c4d5e6f70");
    }
}
