//! JWT 토큰 관리 서비스 구현
//!
//! JSON Web Token 기반의 인증 시스템을 제공합니다.
//! 로그인 토큰의 생성과 검증을 담당합니다.

use crate::{config::JwtConfig, domain::entities::users::user::User};
use crate::domain::models::token::token::TokenClaims;
use crate::errors::errors::{AppError, AppResult};
use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

/// JWT 토큰 관리 서비스
///
/// HMAC-SHA256 서명을 사용하여 안전한 JWT 토큰을 생성하고 검증합니다.
/// 토큰 만료 시간은 [`JwtConfig::expiration_hours`]를 따릅니다.
pub struct TokenService;

impl TokenService {
    /// 새 서비스 인스턴스를 생성합니다.
    pub fn new() -> Self {
        Self
    }

    /// 사용자를 위한 JWT 토큰 생성
    ///
    /// # Arguments
    ///
    /// * `user` - 토큰을 발급받을 사용자 정보
    ///
    /// # Returns
    ///
    /// * `Ok(String)` - 생성된 JWT 토큰
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    ///
    /// # Examples
    ///
    /// ```rust,ignore
    /// let token = state.token_service.generate_token(&user)?;
    /// ```
    pub fn generate_token(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::hours(JwtConfig::expiration_hours());

        let claims = TokenClaims {
            id: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("User has no id".to_string()))?,
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        let secret = JwtConfig::secret();
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(secret.as_ref());

        encode(&header, &claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("Failed to generate token: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// # Arguments
    ///
    /// * `token` - 검증할 JWT 토큰 문자열 (Bearer 접두사 제외)
    ///
    /// # Returns
    ///
    /// * `Ok(TokenClaims)` - 검증된 토큰의 클레임 정보
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 토큰 만료, 잘못된 형식/서명
    /// * `AppError::InternalError` - 기타 시스템 오류
    pub fn verify_token(&self, token: &str) -> AppResult<TokenClaims> {
        let secret = JwtConfig::secret();
        let decoding_key = DecodingKey::from_secret(secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("Token has expired".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidToken => {
                    AppError::AuthenticationError("Invalid token".to_string())
                }
                jsonwebtoken::errors::ErrorKind::InvalidSignature => {
                    AppError::AuthenticationError("Invalid token signature".to_string())
                }
                _ => AppError::InternalError(format!("Token verification failed: {}", e)),
            })
    }

    /// Bearer 토큰에서 실제 토큰 부분 추출
    ///
    /// HTTP Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만을 추출합니다.
    ///
    /// # Arguments
    ///
    /// * `auth_header` - HTTP Authorization 헤더 값 전체
    ///
    /// # Returns
    ///
    /// * `Ok(&str)` - Bearer 접두사를 제거한 순수 토큰 문자열
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - 잘못된 헤더 형식
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        if auth_header.starts_with("Bearer ") {
            Ok(&auth_header[7..])
        } else {
            Err(AppError::AuthenticationError(
                "Invalid authorization header format".to_string(),
            ))
        }
    }
}

impl Default for TokenService {
    fn default() -> Self {
        Self::new()
    }
}
