//! JWT 인증 토큰 클레임 구조체
//!
//! RFC 7519 JWT 표준 클레임 중 발급/만료 시각과 사용자 식별자만 포함합니다.

use serde::{Deserialize, Serialize};

/// JWT 토큰의 클레임(Payload) 구조체
///
/// 개인정보 보호를 위해 최소한의 정보만 담습니다.
///
/// ## 클레임 구성
///
/// - `id`: 토큰의 주체 (사용자 ID, hex 문자열)
/// - `iat`: 토큰 발급 시간 (Unix timestamp)
/// - `exp`: 토큰 만료 시간 (Unix timestamp)
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenClaims {
    /// 사용자 고유 ID
    pub id: String,
    /// 토큰 발급 시간 (Unix timestamp)
    pub iat: i64,
    /// 토큰 만료 시간 (Unix timestamp)
    pub exp: i64,
}
