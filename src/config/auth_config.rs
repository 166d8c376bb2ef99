//! # Authentication Configuration Module
//!
//! JWT 토큰 서명 및 만료 관련 설정을 관리하는 모듈입니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ```bash
//! export JWT_SECRET="your-super-secret-jwt-key"
//! export JWT_EXPIRATION_HOURS="24"
//! ```

use std::env;

/// JSON Web Token (JWT) 관련 설정을 관리하는 구조체
///
/// 토큰 생성, 검증, 만료 시간 등을 관리합니다.
///
/// ## JWT 보안 모범 사례
///
/// 1. **강력한 비밀키 사용**: 최소 256비트 (32바이트) 랜덤 키
/// 2. **적절한 만료 시간**: 보안과 사용성의 균형 고려
/// 3. **토큰 저장소 보안**: 클라이언트에서 httpOnly 쿠키 사용
pub struct JwtConfig;

impl JwtConfig {
    /// JWT 서명에 사용할 비밀키를 반환합니다.
    ///
    /// 이 키는 JWT 토큰의 무결성을 보장하는 핵심 요소입니다.
    /// 강력한 암호화 키를 사용해야 하며, 절대 노출되어서는 안 됩니다.
    ///
    /// # 기본값
    ///
    /// 환경 변수가 설정되지 않은 경우 "your-secret-key"를 사용하지만,
    /// 이는 개발 환경에서만 안전하며 경고 로그가 출력됩니다.
    ///
    /// # 키 생성 예제
    ///
    /// ```bash
    /// openssl rand -base64 32
    /// ```
    pub fn secret() -> String {
        env::var("JWT_SECRET").unwrap_or_else(|_| {
            log::warn!("JWT_SECRET not set, using default (not secure for production!)");
            "your-secret-key".to_string()
        })
    }

    /// JWT 토큰의 만료 시간을 시간 단위로 반환합니다.
    ///
    /// # 기본값
    ///
    /// 24시간
    ///
    /// # 환경 변수 설정
    ///
    /// ```bash
    /// export JWT_EXPIRATION_HOURS="1"
    /// ```
    pub fn expiration_hours() -> i64 {
        env::var("JWT_EXPIRATION_HOURS")
            .unwrap_or_else(|_| "24".to_string())
            .parse()
            .unwrap_or(24)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiration_hours_default() {
        if env::var("JWT_EXPIRATION_HOURS").is_err() {
            assert_eq!(JwtConfig::expiration_hours(), 24);
        }
    }

    #[test]
    fn test_secret_falls_back_to_default() {
        if env::var("JWT_SECRET").is_err() {
            assert_eq!(JwtConfig::secret(), "your-secret-key");
        }
    }
}
