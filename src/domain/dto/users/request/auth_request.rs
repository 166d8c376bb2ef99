//! 인증/계정 요청 DTO
//!
//! 회원가입, 로그인, 비밀번호 변경, 프로필 갱신 요청의 본문을 매핑합니다.
//!
//! 필수 필드도 `Option`으로 선언합니다. 필드 누락을 역직렬화 오류가 아니라
//! 서비스 계층의 검증 오류("Please provide all the required fields")로
//! 돌려주기 위함입니다.

use crate::domain::entities::users::user::Mobile;
use serde::Deserialize;
use validator::Validate;

/// 회원가입 요청 구조체
///
/// 이메일 형식 검증은 존재 검증이 끝난 뒤 서비스 계층에서 수행합니다.
#[derive(Debug, Deserialize, Validate)]
pub struct SignupRequest {
    pub name: Option<String>,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email: Option<String>,

    pub password: Option<String>,
    pub role: Option<String>,
}

/// 로그인 요청 구조체
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

/// 비밀번호 변경 요청 구조체
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub old_password: Option<String>,
    pub new_password: Option<String>,
}

/// 프로필 갱신 요청 구조체
///
/// 휴대전화 정보는 저장 형식과 동일한 중첩 객체로 받습니다.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,

    #[validate(email(message = "Please provide a valid email address"))]
    pub email: Option<String>,

    pub mobile: Option<Mobile>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_change_password_uses_camel_case() {
        let request: ChangePasswordRequest =
            serde_json::from_str(r#"{"oldPassword": "old", "newPassword": "new"}"#).unwrap();

        assert_eq!(request.old_password.as_deref(), Some("old"));
        assert_eq!(request.new_password.as_deref(), Some("new"));
    }

    #[test]
    fn test_signup_tolerates_missing_fields() {
        let request: SignupRequest = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();

        assert!(request.name.is_none());
        assert_eq!(request.email.as_deref(), Some("a@b.c"));
    }

    #[test]
    fn test_update_profile_accepts_nested_mobile() {
        let request: UpdateProfileRequest = serde_json::from_str(
            r#"{"name": "Jane", "email": "jane@example.com", "mobile": {"countryCode": "+82", "phone": "010-1234"}}"#,
        )
        .unwrap();

        let mobile = request.mobile.unwrap();
        assert_eq!(mobile.country_code.as_deref(), Some("+82"));
        assert_eq!(mobile.phone.as_deref(), Some("010-1234"));
    }

    #[test]
    fn test_signup_email_format_is_validated() {
        let request: SignupRequest =
            serde_json::from_str(r#"{"email": "not-an-email"}"#).unwrap();
        assert!(request.validate().is_err());

        let request: SignupRequest =
            serde_json::from_str(r#"{"email": "jane@example.com"}"#).unwrap();
        assert!(request.validate().is_ok());
    }
}
