//! # 사용자 관리 서비스 구현
//!
//! 사용자 계정의 전체 생명주기를 관리하는 핵심 비즈니스 로직을 구현합니다.
//! 회원가입, 로그인 검증, 조회, 비밀번호 변경, 프로필 갱신을 담당합니다.
//!
//! ## 보안 설계 원칙
//!
//! ### 1. 비밀번호 보안 (Password Security)
//!
//! - **bcrypt 해싱**: 적응형 해시 함수로 무차별 대입 공격 방지
//! - **환경별 Cost**: 개발(4) vs 운영(12) 환경별 보안 강도
//! - **솔트 자동 생성**: 레인보우 테이블 공격 방지
//!
//! ### 2. 인증 보안 (Authentication Security)
//!
//! - **에러 메시지 통합**: 이메일/비밀번호 중 무엇이 틀렸는지 노출하지 않음
//! - **실패 로깅**: 인증 실패 시 보안 이벤트 기록
//!
//! ### 3. 데이터 보안 (Data Security)
//!
//! - **민감 정보 제거**: DTO 변환 시 비밀번호 해시 제외
//! - **중복 방지**: 이메일 유니크 제약

use crate::config::PasswordConfig;
use crate::errors::errors::{AppError, AppResult};
use crate::utils::string_utils::{clean_optional_string, has_text};
use crate::{
    domain::{
        dto::users::{
            request::{ChangePasswordRequest, LoginRequest, SignupRequest, UpdateProfileRequest},
            response::UserResponse,
        },
        entities::users::user::User,
    },
    repositories::users::user_repo::UserRepository,
};
use bcrypt::hash;
use mongodb::bson::{DateTime, doc};
use std::sync::Arc;
use validator::Validate;

/// 사용자 관리 비즈니스 로직 서비스
///
/// ## 주요 책임 (Responsibilities)
///
/// 1. **회원가입**: 입력값 검증, 비밀번호 해싱, 중복 계정 방지
/// 2. **로그인 검증**: 이메일 조회와 bcrypt 해시 비교
/// 3. **계정 조회**: 엔티티에서 DTO로의 안전한 변환
/// 4. **계정 관리**: 비밀번호 변경, 프로필 갱신
///
/// ## 에러 처리 전략
///
/// 모든 메서드는 `AppResult<T>` 타입을 반환하며,
/// 다음과 같은 일관된 에러 처리를 제공합니다:
///
/// - **ValidationError**: 입력값 검증 실패
/// - **ConflictError**: 비즈니스 규칙 위반 (이메일 중복)
/// - **AuthenticationError**: 인증 관련 오류
/// - **NotFound**: 리소스 존재하지 않음
/// - **InternalError**: 시스템 레벨 오류
pub struct UserService {
    /// 사용자 데이터 액세스 리포지토리
    user_repo: Arc<UserRepository>,
}

impl UserService {
    /// 새 서비스 인스턴스를 생성합니다.
    pub fn new(user_repo: Arc<UserRepository>) -> Self {
        Self { user_repo }
    }

    /// 새 사용자 계정 생성
    ///
    /// # 인자
    ///
    /// * `request` - 회원가입 요청 (이름, 이메일, 비밀번호, 역할)
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자 엔티티 (ID, 해시 포함)
    /// * `Err(AppError::ValidationError)` - 필수 필드 누락 또는 잘못된 이메일 형식
    /// * `Err(AppError::ConflictError)` - 이메일 중복
    /// * `Err(AppError::InternalError)` - 비밀번호 해싱 실패
    ///
    /// # 처리 과정
    ///
    /// 1. **존재 검증**: 네 필드 모두 공백이 아닌지 확인
    /// 2. **형식 검증**: 이메일 형식 확인
    /// 3. **비밀번호 해싱**: 환경별 cost로 bcrypt 해싱
    /// 4. **영구 저장**: 리포지토리를 통한 저장 (중복 검사 포함)
    pub async fn signup(&self, request: SignupRequest) -> AppResult<User> {
        let (name, email, password, role) = extract_signup_fields(request)?;

        // 환경별 bcrypt cost 사용
        let bcrypt_cost = PasswordConfig::bcrypt_cost();

        let hash_start = std::time::Instant::now();
        let password_hash = hash(&password, bcrypt_cost)
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;
        log::info!("Password hashing took: {:?}", hash_start.elapsed());

        let user = User::new_local(name, email, password_hash, role);

        self.user_repo.create(user).await
    }

    /// 로그인 자격증명 검증
    ///
    /// 이메일과 비밀번호를 검증하고 성공 시 사용자 엔티티를 반환합니다.
    /// 존재하지 않는 이메일과 틀린 비밀번호는 같은 메시지로 응답하여
    /// 어느 쪽이 틀렸는지 노출하지 않습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 인증된 사용자 엔티티
    /// * `Err(AppError::ValidationError)` - 필드 누락
    /// * `Err(AppError::AuthenticationError)` - 자격증명 불일치
    pub async fn verify_login(&self, request: LoginRequest) -> AppResult<User> {
        let (email, password) = extract_login_fields(request)?;

        let user = self
            .user_repo
            .find_by_email(&email)
            .await?
            .ok_or_else(|| {
                AppError::AuthenticationError("Please check your email and password".to_string())
            })?;

        let password_hash = user.password.as_ref().ok_or_else(|| {
            AppError::AuthenticationError("Please check your email and password".to_string())
        })?;

        let verify_start = std::time::Instant::now();
        let is_valid = bcrypt::verify(&password, password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;
        log::debug!("Password verification took: {:?}", verify_start.elapsed());

        if !is_valid {
            log::warn!("로그인 실패: {}", email);
            return Err(AppError::AuthenticationError(
                "Please check your email and password".to_string(),
            ));
        }

        Ok(user)
    }

    /// ID로 사용자 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 사용자 정보 DTO (민감 정보 제외)
    /// * `Err(AppError::NotFound)` - 해당 ID의 사용자가 존재하지 않음
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn get_user_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .user_repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }

    /// 비밀번호 변경
    ///
    /// 인증된 사용자의 기존 비밀번호를 검증한 뒤 새 비밀번호로 교체합니다.
    ///
    /// # 인자
    ///
    /// * `user_id` - 인증 미들웨어가 확인한 사용자 ID
    /// * `request` - 기존/새 비밀번호
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 갱신된 사용자 엔티티 (핸들러가 토큰을 재발급)
    /// * `Err(AppError::AuthenticationError)` - 기존 비밀번호 불일치
    pub async fn change_password(
        &self,
        user_id: &str,
        request: ChangePasswordRequest,
    ) -> AppResult<User> {
        if !has_text(&request.old_password) || !has_text(&request.new_password) {
            return Err(AppError::ValidationError(
                "Please provide all the required fields".to_string(),
            ));
        }

        let old_password = request.old_password.unwrap_or_default();
        let new_password = request.new_password.unwrap_or_default();

        let user = self
            .user_repo
            .find_by_id(user_id)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        let password_hash = user.password.as_ref().ok_or_else(|| {
            AppError::AuthenticationError("Old password is incorrect".to_string())
        })?;

        let is_valid = bcrypt::verify(&old_password, password_hash)
            .map_err(|e| AppError::InternalError(format!("Password verification failed: {}", e)))?;

        if !is_valid {
            return Err(AppError::AuthenticationError(
                "Old password is incorrect".to_string(),
            ));
        }

        let new_hash = hash(&new_password, PasswordConfig::bcrypt_cost())
            .map_err(|e| AppError::InternalError(format!("Password hashing failed: {}", e)))?;

        self.user_repo
            .update(
                user_id,
                doc! {
                    "password": &new_hash,
                    "updatedAt": DateTime::now(),
                },
            )
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))
    }

    /// 프로필 갱신
    ///
    /// 이름, 이메일, 휴대전화 정보를 갱신합니다. 이름과 이메일은 필수이며
    /// 휴대전화는 전달된 경우에만 덮어씁니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(UserResponse)` - 갱신된 사용자 정보 DTO
    /// * `Err(AppError::NotFound)` - 계정이 더 이상 존재하지 않음
    pub async fn update_profile(
        &self,
        user_id: &str,
        request: UpdateProfileRequest,
    ) -> AppResult<UserResponse> {
        if !has_text(&request.name) || !has_text(&request.email) {
            return Err(AppError::ValidationError(
                "Please provide all the required fields".to_string(),
            ));
        }

        request
            .validate()
            .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

        let name = clean_optional_string(request.name).unwrap_or_default();
        let email = clean_optional_string(request.email).unwrap_or_default();

        let mut update_doc = doc! {
            "name": &name,
            "email": &email,
            "updatedAt": DateTime::now(),
        };

        if let Some(mobile) = &request.mobile {
            let mobile_bson = mongodb::bson::to_bson(mobile).map_err(|e| {
                AppError::InternalError(format!("Failed to serialize mobile: {}", e))
            })?;
            update_doc.insert("mobile", mobile_bson);
        }

        let user = self
            .user_repo
            .update(user_id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

        Ok(UserResponse::from(user))
    }
}

/// 회원가입 필수 필드 검증 및 추출
///
/// 네 필드가 모두 존재하고 공백이 아닌 경우에만 정리된 값을 반환합니다.
fn extract_signup_fields(
    request: SignupRequest,
) -> AppResult<(String, String, String, String)> {
    if !has_text(&request.name)
        || !has_text(&request.email)
        || !has_text(&request.password)
        || !has_text(&request.role)
    {
        return Err(AppError::ValidationError(
            "Please provide all the required fields".to_string(),
        ));
    }

    request
        .validate()
        .map_err(|e| AppError::ValidationError(validation_message(&e)))?;

    Ok((
        clean_optional_string(request.name).unwrap_or_default(),
        clean_optional_string(request.email).unwrap_or_default(),
        // 비밀번호는 공백도 의미를 가질 수 있으므로 정리하지 않습니다
        request.password.unwrap_or_default(),
        clean_optional_string(request.role).unwrap_or_default(),
    ))
}

/// 로그인 필수 필드 검증 및 추출
fn extract_login_fields(request: LoginRequest) -> AppResult<(String, String)> {
    if !has_text(&request.email) || !has_text(&request.password) {
        return Err(AppError::ValidationError(
            "Please provide all the required fields".to_string(),
        ));
    }

    Ok((
        clean_optional_string(request.email).unwrap_or_default(),
        request.password.unwrap_or_default(),
    ))
}

/// validator 에러에서 첫 번째 메시지를 추출합니다.
fn validation_message(errors: &validator::ValidationErrors) -> String {
    errors
        .field_errors()
        .values()
        .flat_map(|field_errors| field_errors.iter())
        .filter_map(|error| error.message.as_ref().map(|message| message.to_string()))
        .next()
        .unwrap_or_else(|| "Invalid request payload".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn signup_request(
        name: Option<&str>,
        email: Option<&str>,
        password: Option<&str>,
        role: Option<&str>,
    ) -> SignupRequest {
        serde_json::from_value(serde_json::json!({
            "name": name,
            "email": email,
            "password": password,
            "role": role,
        }))
        .unwrap()
    }

    #[test]
    fn test_signup_fields_all_required() {
        let missing = [
            signup_request(None, Some("a@b.c"), Some("pw"), Some("user")),
            signup_request(Some("Jane"), None, Some("pw"), Some("user")),
            signup_request(Some("Jane"), Some("a@b.c"), None, Some("user")),
            signup_request(Some("Jane"), Some("a@b.c"), Some("pw"), None),
            signup_request(Some("  "), Some("a@b.c"), Some("pw"), Some("user")),
        ];

        for request in missing {
            let result = extract_signup_fields(request);
            assert!(matches!(result, Err(AppError::ValidationError(ref msg))
                if msg == "Please provide all the required fields"));
        }
    }

    #[test]
    fn test_signup_fields_are_trimmed() {
        let request = signup_request(
            Some("  Jane  "),
            Some("jane@example.com"),
            Some("secret"),
            Some("user"),
        );

        let (name, email, password, role) = extract_signup_fields(request).unwrap();
        assert_eq!(name, "Jane");
        assert_eq!(email, "jane@example.com");
        assert_eq!(password, "secret");
        assert_eq!(role, "user");
    }

    #[test]
    fn test_signup_rejects_malformed_email() {
        let request = signup_request(
            Some("Jane"),
            Some("not-an-email"),
            Some("secret"),
            Some("user"),
        );

        let result = extract_signup_fields(request);
        assert!(matches!(result, Err(AppError::ValidationError(ref msg))
            if msg == "Please provide a valid email address"));
    }

    #[test]
    fn test_login_fields_required() {
        let request: LoginRequest = serde_json::from_str(r#"{"email": "a@b.c"}"#).unwrap();
        assert!(extract_login_fields(request).is_err());

        let request: LoginRequest =
            serde_json::from_str(r#"{"email": "a@b.c", "password": "pw"}"#).unwrap();
        let (email, password) = extract_login_fields(request).unwrap();
        assert_eq!(email, "a@b.c");
        assert_eq!(password, "pw");
    }

    #[test]
    fn test_password_hash_round_trip() {
        // 테스트에서는 지연을 피하기 위해 최소 cost 사용
        let hashed = hash("secret", 4).unwrap();
        assert!(bcrypt::verify("secret", &hashed).unwrap());
        assert!(!bcrypt::verify("wrong", &hashed).unwrap());
    }
}
