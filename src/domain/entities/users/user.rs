//! User Entity Implementation
//!
//! 사용자 엔티티의 핵심 구현체입니다.
//! 이메일/비밀번호 기반의 로컬 인증 계정을 표현합니다.

use mongodb::bson::{oid::ObjectId, DateTime};
use serde::{Deserialize, Serialize};

/// 휴대전화 정보 (국가 코드 + 번호)
///
/// 프로필 갱신 시 클라이언트가 일부 필드만 보낼 수 있어 모든 필드가 선택적입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Mobile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
}

/// 사용자 엔티티
///
/// 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
/// 저장 문서의 필드명은 camelCase를 사용합니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 사용자 이름
    pub name: String,
    /// 사용자 이메일 (unique)
    pub email: String,
    /// bcrypt 해시된 비밀번호. 응답 DTO에는 절대 포함되지 않습니다.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    /// 가입 시 선택한 역할 (권한 분기에는 사용하지 않음)
    pub role: String,
    /// 휴대전화 정보
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Mobile>,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 로컬 사용자 생성 (이메일/패스워드)
    ///
    /// 비밀번호는 호출 측에서 이미 해시된 상태여야 합니다.
    pub fn new_local(name: String, email: String, password_hash: String, role: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password: Some(password_hash),
            role,
            mobile: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }

    /// 비밀번호 인증이 가능한 사용자인지 확인
    pub fn can_authenticate_with_password(&self) -> bool {
        self.password.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_local_sets_timestamps_and_hash() {
        let user = User::new_local(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "student".to_string(),
        );

        assert!(user.id.is_none());
        assert_eq!(user.email, "jane@example.com");
        assert!(user.can_authenticate_with_password());
        assert_eq!(user.created_at, user.updated_at);
    }

    #[test]
    fn test_id_string_round_trip() {
        let mut user = User::new_local(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "student".to_string(),
        );
        assert!(user.id_string().is_none());

        let oid = ObjectId::new();
        user.id = Some(oid);
        assert_eq!(user.id_string(), Some(oid.to_hex()));
    }

    #[test]
    fn test_password_never_serialized_when_absent() {
        let mut user = User::new_local(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "student".to_string(),
        );
        user.password = None;

        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("password").is_none());
        assert!(value.get("createdAt").is_some());
    }
}
