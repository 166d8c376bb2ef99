use serde::{Deserialize, Serialize};
use mongodb::bson::DateTime;
use crate::domain::entities::users::user::{Mobile, User};

/// 사용자 응답 DTO
///
/// 비밀번호 해시를 제외한 사용자 정보를 클라이언트에 전달합니다.
/// ObjectId는 hex 문자열로 변환됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<Mobile>,
    pub created_at: DateTime,
    pub updated_at: DateTime,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            role,
            mobile,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            role,
            mobile,
            created_at,
            updated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_excludes_password() {
        let mut user = User::new_local(
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "$2b$04$hash".to_string(),
            "student".to_string(),
        );
        user.id = Some(ObjectId::new());

        let response = UserResponse::from(user.clone());
        let value = serde_json::to_value(&response).unwrap();

        assert!(value.get("password").is_none());
        assert_eq!(value["id"], user.id.unwrap().to_hex());
        assert_eq!(value["email"], "jane@example.com");
    }
}
