//! 응답 DTO 정의
//!
//! 모든 성공 응답은 `{success: true, message, data}` 엔벨로프를 공유합니다.
//! 엔티티의 비밀번호 해시는 어떤 응답 DTO 에도 포함되지 않습니다.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::domain::entities::user::User;

/// 공통 성공 응답 엔벨로프
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T: Serialize> ApiResponse<T> {
    /// 데이터를 포함한 성공 응답 생성
    pub fn new(data: T, message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: Some(data),
        }
    }
}

impl ApiResponse<()> {
    /// 데이터 없는 성공 응답 생성 (삭제 등)
    pub fn message_only(message: &str) -> Self {
        Self {
            success: true,
            message: message.to_string(),
            data: None,
        }
    }
}

/// 사용자 공개 프로필 응답 DTO
///
/// 타임스탬프는 저장 형식(BSON DateTime)과 달리 RFC 3339 문자열로 직렬화됩니다.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            name,
            email,
            created_at,
            updated_at,
            ..
        } = user;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            name,
            email,
            created_at: created_at.to_chrono(),
            updated_at: updated_at.to_chrono(),
        }
    }
}

/// 회원가입 응답 데이터
#[derive(Debug, Clone, Serialize)]
pub struct SignupData {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// 로그인 응답 데이터 (JWT 토큰 포함)
#[derive(Debug, Clone, Serialize)]
pub struct AuthResponse {
    /// 서명된 컴팩트 JWT 문자열
    pub token: String,
    /// 토큰 유효 기간(초)
    #[serde(rename = "expiresIn")]
    pub expires_in: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_user() -> User {
        User::new(
            "홍길동".to_string(),
            "hong@example.com".to_string(),
            "$2b$04$abcdefghijklmnopqrstuv".to_string(),
        )
    }

    #[test]
    fn test_user_response_never_exposes_password_hash() {
        let response = UserResponse::from(sample_user());
        let json = serde_json::to_value(&response).unwrap();

        let keys: Vec<&String> = json.as_object().unwrap().keys().collect();
        assert!(!keys.iter().any(|k| k.contains("password")));
        assert_eq!(json["name"], "홍길동");
        assert_eq!(json["email"], "hong@example.com");
    }

    #[test]
    fn test_envelope_shape() {
        let response = ApiResponse::new(
            AuthResponse {
                token: "abc.def.ghi".to_string(),
                expires_in: 3600,
            },
            "로그인 성공",
        );
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert_eq!(json["message"], "로그인 성공");
        assert_eq!(json["data"]["token"], "abc.def.ghi");
        assert_eq!(json["data"]["expiresIn"], 3600);
    }

    #[test]
    fn test_message_only_envelope_omits_data() {
        let response = ApiResponse::message_only("사용자가 삭제되었습니다");
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["success"], true);
        assert!(json.get("data").is_none());
    }
}
