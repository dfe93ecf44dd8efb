//! 요청 DTO 정의
//!
//! 클라이언트 입력 데이터의 JSON 역직렬화와 스키마 검증을 담당합니다.
//! 검증 규칙: 이름 2자 이상, RFC 5322 이메일, 비밀번호 6자 이상.

use serde::Deserialize;
use validator::Validate;

/// 회원가입 요청 DTO
///
/// `POST /api/auth/signup` 요청 본문입니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SignupRequest {
    /// 표시 이름 (2자 이상)
    #[validate(length(min = 2, message = "이름은 최소 2자 이상이어야 합니다"))]
    pub name: String,

    /// 사용자 이메일 주소
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    /// 계정 비밀번호 (6자 이상)
    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,
}

/// 로그인 요청 DTO
///
/// `POST /api/auth/login` 요청 본문입니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,
}

/// 사용자 생성 요청 DTO
///
/// `POST /api/users` 요청 본문입니다. 회원가입과 동일한 스키마를 사용하지만,
/// 리소스 CRUD 경로와 인증 플로우가 독립적으로 진화할 수 있도록 분리되어 있습니다.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(length(min = 2, message = "이름은 최소 2자 이상이어야 합니다"))]
    pub name: String,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: String,

    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: String,
}

/// 사용자 수정 요청 DTO
///
/// `PUT /api/users/{id}` 요청 본문입니다. 제공된 필드만 기존 레코드 위에
/// 병합되며, 모든 필드가 선택적입니다.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUserRequest {
    #[validate(length(min = 2, message = "이름은 최소 2자 이상이어야 합니다"))]
    pub name: Option<String>,

    #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
    pub email: Option<String>,

    #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
    pub password: Option<String>,
}

impl UpdateUserRequest {
    /// 수정할 내용이 하나도 없는지 확인
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.password.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_signup_request_accepts_valid_payload() {
        let request = SignupRequest {
            name: "홍길동".to_string(),
            email: "hong@example.com".to_string(),
            password: "secret123".to_string(),
        };

        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_signup_request_rejects_short_name() {
        let request = SignupRequest {
            name: "홍".to_string(),
            email: "hong@example.com".to_string(),
            password: "secret123".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("name"));
    }

    #[test]
    fn test_signup_request_rejects_invalid_email() {
        let request = SignupRequest {
            name: "홍길동".to_string(),
            email: "not-an-email".to_string(),
            password: "secret123".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_login_request_rejects_short_password() {
        let request = LoginRequest {
            email: "hong@example.com".to_string(),
            password: "12345".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("password"));
    }

    #[test]
    fn test_update_request_optional_fields() {
        // 빈 본문도 유효한 요청이다
        let empty = UpdateUserRequest::default();
        assert!(empty.validate().is_ok());
        assert!(empty.is_empty());

        // 제공된 필드에는 규칙이 적용된다
        let partial = UpdateUserRequest {
            name: Some("김철수".to_string()),
            email: None,
            password: None,
        };
        assert!(partial.validate().is_ok());
        assert!(!partial.is_empty());

        let invalid = UpdateUserRequest {
            name: None,
            email: Some("broken".to_string()),
            password: None,
        };
        assert!(invalid.validate().is_err());
    }
}
