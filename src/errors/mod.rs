//! 애플리케이션 전역에서 사용하는 에러 시스템
//!
//! `thiserror`와 `actix_web::ResponseError`를 사용하여 타입 안전하고
//! 일관된 에러 처리를 제공합니다. 모든 에러는 요청 단위로 포착되어
//! `{success: false, message, errors?}` 형태의 JSON 응답으로 변환되며,
//! 디버그 정보(`stack`)는 프로덕션이 아닌 환경에서만 포함됩니다.
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use backend_template::errors::{AppError, AppResult};
//!
//! async fn create_user(data: CreateUserRequest) -> AppResult<User> {
//!     if repo.find_by_email(&data.email).await?.is_some() {
//!         return Err(AppError::ConflictError("이미 등록된 이메일입니다".to_string()));
//!     }
//!     repo.create(data.into()).await
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

use crate::config::Environment;

/// 필드 단위 검증 에러
///
/// 요청 본문 스키마 검증 실패 시 클라이언트에 전달되는 항목입니다.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FieldError {
    /// 검증에 실패한 필드 이름
    pub field: String,
    /// 사람이 읽을 수 있는 실패 사유
    pub message: String,
}

/// 애플리케이션 전역 에러 타입
///
/// 백엔드 서비스에서 발생할 수 있는 모든 종류의 에러를 포괄하는 열거형입니다.
/// 자동으로 HTTP 응답으로 변환되어 클라이언트에게 전달됩니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 입력값 검증 에러 (400 Bad Request)
    #[error("Validation error: {0}")]
    ValidationError(String),

    /// 요청 스키마 검증 실패 (400 Bad Request) - 필드별 에러 목록 포함
    #[error("Validation failed")]
    RequestValidationError(Vec<FieldError>),

    /// 인증 실패 에러 (401 Unauthorized)
    #[error("{0}")]
    AuthenticationError(String),

    /// 리소스 찾을 수 없음 에러 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 충돌/중복 에러 (409 Conflict)
    #[error("Conflict error: {0}")]
    ConflictError(String),

    /// 데이터베이스 관련 에러 (500 Internal Server Error)
    #[error("Database error: {0}")]
    DatabaseError(String),

    /// 내부 서버 에러 (500 Internal Server Error)
    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::RequestValidationError(_) => {
                StatusCode::BAD_REQUEST
            }
            AppError::AuthenticationError(_) => StatusCode::UNAUTHORIZED,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::ConflictError(_) => StatusCode::CONFLICT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 모든 에러를 공통 에러 엔벨로프로 변환합니다. 스키마 검증 실패의 경우
    /// `errors` 배열에 필드별 상세 내역이 담깁니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let mut body = serde_json::json!({
            "success": false,
            "message": self.to_string(),
        });

        if let AppError::RequestValidationError(field_errors) = self {
            body["errors"] = serde_json::json!(field_errors);
        }

        // 디버그 정보는 프로덕션 밖에서만 노출
        if !Environment::current().is_production() {
            body["stack"] = serde_json::json!(format!("{:?}", self));
        }

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

impl From<validator::ValidationErrors> for AppError {
    /// `validator` 크레이트의 검증 결과를 필드+메시지 목록으로 평탄화합니다.
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut field_errors: Vec<FieldError> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| FieldError {
                    field: field.to_string(),
                    message: e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string()),
                })
            })
            .collect();

        // HashMap 순회 순서에 의존하지 않도록 정렬
        field_errors.sort_by(|a, b| a.field.cmp(&b.field));

        AppError::RequestValidationError(field_errors)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::ResponseError;
    use validator::Validate;

    #[test]
    fn test_validation_error_response() {
        let error = AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_request_validation_error_response() {
        let error = AppError::RequestValidationError(vec![FieldError {
            field: "email".to_string(),
            message: "유효한 이메일 주소를 입력해주세요".to_string(),
        }]);
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_authentication_error_response() {
        let error = AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::UNAUTHORIZED);
    }

    #[test]
    fn test_not_found_error_response() {
        let error = AppError::NotFound("사용자를 찾을 수 없습니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_conflict_error_response() {
        let error = AppError::ConflictError("이미 등록된 이메일입니다".to_string());
        let response = error.error_response();

        assert_eq!(response.status(), actix_web::http::StatusCode::CONFLICT);
    }

    #[test]
    fn test_internal_error_response() {
        let error = AppError::InternalError("Something went wrong".to_string());
        let response = error.error_response();

        assert_eq!(
            response.status(),
            actix_web::http::StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[derive(Validate)]
    struct Sample {
        #[validate(email(message = "유효한 이메일 주소를 입력해주세요"))]
        email: String,
        #[validate(length(min = 6, message = "비밀번호는 최소 6자 이상이어야 합니다"))]
        password: String,
    }

    #[test]
    fn test_validator_errors_flatten_to_field_list() {
        let sample = Sample {
            email: "not-an-email".to_string(),
            password: "pw".to_string(),
        };

        let error: AppError = sample.validate().unwrap_err().into();

        match error {
            AppError::RequestValidationError(fields) => {
                assert_eq!(fields.len(), 2);
                assert_eq!(fields[0].field, "email");
                assert_eq!(fields[0].message, "유효한 이메일 주소를 입력해주세요");
                assert_eq!(fields[1].field, "password");
                assert_eq!(fields[1].message, "비밀번호는 최소 6자 이상이어야 합니다");
            }
            other => panic!("Expected RequestValidationError, got {:?}", other),
        }
    }
}
