//! Authentication HTTP Handlers
//!
//! 사용자 인증과 관련된 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! JWT 토큰 기반의 상태 없는 인증을 구현합니다.

use actix_web::{HttpResponse, post, web};
use validator::Validate;

use crate::domain::dto::request::{LoginRequest, SignupRequest};
use crate::domain::dto::response::ApiResponse;
use crate::errors::AppError;
use crate::services::auth::AuthService;

/// 회원가입 핸들러
///
/// # Endpoint
/// `POST /api/auth/signup`
///
/// # Responses
///
/// * `201 Created` - 생성된 계정의 공개 프로필
/// * `400 Bad Request` - 요청 본문 검증 실패
/// * `409 Conflict` - 이미 등록된 이메일
#[post("/signup")]
pub async fn signup(
    payload: web::Json<SignupRequest>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let data = auth_service.register(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(data, "회원가입이 완료되었습니다")))
}

/// 로그인 핸들러
///
/// 이메일과 비밀번호를 검증하고 1시간 TTL 의 bearer 토큰을 발급합니다.
///
/// # Endpoint
/// `POST /api/auth/login`
///
/// # Responses
///
/// * `200 OK` - `{token, expiresIn}`
/// * `401 Unauthorized` - 이메일 없음 또는 비밀번호 불일치 (동일한 메시지)
#[post("/login")]
pub async fn login(
    payload: web::Json<LoginRequest>,
    auth_service: web::Data<AuthService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let data = auth_service.login(payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(data, "로그인 성공")))
}
