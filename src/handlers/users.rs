//! User Management HTTP Handlers
//!
//! 사용자 리소스의 CRUD 엔드포인트입니다. 라우팅 계층에서 인증 게이트가
//! 적용되므로, 여기서는 이미 검증된 요청만 다룹니다.
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `GET` | `/api/users` | 사용자 목록 조회 | 200 OK |
//! | `POST` | `/api/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/api/users/{id}` | 사용자 조회 | 200 OK |
//! | `PUT` | `/api/users/{id}` | 사용자 부분 수정 | 200 OK |
//! | `DELETE` | `/api/users/{id}` | 사용자 삭제 (멱등) | 200 OK |

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::domain::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::response::ApiResponse;
use crate::errors::AppError;
use crate::services::users::UserService;

/// 사용자 목록 조회 핸들러
///
/// # Endpoint
/// `GET /api/users`
#[get("")]
pub async fn list_users(
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let users = user_service.find_all().await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(users, "사용자 목록 조회 성공")))
}

/// 사용자 생성 핸들러
///
/// # Endpoint
/// `POST /api/users`
#[post("")]
pub async fn create_user(
    payload: web::Json<CreateUserRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = user_service.create(payload.into_inner()).await?;

    Ok(HttpResponse::Created().json(ApiResponse::new(user, "사용자가 생성되었습니다")))
}

/// 사용자 단건 조회 핸들러
///
/// # Endpoint
/// `GET /api/users/{id}`
#[get("/{id}")]
pub async fn get_user(
    id: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    let user = user_service.find_by_id(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(user, "사용자 조회 성공")))
}

/// 사용자 수정 핸들러
///
/// 제공된 필드만 기존 레코드 위에 병합합니다.
///
/// # Endpoint
/// `PUT /api/users/{id}`
#[put("/{id}")]
pub async fn update_user(
    id: web::Path<String>,
    payload: web::Json<UpdateUserRequest>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let user = user_service.update(&id, payload.into_inner()).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::new(user, "사용자가 수정되었습니다")))
}

/// 사용자 삭제 핸들러
///
/// 멱등 연산입니다: 존재하지 않는 ID 도 성공으로 응답합니다.
///
/// # Endpoint
/// `DELETE /api/users/{id}`
#[delete("/{id}")]
pub async fn delete_user(
    id: web::Path<String>,
    user_service: web::Data<UserService>,
) -> Result<HttpResponse, AppError> {
    user_service.delete(&id).await?;

    Ok(HttpResponse::Ok().json(ApiResponse::message_only("사용자가 삭제되었습니다")))
}
