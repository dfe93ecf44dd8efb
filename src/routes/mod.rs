//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 등록합니다.
//!
//! # Route Groups
//!
//! ## Public (인증 불필요)
//! - `POST /api/auth/signup` - 회원가입
//! - `POST /api/auth/login` - 로그인
//! - `GET /health` - 헬스체크
//!
//! ## Protected (bearer 토큰 필요)
//! - `GET /api/users` - 사용자 목록
//! - `POST /api/users` - 사용자 생성
//! - `GET/PUT/DELETE /api/users/{id}` - 단건 조회/수정/삭제
//!
//! 계정이 필요한 클라이언트는 공개 경로인 `/api/auth/signup` 을 사용합니다.

use std::sync::Arc;

use actix_web::web;
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;
use crate::services::token::TokenService;

/// 모든 라우트를 설정합니다
///
/// # Arguments
///
/// * `cfg` - Actix-web 서비스 설정 객체
/// * `tokens` - 인증 게이트가 사용할 토큰 검증기
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, tokens: Arc<TokenService>) {
    cfg.service(health_check);

    configure_auth_routes(cfg);
    configure_user_routes(cfg, tokens);
}

/// 인증 관련 라우트를 설정합니다
///
/// 인증을 위한 엔드포인트이므로 모두 Public 접근이 가능합니다.
fn configure_auth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/auth")
            .service(handlers::auth::signup)
            .service(handlers::auth::login),
    );
}

/// 사용자 관련 라우트를 설정합니다
///
/// 스코프 전체에 인증 게이트가 적용됩니다.
fn configure_user_routes(cfg: &mut web::ServiceConfig, tokens: Arc<TokenService>) {
    cfg.service(
        web::scope("/api/users")
            .wrap(AuthMiddleware::new(tokens))
            .service(handlers::users::list_users)
            .service(handlers::users::create_user)
            .service(handlers::users::get_user)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// 서비스 상태를 확인하는 헬스체크 엔드포인트
///
/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
#[actix_web::get("/health")]
async fn health_check() -> actix_web::HttpResponse {
    actix_web::HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "backend_template",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
