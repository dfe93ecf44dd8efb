//! HTTP 미들웨어 모듈
//!
//! 보호된 라우트 앞단에서 bearer 토큰을 검증하는 인증 게이트를 제공합니다.

pub mod auth_inner;
pub mod auth_middleware;

pub use auth_middleware::AuthMiddleware;
