//! JWT 인증 게이트
//!
//! ActixWeb 요청 파이프라인에서 bearer 토큰을 검증하고 사용자 컨텍스트를
//! 부착합니다. 역할/권한 검사는 하지 않습니다: "유효하고 만료되지 않은
//! 토큰인가"만 확인합니다.

use std::future::{Ready, ready};
use std::rc::Rc;
use std::sync::Arc;

use actix_web::{
    Error, Result,
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
};

use crate::middlewares::auth_inner::AuthGateService;
use crate::services::token::TokenService;

/// JWT 인증 게이트 미들웨어
///
/// 토큰 검증기는 생성자로 주입됩니다.
pub struct AuthMiddleware {
    tokens: Arc<TokenService>,
}

impl AuthMiddleware {
    /// 주어진 토큰 서비스로 게이트 생성
    pub fn new(tokens: Arc<TokenService>) -> Self {
        Self { tokens }
    }
}

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthGateService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthGateService {
            service: Rc::new(service),
            tokens: self.tokens.clone(),
        }))
    }
}
