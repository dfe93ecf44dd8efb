//! AuthMiddleware 인증 로직의 핵심적인 기능

use std::rc::Rc;
use std::sync::Arc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, forward_ready};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::LocalBoxFuture;

use crate::domain::auth::AuthenticatedUser;
use crate::errors::{AppError, AppResult};
use crate::services::token::TokenService;

/// 실제 인증 로직을 수행하는 서비스
pub struct AuthGateService<S> {
    pub service: Rc<S>,
    pub tokens: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for AuthGateService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, actix_web::Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let tokens = self.tokens.clone();

        Box::pin(async move {
            match authenticate(&req, &tokens) {
                Ok(user) => {
                    log::debug!("인증 성공: 사용자 ID {}", user.user_id);
                    req.extensions_mut().insert(user);

                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    // 거부 시 어떤 부수 효과도 없이 공통 에러 엔벨로프로 응답
                    log::warn!("인증 실패: {}", err);

                    let response = err.error_response();
                    let (req, _) = req.into_parts();
                    let res = ServiceResponse::new(req, response).map_into_right_body();
                    Ok(res)
                }
            }
        })
    }
}

/// 요청에서 bearer 토큰을 추출하고 검증
///
/// 헤더 부재, 형식 오류, 토큰 무효/만료 모두 401 로 매핑되는
/// 인증 에러를 돌려줍니다.
fn authenticate(req: &ServiceRequest, tokens: &TokenService) -> AppResult<AuthenticatedUser> {
    let auth_header = req
        .headers()
        .get("Authorization")
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::AuthenticationError("Authorization 헤더가 없습니다".to_string()))?;

    let token = tokens.extract_bearer_token(auth_header)?;
    let claims = tokens.verify(token)?;

    Ok(claims.into())
}
