//! 인증 컨텍스트 모델
//!
//! JWT 토큰 클레임과, 인증 게이트를 통과한 요청에 부착되는
//! 사용자 컨텍스트를 정의합니다.

use std::future::{Ready, ready};

use actix_web::{FromRequest, HttpMessage, HttpRequest, dev::Payload};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

/// JWT 토큰 클레임
///
/// 토큰 페이로드에 담기는 정보입니다. 검증은 오직
/// (토큰, 시크릿, 현재 시각)의 함수이며 서버 측 상태를 참조하지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TokenClaims {
    /// 사용자 ID (MongoDB ObjectId 문자열)
    pub sub: String,
    /// 사용자 이메일
    pub email: String,
    /// 발급 시각 (unix timestamp)
    pub iat: i64,
    /// 만료 시각 (unix timestamp, 발급 + 1시간)
    pub exp: i64,
}

/// 인증 게이트를 통과한 요청의 사용자 컨텍스트
///
/// 게이트가 토큰 검증 후 Request Extensions 에 삽입하며,
/// 핸들러는 extractor 로 꺼내 사용합니다.
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    /// 토큰의 `sub` 클레임 (사용자 ID)
    pub user_id: String,
    /// 토큰의 `email` 클레임
    pub email: String,
}

impl From<TokenClaims> for AuthenticatedUser {
    fn from(claims: TokenClaims) -> Self {
        Self {
            user_id: claims.sub,
            email: claims.email,
        }
    }
}

impl FromRequest for AuthenticatedUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    /// Request Extensions 에서 인증된 사용자 정보를 추출합니다.
    ///
    /// 인증 게이트가 적용되지 않은 라우트에서 사용하면 401을 반환합니다.
    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        ready(
            req.extensions()
                .get::<AuthenticatedUser>()
                .cloned()
                .ok_or_else(|| {
                    AppError::AuthenticationError("인증 정보가 없습니다".to_string())
                }),
        )
    }
}
