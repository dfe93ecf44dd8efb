//! JWT 토큰 발급/검증 서비스
//!
//! HMAC-SHA256 서명의 컴팩트 JWT 를 발급하고 검증합니다.
//! 토큰은 상태가 없습니다: 서버 측 폐기 목록이 없으며, 유효성은 서명과
//! 만료 확인만으로 결정됩니다. 발급된 토큰은 만료되거나 시크릿이
//! 바뀌면 죽습니다.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::config::JwtConfig;
use crate::domain::auth::TokenClaims;
use crate::domain::entities::user::User;
use crate::errors::{AppError, AppResult};

/// JWT 토큰 관리 서비스
///
/// 시크릿과 TTL 은 생성 시점에 주입됩니다. 검증은 오직
/// (토큰, 시크릿, 현재 시각)의 함수입니다.
#[derive(Clone)]
pub struct TokenService {
    secret: String,
    ttl_seconds: i64,
}

impl TokenService {
    /// 지정한 시크릿과 TTL 로 서비스 생성
    pub fn new(secret: String, ttl_seconds: i64) -> Self {
        Self {
            secret,
            ttl_seconds,
        }
    }

    /// 환경 설정에서 시크릿을 읽어 서비스 생성 (TTL 1시간 고정)
    pub fn from_env() -> Self {
        Self::new(JwtConfig::secret(), JwtConfig::ttl_seconds())
    }

    /// 토큰 유효 기간(초)
    pub fn ttl_seconds(&self) -> i64 {
        self.ttl_seconds
    }

    /// 사용자를 위한 액세스 토큰 발급
    ///
    /// 클레임은 사용자 ID 와 이메일, 발급 시각(iat), 만료 시각(exp = iat + TTL)
    /// 으로 구성됩니다.
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 토큰 생성 실패 또는 사용자 ID 없음
    pub fn issue(&self, user: &User) -> AppResult<String> {
        let now = Utc::now();
        let expiration = now + Duration::seconds(self.ttl_seconds);

        let claims = TokenClaims {
            sub: user
                .id_string()
                .ok_or_else(|| AppError::InternalError("사용자 ID가 없습니다".to_string()))?,
            email: user.email.clone(),
            iat: now.timestamp(),
            exp: expiration.timestamp(),
        };

        self.issue_claims(&claims)
    }

    /// 주어진 클레임을 그대로 서명하여 토큰 생성
    pub fn issue_claims(&self, claims: &TokenClaims) -> AppResult<String> {
        let header = Header::default();
        let encoding_key = EncodingKey::from_secret(self.secret.as_ref());

        encode(&header, claims, &encoding_key)
            .map_err(|e| AppError::InternalError(format!("JWT 토큰 생성 실패: {}", e)))
    }

    /// JWT 토큰 검증 및 클레임 추출
    ///
    /// 서명 불일치, 구조 손상, 만료 중 어느 경우든 401 로 매핑되는
    /// 인증 에러를 돌려줍니다.
    pub fn verify(&self, token: &str) -> AppResult<TokenClaims> {
        let decoding_key = DecodingKey::from_secret(self.secret.as_ref());
        let validation = Validation::default();

        decode::<TokenClaims>(token, &decoding_key, &validation)
            .map(|token_data| token_data.claims)
            .map_err(|e| match e.kind() {
                jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                    AppError::AuthenticationError("토큰이 만료되었습니다".to_string())
                }
                _ => AppError::AuthenticationError("유효하지 않은 토큰입니다".to_string()),
            })
    }

    /// Authorization 헤더의 "Bearer {token}" 형식에서 토큰 부분만 추출
    ///
    /// # Errors
    ///
    /// * `AppError::AuthenticationError` - Bearer 접두사가 없는 헤더
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::AuthenticationError("유효하지 않은 인증 헤더 형식입니다".to_string())
        })
    }
}
