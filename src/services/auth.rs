//! 인증 플로우 서비스
//!
//! 회원가입과 로그인 두 플로우를 구현합니다. 각 플로우는 한 번의 패스로
//! 끝나는 단말 상태 기계입니다: 회원가입은 중복 확인 → 해싱 → 생성,
//! 로그인은 조회 → 검증 → 토큰 발급.

use std::sync::Arc;

use crate::domain::dto::request::{LoginRequest, SignupRequest};
use crate::domain::dto::response::{AuthResponse, SignupData};
use crate::domain::entities::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::users::UserStore;
use crate::services::password::PasswordHasher;
use crate::services::token::TokenService;

/// 로그인 실패 시 공통 메시지
///
/// 존재하지 않는 이메일과 잘못된 비밀번호를 구분할 수 없어야 하므로
/// 두 경우 모두 정확히 같은 메시지를 사용합니다.
const INVALID_CREDENTIALS: &str = "잘못된 이메일 또는 비밀번호입니다";

/// 인증 플로우 서비스
pub struct AuthService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
    tokens: Arc<TokenService>,
}

impl AuthService {
    pub fn new(
        users: Arc<dyn UserStore>,
        hasher: PasswordHasher,
        tokens: Arc<TokenService>,
    ) -> Self {
        Self {
            users,
            hasher,
            tokens,
        }
    }

    /// 회원가입
    ///
    /// # 반환값
    ///
    /// * `Ok(SignupData)` - 생성된 계정의 공개 프로필 (해시 미포함)
    /// * `Err(AppError::ConflictError)` - 이메일 중복. 기존 레코드는 변경되지 않습니다.
    /// * `Err(AppError::InternalError)` - 해싱 실패. 계정은 생성되지 않습니다.
    pub async fn register(&self, request: SignupRequest) -> AppResult<SignupData> {
        if self.users.find_by_email(&request.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 등록된 이메일입니다".to_string(),
            ));
        }

        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(request.name, request.email, password_hash);

        let created = self.users.create(user).await?;

        log::info!("회원가입 완료: {}", created.email);

        Ok(SignupData {
            id: created.id_string().unwrap_or_default(),
            name: created.name,
            email: created.email,
        })
    }

    /// 로그인
    ///
    /// 성공 시 1시간 TTL 의 액세스 토큰을 발급합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(AuthResponse)` - 토큰과 만료 시간(초)
    /// * `Err(AppError::AuthenticationError)` - 이메일 없음 또는 비밀번호
    ///   불일치. 어느 쪽이 실패했는지 드러내지 않습니다.
    pub async fn login(&self, request: LoginRequest) -> AppResult<AuthResponse> {
        let user = self
            .users
            .find_by_email(&request.email)
            .await?
            .ok_or_else(|| AppError::AuthenticationError(INVALID_CREDENTIALS.to_string()))?;

        let is_valid = self.hasher.verify(&request.password, &user.password_hash)?;
        if !is_valid {
            log::warn!("로그인 실패: {}", request.email);
            return Err(AppError::AuthenticationError(
                INVALID_CREDENTIALS.to_string(),
            ));
        }

        let token = self.tokens.issue(&user)?;

        log::info!("로그인 성공: {}", user.email);

        Ok(AuthResponse {
            token,
            expires_in: self.tokens.ttl_seconds(),
        })
    }
}
