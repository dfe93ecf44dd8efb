//! 비밀번호 해싱 서비스
//!
//! bcrypt 기반 단방향 솔트 해시를 제공합니다. 솔트는 호출마다 무작위로
//! 생성되므로 같은 평문을 두 번 해시해도 결과가 다릅니다.

use crate::config::PasswordConfig;
use crate::errors::{AppError, AppResult};

/// bcrypt 비밀번호 해셔
///
/// cost 는 환경별로 다르게 설정됩니다 (개발 4, 프로덕션 12).
#[derive(Clone)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// 지정한 cost 로 해셔 생성
    pub fn new(cost: u32) -> Self {
        Self { cost }
    }

    /// 환경 설정에서 cost 를 읽어 해셔 생성
    pub fn from_env() -> Self {
        Self::new(PasswordConfig::bcrypt_cost())
    }

    /// 평문 비밀번호를 솔트 해시로 변환
    ///
    /// # Errors
    ///
    /// * `AppError::InternalError` - 해싱 실패. 호출측(회원가입)은 이 에러로
    ///   전체 시도를 중단합니다.
    pub fn hash(&self, plaintext: &str) -> AppResult<String> {
        bcrypt::hash(plaintext, self.cost)
            .map_err(|e| AppError::InternalError(format!("비밀번호 해싱 실패: {}", e)))
    }

    /// 평문이 해시와 일치하는지 검증
    ///
    /// 해시에 포함된 솔트로 평문을 재해시하여 비교합니다.
    /// 타이밍 특성은 bcrypt 프리미티브의 보장을 그대로 따릅니다.
    pub fn verify(&self, plaintext: &str, hash: &str) -> AppResult<bool> {
        bcrypt::verify(plaintext, hash)
            .map_err(|e| AppError::InternalError(format!("비밀번호 검증 실패: {}", e)))
    }
}
