//! 비즈니스 로직 계층
//!
//! 인증 플로우(회원가입/로그인), 토큰 발급/검증, 비밀번호 해싱,
//! 사용자 관리 로직을 담당합니다. 모든 서비스는 `main.rs` 에서
//! 명시적으로 생성되어 핸들러에 주입됩니다.

pub mod auth;
pub mod password;
pub mod token;
pub mod users;

#[cfg(test)]
pub(crate) mod testing;

pub use auth::AuthService;
pub use password::PasswordHasher;
pub use token::TokenService;
pub use users::UserService;
