//! HTTP 요청 핸들러 모듈
//!
//! 웹 계층입니다. 요청 본문 검증과 서비스 호출, 응답 엔벨로프 래핑만
//! 담당하고 비즈니스 로직은 모두 서비스 계층에 위임합니다.
//!
//! - **`auth`**: 회원가입 / 로그인
//! - **`users`**: 사용자 CRUD

pub mod auth;
pub mod users;
