//! 도메인 모델 모듈
//!
//! 엔티티(저장소에 영속되는 레코드), 요청/응답 DTO, 인증 컨텍스트 모델을
//! 정의합니다. 엔티티는 절대 HTTP 응답으로 직접 직렬화하지 않고
//! 응답 DTO 를 거쳐 민감 정보를 제거합니다.

pub mod auth;
pub mod dto;
pub mod entities;

pub use auth::{AuthenticatedUser, TokenClaims};
pub use dto::request::{CreateUserRequest, LoginRequest, SignupRequest, UpdateUserRequest};
pub use dto::response::{ApiResponse, AuthResponse, SignupData, UserResponse};
pub use entities::user::User;
