//! 요청/응답 DTO 모듈
//!
//! HTTP 경계에서 사용하는 데이터 구조들입니다. 요청 DTO 는 `validator`
//! 파생으로 스키마 검증을 수행하고, 응답 DTO 는 엔티티에서 민감 정보를
//! 제거한 공개 표현만 노출합니다.

pub mod request;
pub mod response;
