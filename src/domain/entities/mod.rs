//! 영속 엔티티 정의
//!
//! MongoDB 컬렉션에 저장되는 도메인 엔티티들입니다.

pub mod user;
