//! 데이터 액세스 계층
//!
//! 모든 리소스가 공유하는 제네릭 CRUD 리포지토리(`base`)와,
//! 이를 합성해 도메인 전용 조회를 더한 리포지토리들을 제공합니다.

pub mod base;
pub mod users;

pub use base::{Entity, Repository};
pub use users::{UserRepository, UserStore};
