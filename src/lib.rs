//! 백엔드 템플릿 서비스
//!
//! JWT 토큰 기반 인증과 사용자 CRUD API 를 제공하는 백엔드 보일러플레이트입니다.
//! MongoDB 를 저장소로 사용하며, 새 리소스 모듈은 제네릭 리포지토리 계약을
//! 재사용하도록 설계되어 있습니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 + 인증 게이트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 요청 검증 / 응답 래핑
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직 (인증, 사용자 관리)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 제네릭 CRUD 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! 모든 의존성은 `main.rs` 에서 명시적으로 생성되어 `web::Data` 로 주입됩니다.
//! 프로세스 전역 싱글톤은 사용하지 않습니다.

pub mod config;
pub mod db;
pub mod domain;
pub mod errors;
pub mod handlers;
pub mod middlewares;
pub mod repositories;
pub mod routes;
pub mod services;
