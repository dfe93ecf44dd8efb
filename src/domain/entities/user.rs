//! User Entity Implementation
//!
//! 시스템의 모든 사용자를 표현하는 핵심 도메인 엔티티입니다.
//! 비밀번호는 생성 시점부터 항상 bcrypt 해시로만 저장되며,
//! 평문이 이 구조체에 담기는 일은 없습니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

use crate::repositories::base::Entity;

/// 사용자 엔티티
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    /// MongoDB 가 할당하는 고유 식별자
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 표시 이름
    pub name: String,
    /// 사용자 이메일 (unique, 저장된 그대로 대소문자 구분)
    pub email: String,
    /// bcrypt 해시된 비밀번호
    pub password_hash: String,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl User {
    /// 새 사용자 엔티티 생성
    ///
    /// `password_hash` 는 이미 해시된 값이어야 합니다.
    /// id 와 타임스탬프는 리포지토리가 저장 시점에 확정합니다.
    pub fn new(name: String, email: String, password_hash: String) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            name,
            email,
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

impl Entity for User {
    const COLLECTION: &'static str = "users";

    fn set_id(&mut self, id: ObjectId) {
        self.id = Some(id);
    }

    fn stamp(&mut self, now: DateTime) {
        self.created_at = now;
        self.updated_at = now;
    }
}
