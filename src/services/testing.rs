//! 서비스 테스트용 인메모리 사용자 저장소
//!
//! `UserStore` 계약을 `Mutex<Vec<User>>` 위에 구현합니다.
//! 실제 리포지토리와 동일하게 이메일 중복을 409 로 거부하고,
//! `$set` 문서의 알려진 필드만 기존 레코드 위에 병합합니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{Bson, Document, oid::ObjectId};

use crate::domain::entities::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::base::parse_object_id;
use crate::repositories::users::UserStore;

#[derive(Default)]
pub struct InMemoryUserStore {
    records: Mutex<Vec<User>>,
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.id == Some(object_id))
            .cloned())
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        Ok(self
            .records
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, mut user: User) -> AppResult<User> {
        let mut records = self.records.lock().unwrap();

        if records.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError(
                "이미 등록된 이메일입니다".to_string(),
            ));
        }

        user.id = Some(ObjectId::new());
        records.push(user.clone());
        Ok(user)
    }

    async fn update(&self, id: &str, update_doc: Document) -> AppResult<Option<User>> {
        let object_id = parse_object_id(id)?;
        let mut records = self.records.lock().unwrap();

        let Some(user) = records.iter_mut().find(|u| u.id == Some(object_id)) else {
            return Ok(None);
        };

        for (key, value) in update_doc {
            match (key.as_str(), value) {
                ("name", Bson::String(v)) => user.name = v,
                ("email", Bson::String(v)) => user.email = v,
                ("password_hash", Bson::String(v)) => user.password_hash = v,
                ("updated_at", Bson::DateTime(v)) => user.updated_at = v,
                _ => {}
            }
        }

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let object_id = parse_object_id(id)?;
        self.records
            .lock()
            .unwrap()
            .retain(|u| u.id != Some(object_id));
        Ok(())
    }
}
