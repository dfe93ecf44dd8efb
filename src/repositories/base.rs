//! 제네릭 CRUD 리포지토리
//!
//! 모든 리소스 타입이 공유하는 find-all / find-by-id / create / update /
//! delete 계약입니다. 상속 대신 합성으로 사용합니다: 도메인 리포지토리는
//! `Repository<T>` 를 필드로 가지고 자신만의 조회를 추가합니다.
//!
//! 동시성 제어는 하지 않습니다. 정합성은 전적으로 MongoDB 의 단일 문서
//! 원자성에 의존하며, 같은 레코드에 대한 동시 업데이트는 last-write-wins 입니다.

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{DateTime, Document, doc, oid::ObjectId},
    options::{FindOneAndUpdateOptions, ReturnDocument},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::db::Database;
use crate::errors::{AppError, AppResult};

/// 제네릭 리포지토리로 영속할 수 있는 엔티티 계약
///
/// id 와 타임스탬프는 리포지토리(저장소)가 확정하므로,
/// 엔티티는 할당 지점만 열어두면 됩니다.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + Unpin + 'static {
    /// MongoDB 컬렉션 이름
    const COLLECTION: &'static str;

    /// 저장 시점에 저장소가 할당한 id 를 기록
    fn set_id(&mut self, id: ObjectId);

    /// 생성 시점에 created_at / updated_at 타임스탬프를 기록
    fn stamp(&mut self, now: DateTime);
}

/// 엔티티 타입으로 매개변수화된 제네릭 CRUD 리포지토리
pub struct Repository<T: Entity> {
    collection: Collection<T>,
}

impl<T: Entity> Repository<T> {
    /// 엔티티의 컬렉션을 바라보는 리포지토리 생성
    pub fn new(database: &Database) -> Self {
        Self {
            collection: database.get_database().collection::<T>(T::COLLECTION),
        }
    }

    /// 컬렉션 핸들 (도메인 전용 쿼리와 인덱스 관리에 사용)
    pub fn collection(&self) -> &Collection<T> {
        &self.collection
    }

    /// 컬렉션의 모든 레코드 조회
    pub async fn find_all(&self) -> AppResult<Vec<T>> {
        let cursor = self
            .collection
            .find(doc! {})
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID 로 레코드 조회
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(T))` - 레코드를 찾은 경우
    /// * `Ok(None)` - 해당 ID 의 레코드가 없는 경우
    /// * `Err(AppError::ValidationError)` - 잘못된 ObjectId 형식
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<T>> {
        let object_id = parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 레코드 생성
    ///
    /// 타임스탬프를 찍고 저장한 뒤, 저장소가 할당한 id 를 엔티티에
    /// 반영하여 돌려줍니다.
    pub async fn create(&self, mut entity: T) -> AppResult<T> {
        entity.stamp(DateTime::now());

        let result = self
            .collection
            .insert_one(&entity)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        let id = result
            .inserted_id
            .as_object_id()
            .ok_or_else(|| AppError::InternalError("저장소가 ObjectId 를 반환하지 않았습니다".to_string()))?;
        entity.set_id(id);

        Ok(entity)
    }

    /// 레코드 부분 업데이트
    ///
    /// 제공된 필드들을 `$set` 으로 기존 레코드 위에 병합하고
    /// `updated_at` 을 갱신합니다. 조회와 업데이트는 `find_one_and_update`
    /// 한 번으로 원자적으로 수행되며, 업데이트 이후의 레코드를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(Some(T))` - 업데이트된 레코드
    /// * `Ok(None)` - 해당 ID 의 레코드가 존재하지 않음
    pub async fn update(&self, id: &str, mut update_doc: Document) -> AppResult<Option<T>> {
        let object_id = parse_object_id(id)?;

        update_doc.insert("updated_at", DateTime::now());

        let options = FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build();

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": update_doc })
            .with_options(options)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 레코드 삭제
    ///
    /// 멱등 연산입니다: 존재하지 않는 ID 를 삭제해도 에러가 아닙니다.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let object_id = parse_object_id(id)?;

        self.collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}

/// ObjectId 문자열 파싱
///
/// 형식이 잘못된 경우 400 으로 매핑되는 검증 에러를 돌려줍니다.
pub(crate) fn parse_object_id(id: &str) -> AppResult<ObjectId> {
    ObjectId::parse_str(id)
        .map_err(|_| AppError::ValidationError("유효하지 않은 ID 형식입니다".to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_object_id_accepts_hex() {
        assert!(parse_object_id("507f1f77bcf86cd799439011").is_ok());
    }

    #[test]
    fn test_parse_object_id_rejects_garbage() {
        let error = parse_object_id("not-an-object-id").unwrap_err();
        assert!(matches!(error, AppError::ValidationError(_)));
    }
}
