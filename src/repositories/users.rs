//! 사용자 리포지토리
//!
//! 제네릭 CRUD 리포지토리를 합성하고, 이메일 조회와 유니크 제약 관리를
//! 추가한 사용자 전용 데이터 액세스 계층입니다.

use async_trait::async_trait;
use mongodb::{
    IndexModel,
    bson::{Document, doc},
    options::IndexOptions,
};

use crate::db::Database;
use crate::domain::entities::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::base::Repository;

/// 사용자 저장 능력 계약
///
/// 서비스 계층은 구체 리포지토리 대신 이 트레이트에 의존합니다.
/// 덕분에 비즈니스 로직은 실제 저장소 없이도 검증할 수 있습니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// 전체 사용자 조회
    async fn find_all(&self) -> AppResult<Vec<User>>;

    /// ID 로 사용자 조회
    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>>;

    /// 이메일 주소로 사용자 조회 (저장된 그대로, 대소문자 구분)
    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>>;

    /// 새 사용자 생성. 이메일 중복은 `ConflictError` 로 거부합니다.
    async fn create(&self, user: User) -> AppResult<User>;

    /// 제공된 필드만 기존 레코드 위에 병합. 레코드가 없으면 `None`.
    async fn update(&self, id: &str, update_doc: Document) -> AppResult<Option<User>>;

    /// 사용자 삭제 (멱등)
    async fn delete(&self, id: &str) -> AppResult<()>;
}

/// 사용자 데이터 액세스 리포지토리
///
/// 이메일 유니크 제약은 두 단계로 지켜집니다: `create` 의 사전 중복 확인과,
/// 경합 시 최후 방어선이 되는 저장소 레벨의 유니크 인덱스.
pub struct UserRepository {
    repo: Repository<User>,
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_all(&self) -> AppResult<Vec<User>> {
        self.repo.find_all().await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<User>> {
        self.repo.find_by_id(id).await
    }

    async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        self.repo
            .collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    async fn create(&self, user: User) -> AppResult<User> {
        if self.find_by_email(&user.email).await?.is_some() {
            return Err(AppError::ConflictError(
                "이미 등록된 이메일입니다".to_string(),
            ));
        }

        self.repo.create(user).await
    }

    async fn update(&self, id: &str, update_doc: Document) -> AppResult<Option<User>> {
        self.repo.update(id, update_doc).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.repo.delete(id).await
    }
}

impl UserRepository {
    /// `users` 컬렉션을 바라보는 리포지토리 생성
    pub fn new(database: &Database) -> Self {
        Self {
            repo: Repository::new(database),
        }
    }

    /// 데이터베이스 인덱스 생성
    ///
    /// 애플리케이션 초기화 시점에 한 번 호출합니다.
    /// 이메일 유니크 인덱스와 생성일 인덱스를 만듭니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "created_at": 1 })
            .options(
                IndexOptions::builder()
                    .name("created_at_asc".to_string())
                    .build(),
            )
            .build();

        self.repo
            .collection()
            .create_indexes([email_index, created_at_index])
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
