//! 사용자 관리 서비스
//!
//! 사용자 리소스의 CRUD 비즈니스 로직입니다. 비밀번호는 생성과 수정
//! 어느 경로로 들어와도 저장 전에 반드시 해시됩니다.

use std::sync::Arc;

use mongodb::bson::Document;

use crate::domain::dto::request::{CreateUserRequest, UpdateUserRequest};
use crate::domain::dto::response::UserResponse;
use crate::domain::entities::user::User;
use crate::errors::{AppError, AppResult};
use crate::repositories::base::parse_object_id;
use crate::repositories::users::UserStore;
use crate::services::password::PasswordHasher;

/// 사용자 관리 비즈니스 로직 서비스
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: PasswordHasher,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, hasher: PasswordHasher) -> Self {
        Self { users, hasher }
    }

    /// 전체 사용자 목록 조회
    pub async fn find_all(&self) -> AppResult<Vec<UserResponse>> {
        let users = self.users.find_all().await?;
        Ok(users.into_iter().map(UserResponse::from).collect())
    }

    /// ID 로 사용자 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID 의 사용자가 없음
    pub async fn find_by_id(&self, id: &str) -> AppResult<UserResponse> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(user.into())
    }

    /// 새 사용자 생성
    ///
    /// 비밀번호를 해시한 뒤 저장합니다. 이메일 중복은 리포지토리가
    /// 409 로 거부합니다.
    pub async fn create(&self, request: CreateUserRequest) -> AppResult<UserResponse> {
        let password_hash = self.hasher.hash(&request.password)?;
        let user = User::new(request.name, request.email, password_hash);

        let created = self.users.create(user).await?;

        log::info!("사용자 생성: {}", created.email);

        Ok(created.into())
    }

    /// 사용자 부분 업데이트
    ///
    /// 제공된 필드만 기존 레코드 위에 병합합니다. 비밀번호가 포함된 경우
    /// 해시로 교체되며, 이메일 변경은 다른 계정과 충돌하지 않아야 합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID 의 사용자가 없음
    /// * `AppError::ConflictError` - 변경하려는 이메일이 이미 사용 중
    pub async fn update(&self, id: &str, request: UpdateUserRequest) -> AppResult<UserResponse> {
        // MongoDB 는 빈 $set 을 거부하므로 수정할 내용이 없으면 조회로 대체
        if request.is_empty() {
            return self.find_by_id(id).await;
        }

        if let Some(ref email) = request.email {
            if let Some(existing) = self.users.find_by_email(email).await? {
                // 16진수 표기 차이에 흔들리지 않도록 파싱된 ObjectId 로 비교
                if existing.id != Some(parse_object_id(id)?) {
                    return Err(AppError::ConflictError(
                        "이미 등록된 이메일입니다".to_string(),
                    ));
                }
            }
        }

        let update_doc = build_update_document(&request, &self.hasher)?;

        let updated = self
            .users
            .update(id, update_doc)
            .await?
            .ok_or_else(|| AppError::NotFound("사용자를 찾을 수 없습니다".to_string()))?;

        Ok(updated.into())
    }

    /// 사용자 삭제
    ///
    /// 멱등 연산입니다: 존재하지 않는 ID 도 에러 없이 완료됩니다.
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        self.users.delete(id).await
    }
}

/// 업데이트 요청을 `$set` 문서로 변환
///
/// 제공된 필드만 포함하며, 비밀번호는 평문 대신 해시가 들어갑니다.
fn build_update_document(
    request: &UpdateUserRequest,
    hasher: &PasswordHasher,
) -> AppResult<Document> {
    let mut update_doc = Document::new();

    if let Some(ref name) = request.name {
        update_doc.insert("name", name.clone());
    }
    if let Some(ref email) = request.email {
        update_doc.insert("email", email.clone());
    }
    if let Some(ref password) = request.password {
        update_doc.insert("password_hash", hasher.hash(password)?);
    }

    Ok(update_doc)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::services::testing::InMemoryUserStore;

    fn test_hasher() -> PasswordHasher {
        PasswordHasher::new(4)
    }

    fn test_service() -> UserService {
        UserService::new(Arc::new(InMemoryUserStore::default()), test_hasher())
    }

    fn create_request(name: &str, email: &str) -> CreateUserRequest {
        CreateUserRequest {
            name: name.to_string(),
            email: email.to_string(),
            password: "secret123".to_string(),
        }
    }

    #[actix_web::test]
    async fn test_delete_nonexistent_id_completes() {
        let service = test_service();

        // 존재하지 않는 ID 삭제는 에러가 아니다
        service.delete("507f1f77bcf86cd799439011").await.unwrap();

        let error = service.find_by_id("507f1f77bcf86cd799439011").await.unwrap_err();
        assert!(matches!(error, AppError::NotFound(_)));
    }

    #[actix_web::test]
    async fn test_update_merges_single_field() {
        let service = test_service();
        let created = service
            .create(create_request("홍길동", "hong@example.com"))
            .await
            .unwrap();

        let updated = service
            .update(
                &created.id,
                UpdateUserRequest {
                    name: Some("김철수".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.name, "김철수");
        assert_eq!(updated.email, "hong@example.com");
    }

    #[actix_web::test]
    async fn test_update_own_email_accepts_uppercase_hex_id() {
        let service = test_service();
        let created = service
            .create(create_request("홍길동", "hong@example.com"))
            .await
            .unwrap();

        // 같은 레코드를 가리키는 대문자 16진수 ID 는 충돌이 아니다
        let updated = service
            .update(
                &created.id.to_uppercase(),
                UpdateUserRequest {
                    email: Some("hong@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();

        assert_eq!(updated.email, "hong@example.com");
    }

    #[actix_web::test]
    async fn test_update_rejects_email_taken_by_other_user() {
        let service = test_service();
        service
            .create(create_request("홍길동", "hong@example.com"))
            .await
            .unwrap();
        let other = service
            .create(create_request("김철수", "kim@example.com"))
            .await
            .unwrap();

        let error = service
            .update(
                &other.id,
                UpdateUserRequest {
                    email: Some("hong@example.com".to_string()),
                    ..Default::default()
                },
            )
            .await
            .unwrap_err();

        assert!(matches!(error, AppError::ConflictError(_)));
    }

    #[test]
    fn test_update_document_contains_only_supplied_fields() {
        let request = UpdateUserRequest {
            name: Some("김철수".to_string()),
            email: None,
            password: None,
        };

        let update_doc = build_update_document(&request, &test_hasher()).unwrap();

        assert_eq!(update_doc.get_str("name").unwrap(), "김철수");
        assert!(!update_doc.contains_key("email"));
        assert!(!update_doc.contains_key("password_hash"));
    }

    #[test]
    fn test_update_document_hashes_password() {
        let request = UpdateUserRequest {
            name: None,
            email: None,
            password: Some("newsecret".to_string()),
        };

        let update_doc = build_update_document(&request, &test_hasher()).unwrap();

        let stored = update_doc.get_str("password_hash").unwrap();
        assert_ne!(stored, "newsecret");
        assert!(test_hasher().verify("newsecret", stored).unwrap());
        // 평문 비밀번호 필드는 존재하지 않는다
        assert!(!update_doc.contains_key("password"));
    }

    #[test]
    fn test_update_document_empty_request() {
        let update_doc =
            build_update_document(&UpdateUserRequest::default(), &test_hasher()).unwrap();

        assert!(update_doc.is_empty());
    }
}
