//! # 상품 리포지토리 구현
//!
//! 상품 엔티티의 데이터 액세스 계층입니다. `products` 컬렉션에 대한
//! 필터 조회, 단건 조회, 생성, 부분 수정, 삭제를 제공합니다.
//!
//! 동시성은 MongoDB의 문서 단위 원자성에만 의존합니다.
//! 애플리케이션 수준의 잠금이나 트랜잭션은 사용하지 않습니다.

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{Document, doc, oid::ObjectId},
    options::ReturnDocument,
};

use crate::{
    db::Database,
    domain::entities::Product,
    errors::{AppError, AppResult},
};

/// 상품 데이터 액세스 리포지토리
///
/// ## 에러 처리
///
/// - **DatabaseError**: MongoDB 연결 오류, 쿼리 실행 오류
/// - **NotFound**: ObjectId로 해석되지 않는 ID (형식 오류 포함)
pub struct ProductRepository {
    /// `products` 컬렉션 핸들
    collection: Collection<Product>,
}

impl ProductRepository {
    /// 주입받은 데이터베이스 연결로 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Product>("products"),
        }
    }

    /// ID 문자열을 ObjectId로 해석합니다.
    ///
    /// 형식이 잘못된 ID는 어떤 문서로도 해석될 수 없으므로 NotFound로
    /// 처리합니다.
    fn parse_object_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::NotFound("상품을 찾을 수 없습니다".to_string()))
    }

    /// 목록 조회용 동등 비교 필터 문서를 만듭니다.
    fn build_filter(category: Option<&str>, featured: Option<bool>) -> Document {
        let mut filter = Document::new();
        if let Some(category) = category {
            filter.insert("category", category);
        }
        if let Some(featured) = featured {
            filter.insert("isFeatured", featured);
        }
        filter
    }

    /// 필터 조건에 맞는 상품 목록 조회
    ///
    /// 두 필터 모두 동등 비교이며, 둘 다 없으면 전체 목록을 반환합니다.
    /// 페이징이나 정렬 보장은 없습니다 (저장 순서 그대로).
    pub async fn find(
        &self,
        category: Option<&str>,
        featured: Option<bool>,
    ) -> AppResult<Vec<Product>> {
        let filter = Self::build_filter(category, featured);

        let cursor = self
            .collection
            .find(filter)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// ID로 상품 조회
    pub async fn find_by_id(&self, id: &str) -> AppResult<Option<Product>> {
        let object_id = Self::parse_object_id(id)?;

        self.collection
            .find_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 새 상품 저장
    ///
    /// MongoDB가 ObjectId를 할당하며, 할당된 ID를 채워 반환합니다.
    pub async fn create(&self, mut product: Product) -> AppResult<Product> {
        let result = self
            .collection
            .insert_one(&product)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        product.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("저장된 상품의 ID를 확인할 수 없습니다".to_string())
        })?);

        Ok(product)
    }

    /// 상품 부분 수정
    ///
    /// `set` 문서에 담긴 필드만 `$set`으로 반영하고, 수정된 문서를
    /// 반환합니다. 해당 ID의 상품이 없으면 `None`을 반환합니다.
    pub async fn update(&self, id: &str, set: Document) -> AppResult<Option<Product>> {
        let object_id = Self::parse_object_id(id)?;

        self.collection
            .find_one_and_update(doc! { "_id": object_id }, doc! { "$set": set })
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 상품 삭제 (하드 삭제)
    ///
    /// 연쇄 삭제는 없습니다. 과거 주문의 상품 참조는 그대로 남습니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(true)` - 삭제됨
    /// * `Ok(false)` - 해당 ID의 상품이 없음
    pub async fn delete(&self, id: &str) -> AppResult<bool> {
        let object_id = Self::parse_object_id(id)?;

        let result = self
            .collection
            .delete_one(doc! { "_id": object_id })
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        Ok(result.deleted_count > 0)
    }
}
