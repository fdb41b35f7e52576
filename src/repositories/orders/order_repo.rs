//! # 주문 리포지토리 구현
//!
//! 주문 엔티티의 데이터 액세스 계층입니다. `orders` 컬렉션에 대한
//! 생성, 소유자별 조회, 전체 조회, 상태 변경을 제공합니다.
//! 삭제 연산은 존재하지 않습니다. 주문은 어떤 공개 연산으로도
//! 삭제되지 않습니다.

use futures_util::TryStreamExt;
use mongodb::{
    Collection,
    bson::{DateTime, Document, doc, oid::ObjectId},
    options::ReturnDocument,
};

use crate::{
    db::Database,
    domain::entities::{Order, OrderStatus},
    errors::{AppError, AppResult},
};

/// 주문 데이터 액세스 리포지토리
pub struct OrderRepository {
    /// `orders` 컬렉션 핸들
    collection: Collection<Order>,
}

impl OrderRepository {
    /// 주입받은 데이터베이스 연결로 리포지토리를 생성합니다.
    pub fn new(db: &Database) -> Self {
        Self {
            collection: db.get_database().collection::<Order>("orders"),
        }
    }

    /// 형식이 잘못된 ID는 어떤 문서로도 해석될 수 없으므로 NotFound로 처리
    fn parse_object_id(id: &str) -> AppResult<ObjectId> {
        ObjectId::parse_str(id)
            .map_err(|_| AppError::NotFound("주문을 찾을 수 없습니다".to_string()))
    }

    /// 새 주문 저장
    pub async fn create(&self, mut order: Order) -> AppResult<Order> {
        let result = self
            .collection
            .insert_one(&order)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        order.id = Some(result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("저장된 주문의 ID를 확인할 수 없습니다".to_string())
        })?);

        Ok(order)
    }

    /// 소유자별 조회용 동등 비교 필터 문서를 만듭니다.
    fn build_owner_filter(user_id: &str) -> Document {
        doc! { "userId": user_id }
    }

    /// 소유자의 주문만 조회
    pub async fn find_by_user(&self, user_id: &str) -> AppResult<Vec<Order>> {
        let cursor = self
            .collection
            .find(Self::build_owner_filter(user_id))
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))?;

        cursor
            .try_collect()
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }

    /// 소유자와 무관하게 전체 주문 조회 (관리자 전용 연산에서만 호출)
    pub async fn find_all(&self) -> AppResult<Vec<Order>> {
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

    /// 주문 상태 변경
    ///
    /// 상태 필드와 수정 시간만 `$set`으로 반영합니다. 소유자(`userId`)는
    /// 생성 이후 어떤 연산으로도 변경되지 않습니다. 전이 방향 제한은
    /// 없습니다.
    pub async fn update_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> AppResult<Option<Order>> {
        let object_id = Self::parse_object_id(id)?;

        self.collection
            .find_one_and_update(
                doc! { "_id": object_id },
                doc! { "$set": {
                    "status": status.as_str(),
                    "updatedAt": DateTime::now(),
                }},
            )
            .return_document(ReturnDocument::After)
            .await
            .map_err(|e| AppError::DatabaseError(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_malformed_id_resolves_to_not_found() {
        let result = OrderRepository::parse_object_id("zzz");
        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_owner_filter_selects_only_on_user_id() {
        let filter = OrderRepository::build_owner_filter("user-a");
        assert_eq!(filter.len(), 1);
        assert_eq!(filter.get_str("userId").unwrap(), "user-a");
    }

    #[test]
    fn test_owner_filter_is_exact_equality() {
        let filter = OrderRepository::build_owner_filter("user-a");
        // 다른 소유자 키와 매칭될 수 있는 연산자 문서가 아닌 단순 동등 비교
        assert!(filter.get_document("userId").is_err());
    }
}
