//! Product Entity Implementation
//!
//! 카탈로그에 노출되는 상품 엔티티입니다.
//! 상품은 항상 모든 필드가 채워진 상태로만 존재하며,
//! 초안이나 부분 저장 상태를 갖지 않습니다.

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 상품 엔티티
///
/// `products` 컬렉션에 저장되는 카탈로그 상품입니다.
/// 관리자 전용 연산으로만 생성·수정·삭제되며, 조회는 공개입니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 상품명
    pub title: String,
    /// 상품 설명
    pub description: String,
    /// 가격 (0 이상)
    pub price: f64,
    /// 카테고리 (동등 비교 필터 키)
    pub category: String,
    /// 사이즈 라벨 목록 (최소 1개)
    pub sizes: Vec<String>,
    /// 상품 이미지 URL
    pub image_url: String,
    /// 추천 상품 여부
    pub is_featured: bool,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Product {
    /// 새 상품 생성
    ///
    /// ID는 MongoDB가 저장 시점에 할당하며, 생성/수정 시간은 현재 시각으로
    /// 동일하게 설정됩니다.
    pub fn new(
        title: String,
        description: String,
        price: f64,
        category: String,
        sizes: Vec<String>,
        image_url: String,
        is_featured: bool,
    ) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            title,
            description,
            price,
            category,
            sizes,
            image_url,
            is_featured,
            created_at: now,
            updated_at: now,
        }
    }

    /// ID 문자열로 변환
    pub fn id_string(&self) -> Option<String> {
        self.id.as_ref().map(|id| id.to_hex())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_product_has_no_id() {
        let product = Product::new(
            "Tee".to_string(),
            "Plain cotton tee".to_string(),
            19.99,
            "t-shirt".to_string(),
            vec!["S".to_string(), "M".to_string()],
            "https://example.com/tee.jpg".to_string(),
            false,
        );

        assert!(product.id.is_none());
        assert!(product.id_string().is_none());
        assert_eq!(product.created_at, product.updated_at);
    }

    #[test]
    fn test_product_bson_field_names() {
        let product = Product::new(
            "Tee".to_string(),
            "Plain cotton tee".to_string(),
            19.99,
            "t-shirt".to_string(),
            vec!["S".to_string()],
            "https://example.com/tee.jpg".to_string(),
            true,
        );

        let doc = mongodb::bson::to_document(&product).unwrap();
        assert!(doc.contains_key("imageUrl"));
        assert!(doc.contains_key("isFeatured"));
        assert!(doc.contains_key("createdAt"));
        assert!(!doc.contains_key("_id"));
    }
}
