//! 상품 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::Product;

/// 상품 응답 DTO
///
/// 저장된 엔티티를 클라이언트에 노출하는 형태입니다.
/// ObjectId는 16진수 문자열로, 타임스탬프는 RFC 3339로 직렬화됩니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: String,
    pub title: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub sizes: Vec<String>,
    pub image_url: String,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        let Product {
            id,
            title,
            description,
            price,
            category,
            sizes,
            image_url,
            is_featured,
            created_at,
            updated_at,
        } = product;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            title,
            description,
            price,
            category,
            sizes,
            image_url,
            is_featured,
            created_at: DateTime::<Utc>::from(created_at.to_system_time()),
            updated_at: DateTime::<Utc>::from(updated_at.to_system_time()),
        }
    }
}
