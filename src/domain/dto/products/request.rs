//! 상품 요청 DTO
//!
//! 상품 등록/수정 요청의 데이터 구조와 검증 규칙을 정의합니다.
//! 수정 요청은 명시적인 선택 필드 구조체로, 제공된 필드만 반영됩니다.

use mongodb::bson::Document;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// 상품 등록 요청 DTO
///
/// 모든 필드가 필수이며, 등록되는 상품은 항상 완전한 상태여야 합니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateProductRequest {
    /// 상품명 (비어 있을 수 없음)
    #[validate(length(min = 1, message = "상품명은 비어 있을 수 없습니다"))]
    pub title: String,

    /// 상품 설명 (비어 있을 수 없음)
    #[validate(length(min = 1, message = "상품 설명은 비어 있을 수 없습니다"))]
    pub description: String,

    /// 가격 (0 이상)
    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: f64,

    /// 카테고리 (비어 있을 수 없음)
    #[validate(length(min = 1, message = "카테고리는 비어 있을 수 없습니다"))]
    pub category: String,

    /// 사이즈 라벨 목록 (최소 1개)
    #[validate(length(min = 1, message = "사이즈 목록은 최소 1개 이상이어야 합니다"))]
    pub sizes: Vec<String>,

    /// 상품 이미지 URL (URL 형식)
    #[validate(url(message = "유효한 이미지 URL을 입력해주세요"))]
    pub image_url: String,

    /// 추천 상품 여부 (생략 시 false)
    #[serde(default)]
    pub is_featured: bool,
}

/// 상품 수정 요청 DTO
///
/// 모든 필드가 선택이며, 제공된 필드는 등록과 동일한 규칙으로 검증됩니다.
/// 제공되지 않은 필드는 기존 값을 유지합니다.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    #[validate(length(min = 1, message = "상품명은 비어 있을 수 없습니다"))]
    pub title: Option<String>,

    #[validate(length(min = 1, message = "상품 설명은 비어 있을 수 없습니다"))]
    pub description: Option<String>,

    #[validate(range(min = 0.0, message = "가격은 0 이상이어야 합니다"))]
    pub price: Option<f64>,

    #[validate(length(min = 1, message = "카테고리는 비어 있을 수 없습니다"))]
    pub category: Option<String>,

    #[validate(length(min = 1, message = "사이즈 목록은 최소 1개 이상이어야 합니다"))]
    pub sizes: Option<Vec<String>>,

    #[validate(url(message = "유효한 이미지 URL을 입력해주세요"))]
    pub image_url: Option<String>,

    pub is_featured: Option<bool>,
}

impl UpdateProductRequest {
    /// 제공된 필드만 담은 `$set` 문서를 만듭니다.
    ///
    /// 키 이름은 저장 문서의 camelCase 필드명과 일치해야 합니다.
    pub fn to_update_document(&self) -> Document {
        let mut set = Document::new();

        if let Some(title) = &self.title {
            set.insert("title", title.clone());
        }
        if let Some(description) = &self.description {
            set.insert("description", description.clone());
        }
        if let Some(price) = self.price {
            set.insert("price", price);
        }
        if let Some(category) = &self.category {
            set.insert("category", category.clone());
        }
        if let Some(sizes) = &self.sizes {
            set.insert("sizes", sizes.clone());
        }
        if let Some(image_url) = &self.image_url {
            set.insert("imageUrl", image_url.clone());
        }
        if let Some(is_featured) = self.is_featured {
            set.insert("isFeatured", is_featured);
        }

        set
    }
}

/// 상품 목록 필터 쿼리
///
/// 두 필터 모두 동등 비교이며, 생략 시 전체 목록을 반환합니다.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ProductListQuery {
    /// 카테고리 필터
    pub category: Option<String>,
    /// 추천 상품 필터
    pub featured: Option<bool>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_create_request() -> CreateProductRequest {
        CreateProductRequest {
            title: "Tee".to_string(),
            description: "Plain cotton tee".to_string(),
            price: 19.99,
            category: "t-shirt".to_string(),
            sizes: vec!["S".to_string(), "M".to_string()],
            image_url: "https://x/y.jpg".to_string(),
            is_featured: false,
        }
    }

    #[test]
    fn test_valid_create_request_passes() {
        assert!(valid_create_request().validate().is_ok());
    }

    #[test]
    fn test_create_request_reports_all_violations() {
        let request = CreateProductRequest {
            title: String::new(),
            description: String::new(),
            price: -1.0,
            category: String::new(),
            sizes: vec![],
            image_url: "not-a-url".to_string(),
            is_featured: false,
        };

        let errors = request.validate().unwrap_err();
        let fields = errors.field_errors();

        assert!(fields.contains_key("title"));
        assert!(fields.contains_key("description"));
        assert!(fields.contains_key("price"));
        assert!(fields.contains_key("category"));
        assert!(fields.contains_key("sizes"));
        assert!(fields.contains_key("imageUrl") || fields.contains_key("image_url"));
    }

    #[test]
    fn test_is_featured_defaults_to_false() {
        let json = r#"{
            "title": "Tee",
            "description": "Plain cotton tee",
            "price": 19.99,
            "category": "t-shirt",
            "sizes": ["S"],
            "imageUrl": "https://x/y.jpg"
        }"#;

        let request: CreateProductRequest = serde_json::from_str(json).unwrap();
        assert!(!request.is_featured);
    }

    #[test]
    fn test_empty_update_request_is_valid() {
        let request = UpdateProductRequest::default();
        assert!(request.validate().is_ok());
        assert!(request.to_update_document().is_empty());
    }

    #[test]
    fn test_update_request_checks_present_fields() {
        let request = UpdateProductRequest {
            price: Some(-5.0),
            ..Default::default()
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("price"));
    }

    #[test]
    fn test_update_document_contains_only_supplied_fields() {
        let request = UpdateProductRequest {
            price: Some(24.99),
            is_featured: Some(true),
            ..Default::default()
        };

        let doc = request.to_update_document();
        assert_eq!(doc.len(), 2);
        assert_eq!(doc.get_f64("price").unwrap(), 24.99);
        assert!(doc.get_bool("isFeatured").unwrap());
        assert!(!doc.contains_key("title"));
    }
}
