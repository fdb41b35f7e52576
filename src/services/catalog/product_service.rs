//! # 상품 카탈로그 서비스 구현
//!
//! 상품의 전체 생명주기를 담당하는 비즈니스 로직입니다.
//! 조회는 공개이며, 등록·수정·삭제는 관리자 전용 연산으로
//! 핸들러 계층에서 인가가 끝난 뒤에만 호출됩니다.
//!
//! ## 주요 책임
//!
//! 1. **카탈로그 조회**: 카테고리/추천 필터, 단건 조회
//! 2. **상품 등록**: 완전한 상품 엔티티 생성, ID/타임스탬프 할당
//! 3. **부분 수정**: 제공된 필드만 반영, 수정 시간 갱신
//! 4. **삭제**: 하드 삭제, 연쇄 없음 (주문의 상품 참조는 유지)

use std::sync::Arc;

use log::info;
use mongodb::bson::DateTime;

use crate::{
    domain::dto::products::{
        CreateProductRequest, ProductListQuery, ProductResponse, UpdateProductRequest,
    },
    domain::entities::Product,
    errors::{AppError, AppResult},
    repositories::products::ProductRepository,
};

/// 상품 카탈로그 비즈니스 로직 서비스
pub struct ProductService {
    repo: Arc<ProductRepository>,
}

impl ProductService {
    /// 주입받은 리포지토리로 서비스를 생성합니다.
    pub fn new(repo: Arc<ProductRepository>) -> Self {
        Self { repo }
    }

    /// 필터 조건에 맞는 상품 목록 조회
    pub async fn list(&self, query: &ProductListQuery) -> AppResult<Vec<ProductResponse>> {
        let products = self
            .repo
            .find(query.category.as_deref(), query.featured)
            .await?;

        Ok(products.into_iter().map(ProductResponse::from).collect())
    }

    /// ID로 상품 조회
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 상품이 없는 경우
    pub async fn get(&self, id: &str) -> AppResult<ProductResponse> {
        let product = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("상품을 찾을 수 없습니다".to_string()))?;

        Ok(ProductResponse::from(product))
    }

    /// 새 상품 등록
    ///
    /// 요청은 핸들러에서 이미 검증된 상태이며, 저장 엔티티는 항상
    /// 모든 필드가 채워진 완전한 상태입니다.
    pub async fn create(&self, request: CreateProductRequest) -> AppResult<ProductResponse> {
        let product = Product::new(
            request.title,
            request.description,
            request.price,
            request.category,
            request.sizes,
            request.image_url,
            request.is_featured,
        );

        let created = self.repo.create(product).await?;

        info!(
            "상품 등록됨: {} ({})",
            created.title,
            created.id_string().unwrap_or_default()
        );

        Ok(ProductResponse::from(created))
    }

    /// 상품 부분 수정
    ///
    /// 제공된 필드만 반영하고 수정 시간을 갱신합니다.
    /// 제공되지 않은 필드는 기존 값을 유지합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 상품이 없는 경우
    pub async fn update(
        &self,
        id: &str,
        request: UpdateProductRequest,
    ) -> AppResult<ProductResponse> {
        let mut set = request.to_update_document();
        set.insert("updatedAt", DateTime::now());

        let updated = self
            .repo
            .update(id, set)
            .await?
            .ok_or_else(|| AppError::NotFound("상품을 찾을 수 없습니다".to_string()))?;

        Ok(ProductResponse::from(updated))
    }

    /// 상품 삭제
    ///
    /// 무조건적인 하드 삭제입니다. 과거 주문이 이 상품을 참조하고 있어도
    /// 주문은 변경되지 않습니다 (의도된 약한 참조).
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 상품이 없는 경우
    pub async fn delete(&self, id: &str) -> AppResult<()> {
        let deleted = self.repo.delete(id).await?;

        if !deleted {
            return Err(AppError::NotFound("상품을 찾을 수 없습니다".to_string()));
        }

        info!("상품 삭제됨: {}", id);
        Ok(())
    }
}
