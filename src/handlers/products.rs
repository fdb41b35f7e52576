//! # Product HTTP Handlers
//!
//! 상품 카탈로그 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 접근 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `GET` | `/api/products` | 상품 목록 (필터 선택) | 공개 | 200 OK |
//! | `GET` | `/api/products/{id}` | 상품 단건 조회 | 공개 | 200 OK |
//! | `POST` | `/api/products` | 상품 등록 | 관리자 | 201 Created |
//! | `PUT` | `/api/products/{id}` | 상품 부분 수정 | 관리자 | 200 OK |
//! | `DELETE` | `/api/products/{id}` | 상품 삭제 | 관리자 | 200 OK |

use actix_web::{HttpResponse, delete, get, post, put, web};
use validator::Validate;

use crate::domain::auth::AdminUser;
use crate::domain::dto::products::{
    CreateProductRequest, ProductListQuery, UpdateProductRequest,
};
use crate::errors::AppError;
use crate::services::catalog::ProductService;

/// 상품 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/products?category=t-shirt&featured=true`
///
/// 두 쿼리 파라미터 모두 선택이며, 없으면 전체 목록을 반환합니다.
#[get("")]
pub async fn list_products(
    query: web::Query<ProductListQuery>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    let products = service.list(&query).await?;
    Ok(HttpResponse::Ok().json(products))
}

/// 상품 단건 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/products/{id}`
#[get("/{id}")]
pub async fn get_product(
    id: web::Path<String>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    let product = service.get(&id).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// 상품 등록 핸들러 (관리자 전용)
///
/// # 엔드포인트
///
/// `POST /api/products`
///
/// # 요청 본문
///
/// ```json
/// {
///   "title": "Tee",
///   "description": "Plain cotton tee",
///   "price": 19.99,
///   "category": "t-shirt",
///   "sizes": ["S", "M"],
///   "imageUrl": "https://x/y.jpg",
///   "isFeatured": false
/// }
/// ```
///
/// 검증 실패 시 위반된 제약 조건 전체를 담은 400 응답을 반환하며,
/// 스토어에는 어떤 쓰기도 발생하지 않습니다.
#[post("")]
pub async fn create_product(
    _admin: AdminUser,
    payload: web::Json<CreateProductRequest>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let product = service.create(payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(product))
}

/// 상품 부분 수정 핸들러 (관리자 전용)
///
/// # 엔드포인트
///
/// `PUT /api/products/{id}`
///
/// 본문에 제공된 필드만 반영되며, 제공된 필드는 등록과 동일한 규칙으로
/// 검증됩니다.
#[put("/{id}")]
pub async fn update_product(
    _admin: AdminUser,
    id: web::Path<String>,
    payload: web::Json<UpdateProductRequest>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let product = service.update(&id, payload.into_inner()).await?;
    Ok(HttpResponse::Ok().json(product))
}

/// 상품 삭제 핸들러 (관리자 전용)
///
/// # 엔드포인트
///
/// `DELETE /api/products/{id}`
#[delete("/{id}")]
pub async fn delete_product(
    _admin: AdminUser,
    id: web::Path<String>,
    service: web::Data<ProductService>,
) -> Result<HttpResponse, AppError> {
    service.delete(&id).await?;
    Ok(HttpResponse::Ok().json(serde_json::json!({
        "message": "Product deleted"
    })))
}
