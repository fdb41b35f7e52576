//! API 라우트 설정 모듈
//!
//! RESTful API 엔드포인트들을 기능별로 그룹화하여 제공합니다.
//! 상품, 주문 라우트와 헬스체크 엔드포인트를 포함합니다.
//!
//! # Auth Middleware Usage
//!
//! 스코프 단위로 인증 모드를 적용합니다:
//!
//! - `/api/products`: 선택적 인증 — 조회는 공개이고, 쓰기 연산은
//!   핸들러의 `AdminUser` 추출자가 401/403을 판정합니다.
//! - `/api/orders`: 필수 인증 — 모든 주문 연산은 신원이 필요하며,
//!   관리자 전용 연산은 마찬가지로 추출자가 판정합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{App, web};
//!
//! let app = App::new().configure(configure_all_routes);
//! ```

use actix_web::{HttpResponse, get, web};
use serde_json::json;

use crate::handlers;
use crate::middlewares::AuthMiddleware;

/// 모든 라우트를 설정합니다
///
/// 기능별로 분할된 라우트들을 통합하여 애플리케이션에 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    // Health check endpoint
    cfg.service(health_check);

    // Feature-specific routes
    configure_product_routes(cfg);
    configure_order_routes(cfg);
}

/// 상품 관련 라우트를 설정합니다
///
/// # Route Groups
///
/// ## Public 라우트 (인증 불필요)
/// - `GET /api/products` - 상품 목록 (카테고리/추천 필터)
/// - `GET /api/products/{id}` - 상품 단건 조회
///
/// ## Admin 라우트 (관리자 역할 필요)
/// - `POST /api/products` - 상품 등록
/// - `PUT /api/products/{id}` - 상품 부분 수정
/// - `DELETE /api/products/{id}` - 상품 삭제
fn configure_product_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/products")
            .wrap(AuthMiddleware::optional())
            .service(handlers::products::list_products)
            .service(handlers::products::create_product)
            .service(handlers::products::get_product)
            .service(handlers::products::update_product)
            .service(handlers::products::delete_product),
    );
}

/// 주문 관련 라우트를 설정합니다
///
/// # Route Groups
///
/// ## Protected 라우트 (인증 필요)
/// - `POST /api/orders` - 주문 생성
/// - `GET /api/orders/my` - 본인 주문 목록
///
/// ## Admin 라우트 (관리자 역할 필요)
/// - `GET /api/orders` - 전체 주문 목록
/// - `PUT /api/orders/{id}` - 주문 상태 변경
fn configure_order_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/orders")
            .wrap(AuthMiddleware::required())
            .service(handlers::orders::create_order)
            .service(handlers::orders::my_orders)
            .service(handlers::orders::list_all_orders)
            .service(handlers::orders::update_order_status),
    );
}

/// 헬스체크 엔드포인트
///
/// 서버 상태를 확인하는 간단한 엔드포인트입니다.
#[get("/health")]
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "ok",
        "service": "plainfit_backend",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
