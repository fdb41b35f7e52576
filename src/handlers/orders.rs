//! # Order HTTP Handlers
//!
//! 주문 엔드포인트를 처리하는 핸들러 함수들입니다.
//!
//! | 메서드 | 경로 | 설명 | 접근 | 상태 코드 |
//! |--------|------|------|------|-----------|
//! | `POST` | `/api/orders` | 주문 생성 | 인증 사용자 | 201 Created |
//! | `GET` | `/api/orders/my` | 본인 주문 목록 | 인증 사용자 | 200 OK |
//! | `GET` | `/api/orders` | 전체 주문 목록 | 관리자 | 200 OK |
//! | `PUT` | `/api/orders/{id}` | 주문 상태 변경 | 관리자 | 200 OK |

use actix_web::{HttpResponse, get, post, put, web};
use validator::Validate;

use crate::domain::auth::{AdminUser, AuthenticatedUser};
use crate::domain::dto::orders::{CreateOrderRequest, UpdateOrderStatusRequest};
use crate::errors::AppError;
use crate::services::orders::OrderService;

/// 주문 생성 핸들러
///
/// # 엔드포인트
///
/// `POST /api/orders`
///
/// # 요청 본문
///
/// ```json
/// {
///   "items": [
///     { "productId": "507f1f77bcf86cd799439011", "quantity": 2, "selectedSize": "M" }
///   ],
///   "totalAmount": 39.98
/// }
/// ```
///
/// 주문 소유자는 항상 인증된 호출자의 신원으로 설정됩니다.
/// 본문에 실려 온 `userId`는 무시됩니다.
#[post("")]
pub async fn create_order(
    user: AuthenticatedUser,
    payload: web::Json<CreateOrderRequest>,
    service: web::Data<OrderService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let order = service.create(&user, payload.into_inner()).await?;
    Ok(HttpResponse::Created().json(order))
}

/// 본인 주문 목록 조회 핸들러
///
/// # 엔드포인트
///
/// `GET /api/orders/my`
///
/// 호출자 본인이 소유한 주문만 반환합니다. 다른 사용자의 주문을
/// 조회할 방법은 관리자 전용 전체 목록뿐입니다.
#[get("/my")]
pub async fn my_orders(
    user: AuthenticatedUser,
    service: web::Data<OrderService>,
) -> Result<HttpResponse, AppError> {
    let orders = service.list_by_owner(&user.user_id).await?;
    Ok(HttpResponse::Ok().json(orders))
}

/// 전체 주문 목록 조회 핸들러 (관리자 전용)
///
/// # 엔드포인트
///
/// `GET /api/orders`
#[get("")]
pub async fn list_all_orders(
    _admin: AdminUser,
    service: web::Data<OrderService>,
) -> Result<HttpResponse, AppError> {
    let orders = service.list_all().await?;
    Ok(HttpResponse::Ok().json(orders))
}

/// 주문 상태 변경 핸들러 (관리자 전용)
///
/// # 엔드포인트
///
/// `PUT /api/orders/{id}`
///
/// # 요청 본문
///
/// ```json
/// { "status": "confirmed" }
/// ```
///
/// 상태는 `pending`, `confirmed`, `delivered` 중 하나여야 하며,
/// 전이 방향에는 제한이 없습니다.
#[put("/{id}")]
pub async fn update_order_status(
    _admin: AdminUser,
    id: web::Path<String>,
    payload: web::Json<UpdateOrderStatusRequest>,
    service: web::Data<OrderService>,
) -> Result<HttpResponse, AppError> {
    payload.validate()?;

    let status = payload.parsed_status()?;
    let order = service.update_status(&id, status).await?;
    Ok(HttpResponse::Ok().json(order))
}
