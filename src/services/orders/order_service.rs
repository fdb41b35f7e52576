//! # 주문 서비스 구현
//!
//! 주문 생성과 조회, 상태 변경을 담당하는 비즈니스 로직입니다.
//!
//! ## 주요 규칙
//!
//! - 주문 소유자는 인증 컨텍스트에서만 설정되며 요청 본문의 값은
//!   사용되지 않습니다.
//! - 총액은 호출자 제공 값이며 카탈로그 가격으로 재계산하지 않습니다.
//! - 상태 전이는 세 리터럴 사이에서 방향 제한 없이 허용됩니다.
//! - 주문 삭제 연산은 존재하지 않습니다.

use std::sync::Arc;

use log::info;

use crate::{
    domain::auth::AuthenticatedUser,
    domain::dto::orders::{CreateOrderRequest, OrderResponse},
    domain::entities::{Order, OrderItem, OrderStatus},
    errors::{AppError, AppResult},
    repositories::orders::OrderRepository,
};

/// 주문 비즈니스 로직 서비스
pub struct OrderService {
    repo: Arc<OrderRepository>,
}

impl OrderService {
    /// 주입받은 리포지토리로 서비스를 생성합니다.
    pub fn new(repo: Arc<OrderRepository>) -> Self {
        Self { repo }
    }

    /// 새 주문 생성
    ///
    /// 소유자는 `caller`의 신원으로만 설정됩니다. 상태는 `pending`으로
    /// 시작합니다.
    pub async fn create(
        &self,
        caller: &AuthenticatedUser,
        request: CreateOrderRequest,
    ) -> AppResult<OrderResponse> {
        let items: Vec<OrderItem> = request.items.into_iter().map(OrderItem::from).collect();

        let order = Order::new(caller.user_id.clone(), items, request.total_amount);
        let created = self.repo.create(order).await?;

        info!(
            "주문 생성됨: {} (소유자 {})",
            created.id_string().unwrap_or_default(),
            created.user_id
        );

        Ok(OrderResponse::from(created))
    }

    /// 소유자 본인의 주문 목록 조회
    ///
    /// `owner_id`와 소유자가 일치하는 주문만 반환합니다.
    pub async fn list_by_owner(&self, owner_id: &str) -> AppResult<Vec<OrderResponse>> {
        let orders = self.repo.find_by_user(owner_id).await?;

        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    /// 전체 주문 목록 조회 (관리자 전용 연산)
    pub async fn list_all(&self) -> AppResult<Vec<OrderResponse>> {
        let orders = self.repo.find_all().await?;

        Ok(orders.into_iter().map(OrderResponse::from).collect())
    }

    /// 주문 상태 변경
    ///
    /// 어떤 현재 상태에서든 세 리터럴 중 어느 값으로도 변경할 수 있습니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 주문이 없는 경우
    pub async fn update_status(
        &self,
        id: &str,
        status: OrderStatus,
    ) -> AppResult<OrderResponse> {
        let updated = self
            .repo
            .update_status(id, status)
            .await?
            .ok_or_else(|| AppError::NotFound("주문을 찾을 수 없습니다".to_string()))?;

        info!("주문 상태 변경됨: {} → {}", id, status);

        Ok(OrderResponse::from(updated))
    }
}
