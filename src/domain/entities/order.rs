//! Order Entity Implementation
//!
//! 주문 엔티티와 주문 상태를 정의합니다.
//!
//! 주문 항목의 `product_id`는 상품 컬렉션에 대한 약한 참조입니다.
//! 참조 무결성은 강제하지 않으며, 상품이 삭제되어도 과거 주문에는
//! 삭제된 상품의 키가 그대로 남습니다. 이는 의도된 동작입니다.

use std::fmt;
use std::str::FromStr;

use mongodb::bson::{DateTime, oid::ObjectId};
use serde::{Deserialize, Serialize};

/// 주문 상태
///
/// 세 가지 리터럴만 허용됩니다. 상태 전이 방향에는 제한이 없으며,
/// 어떤 상태에서든 다른 어떤 상태로도 변경할 수 있습니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// 접수됨 (기본값)
    Pending,
    /// 확정됨
    Confirmed,
    /// 배송 완료
    Delivered,
}

impl OrderStatus {
    /// 허용되는 상태 리터럴 목록
    pub const LITERALS: [&'static str; 3] = ["pending", "confirmed", "delivered"];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Delivered => "delivered",
        }
    }
}

impl FromStr for OrderStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(OrderStatus::Pending),
            "confirmed" => Ok(OrderStatus::Confirmed),
            "delivered" => Ok(OrderStatus::Delivered),
            other => Err(format!("알 수 없는 주문 상태: {}", other)),
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 주문 항목
///
/// `product_id`는 상품에 대한 조회용 키일 뿐 소유나 연쇄 삭제 의미가 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    /// 주문된 상품의 ID (약한 참조)
    pub product_id: String,
    /// 수량
    pub quantity: u32,
    /// 선택한 사이즈 라벨
    pub selected_size: String,
}

/// 주문 엔티티
///
/// `orders` 컬렉션에 저장됩니다. `user_id`는 생성 시점에 인증된 호출자의
/// 신원에서 설정되며 이후 변경되지 않습니다. 어떤 공개 연산으로도
/// 삭제되지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id", skip_serializing_if = "Option::is_none")]
    pub id: Option<ObjectId>,
    /// 주문 소유자 (인증 컨텍스트에서만 설정, 불변)
    pub user_id: String,
    /// 주문 항목 목록 (최소 1개)
    pub items: Vec<OrderItem>,
    /// 총액 (호출자 제공 값, 카탈로그 가격으로 재계산하지 않음)
    pub total_amount: f64,
    /// 주문 상태
    pub status: OrderStatus,
    /// 생성 시간
    pub created_at: DateTime,
    /// 수정 시간
    pub updated_at: DateTime,
}

impl Order {
    /// 새 주문 생성
    ///
    /// 상태는 `pending`으로 시작하며, ID는 저장 시점에 할당됩니다.
    pub fn new(user_id: String, items: Vec<OrderItem>, total_amount: f64) -> Self {
        let now = DateTime::now();

        Self {
            id: None,
            user_id,
            items,
            total_amount,
            status: OrderStatus::Pending,
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

    fn sample_items() -> Vec<OrderItem> {
        vec![OrderItem {
            product_id: "507f1f77bcf86cd799439011".to_string(),
            quantity: 2,
            selected_size: "M".to_string(),
        }]
    }

    #[test]
    fn test_new_order_defaults_to_pending() {
        let order = Order::new("user-1".to_string(), sample_items(), 39.98);

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.user_id, "user-1");
        assert!(order.id.is_none());
    }

    #[test]
    fn test_status_parses_all_literals() {
        for literal in OrderStatus::LITERALS {
            let status: OrderStatus = literal.parse().unwrap();
            assert_eq!(status.as_str(), literal);
        }
    }

    #[test]
    fn test_status_rejects_unknown_literal() {
        assert!("shipped".parse::<OrderStatus>().is_err());
        assert!("PENDING".parse::<OrderStatus>().is_err());
        assert!("".parse::<OrderStatus>().is_err());
    }

    #[test]
    fn test_status_serializes_lowercase() {
        let json = serde_json::to_string(&OrderStatus::Confirmed).unwrap();
        assert_eq!(json, "\"confirmed\"");
    }

    #[test]
    fn test_order_bson_field_names() {
        let order = Order::new("user-1".to_string(), sample_items(), 39.98);
        let doc = mongodb::bson::to_document(&order).unwrap();

        assert!(doc.contains_key("userId"));
        assert!(doc.contains_key("totalAmount"));
        assert_eq!(doc.get_str("status").unwrap(), "pending");
    }
}
