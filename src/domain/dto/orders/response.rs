//! 주문 응답 DTO

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Order, OrderItem, OrderStatus};

/// 주문 응답 DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: String,
    pub user_id: String,
    pub items: Vec<OrderItem>,
    pub total_amount: f64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        let Order {
            id,
            user_id,
            items,
            total_amount,
            status,
            created_at,
            updated_at,
        } = order;

        Self {
            id: id.map(|id| id.to_hex()).unwrap_or_default(),
            user_id,
            items,
            total_amount,
            status,
            created_at: DateTime::<Utc>::from(created_at.to_system_time()),
            updated_at: DateTime::<Utc>::from(updated_at.to_system_time()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::oid::ObjectId;

    #[test]
    fn test_response_json_shape() {
        let mut order = Order::new(
            "user-1".to_string(),
            vec![OrderItem {
                product_id: "507f1f77bcf86cd799439011".to_string(),
                quantity: 1,
                selected_size: "S".to_string(),
            }],
            19.99,
        );
        order.id = Some(ObjectId::new());

        let value = serde_json::to_value(OrderResponse::from(order)).unwrap();
        assert!(value.get("userId").is_some());
        assert!(value.get("totalAmount").is_some());
        assert_eq!(value["status"], "pending");
        assert!(value["items"][0].get("selectedSize").is_some());
    }

    #[test]
    fn test_timestamps_survive_conversion() {
        let mut order = Order::new("user-1".to_string(), vec![], 0.0);
        order.created_at = mongodb::bson::DateTime::from_millis(1_700_000_000_000);
        order.updated_at = order.created_at;

        let response = OrderResponse::from(order);
        assert_eq!(response.created_at.timestamp_millis(), 1_700_000_000_000);
        assert_eq!(response.updated_at.timestamp_millis(), 1_700_000_000_000);
    }
}
