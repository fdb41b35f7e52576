//! 주문 요청 DTO
//!
//! 주문 생성과 상태 변경 요청의 데이터 구조와 검증 규칙을 정의합니다.
//!
//! 주문 소유자는 요청 본문이 아니라 인증 컨텍스트에서만 설정됩니다.
//! 생성 요청에는 `userId` 필드 자체가 존재하지 않으며, 본문에 실려 온
//! 알 수 없는 키는 역직렬화 단계에서 무시됩니다.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::domain::entities::{OrderItem, OrderStatus};

/// 주문 항목 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemRequest {
    /// 주문할 상품 ID
    #[validate(length(min = 1, message = "상품 ID는 비어 있을 수 없습니다"))]
    pub product_id: String,

    /// 수량 (1 이상)
    #[validate(range(min = 1, message = "수량은 1 이상이어야 합니다"))]
    pub quantity: u32,

    /// 선택한 사이즈 라벨
    #[validate(length(min = 1, message = "사이즈는 비어 있을 수 없습니다"))]
    pub selected_size: String,
}

impl From<OrderItemRequest> for OrderItem {
    fn from(item: OrderItemRequest) -> Self {
        OrderItem {
            product_id: item.product_id,
            quantity: item.quantity,
            selected_size: item.selected_size,
        }
    }
}

/// 주문 생성 요청 DTO
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    /// 주문 항목 목록 (최소 1개)
    #[validate(length(min = 1, message = "주문 항목은 최소 1개 이상이어야 합니다"))]
    #[validate(nested)]
    pub items: Vec<OrderItemRequest>,

    /// 총액 (0 이상, 호출자 제공 값)
    #[validate(range(min = 0.0, message = "총액은 0 이상이어야 합니다"))]
    pub total_amount: f64,
}

/// 주문 상태 변경 요청 DTO
///
/// 상태는 세 가지 리터럴 중 하나여야 합니다. 전이 방향 제한은 없습니다.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct UpdateOrderStatusRequest {
    #[validate(custom(function = "validate_order_status"))]
    pub status: String,
}

impl UpdateOrderStatusRequest {
    /// 검증을 통과한 상태 문자열을 열거형으로 변환합니다.
    pub fn parsed_status(&self) -> Result<OrderStatus, crate::errors::AppError> {
        self.status
            .parse::<OrderStatus>()
            .map_err(crate::errors::AppError::ValidationError)
    }
}

/// 주문 상태 리터럴 검증
fn validate_order_status(status: &str) -> Result<(), ValidationError> {
    if status.parse::<OrderStatus>().is_err() {
        return Err(ValidationError::new("invalid_status").with_message(
            format!(
                "상태는 {} 중 하나여야 합니다",
                OrderStatus::LITERALS.join(", ")
            )
            .into(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_item() -> OrderItemRequest {
        OrderItemRequest {
            product_id: "507f1f77bcf86cd799439011".to_string(),
            quantity: 2,
            selected_size: "M".to_string(),
        }
    }

    #[test]
    fn test_valid_create_request_passes() {
        let request = CreateOrderRequest {
            items: vec![valid_item()],
            total_amount: 39.98,
        };
        assert!(request.validate().is_ok());
    }

    #[test]
    fn test_empty_items_rejected() {
        let request = CreateOrderRequest {
            items: vec![],
            total_amount: 39.98,
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("items"));
    }

    #[test]
    fn test_negative_total_rejected() {
        let request = CreateOrderRequest {
            items: vec![valid_item()],
            total_amount: -0.01,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_item_with_zero_quantity_rejected() {
        let mut item = valid_item();
        item.quantity = 0;
        let request = CreateOrderRequest {
            items: vec![item],
            total_amount: 39.98,
        };

        assert!(request.validate().is_err());
    }

    #[test]
    fn test_payload_user_id_is_ignored() {
        // 본문에 userId가 실려 와도 역직렬화 단계에서 버려진다
        let json = r#"{
            "userId": "attacker-supplied",
            "items": [
                { "productId": "507f1f77bcf86cd799439011", "quantity": 1, "selectedSize": "S" }
            ],
            "totalAmount": 19.99
        }"#;

        let request: CreateOrderRequest = serde_json::from_str(json).unwrap();
        assert!(request.validate().is_ok());
        assert_eq!(request.items.len(), 1);
    }

    #[test]
    fn test_status_accepts_all_literals() {
        for literal in OrderStatus::LITERALS {
            let request = UpdateOrderStatusRequest {
                status: literal.to_string(),
            };
            assert!(request.validate().is_ok(), "{} should be valid", literal);
            assert_eq!(request.parsed_status().unwrap().as_str(), literal);
        }
    }

    #[test]
    fn test_status_rejects_unknown_literal() {
        let request = UpdateOrderStatusRequest {
            status: "shipped".to_string(),
        };

        let errors = request.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("status"));
    }
}
