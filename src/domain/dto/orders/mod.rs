//! 주문 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{CreateOrderRequest, OrderItemRequest, UpdateOrderStatusRequest};
pub use response::OrderResponse;
