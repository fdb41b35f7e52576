//! 영속 엔티티 모듈
//!
//! MongoDB 컬렉션에 저장되는 도메인 엔티티들을 정의합니다.

pub mod order;
pub mod product;

pub use order::{Order, OrderItem, OrderStatus};
pub use product::Product;
