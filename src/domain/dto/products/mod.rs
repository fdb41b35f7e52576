//! 상품 요청/응답 DTO

pub mod request;
pub mod response;

pub use request::{CreateProductRequest, ProductListQuery, UpdateProductRequest};
pub use response::ProductResponse;
